//! Where configuration comes from, lowest precedence first: the user config
//! directory, the working directory, `--config` files, then `DICTPANE__`
//! environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, Environment, File, Map};
use directories::ProjectDirs;

use crate::cli::CliArgs;

/// Replaces the platform config directory when set to a non-empty value.
const CONFIG_DIR_ENV: &str = "DICTPANE_CONFIG_DIR";
const ENV_PREFIX: &str = "dictpane";
const ENV_SEPARATOR: &str = "__";
/// Files looked up in the working directory; the last one wins.
const LOCAL_FILES: [&str; 2] = [".dictpane.toml", "dictpane.toml"];

/// Directory holding the user's `config.toml`, if one can be determined.
pub(crate) fn config_dir() -> Option<PathBuf> {
	env::var_os(CONFIG_DIR_ENV)
		.filter(|dir| !dir.is_empty())
		.map(PathBuf::from)
		.or_else(|| {
			ProjectDirs::from("io", "albo", "dictpane").map(|dirs| dirs.config_local_dir().to_path_buf())
		})
}

/// Configuration inputs that are not CLI flags.
pub(super) struct Sources {
	/// Optional files, merged in order unless `--no-config` is given.
	pub(super) defaults: Vec<PathBuf>,
	/// Replacement for the process environment; `None` reads the real one.
	pub(super) env: Option<Map<String, String>>,
}

impl Sources {
	/// Sources for a normal run: the real filesystem and environment.
	pub(super) fn discover() -> Self {
		Self {
			defaults: default_config_files(config_dir(), env::current_dir().ok()),
			env: None,
		}
	}

	pub(super) fn build(self, cli: &CliArgs) -> Result<Config> {
		let mut builder = Config::builder();

		if !cli.no_config {
			for path in self.defaults {
				builder = builder.add_source(File::from(path).required(false));
			}
		}
		for path in &cli.config {
			builder = builder.add_source(File::from(path.clone()).required(true));
		}

		// Values stay strings: a query of "007" must not become 7.
		builder = builder.add_source(
			Environment::with_prefix(ENV_PREFIX)
				.separator(ENV_SEPARATOR)
				.source(self.env),
		);

		builder.build().map_err(|err| match err {
			ConfigError::Frozen => anyhow!("configuration builder is frozen"),
			other => other.into(),
		})
	}
}

pub(super) fn default_config_files(
	config_dir: Option<PathBuf>,
	working_dir: Option<PathBuf>,
) -> Vec<PathBuf> {
	let user = config_dir.map(|dir| dir.join("config.toml"));
	let local = working_dir
		.into_iter()
		.flat_map(|dir| LOCAL_FILES.map(|name| dir.join(name)));
	user.into_iter().chain(local).collect()
}
