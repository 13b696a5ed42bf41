//! Configuration loading and resolution.
//!
//! `load` merges config files, environment variables and CLI flags into a
//! [`ResolvedConfig`] consumed by `main`.

mod raw;
mod resolved;
mod sources;

use anyhow::{Result, anyhow};

use crate::cli::CliArgs;
use raw::RawConfig;
pub use resolved::{DictionarySource, ResolvedConfig};
pub(crate) use sources::config_dir;
use sources::Sources;

/// Load configuration by combining config files, environment variables and
/// CLI arguments, in increasing order of precedence.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	load_from(cli, Sources::discover())
}

fn load_from(cli: &CliArgs, sources: Sources) -> Result<ResolvedConfig> {
	let builder = sources.build(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve()
}

#[cfg(test)]
mod tests {
	use std::fs;
	use std::path::PathBuf;

	use clap::Parser;
	use config::Map;
	use tempfile::tempdir;

	use super::*;
	use crate::settings::sources::default_config_files;

	fn env_of(vars: &[(&str, &str)]) -> Option<Map<String, String>> {
		Some(
			vars.iter()
				.map(|(key, value)| (key.to_string(), value.to_string()))
				.collect(),
		)
	}

	fn isolated() -> Sources {
		Sources {
			defaults: Vec::new(),
			env: env_of(&[]),
		}
	}

	#[test]
	fn environment_values_are_kept_as_text() {
		let cli = CliArgs::try_parse_from(["dictpane", "-n"]).unwrap();
		let sources = Sources {
			defaults: Vec::new(),
			env: env_of(&[
				("DICTPANE__UI__INITIAL_QUERY", "007"),
				("DICTPANE__LEFT__LABEL", "1.50"),
				("DICTPANE__RIGHT__PATH", "2024.json"),
			]),
		};
		let resolved = load_from(&cli, sources).expect("loads");

		assert_eq!(resolved.initial_query, "007");
		assert_eq!(resolved.left.label, "1.50");
		assert_eq!(resolved.right.path, PathBuf::from("2024.json"));
	}

	#[test]
	fn later_local_file_and_environment_take_precedence() {
		let dir = tempdir().unwrap();
		fs::write(
			dir.path().join(".dictpane.toml"),
			"[left]\nlabel = \"Hidden\"\n\n[right]\nlabel = \"Hidden\"\n\n[ui]\ntitle = \"From hidden file\"\n",
		)
		.unwrap();
		fs::write(
			dir.path().join("dictpane.toml"),
			"[left]\nlabel = \"Visible\"\n\n[right]\nlabel = \"Visible\"\n",
		)
		.unwrap();

		let cli = CliArgs::try_parse_from(["dictpane"]).unwrap();
		let sources = Sources {
			defaults: default_config_files(None, Some(dir.path().to_path_buf())),
			env: env_of(&[("DICTPANE__RIGHT__LABEL", "Env")]),
		};
		let resolved = load_from(&cli, sources).expect("loads");

		assert_eq!(resolved.title, "From hidden file");
		assert_eq!(resolved.left.label, "Visible");
		assert_eq!(resolved.right.label, "Env");
	}

	#[test]
	fn no_config_skips_working_directory_files() {
		let dir = tempdir().unwrap();
		fs::write(dir.path().join("dictpane.toml"), "[left]\nlabel = \"Local\"\n").unwrap();

		let cli = CliArgs::try_parse_from(["dictpane", "--no-config"]).unwrap();
		let sources = Sources {
			defaults: default_config_files(None, Some(dir.path().to_path_buf())),
			env: env_of(&[]),
		};
		let resolved = load_from(&cli, sources).expect("loads");
		assert_eq!(resolved.left.label, "Men");
	}

	#[test]
	fn user_config_is_consulted_before_working_directory() {
		let files = default_config_files(
			Some(PathBuf::from("/home/user/.config/dictpane")),
			Some(PathBuf::from("/work")),
		);
		assert_eq!(
			files,
			[
				PathBuf::from("/home/user/.config/dictpane/config.toml"),
				PathBuf::from("/work/.dictpane.toml"),
				PathBuf::from("/work/dictpane.toml"),
			]
		);
	}

	#[test]
	fn config_file_is_merged_and_cli_wins() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("custom.toml");
		fs::write(
			&path,
			r#"
[left]
path = "easy.json"
label = "Easy"

[right]
label = "Hard"

[ui]
title = "Word levels"
theme = "light"
"#,
		)
		.unwrap();

		let cli = CliArgs::try_parse_from([
			"dictpane",
			"--no-config",
			"--config",
			path.to_str().unwrap(),
			"--right-label",
			"Advanced",
		])
		.unwrap();
		let resolved = load_from(&cli, isolated()).expect("loads");

		assert_eq!(resolved.left.path, PathBuf::from("easy.json"));
		assert_eq!(resolved.left.label, "Easy");
		assert_eq!(resolved.right.label, "Advanced");
		assert_eq!(resolved.right.path, PathBuf::from("women.json"));
		assert_eq!(resolved.title, "Word levels");
		assert_eq!(resolved.theme_name, "light");
	}

	#[test]
	fn missing_explicit_config_file_is_an_error() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("absent.toml");
		let cli =
			CliArgs::try_parse_from(["dictpane", "-n", "-c", path.to_str().unwrap()]).unwrap();
		assert!(load_from(&cli, isolated()).is_err());
	}
}
