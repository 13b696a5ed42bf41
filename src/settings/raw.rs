use std::path::PathBuf;

use anyhow::{Result, bail};
use dictpane::ui::{
	DEFAULT_LEFT_LABEL, DEFAULT_PLACEHOLDER, DEFAULT_RIGHT_LABEL, DEFAULT_TITLE, theme,
};
use serde::Deserialize;

use super::resolved::{DictionarySource, ResolvedConfig};
use crate::cli::CliArgs;

pub(super) const DEFAULT_LEFT_PATH: &str = "men.json";
pub(super) const DEFAULT_RIGHT_PATH: &str = "women.json";
const DEFAULT_THEME: &str = "default";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	left: SourceSection,
	right: SourceSection,
	ui: UiSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SourceSection {
	path: Option<PathBuf>,
	label: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	title: Option<String>,
	placeholder: Option<String>,
	initial_query: Option<String>,
	theme: Option<String>,
}

impl RawConfig {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.left.clone() {
			self.left.path = Some(path);
		}
		if let Some(path) = cli.right.clone() {
			self.right.path = Some(path);
		}
		if let Some(label) = cli.left_label.clone() {
			self.left.label = Some(label);
		}
		if let Some(label) = cli.right_label.clone() {
			self.right.label = Some(label);
		}
		if let Some(title) = cli.title.clone() {
			self.ui.title = Some(title);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.ui.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
	}

	pub(super) fn resolve(self) -> Result<ResolvedConfig> {
		let left = self
			.left
			.resolve(DEFAULT_LEFT_PATH, DEFAULT_LEFT_LABEL)?;
		let right = self
			.right
			.resolve(DEFAULT_RIGHT_PATH, DEFAULT_RIGHT_LABEL)?;

		let theme_name = non_empty(self.ui.theme)
			.map(|name| name.to_ascii_lowercase())
			.unwrap_or_else(|| DEFAULT_THEME.to_string());
		let Some(theme) = theme::by_name(&theme_name) else {
			let available: Vec<&str> = theme::names().collect();
			bail!(
				"unknown theme '{theme_name}' (available: {})",
				available.join(", ")
			);
		};

		Ok(ResolvedConfig {
			left,
			right,
			title: non_empty(self.ui.title).unwrap_or_else(|| DEFAULT_TITLE.to_string()),
			placeholder: non_empty(self.ui.placeholder)
				.unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string()),
			initial_query: self.ui.initial_query.unwrap_or_default(),
			theme_name,
			theme,
		})
	}
}

impl SourceSection {
	fn resolve(self, default_path: &str, default_label: &str) -> Result<DictionarySource> {
		let path = self
			.path
			.unwrap_or_else(|| PathBuf::from(default_path));
		if path.as_os_str().is_empty() {
			bail!("dictionary path for '{default_label}' must not be empty");
		}
		let label = non_empty(self.label).unwrap_or_else(|| default_label.to_string());
		Ok(DictionarySource { label, path })
	}
}

fn non_empty(value: Option<String>) -> Option<String> {
	value
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
}
