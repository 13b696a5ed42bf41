use std::path::PathBuf;

use dictpane::{Theme, UiLabels};

/// One side of the screen: where its words come from and what it is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionarySource {
	pub label: String,
	pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	pub left: DictionarySource,
	pub right: DictionarySource,
	pub title: String,
	pub placeholder: String,
	pub initial_query: String,
	pub theme_name: String,
	pub theme: Theme,
}

impl ResolvedConfig {
	/// Labels for the UI built from the resolved values.
	pub fn labels(&self) -> UiLabels {
		UiLabels {
			title: self.title.clone(),
			placeholder: self.placeholder.clone(),
			left: self.left.label.clone(),
			right: self.right.label.clone(),
		}
	}

	pub fn print_summary(&self) {
		println!("Effective configuration:");
		println!("  Title: {}", self.title);
		println!(
			"  Left panel: {} ({})",
			self.left.label,
			self.left.path.display()
		);
		println!(
			"  Right panel: {} ({})",
			self.right.label,
			self.right.path.display()
		);
		println!("  UI theme: {}", self.theme_name);
		if !self.initial_query.is_empty() {
			println!("  Initial query: {}", self.initial_query);
		}
	}
}
