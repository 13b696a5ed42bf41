/// Text rendered around the search input and the two result panels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Title bar text.
	pub title: String,
	/// Placeholder shown while the search input is empty.
	pub placeholder: String,
	/// Title of the left panel.
	pub left: String,
	/// Title of the right panel.
	pub right: String,
}

pub const DEFAULT_TITLE: &str = "Difficulty Dictionary";
pub const DEFAULT_PLACEHOLDER: &str = "Type a word to search...";
pub const DEFAULT_LEFT_LABEL: &str = "Men";
pub const DEFAULT_RIGHT_LABEL: &str = "Women";

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			title: DEFAULT_TITLE.to_string(),
			placeholder: DEFAULT_PLACEHOLDER.to_string(),
			left: DEFAULT_LEFT_LABEL.to_string(),
			right: DEFAULT_RIGHT_LABEL.to_string(),
		}
	}
}

impl UiLabels {
	/// Replace the panel titles.
	#[must_use]
	pub fn with_panel_labels(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
		self.left = left.into();
		self.right = right.into();
		self
	}

	/// Replace the title bar text.
	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}
}
