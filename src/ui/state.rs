use log::debug;
use ratatui::style::Style;
use ratatui::widgets::{Block, BorderType};
use tui_logger::TuiWidgetState;

use super::config::UiLabels;
use super::input::SearchInput;
use super::panel::ResultPanel;
use super::theme::Theme;
use crate::dictionary::Dictionary;
use crate::search::search;

/// Which of the two panels a value refers to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Side {
	#[default]
	Left,
	Right,
}

impl Side {
	#[must_use]
	pub fn other(self) -> Self {
		match self {
			Side::Left => Side::Right,
			Side::Right => Side::Left,
		}
	}
}

/// A borrowed dictionary together with the panel showing its matches.
pub(crate) struct DictionaryPane<'a> {
	dictionary: &'a Dictionary,
	pub(crate) panel: ResultPanel,
}

impl<'a> DictionaryPane<'a> {
	fn new(dictionary: &'a Dictionary, label: &str) -> Self {
		Self {
			dictionary,
			panel: ResultPanel::new(label),
		}
	}

	fn refresh(&mut self, query: &str) -> Option<usize> {
		let matches = search(query, self.dictionary);
		self.panel.show(&matches);
		self.panel.match_count()
	}
}

/// Application state threaded through the event handlers.
///
/// The dictionaries are owned by the caller and only borrowed here, so every
/// search runs over the data loaded at startup without copying it.
pub struct App<'a> {
	pub search_input: SearchInput<'a>,
	pub theme: Theme,
	pub(crate) labels: UiLabels,
	pub(crate) left: DictionaryPane<'a>,
	pub(crate) right: DictionaryPane<'a>,
	pub(crate) focus: Side,
	pub(crate) show_logs: bool,
	pub(crate) log_state: TuiWidgetState,
}

impl<'a> App<'a> {
	pub fn new(left: &'a Dictionary, right: &'a Dictionary) -> Self {
		let labels = UiLabels::default();
		let mut app = Self {
			search_input: SearchInput::default(),
			theme: Theme::default(),
			left: DictionaryPane::new(left, &labels.left),
			right: DictionaryPane::new(right, &labels.right),
			labels,
			focus: Side::Left,
			show_logs: false,
			log_state: TuiWidgetState::new().set_default_display_level(log::LevelFilter::Debug),
		};
		app.style_input();
		app
	}

	/// Replace the title, placeholder and panel labels.
	#[must_use]
	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.left.panel = ResultPanel::new(labels.left.as_str());
		self.right.panel = ResultPanel::new(labels.right.as_str());
		self.labels = labels;
		self.style_input();
		self.refresh();
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.set_theme(theme);
		self
	}

	/// Start with `query` already typed and its results displayed.
	#[must_use]
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.search_input = SearchInput::new(query);
		self.style_input();
		self.refresh();
		self
	}

	/// Open the log console on the first frame.
	#[must_use]
	pub fn with_log_visible(mut self, visible: bool) -> Self {
		self.show_logs = visible;
		self
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
		self.style_input();
	}

	#[must_use]
	pub fn query(&self) -> &str {
		self.search_input.text()
	}

	#[must_use]
	pub fn labels(&self) -> &UiLabels {
		&self.labels
	}

	#[must_use]
	pub fn panel(&self, side: Side) -> &ResultPanel {
		match side {
			Side::Left => &self.left.panel,
			Side::Right => &self.right.panel,
		}
	}

	pub(crate) fn panel_mut(&mut self, side: Side) -> &mut ResultPanel {
		match side {
			Side::Left => &mut self.left.panel,
			Side::Right => &mut self.right.panel,
		}
	}

	/// Panel that receives scroll keys.
	#[must_use]
	pub fn focus(&self) -> Side {
		self.focus
	}

	#[must_use]
	pub fn logs_visible(&self) -> bool {
		self.show_logs
	}

	/// Re-run the current query against both dictionaries.
	pub fn refresh(&mut self) {
		let query = self.search_input.text();
		let left = self.left.refresh(query);
		let right = self.right.refresh(query);
		match (left, right) {
			(Some(left), Some(right)) => {
				debug!("query {query:?} matched {left} left and {right} right");
			}
			_ => debug!("query cleared"),
		}
	}

	fn style_input(&mut self) {
		let theme = self.theme;
		self.search_input.set_style(theme.input);
		self.search_input
			.set_placeholder(self.labels.placeholder.as_str(), theme.empty);
		self.search_input.set_block(
			Block::bordered()
				.border_type(BorderType::Rounded)
				.border_style(theme.border)
				.style(Style::default().bg(theme.input.bg.unwrap_or_default())),
		);
	}
}
