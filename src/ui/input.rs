//! Single-line query editor backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use tui_textarea::{CursorMove, Input, Key, TextArea};

/// Editable search field that never grows past one line.
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> SearchInput<'a> {
	/// Create an input pre-filled with `initial` and the cursor at its end.
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	/// Current query text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	pub fn set_placeholder(&mut self, placeholder: impl Into<String>, style: Style) {
		self.textarea.set_placeholder_text(placeholder);
		self.textarea.set_placeholder_style(style);
	}

	pub fn set_style(&mut self, style: Style) {
		self.textarea.set_style(style);
	}

	pub fn set_block(&mut self, block: Block<'a>) {
		self.textarea.set_block(block);
	}

	/// Feed a key press to the editor. Returns `true` when the text changed.
	///
	/// Line breaks are swallowed so the query stays on a single line.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let input = Input::from(key);
		match input {
			Input {
				key: Key::Enter | Key::Char('\n' | '\r'),
				..
			}
			| Input {
				key: Key::Char('m'),
				ctrl: true,
				..
			} => false,
			input => self.textarea.input(input),
		}
	}

	/// Remove all text.
	pub fn clear(&mut self) -> bool {
		if self.text().is_empty() {
			return false;
		}
		self.textarea.select_all();
		self.textarea.cut()
	}

	pub fn render_textarea(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

impl Default for SearchInput<'_> {
	fn default() -> Self {
		Self::new(String::new())
	}
}
