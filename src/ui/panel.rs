//! Read-only, scrollable result panel for one dictionary.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{
	Block, BorderType, Padding, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
};

use crate::search::MatchSet;
use crate::ui::theme::Theme;

/// Label, rendered match text and scroll position of one panel.
#[derive(Debug, Clone)]
pub struct ResultPanel {
	label: String,
	text: String,
	match_count: Option<usize>,
	scroll: usize,
	page_height: usize,
}

impl ResultPanel {
	pub fn new(label: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			text: String::new(),
			match_count: None,
			scroll: 0,
			page_height: 1,
		}
	}

	/// Replace the panel content with a freshly computed match set.
	pub fn show(&mut self, matches: &MatchSet<'_>) {
		self.text = matches.render();
		self.match_count = (!matches.is_cleared()).then(|| matches.len());
		self.scroll = 0;
	}

	#[must_use]
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Text currently displayed in the panel body.
	#[must_use]
	pub fn text(&self) -> &str {
		&self.text
	}

	/// Number of matches for the active query; `None` when no query is active.
	#[must_use]
	pub fn match_count(&self) -> Option<usize> {
		self.match_count
	}

	#[must_use]
	pub fn title(&self) -> String {
		match self.match_count {
			Some(count) => format!("{} ({count})", self.label),
			None => self.label.clone(),
		}
	}

	#[must_use]
	pub fn scroll(&self) -> usize {
		self.scroll
	}

	/// Move the viewport by `lines`; clamped to the content on the next draw.
	pub fn scroll_by(&mut self, lines: isize) {
		self.scroll = self.scroll.saturating_add_signed(lines);
	}

	/// Move the viewport by one page in the given direction.
	pub fn scroll_page(&mut self, down: bool) {
		let page = isize::try_from(self.page_height.max(1)).unwrap_or(isize::MAX);
		self.scroll_by(if down { page } else { -page });
	}

	pub(crate) fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
		let border_style = if focused {
			theme.border_focused
		} else {
			theme.border
		};
		let block = Block::bordered()
			.border_type(BorderType::Rounded)
			.border_style(border_style)
			.title(Line::styled(self.title(), theme.label))
			.padding(Padding::horizontal(1))
			.style(theme.panel);
		let inner = block.inner(area);
		frame.render_widget(block, area);
		if inner.width == 0 || inner.height == 0 {
			return;
		}

		let body_style = if self.match_count == Some(0) {
			theme.empty
		} else {
			theme.panel
		};
		let paragraph = Paragraph::new(self.text.as_str())
			.style(body_style)
			.wrap(Wrap { trim: false });

		// Wrapped line count; the scrollbar column narrows the text when it overflows.
		let viewport = usize::from(inner.height);
		let mut content_area = inner;
		let mut lines = paragraph.line_count(inner.width);
		let overflows = lines > viewport;
		if overflows && inner.width > 1 {
			content_area.width -= 1;
			lines = paragraph.line_count(content_area.width);
		}
		let max_scroll = lines.saturating_sub(viewport);

		self.page_height = viewport;
		self.scroll = self.scroll.min(max_scroll);
		let offset = u16::try_from(self.scroll).unwrap_or(u16::MAX);
		frame.render_widget(paragraph.scroll((offset, 0)), content_area);

		if overflows {
			let mut state = ScrollbarState::new(max_scroll)
				.viewport_content_length(viewport)
				.position(self.scroll);
			let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
				.begin_symbol(None)
				.end_symbol(None)
				.track_symbol(Some("│"))
				.style(border_style);
			let bar_area = Rect {
				x: inner.x + inner.width.saturating_sub(1),
				y: inner.y,
				width: 1,
				height: inner.height,
			};
			frame.render_stateful_widget(scrollbar, bar_area, &mut state);
		}
	}
}
