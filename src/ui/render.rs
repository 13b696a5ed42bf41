use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

use super::App;
use super::state::Side;

const KEY_HINTS: [(&str, &str); 5] = [
	("Esc", "quit"),
	("Tab", "switch panel"),
	("PgUp/PgDn", "scroll"),
	("Ctrl-U", "clear"),
	("F2", "log"),
];

impl App<'_> {
	pub fn draw(&mut self, frame: &mut Frame) {
		let [title_area, input_area, body_area, footer_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(3),
			Constraint::Min(3),
			Constraint::Length(1),
		])
		.areas(frame.area());

		let title = Paragraph::new(self.labels.title.as_str())
			.alignment(Alignment::Center)
			.style(self.theme.title);
		frame.render_widget(title, title_area);

		self.search_input.render_textarea(frame, input_area);

		let panels_area = if self.show_logs {
			let [panels_area, log_area] =
				Layout::vertical([Constraint::Percentage(70), Constraint::Percentage(30)])
					.areas(body_area);
			self.render_log(frame, log_area);
			panels_area
		} else {
			body_area
		};
		self.render_panels(frame, panels_area);
		self.render_hints(frame, footer_area);
	}

	fn render_panels(&mut self, frame: &mut Frame, area: Rect) {
		let [left_area, _gap, right_area] = Layout::horizontal([
			Constraint::Fill(1),
			Constraint::Length(1),
			Constraint::Fill(1),
		])
		.areas(area);

		let theme = self.theme;
		let focus = self.focus;
		self.left
			.panel
			.render(frame, left_area, focus == Side::Left, &theme);
		self.right
			.panel
			.render(frame, right_area, focus == Side::Right, &theme);
	}

	fn render_log(&self, frame: &mut Frame, area: Rect) {
		let widget = TuiLoggerWidget::default()
			.block(
				Block::bordered()
					.border_type(BorderType::Rounded)
					.border_style(self.theme.border)
					.title(Line::styled("Log", self.theme.label)),
			)
			.style(self.theme.panel)
			.output_level(Some(TuiLoggerLevelOutput::Abbreviated))
			.output_target(false)
			.output_file(false)
			.output_line(false)
			.state(&self.log_state);
		frame.render_widget(widget, area);
	}

	fn render_hints(&self, frame: &mut Frame, area: Rect) {
		let mut spans = Vec::with_capacity(KEY_HINTS.len() * 3);
		for (index, (key, action)) in KEY_HINTS.iter().enumerate() {
			if index > 0 {
				spans.push(Span::styled("  ", self.theme.hint));
			}
			spans.push(Span::styled(*key, self.theme.label));
			spans.push(Span::styled(format!(" {action}"), self.theme.hint));
		}
		frame.render_widget(Paragraph::new(Line::from(spans)), area);
	}
}
