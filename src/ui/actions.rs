use std::ops::ControlFlow;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;

impl App<'_> {
	/// Apply a key press. `Break` means the user asked to quit.
	pub fn handle_key(&mut self, key: KeyEvent) -> ControlFlow<()> {
		if key.modifiers.contains(KeyModifiers::CONTROL) {
			match key.code {
				KeyCode::Char('c') => return ControlFlow::Break(()),
				KeyCode::Char('u') => {
					if self.search_input.clear() {
						self.refresh();
					}
					return ControlFlow::Continue(());
				}
				_ => {}
			}
		}

		match key.code {
			KeyCode::Esc => return ControlFlow::Break(()),
			KeyCode::F(2) => self.show_logs = !self.show_logs,
			KeyCode::Tab | KeyCode::BackTab => self.focus = self.focus.other(),
			KeyCode::PageUp => self.panel_mut(self.focus).scroll_page(false),
			KeyCode::PageDown => self.panel_mut(self.focus).scroll_page(true),
			KeyCode::Up => self.panel_mut(self.focus).scroll_by(-1),
			KeyCode::Down => self.panel_mut(self.focus).scroll_by(1),
			_ => {
				if self.search_input.input(key) {
					self.refresh();
				}
			}
		}
		ControlFlow::Continue(())
	}
}
