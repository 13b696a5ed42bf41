use std::ops::ControlFlow;
use std::time::Duration;

use anyhow::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use super::App;

/// How long to wait for input before redrawing, so log records show up.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Run `app` until the user quits.
pub fn run(mut app: App<'_>) -> Result<()> {
	app.run()
}

impl App<'_> {
	/// Take over the terminal and pump events until the user quits.
	///
	/// The terminal is restored before any error is returned.
	pub fn run(&mut self) -> Result<()> {
		let mut terminal = ratatui::init();
		let result = self.event_loop(&mut terminal);
		ratatui::restore();
		result
	}

	fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
		terminal.clear()?;
		loop {
			terminal.draw(|frame| self.draw(frame))?;

			if !event::poll(POLL_INTERVAL)? {
				continue;
			}
			match event::read()? {
				Event::Key(key) if key.kind == KeyEventKind::Press => {
					if let ControlFlow::Break(()) = self.handle_key(key) {
						return Ok(());
					}
				}
				_ => {}
			}
		}
	}
}
