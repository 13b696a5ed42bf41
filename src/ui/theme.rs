//! Colour schemes for the terminal UI.

use ratatui::style::{Color, Modifier, Style};

/// Styles applied to the individual regions of the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
	/// Title bar at the top of the screen.
	pub title: Style,
	/// Search input text and its border.
	pub input: Style,
	/// Body text of the result panels.
	pub panel: Style,
	/// Border of an unfocused panel.
	pub border: Style,
	/// Border of the panel that receives scroll keys.
	pub border_focused: Style,
	/// Panel titles.
	pub label: Style,
	/// `Not found` text and the input placeholder.
	pub empty: Style,
	/// Key hints in the footer.
	pub hint: Style,
}

pub const DARK: Theme = Theme {
	title: Style::new()
		.fg(Color::Rgb(220, 220, 220))
		.bg(Color::Rgb(30, 30, 30))
		.add_modifier(Modifier::BOLD),
	input: Style::new()
		.fg(Color::White)
		.bg(Color::Rgb(50, 50, 50)),
	panel: Style::new()
		.fg(Color::White)
		.bg(Color::Rgb(66, 66, 66)),
	border: Style::new().fg(Color::Rgb(102, 102, 102)),
	border_focused: Style::new().fg(Color::Rgb(100, 100, 150)),
	label: Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
	empty: Style::new().fg(Color::DarkGray),
	hint: Style::new().fg(Color::Rgb(140, 140, 140)),
};

pub const LIGHT: Theme = Theme {
	title: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240))
		.add_modifier(Modifier::BOLD),
	input: Style::new()
		.fg(Color::Black)
		.bg(Color::Rgb(245, 245, 245)),
	panel: Style::new()
		.fg(Color::Black)
		.bg(Color::Rgb(235, 235, 235)),
	border: Style::new().fg(Color::Rgb(160, 160, 160)),
	border_focused: Style::new().fg(Color::Rgb(0, 102, 153)),
	label: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.add_modifier(Modifier::BOLD),
	empty: Style::new().fg(Color::Rgb(100, 100, 100)),
	hint: Style::new().fg(Color::Rgb(100, 100, 100)),
};

const THEMES: [(&str, Theme); 2] = [("default", DARK), ("light", LIGHT)];

impl Default for Theme {
	fn default() -> Self {
		DARK
	}
}

/// Names of the bundled themes, in display order.
pub fn names() -> impl Iterator<Item = &'static str> {
	THEMES.iter().map(|(name, _)| *name)
}

/// Look up a theme by name, ignoring case. `dark` is accepted for `default`.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let name = name.trim().to_ascii_lowercase();
	let name = if name == "dark" { "default" } else { name.as_str() };
	THEMES
		.iter()
		.find(|(candidate, _)| *candidate == name)
		.map(|(_, theme)| *theme)
}
