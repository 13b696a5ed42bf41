//! Terminal front end: a search field above two result panels.
//!
//! Every edit of the search field re-runs the query against both
//! dictionaries synchronously on the UI thread and redraws.

mod actions;
mod config;
pub mod input;
pub mod panel;
mod render;
mod runtime;
mod state;
pub mod theme;


pub use config::{
	DEFAULT_LEFT_LABEL, DEFAULT_PLACEHOLDER, DEFAULT_RIGHT_LABEL, DEFAULT_TITLE, UiLabels,
};
pub use input::SearchInput;
pub use panel::ResultPanel;
pub use runtime::run;
pub use state::{App, Side};
pub use theme::Theme;
