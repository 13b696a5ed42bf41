//! Side-by-side lookup in two JSON dictionaries.
//!
//! [`Dictionary`] loads a word list, [`search`] filters it by a
//! case-insensitive substring of the word, and [`ui`] wires both into a
//! terminal interface with one search field and two result panels.

pub mod dictionary;
pub mod logging;
pub mod search;
pub mod ui;

pub use dictionary::{Dictionary, LoadError};
pub use search::{Entry, MatchSet, NOT_FOUND, normalize_query, search};
pub use ui::{App, Side, Theme, UiLabels};
