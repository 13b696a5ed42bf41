//! Case-insensitive substring lookup over a [`Dictionary`].

use std::borrow::Cow;
use std::fmt;

use serde_json::Value;

use crate::dictionary::Dictionary;

/// Text shown in a panel when a query matched nothing in its dictionary.
pub const NOT_FOUND: &str = "Not found";

/// Separator placed between rendered entries.
const ENTRY_SEPARATOR: &str = "\n\n";

/// A single dictionary entry borrowed from its source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry<'a> {
	pub word: &'a str,
	pub definition: &'a Value,
}

impl Entry<'_> {
	/// Definition text as displayed: strings verbatim, anything else as
	/// compact JSON.
	#[must_use]
	pub fn definition_text(&self) -> Cow<'_, str> {
		match self.definition {
			Value::String(text) => Cow::Borrowed(text.as_str()),
			other => Cow::Owned(other.to_string()),
		}
	}
}

impl fmt::Display for Entry<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {}", self.word, self.definition_text())
	}
}

/// Result of running a query against one dictionary.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchSet<'a> {
	/// The query was empty or whitespace only.
	Cleared,
	/// Entries whose word contains the query, in dictionary order.
	Matches(Vec<Entry<'a>>),
}

impl<'a> MatchSet<'a> {
	#[must_use]
	pub fn is_cleared(&self) -> bool {
		matches!(self, MatchSet::Cleared)
	}

	/// Matched entries; empty when cleared.
	#[must_use]
	pub fn entries(&self) -> &[Entry<'a>] {
		match self {
			MatchSet::Cleared => &[],
			MatchSet::Matches(entries) => entries,
		}
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.entries().len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries().is_empty()
	}

	/// Render the match set as panel text.
	///
	/// A cleared set renders as an empty string, an active query without
	/// matches renders as [`NOT_FOUND`], and matches are rendered as
	/// `word: definition` pairs separated by a blank line.
	#[must_use]
	pub fn render(&self) -> String {
		match self {
			MatchSet::Cleared => String::new(),
			MatchSet::Matches(entries) if entries.is_empty() => NOT_FOUND.to_string(),
			MatchSet::Matches(entries) => entries
				.iter()
				.map(ToString::to_string)
				.collect::<Vec<_>>()
				.join(ENTRY_SEPARATOR),
		}
	}
}

/// Trim and lowercase a raw query, returning `None` when nothing is left.
#[must_use]
pub fn normalize_query(query: &str) -> Option<String> {
	let trimmed = query.trim();
	if trimmed.is_empty() {
		None
	} else {
		Some(trimmed.to_lowercase())
	}
}

/// Find every entry whose word contains `query`, ignoring case.
///
/// This is a linear scan over the dictionary; results borrow from it and keep
/// its insertion order.
#[must_use]
pub fn search<'a>(query: &str, dictionary: &'a Dictionary) -> MatchSet<'a> {
	let Some(needle) = normalize_query(query) else {
		return MatchSet::Cleared;
	};

	let entries = dictionary
		.iter()
		.filter(|(word, _)| word.to_lowercase().contains(&needle))
		.map(|(word, definition)| Entry { word, definition })
		.collect();
	MatchSet::Matches(entries)
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	fn people() -> Dictionary {
		[("Alice", "engineer"), ("alicia", "artist"), ("Bob", "doctor")]
			.into_iter()
			.collect()
	}

	#[test]
	fn matches_substring_ignoring_case() {
		let dictionary = people();
		let matches = search("ali", &dictionary);
		let words: Vec<&str> = matches.entries().iter().map(|entry| entry.word).collect();
		assert_eq!(words, ["Alice", "alicia"]);
		insta::assert_snapshot!(matches.render(), @r"
		Alice: engineer

		alicia: artist
		");
	}

	#[test]
	fn renders_scenario_text_exactly() {
		let dictionary = people();
		assert_eq!(
			search("ali", &dictionary).render(),
			"Alice: engineer\n\nalicia: artist"
		);
	}

	#[test]
	fn uppercase_query_matches_lowercase_words() {
		let dictionary = people();
		let matches = search("  BO ", &dictionary);
		assert_eq!(matches.render(), "Bob: doctor");
	}

	#[test]
	fn blank_queries_are_cleared() {
		let dictionary = people();
		for query in ["", "   ", "\t\n"] {
			let matches = search(query, &dictionary);
			assert!(matches.is_cleared(), "query {query:?} should clear");
			assert_eq!(matches.render(), "");
		}
	}

	#[test]
	fn blank_query_on_empty_dictionary_is_cleared() {
		let dictionary = Dictionary::default();
		assert!(search(" ", &dictionary).is_cleared());
	}

	#[test]
	fn no_matches_render_not_found() {
		let dictionary = people();
		let matches = search("zzz", &dictionary);
		assert!(!matches.is_cleared());
		assert!(matches.is_empty());
		assert_eq!(matches.render(), NOT_FOUND);
	}

	#[test]
	fn empty_dictionary_renders_not_found_for_real_query() {
		let dictionary = Dictionary::default();
		assert_eq!(search("a", &dictionary).render(), NOT_FOUND);
	}

	#[test]
	fn filter_is_sound_and_complete() {
		let dictionary: Dictionary = [
			("Apple", "fruit"),
			("pineapple", "fruit"),
			("APPLET", "program"),
			("banana", "fruit"),
			("grape", "fruit"),
			("Chapel", "building"),
		]
		.into_iter()
		.collect();

		for query in ["app", "APP", "ap", "e", "an", "x", "pineapple", "el"] {
			let needle = query.to_lowercase();
			let matches = search(query, &dictionary);
			let found: Vec<&str> = matches.entries().iter().map(|entry| entry.word).collect();
			let expected: Vec<&str> = dictionary
				.iter()
				.map(|(word, _)| word)
				.filter(|word| word.to_lowercase().contains(&needle))
				.collect();
			assert_eq!(found, expected, "query {query:?}");
		}
	}

	#[test]
	fn non_string_definitions_render_as_json() {
		let dictionary: Dictionary = [
			("level", json!(3)),
			("aliases", json!(["lvl", "tier"])),
		]
		.into_iter()
		.collect();

		let rendered = search("l", &dictionary).render();
		assert_eq!(rendered, "level: 3\n\naliases: [\"lvl\",\"tier\"]");
	}

	#[test]
	fn nested_objects_keep_their_key_order() {
		let dictionary =
			Dictionary::from_json_str(r#"{"Robert": {"role": "author", "age": 3}}"#).unwrap();
		assert_eq!(
			search("rob", &dictionary).render(),
			r#"Robert: {"role":"author","age":3}"#
		);
	}

	#[test]
	fn normalize_trims_and_lowercases() {
		assert_eq!(normalize_query("  HeLLo "), Some("hello".to_string()));
		assert_eq!(normalize_query("   "), None);
	}
}
