//! Loading of the JSON word lists shown side by side in the UI.
//!
//! A [`Dictionary`] is read once at startup and never mutated afterwards. The
//! entries keep the order in which they appear in the source file so that
//! search results can be listed in that same order.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use log::{info, warn};
use serde_json::Value;
use thiserror::Error;

/// Errors raised while reading a dictionary file.
///
/// A missing file is not an error; see [`Dictionary::load`].
#[derive(Debug, Error)]
pub enum LoadError {
	/// The file exists but could not be read.
	#[error("failed to read dictionary {}: {source}", .path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// The file is not a JSON object of words to definitions.
	#[error("failed to parse dictionary {}: {source}", .path.display())]
	Parse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
}

/// Immutable mapping of words to their definitions in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
	entries: IndexMap<String, Value>,
}

impl Dictionary {
	/// Read a dictionary from a JSON file containing a top-level object.
	///
	/// When the file does not exist a warning is logged and an empty
	/// dictionary is returned so the application can keep running with the
	/// other side populated.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
		Self::try_load(path).map(Option::unwrap_or_default)
	}

	/// Like [`Dictionary::load`], but reports a missing file as `None`.
	pub fn try_load(path: impl AsRef<Path>) -> Result<Option<Self>, LoadError> {
		let path = path.as_ref();
		let contents = match fs::read_to_string(path) {
			Ok(contents) => contents,
			Err(err) if err.kind() == io::ErrorKind::NotFound => {
				warn!("dictionary {} not found, showing no entries", path.display());
				return Ok(None);
			}
			Err(source) => {
				return Err(LoadError::Read {
					path: path.to_path_buf(),
					source,
				});
			}
		};

		let dictionary = Self::from_json_str(&contents).map_err(|source| LoadError::Parse {
			path: path.to_path_buf(),
			source,
		})?;
		info!(
			"loaded {} entries from {}",
			dictionary.len(),
			path.display()
		);
		Ok(Some(dictionary))
	}

	/// Parse a dictionary from JSON text.
	pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
		let entries = serde_json::from_str(json)?;
		Ok(Self { entries })
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterate over all entries in file order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.entries
			.iter()
			.map(|(word, definition)| (word.as_str(), definition))
	}
}

impl<K, V> FromIterator<(K, V)> for Dictionary
where
	K: Into<String>,
	V: Into<Value>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let entries = iter
			.into_iter()
			.map(|(word, definition)| (word.into(), definition.into()))
			.collect();
		Self { entries }
	}
}

#[cfg(test)]
mod tests {
	use std::fs;

	use serde_json::json;
	use tempfile::tempdir;

	use super::*;

	#[test]
	fn missing_file_yields_empty_dictionary() {
		let dir = tempdir().unwrap();
		let dictionary = Dictionary::load(dir.path().join("men.json")).expect("missing is tolerated");
		assert!(dictionary.is_empty());
	}

	#[test]
	fn try_load_tells_missing_from_empty() {
		let dir = tempdir().unwrap();
		let missing = Dictionary::try_load(dir.path().join("men.json")).unwrap();
		assert_eq!(missing, None);

		let path = dir.path().join("women.json");
		fs::write(&path, "{}").unwrap();
		let empty = Dictionary::try_load(&path).unwrap();
		assert_eq!(empty, Some(Dictionary::default()));
	}

	#[test]
	fn keeps_file_order() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("women.json");
		fs::write(&path, r#"{"zeta": "last letter", "Alpha": "first", "mu": "middle"}"#).unwrap();

		let dictionary = Dictionary::load(&path).unwrap();
		let words: Vec<&str> = dictionary.iter().map(|(word, _)| word).collect();
		assert_eq!(words, ["zeta", "Alpha", "mu"]);
	}

	#[test]
	fn keeps_non_string_definitions() {
		let dictionary =
			Dictionary::from_json_str(r#"{"count": 3, "tags": ["a", "b"], "plain": "text"}"#)
				.unwrap();
		let entries: Vec<(&str, &Value)> = dictionary.iter().collect();
		assert_eq!(
			entries,
			[
				("count", &json!(3)),
				("tags", &json!(["a", "b"])),
				("plain", &json!("text")),
			]
		);
	}

	#[test]
	fn malformed_json_is_a_parse_error() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("broken.json");
		fs::write(&path, r#"{"word": "unterminated"#).unwrap();

		let err = Dictionary::load(&path).unwrap_err();
		assert!(matches!(&err, LoadError::Parse { path: reported, .. } if *reported == path));
		assert!(err.to_string().contains("broken.json"));
	}

	#[test]
	fn top_level_array_is_rejected() {
		let err = Dictionary::from_json_str(r#"["word", "definition"]"#).unwrap_err();
		assert!(err.is_data());
	}

	#[test]
	fn directory_path_is_a_read_error() {
		let dir = tempdir().unwrap();
		let err = Dictionary::load(dir.path()).unwrap_err();
		assert!(matches!(err, LoadError::Read { .. }));
	}

	#[test]
	fn collects_from_pairs() {
		let dictionary: Dictionary = [("Bob", "doctor"), ("Alice", "engineer")]
			.into_iter()
			.collect();
		assert_eq!(dictionary.len(), 2);
		assert_eq!(dictionary.iter().next().map(|(word, _)| word), Some("Bob"));
	}
}
