//! Classification of module directory entries by filename.

use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::debug;

use crate::conventions::Conventions;
use crate::error::{GenerateError, Result};

/// Canonical decimal numeral taken from a numbered module filename.
///
/// The digits are kept verbatim so numerals wider than any integer type still
/// classify as numbered; [`Numeral::value`] reports whether they fit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Numeral(String);

impl Numeral {
	pub fn digits(&self) -> &str {
		&self.0
	}

	/// Numeric value, or `None` if the numeral does not fit in a `u64`.
	pub fn value(&self) -> Option<u64> {
		self.0.parse().ok()
	}
}

impl fmt::Display for Numeral {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Classification of a single directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
	/// `_<n>.<ext>` with `n` in canonical decimal form.
	Numbered(Numeral),
	NullModule,
	Aggregator,
	/// Anything else. Pruned from the build copy.
	Unrecognized,
}

/// A directory entry together with its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
	pub name: OsString,
	pub candidate: Candidate,
}

impl Entry {
	pub fn display_name(&self) -> String {
		self.name.to_string_lossy().into_owned()
	}
}

/// Filename classifier for one set of [`Conventions`].
#[derive(Debug, Clone)]
pub struct Classifier {
	conventions: Conventions,
	numbered: Regex,
}

impl Classifier {
	pub fn new(conventions: &Conventions) -> Result<Self> {
		let pattern = format!(r"\A_(0|[1-9][0-9]*)\.{}\z", regex::escape(&conventions.extension));
		Ok(Self {
			conventions: conventions.clone(),
			numbered: Regex::new(&pattern)?,
		})
	}

	pub fn classify(&self, file_name: &str) -> Candidate {
		if file_name == self.conventions.null_module {
			Candidate::NullModule
		} else if file_name == self.conventions.aggregator {
			Candidate::Aggregator
		} else if let Some(caps) = self.numbered.captures(file_name) {
			Candidate::Numbered(Numeral(caps[1].to_string()))
		} else {
			Candidate::Unrecognized
		}
	}
}

/// Lists `dir` (non-recursively) and classifies every entry.
///
/// Entries that are not regular files, or whose names are not valid UTF-8,
/// are unrecognized regardless of their name. The result is sorted by name.
pub fn discover(dir: &Path, classifier: &Classifier) -> Result<Vec<Entry>> {
	let listing_failed = |source| GenerateError::Discovery {
		dir: dir.to_path_buf(),
		source,
	};

	let mut entries = Vec::new();
	for entry in fs::read_dir(dir).map_err(listing_failed)? {
		let entry = entry.map_err(listing_failed)?;
		let name = entry.file_name();

		let candidate = match name.to_str() {
			Some(file_name) if entry.path().is_file() => classifier.classify(file_name),
			_ => Candidate::Unrecognized,
		};

		debug!(file = %name.to_string_lossy(), ?candidate, "classified module entry");
		entries.push(Entry { name, candidate });
	}

	entries.sort_by(|a, b| a.name.cmp(&b.name));
	Ok(entries)
}
