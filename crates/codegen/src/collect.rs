//! Extraction of module identifiers from classified entries.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Deserialize;
use tracing::warn;

use crate::discover::{Candidate, Entry};
use crate::error::{GenerateError, Result};

/// Identifier of a module, also its slot in the generated table.
pub type ModuleId = u16;

/// What to do with a numbered module whose identifier exceeds [`ModuleId::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RangePolicy {
	/// Leave the module out of the table and log a warning.
	#[default]
	Skip,
	/// Fail the generation pass.
	Error,
}

/// Set of identifiers that take part in the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierSet {
	ids: FxHashSet<ModuleId>,
}

impl IdentifierSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns `false` if `id` was already present.
	pub fn insert(&mut self, id: ModuleId) -> bool {
		self.ids.insert(id)
	}

	pub fn contains(&self, id: ModuleId) -> bool {
		self.ids.contains(&id)
	}

	pub fn len(&self) -> usize {
		self.ids.len()
	}

	pub fn is_empty(&self) -> bool {
		self.ids.is_empty()
	}

	pub fn max(&self) -> Option<ModuleId> {
		self.ids.iter().copied().max()
	}

	/// Members in ascending order.
	pub fn ascending(&self) -> Vec<ModuleId> {
		let mut ids: Vec<_> = self.ids.iter().copied().collect();
		ids.sort_unstable();
		ids
	}
}

impl FromIterator<ModuleId> for IdentifierSet {
	fn from_iter<I: IntoIterator<Item = ModuleId>>(iter: I) -> Self {
		Self {
			ids: iter.into_iter().collect(),
		}
	}
}

/// Collects the identifiers of every numbered entry.
///
/// Identifiers above [`ModuleId::MAX`] are handled per `policy`. Two entries
/// declaring the same identifier are rejected rather than resolved: unlike
/// [`IdentifierSet::insert`], a repeat is a [`GenerateError::DuplicateIdentifier`],
/// never a silent de-duplication.
pub fn collect_identifiers<'a>(
	entries: impl IntoIterator<Item = &'a Entry>,
	policy: RangePolicy,
) -> Result<IdentifierSet> {
	let mut set = IdentifierSet::new();
	let mut sources: FxHashMap<ModuleId, String> = FxHashMap::default();

	for entry in entries {
		let Candidate::Numbered(numeral) = &entry.candidate else {
			continue;
		};

		let Some(id) = numeral.value().and_then(|value| ModuleId::try_from(value).ok()) else {
			match policy {
				RangePolicy::Skip => {
					warn!(
						file = %entry.display_name(),
						identifier = %numeral,
						"identifier out of range, module left out of the table"
					);
					continue;
				}
				RangePolicy::Error => {
					return Err(GenerateError::OutOfRangeIdentifier {
						file: entry.display_name(),
						numeral: numeral.clone(),
					});
				}
			}
		};

		if let Some(first) = sources.insert(id, entry.display_name()) {
			return Err(GenerateError::DuplicateIdentifier {
				id,
				first,
				second: entry.display_name(),
			});
		}
		set.insert(id);
	}

	Ok(set)
}
