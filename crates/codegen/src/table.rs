//! Dense table construction.

use crate::collect::{IdentifierSet, ModuleId};
use crate::error::{GenerateError, Result};

/// Content of one table slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
	/// The real module with this identifier.
	Module(ModuleId),
	/// The null module, filling a gap.
	Null,
}

/// Table indexed by identifier, covering `0..=max` without holes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseTable {
	slots: Box<[Slot]>,
}

impl DenseTable {
	/// Builds the table for `ids`, failing if there is no identifier to size it by.
	pub fn build(ids: &IdentifierSet) -> Result<Self> {
		let max = ids.max().ok_or(GenerateError::EmptyIdentifierSet)?;
		let slots = (0..=max)
			.map(|id| if ids.contains(id) { Slot::Module(id) } else { Slot::Null })
			.collect();
		Ok(Self { slots })
	}

	/// Number of slots, always `max + 1`.
	pub fn len(&self) -> usize {
		self.slots.len()
	}

	pub fn is_empty(&self) -> bool {
		self.slots.is_empty()
	}

	pub fn max(&self) -> ModuleId {
		// Built from a non-empty `0..=max` range of `ModuleId`, so this cannot truncate.
		(self.slots.len() - 1) as ModuleId
	}

	pub fn slots(&self) -> &[Slot] {
		&self.slots
	}

	pub fn get(&self, id: ModuleId) -> Option<Slot> {
		self.slots.get(usize::from(id)).copied()
	}

	/// Identifiers of the real modules, ascending.
	pub fn modules(&self) -> impl Iterator<Item = ModuleId> + '_ {
		self.slots.iter().filter_map(|slot| match slot {
			Slot::Module(id) => Some(*id),
			Slot::Null => None,
		})
	}

	/// Number of slots filled by the null module.
	pub fn gaps(&self) -> usize {
		self.slots.iter().filter(|slot| **slot == Slot::Null).count()
	}
}
