//! Block, entity and item kinds, one module per numeric identifier.
//!
//! `modtable build` appends a `mod` declaration for every `_<id>.rs` file in
//! this directory and a `FEATURE_MAP` table indexed by identifier, with
//! `_null` filling unassigned identifiers.

pub type TypeId = u16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
	Flammable,
	RedstoneSource,
	Wood,
	Stone,
}

/// Implemented by the `Module` type of every kind module.
pub trait IdModule {
	const NAME: &'static str;
	const TAGS: &'static [Tag];
	const INFO: IdModuleInfo = IdModuleInfo {
		name: Self::NAME,
		tags: Self::TAGS,
	};
}

#[derive(Debug, Clone, Copy)]
pub struct IdModuleInfo {
	pub name: &'static str,
	pub tags: &'static [Tag],
}

impl IdModuleInfo {
	pub fn is_null(&self) -> bool {
		self.name.is_empty()
	}
}

pub fn info(id: TypeId) -> Option<&'static IdModuleInfo> {
	FEATURE_MAP.get(usize::from(id))
}

pub fn filter_ids_by_tag(tag: Tag) -> Vec<TypeId> {
	FEATURE_MAP
		.iter()
		.enumerate()
		.filter(|(_, info)| info.tags.contains(&tag))
		.map(|(id, _)| id as TypeId)
		.collect()
}
