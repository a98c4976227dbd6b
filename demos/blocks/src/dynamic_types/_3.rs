//! Oak planks.
use super::{IdModule, Tag};

pub struct Module;

impl IdModule for Module {
	const NAME: &'static str = "oak_planks";
	const TAGS: &'static [Tag] = &[Tag::Wood, Tag::Flammable];
}
