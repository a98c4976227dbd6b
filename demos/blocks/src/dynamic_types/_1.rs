//! Stone.
use super::{IdModule, Tag};

pub struct Module;

impl IdModule for Module {
	const NAME: &'static str = "stone";
	const TAGS: &'static [Tag] = &[Tag::Stone];
}
