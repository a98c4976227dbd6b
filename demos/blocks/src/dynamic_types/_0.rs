//! Experience orb.
use super::{IdModule, Tag};

pub struct Module;

impl IdModule for Module {
	const NAME: &'static str = "experience_orb";
	const TAGS: &'static [Tag] = &[];
}
