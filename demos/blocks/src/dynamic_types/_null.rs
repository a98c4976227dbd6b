use super::{IdModule, Tag};

pub struct Module;

impl IdModule for Module {
	const NAME: &'static str = "";
	const TAGS: &'static [Tag] = &[];
}
