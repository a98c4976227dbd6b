mod dynamic_types;

use dynamic_types::Tag;

fn main() {
	for tag in [Tag::Flammable, Tag::RedstoneSource, Tag::Wood, Tag::Stone] {
		println!("{tag:?}: {:?}", dynamic_types::filter_ids_by_tag(tag));
	}
	for id in 0..=4 {
		match dynamic_types::info(id) {
			Some(info) if !info.is_null() => println!("{id}: {}", info.name),
			Some(_) => println!("{id}: <unassigned>"),
			None => println!("{id}: <out of table>"),
		}
	}
}
