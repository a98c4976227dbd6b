use std::fs;

use pretty_assertions::assert_eq;

use super::*;
use crate::collect::IdentifierSet;

fn table(ids: &[ModuleId]) -> DenseTable {
	let set: IdentifierSet = ids.iter().copied().collect();
	DenseTable::build(&set).unwrap()
}

#[test]
fn renders_declarations_and_table() {
	let artifact = Artifact::render(&table(&[0, 2, 5]), "_null", &EmitOptions::default());

	assert_eq!(
		artifact.declarations,
		"pub mod _null;\npub mod _0;\npub mod _2;\npub mod _5;\n"
	);
	assert_eq!(
		artifact.table,
		concat!(
			"static FEATURE_MAP: [IDModuleInfo; 6] = [\n",
			"\t_0::Module::ID_MODULE_INFO,\n",
			"\t_null::Module::ID_MODULE_INFO,\n",
			"\t_2::Module::ID_MODULE_INFO,\n",
			"\t_null::Module::ID_MODULE_INFO,\n",
			"\t_null::Module::ID_MODULE_INFO,\n",
			"\t_5::Module::ID_MODULE_INFO,\n",
			"];\n",
		)
	);
}

#[test]
fn array_length_matches_max_plus_one() {
	for ids in [&[0][..], &[9], &[1, 4, 200]] {
		let table = table(ids);
		let artifact = Artifact::render(&table, "_null", &EmitOptions::default());
		let max = ids.iter().max().copied().unwrap();
		let entries = artifact.table.lines().filter(|line| line.starts_with('\t')).count();

		assert_eq!(entries, usize::from(max) + 1);
		assert!(artifact.table.contains(&format!("; {}] = [", usize::from(max) + 1)));
	}
}

#[test]
fn null_module_declared_once() {
	let artifact = Artifact::render(&table(&[3]), "_null", &EmitOptions::default());
	assert_eq!(artifact.declarations.matches("mod _null;").count(), 1);
	assert_eq!(artifact.declarations.lines().count(), 2);
}

#[test]
fn custom_names_and_private_modules() {
	let options = EmitOptions {
		table_name: "REGISTRY".to_string(),
		element_type: "Descriptor".to_string(),
		descriptor: "INFO".to_string(),
		visibility: String::new(),
	};
	let artifact = Artifact::render(&table(&[1]), "fallback", &options);

	assert_eq!(artifact.declarations, "mod fallback;\nmod _1;\n");
	assert_eq!(
		artifact.table,
		"static REGISTRY: [Descriptor; 2] = [\n\tfallback::INFO,\n\t_1::INFO,\n];\n"
	);
}

#[test]
fn append_keeps_existing_content() {
	let dir = tempfile::tempdir().expect("must create tempdir");
	let path = dir.path().join("mod.rs");
	fs::write(&path, "pub type TypeID = u16;\n").expect("must create aggregator");

	let artifact = Artifact::render(&table(&[0]), "_null", &EmitOptions::default());
	append_to(&path, &artifact).unwrap();

	let written = fs::read_to_string(&path).unwrap();
	assert_eq!(
		written,
		concat!(
			"pub type TypeID = u16;\n",
			"\n",
			"pub mod _null;\n",
			"pub mod _0;\n",
			"\n",
			"static FEATURE_MAP: [IDModuleInfo; 1] = [\n",
			"\t_0::Module::ID_MODULE_INFO,\n",
			"];\n",
		)
	);
}

#[test]
fn append_terminates_unterminated_content() {
	let dir = tempfile::tempdir().expect("must create tempdir");
	let path = dir.path().join("mod.rs");
	fs::write(&path, "// header").expect("must create aggregator");

	let artifact = Artifact::render(&table(&[0]), "_null", &EmitOptions::default());
	append_to(&path, &artifact).unwrap();

	let written = fs::read_to_string(&path).unwrap();
	assert!(written.starts_with("// header\n\npub mod _null;\n"));
}

#[test]
fn append_to_missing_aggregator_fails_without_creating_it() {
	let dir = tempfile::tempdir().expect("must create tempdir");
	let path = dir.path().join("mod.rs");

	let artifact = Artifact::render(&table(&[0]), "_null", &EmitOptions::default());
	let err = append_to(&path, &artifact).unwrap_err();

	assert!(matches!(err, GenerateError::Emission { .. }));
	assert!(!path.exists());
	assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
