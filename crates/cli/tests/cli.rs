//! Runs the `modtable` binary against a copy of the `blocks` demo project.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use modtable_cli::scaffold;
use pretty_assertions::assert_eq;

const USAGE_LINE: &str = "argument must be clean or build, must run clean before every build\n";

fn demo_project() -> (tempfile::TempDir, PathBuf) {
	let demo = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/blocks");
	let temp = tempfile::tempdir().expect("must create tempdir");
	let root = temp.path().join("blocks");
	scaffold::copy_tree(&demo, &root).expect("must copy demo project");
	(temp, root)
}

fn modtable(root: &Path, args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_modtable"))
		.args(args)
		.current_dir(root)
		.env_remove("RUST_LOG")
		.output()
		.expect("must run modtable")
}

#[test]
fn unrecognized_arguments_print_usage_without_acting() {
	let (_temp, root) = demo_project();

	for args in [&["foo"][..], &["build", "extra"], &[]] {
		let output = modtable(&root, args);
		assert!(output.status.success(), "{args:?}: {:?}", output.status);
		assert_eq!(String::from_utf8_lossy(&output.stdout), USAGE_LINE, "{args:?}");
		assert!(!root.join("build").exists(), "{args:?} created the output directory");
	}
}

#[test]
fn second_build_without_clean_fails_in_scaffolding() {
	let (_temp, root) = demo_project();

	let first = modtable(&root, &["build", "--no-compile"]);
	assert!(first.status.success(), "{}", String::from_utf8_lossy(&first.stderr));
	assert!(root.join("build/src/dynamic_types/mod.rs").is_file());

	let second = modtable(&root, &["build", "--no-compile"]);
	assert!(!second.status.success());
	let stderr = String::from_utf8_lossy(&second.stderr);
	assert!(stderr.contains("scaffolding failed"), "{stderr}");
	assert_eq!(stderr.matches("already exists").count(), 1, "{stderr}");
}

#[test]
fn clean_then_build_succeeds() {
	let (_temp, root) = demo_project();

	let clean = modtable(&root, &["clean"]);
	assert!(clean.status.success(), "{}", String::from_utf8_lossy(&clean.stderr));
	assert!(!root.join("build").exists());

	assert!(modtable(&root, &["build", "--no-compile"]).status.success());
	assert!(modtable(&root, &["clean"]).status.success());
	assert!(!root.join("build").exists());
}

#[test]
fn empty_module_directory_exits_non_zero_naming_the_stage() {
	let (_temp, root) = demo_project();
	for name in ["_0.rs", "_1.rs", "_3.rs"] {
		std::fs::remove_file(root.join("src/dynamic_types").join(name)).unwrap();
	}

	let output = modtable(&root, &["build", "--no-compile"]);
	assert!(!output.status.success());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("table construction failed"), "{stderr}");
}
