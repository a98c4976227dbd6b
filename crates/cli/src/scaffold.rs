//! Output directory scaffolding: creation, copies, pruning and removal.

use std::fs;
use std::io;
use std::path::Path;

use modtable_codegen::{Candidate, Entry};
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{BuildError, Result};

fn scaffold_failed(action: &'static str, path: &Path) -> impl FnOnce(io::Error) -> BuildError {
	let path = path.to_path_buf();
	move |source| BuildError::Scaffold { action, path, source }
}

/// Creates the output directory, refusing to reuse an existing one.
pub fn create_output_dir(path: &Path) -> Result<()> {
	if path.exists() {
		return Err(BuildError::PreexistingOutputDirectory(path.to_path_buf()));
	}
	fs::create_dir_all(path).map_err(scaffold_failed("create", path))
}

/// Copies a single file to `to`.
pub fn copy_file(from: &Path, to: &Path) -> Result<()> {
	fs::copy(from, to).map_err(scaffold_failed("copy", from))?;
	Ok(())
}

/// Recursively copies `from` into `to`, following symlinks. Returns the number of files copied.
pub fn copy_tree(from: &Path, to: &Path) -> Result<usize> {
	let mut copied = 0;
	for entry in WalkDir::new(from).follow_links(true) {
		let entry = entry?;
		let Ok(relative) = entry.path().strip_prefix(from) else {
			continue;
		};
		let target = to.join(relative);

		if entry.file_type().is_dir() {
			fs::create_dir_all(&target).map_err(scaffold_failed("create", &target))?;
		} else {
			fs::copy(entry.path(), &target).map_err(scaffold_failed("copy", entry.path()))?;
			copied += 1;
		}
	}
	debug!(from = %from.display(), to = %to.display(), files = copied, "source tree copied");
	Ok(copied)
}

/// Removes every unrecognized entry of `entries` from `dir`. Returns how many were removed.
pub fn prune<'a>(dir: &Path, entries: impl IntoIterator<Item = &'a Entry>) -> Result<usize> {
	let mut removed = 0;
	for entry in entries {
		if entry.candidate != Candidate::Unrecognized {
			continue;
		}

		let path = dir.join(&entry.name);
		let result = if path.is_dir() {
			fs::remove_dir_all(&path)
		} else {
			fs::remove_file(&path)
		};
		result.map_err(scaffold_failed("remove", &path))?;

		debug!(file = %entry.display_name(), "pruned unrecognized module entry");
		removed += 1;
	}
	Ok(removed)
}

/// Removes the output directory tree. Returns `false` if there was nothing to remove.
pub fn remove_output_dir(path: &Path) -> Result<bool> {
	match fs::remove_dir_all(path) {
		Ok(()) => Ok(true),
		Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
		Err(source) => Err(BuildError::Clean {
			path: path.to_path_buf(),
			source,
		}),
	}
}

#[cfg(test)]
mod tests {
	use std::ffi::OsString;

	use pretty_assertions::assert_eq;

	use super::*;

	fn entry(name: &str, candidate: Candidate) -> Entry {
		Entry {
			name: OsString::from(name),
			candidate,
		}
	}

	#[test]
	fn existing_output_dir_is_refused() {
		let root = tempfile::tempdir().expect("must create tempdir");
		let err = create_output_dir(root.path()).unwrap_err();
		assert!(matches!(err, BuildError::PreexistingOutputDirectory(_)));
	}

	#[test]
	fn copy_tree_mirrors_nested_layout() {
		let root = tempfile::tempdir().expect("must create tempdir");
		let from = root.path().join("src");
		fs::create_dir_all(from.join("a/b")).unwrap();
		fs::write(from.join("main.rs"), "fn main() {}\n").unwrap();
		fs::write(from.join("a/b/leaf.rs"), "// leaf\n").unwrap();

		let to = root.path().join("build/src");
		assert_eq!(copy_tree(&from, &to).unwrap(), 2);
		assert_eq!(fs::read_to_string(to.join("a/b/leaf.rs")).unwrap(), "// leaf\n");
		assert_eq!(fs::read_to_string(to.join("main.rs")).unwrap(), "fn main() {}\n");
	}

	#[test]
	fn prune_removes_only_unrecognized_entries() {
		let dir = tempfile::tempdir().expect("must create tempdir");
		for name in ["_0.rs", "_01.rs", "_null.rs", "mod.rs", "stone.rs"] {
			fs::write(dir.path().join(name), "").unwrap();
		}
		fs::create_dir(dir.path().join("assets")).unwrap();
		fs::write(dir.path().join("assets/icon.png"), "").unwrap();

		let entries = [
			entry("_0.rs", Candidate::Unrecognized),
			entry("_01.rs", Candidate::Unrecognized),
			entry("_null.rs", Candidate::NullModule),
			entry("mod.rs", Candidate::Aggregator),
			entry("stone.rs", Candidate::Unrecognized),
			entry("assets", Candidate::Unrecognized),
		];
		// `_0.rs` is marked unrecognized here on purpose: prune trusts the classification.
		assert_eq!(prune(dir.path(), &entries).unwrap(), 4);

		let mut left: Vec<String> = fs::read_dir(dir.path())
			.unwrap()
			.map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
			.collect();
		left.sort();
		assert_eq!(left, vec!["_null.rs", "mod.rs"]);
	}

	#[test]
	fn remove_output_dir_is_idempotent() {
		let root = tempfile::tempdir().expect("must create tempdir");
		let output = root.path().join("build");
		fs::create_dir_all(output.join("src")).unwrap();

		assert!(remove_output_dir(&output).unwrap());
		assert!(!output.exists());
		assert!(!remove_output_dir(&output).unwrap());
	}
}
