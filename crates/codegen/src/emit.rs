//! Rendering of the generated declarations and their append to the aggregator.

use std::fmt::{self, Write as _};
use std::fs;
use std::io::Write as _;
use std::path::Path;

use serde::Deserialize;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::collect::ModuleId;
use crate::error::{GenerateError, Result};
use crate::table::{DenseTable, Slot};

/// Names used in the generated source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmitOptions {
	/// Name of the generated static array.
	pub table_name: String,
	/// Element type of the array.
	pub element_type: String,
	/// Path of the descriptor constant inside each module.
	pub descriptor: String,
	/// Visibility prefix for the module declarations; empty for private.
	pub visibility: String,
}

impl Default for EmitOptions {
	fn default() -> Self {
		Self {
			table_name: "FEATURE_MAP".to_string(),
			element_type: "IDModuleInfo".to_string(),
			descriptor: "Module::ID_MODULE_INFO".to_string(),
			visibility: "pub".to_string(),
		}
	}
}

/// Generated text for one module directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
	/// One `mod` declaration for the null module, then one per real module.
	pub declarations: String,
	/// The static array literal.
	pub table: String,
}

impl Artifact {
	pub fn render(table: &DenseTable, null_module: &str, options: &EmitOptions) -> Self {
		let mut declarations = String::new();
		push_mod(&mut declarations, &options.visibility, null_module);
		for id in table.modules() {
			push_mod(&mut declarations, &options.visibility, &module_name(id));
		}

		let mut literal = format!(
			"static {}: [{}; {}] = [\n",
			options.table_name,
			options.element_type,
			table.len()
		);
		for slot in table.slots() {
			let module = match slot {
				Slot::Module(id) => module_name(*id),
				Slot::Null => null_module.to_string(),
			};
			let _ = writeln!(literal, "\t{module}::{},", options.descriptor);
		}
		literal.push_str("];\n");

		Self {
			declarations,
			table: literal,
		}
	}
}

impl fmt::Display for Artifact {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "\n{}\n{}", self.declarations, self.table)
	}
}

/// Module name of the numbered module `id`.
pub fn module_name(id: ModuleId) -> String {
	format!("_{id}")
}

fn push_mod(out: &mut String, visibility: &str, name: &str) {
	if visibility.is_empty() {
		let _ = writeln!(out, "mod {name};");
	} else {
		let _ = writeln!(out, "{visibility} mod {name};");
	}
}

/// Appends `artifact` to the aggregator at `path`.
///
/// The combined content is written to a sibling temporary file which then
/// replaces the aggregator, so on failure the original file is left as it was.
pub fn append_to(path: &Path, artifact: &Artifact) -> Result<()> {
	let emission_failed = |source| GenerateError::Emission {
		path: path.to_path_buf(),
		source,
	};

	let mut contents = fs::read(path).map_err(emission_failed)?;
	let permissions = fs::metadata(path).map_err(emission_failed)?.permissions();
	if contents.last().is_some_and(|byte| *byte != b'\n') {
		contents.push(b'\n');
	}
	contents.extend_from_slice(artifact.to_string().as_bytes());

	let dir = path
		.parent()
		.filter(|dir| !dir.as_os_str().is_empty())
		.unwrap_or_else(|| Path::new("."));
	let mut staged = NamedTempFile::new_in(dir).map_err(emission_failed)?;
	staged.write_all(&contents).map_err(emission_failed)?;
	staged.as_file().sync_all().map_err(emission_failed)?;
	fs::set_permissions(staged.path(), permissions).map_err(emission_failed)?;
	staged.persist(path).map_err(|err| emission_failed(err.error))?;

	debug!(path = %path.display(), bytes = contents.len(), "aggregator extended");
	Ok(())
}

#[cfg(test)]
mod tests;
