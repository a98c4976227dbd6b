//! The `build` and `clean` commands.

use std::path::Path;

use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::{scaffold, trigger};

/// What a `build` produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
	/// Real modules in the table.
	pub modules: usize,
	/// Table length, `max + 1`.
	pub slots: usize,
	/// Unrecognized entries removed from the build copy.
	pub pruned: usize,
	pub compiled: bool,
}

/// Scaffolds the output directory, generates the module table into the copied
/// aggregator and, if `compile` is set, runs the compile command.
///
/// The output directory must not exist. A failure part way leaves whatever was
/// already written; run [`clean`] before retrying.
pub fn build(root: &Path, config: &Config, compile: bool) -> Result<BuildReport> {
	let layout = config.layout(root);

	scaffold::create_output_dir(&layout.output_dir)?;
	scaffold::copy_file(&layout.manifest, &layout.output_manifest)?;
	scaffold::copy_tree(&layout.source_dir, &layout.output_source_dir)?;
	info!(output = %layout.output_dir.display(), "output directory scaffolded");

	let options = config.generate_options();
	let generation = modtable_codegen::plan(&layout.output_module_dir, &options)?;
	let pruned = scaffold::prune(&layout.output_module_dir, generation.unrecognized())?;
	generation.write(&layout.output_module_dir, &options.conventions)?;
	info!(
		aggregator = %layout.output_module_dir.join(&options.conventions.aggregator).display(),
		pruned,
		"module table emitted"
	);

	if compile {
		trigger::compile(&config.compile, &layout.output_source_dir)?;
	}

	Ok(BuildReport {
		modules: generation.table.modules().count(),
		slots: generation.table.len(),
		pruned,
		compiled: compile,
	})
}

/// Removes the output directory. Returns `false` if it did not exist.
pub fn clean(root: &Path, config: &Config) -> Result<bool> {
	let output_dir = root.join(&config.output_dir);
	let removed = scaffold::remove_output_dir(&output_dir)?;
	info!(output = %output_dir.display(), removed, "output directory cleaned");
	Ok(removed)
}
