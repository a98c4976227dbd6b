//! Build-time generation of dense module tables.
//!
//! A module directory holds one file per identifier (`_0.rs`, `_2.rs`, ...),
//! a null module that fills gaps, and an aggregator that receives the
//! generated declarations. A generation pass runs strictly in order:
//! * [`discover`]: classify directory entries by filename
//! * [`collect`]: extract identifiers in `0..=65535`
//! * [`table`]: densify them into slots `0..=max`
//! * [`emit`]: render `mod` declarations and the static array, then append them

pub mod collect;
pub mod conventions;
pub mod discover;
pub mod emit;
pub mod error;
pub mod table;

use std::path::Path;

use tracing::{info, warn};

pub use collect::{IdentifierSet, ModuleId, RangePolicy};
pub use conventions::Conventions;
pub use discover::{Candidate, Classifier, Entry, Numeral};
pub use emit::{Artifact, EmitOptions};
pub use error::{GenerateError, Result};
pub use table::{DenseTable, Slot};

/// Settings for one generation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOptions {
	pub conventions: Conventions,
	pub emit: EmitOptions,
	pub out_of_range: RangePolicy,
}

/// Outcome of a generation pass over one module directory.
#[derive(Debug, Clone)]
pub struct Generation {
	pub entries: Vec<Entry>,
	pub table: DenseTable,
	pub artifact: Artifact,
}

impl Generation {
	/// Entries matching no convention; consumers prune these from build copies.
	pub fn unrecognized(&self) -> impl Iterator<Item = &Entry> {
		self.entries
			.iter()
			.filter(|entry| entry.candidate == Candidate::Unrecognized)
	}

	/// Appends the artifact to the aggregator inside `dir`.
	pub fn write(&self, dir: &Path, conventions: &Conventions) -> Result<()> {
		emit::append_to(&dir.join(&conventions.aggregator), &self.artifact)
	}
}

/// Runs discovery, collection, table construction and rendering for `dir`
/// without touching the filesystem.
pub fn plan(dir: &Path, options: &GenerateOptions) -> Result<Generation> {
	let classifier = Classifier::new(&options.conventions)?;
	let entries = discover::discover(dir, &classifier)?;

	if !entries.iter().any(|entry| entry.candidate == Candidate::NullModule) {
		warn!(
			dir = %dir.display(),
			null_module = %options.conventions.null_module,
			"null module not found, generated declarations will not compile"
		);
	}

	let ids = collect::collect_identifiers(&entries, options.out_of_range)?;
	let table = DenseTable::build(&ids)?;
	let artifact = Artifact::render(&table, options.conventions.null_module_name(), &options.emit);

	info!(
		dir = %dir.display(),
		modules = ids.len(),
		slots = table.len(),
		gaps = table.gaps(),
		"module table planned"
	);

	Ok(Generation {
		entries,
		table,
		artifact,
	})
}

/// Plans the table for `dir` and appends it to the aggregator.
pub fn generate(dir: &Path, options: &GenerateOptions) -> Result<Generation> {
	let generation = plan(dir, options)?;
	generation.write(dir, &options.conventions)?;
	Ok(generation)
}
