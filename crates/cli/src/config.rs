//! Project layout and generation settings.
//!
//! Settings are read from an optional `modtable.toml` at the project root.
//! Every field has a default, so a project following the default layout needs
//! no configuration file at all:
//!
//! ```toml
//! manifest = "Cargo.toml"
//! source_dir = "src"
//! module_dir = "dynamic_types"
//! output_dir = "build"
//! out_of_range = "skip"
//!
//! [conventions]
//! null_module = "_null.rs"
//! aggregator = "mod.rs"
//! extension = "rs"
//!
//! [emit]
//! table_name = "FEATURE_MAP"
//! element_type = "IDModuleInfo"
//! descriptor = "Module::ID_MODULE_INFO"
//! visibility = "pub"
//!
//! [compile]
//! program = "cargo"
//! args = ["build"]
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use modtable_codegen::{Conventions, EmitOptions, GenerateOptions, RangePolicy};
use serde::Deserialize;

use crate::error::{BuildError, Result};

/// Default configuration filename, looked up in the project root.
pub const CONFIG_FILE: &str = "modtable.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// Manifest copied into the output directory.
	pub manifest: PathBuf,
	/// Source tree copied into the output directory.
	pub source_dir: PathBuf,
	/// Module directory, relative to the source tree.
	pub module_dir: PathBuf,
	/// Output directory created by `build` and removed by `clean`.
	pub output_dir: PathBuf,
	pub out_of_range: RangePolicy,
	pub conventions: Conventions,
	pub emit: EmitOptions,
	pub compile: CompileConfig,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			manifest: PathBuf::from("Cargo.toml"),
			source_dir: PathBuf::from("src"),
			module_dir: PathBuf::from("dynamic_types"),
			output_dir: PathBuf::from("build"),
			out_of_range: RangePolicy::default(),
			conventions: Conventions::default(),
			emit: EmitOptions::default(),
			compile: CompileConfig::default(),
		}
	}
}

/// Command run against the generated tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompileConfig {
	pub program: String,
	pub args: Vec<String>,
}

impl Default for CompileConfig {
	fn default() -> Self {
		Self {
			program: "cargo".to_string(),
			args: vec!["build".to_string()],
		}
	}
}

/// Absolute locations derived from a [`Config`] and a project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
	pub manifest: PathBuf,
	pub source_dir: PathBuf,
	pub output_dir: PathBuf,
	pub output_manifest: PathBuf,
	pub output_source_dir: PathBuf,
	/// Module directory inside the build copy; this is what gets generated into.
	pub output_module_dir: PathBuf,
}

impl Config {
	pub fn parse(text: &str, path: &Path) -> Result<Self> {
		toml::from_str(text).map_err(|source| BuildError::ConfigParse {
			path: path.to_path_buf(),
			source,
		})
	}

	pub fn load(path: &Path) -> Result<Self> {
		let text = fs::read_to_string(path).map_err(|source| BuildError::ConfigRead {
			path: path.to_path_buf(),
			source,
		})?;
		Self::parse(&text, path)
	}

	/// Loads `explicit` if given, otherwise `<root>/modtable.toml` if it exists,
	/// otherwise the defaults.
	pub fn resolve(root: &Path, explicit: Option<&Path>) -> Result<Self> {
		if let Some(path) = explicit {
			return Self::load(path);
		}

		let path = root.join(CONFIG_FILE);
		match fs::read_to_string(&path) {
			Ok(text) => Self::parse(&text, &path),
			Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
			Err(source) => Err(BuildError::ConfigRead { path, source }),
		}
	}

	pub fn layout(&self, root: &Path) -> Layout {
		let output_dir = root.join(&self.output_dir);
		let manifest_name = self
			.manifest
			.file_name()
			.map(PathBuf::from)
			.unwrap_or_else(|| self.manifest.clone());
		let output_source_dir = output_dir.join(&self.source_dir);
		Layout {
			manifest: root.join(&self.manifest),
			source_dir: root.join(&self.source_dir),
			output_manifest: output_dir.join(manifest_name),
			output_module_dir: output_source_dir.join(&self.module_dir),
			output_source_dir,
			output_dir,
		}
	}

	pub fn generate_options(&self) -> GenerateOptions {
		GenerateOptions {
			conventions: self.conventions.clone(),
			emit: self.emit.clone(),
			out_of_range: self.out_of_range,
		}
	}
}
