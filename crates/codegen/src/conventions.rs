use serde::Deserialize;

/// Fixed filenames and extension that identify entries of a module directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Conventions {
	/// Filename of the module that fills every gap in the table.
	pub null_module: String,
	/// Filename of the aggregator that receives the generated declarations.
	pub aggregator: String,
	/// Extension of module files, without the leading dot.
	pub extension: String,
}

impl Default for Conventions {
	fn default() -> Self {
		Self {
			null_module: "_null.rs".to_string(),
			aggregator: "mod.rs".to_string(),
			extension: "rs".to_string(),
		}
	}
}

impl Conventions {
	/// Module name of the null module, i.e. its filename without the extension.
	pub fn null_module_name(&self) -> &str {
		self.null_module
			.strip_suffix(&self.extension)
			.and_then(|stem| stem.strip_suffix('.'))
			.unwrap_or(&self.null_module)
	}
}
