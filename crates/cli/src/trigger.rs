use std::path::Path;
use std::process::{Command, ExitStatus};

use tracing::info;

use crate::config::CompileConfig;
use crate::error::{BuildError, Result};

/// Runs the compile command in `dir` with inherited stdio.
///
/// A non-zero exit is reported as [`BuildError::CompileFailed`].
pub fn compile(config: &CompileConfig, dir: &Path) -> Result<ExitStatus> {
	info!(program = %config.program, args = ?config.args, dir = %dir.display(), "running compile command");

	let status = Command::new(&config.program)
		.args(&config.args)
		.current_dir(dir)
		.status()
		.map_err(|source| BuildError::TriggerSpawn {
			program: config.program.clone(),
			source,
		})?;

	if !status.success() {
		return Err(BuildError::CompileFailed {
			program: config.program.clone(),
			status,
		});
	}
	Ok(status)
}
