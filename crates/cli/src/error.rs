use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use modtable_codegen::GenerateError;
use thiserror::Error;

/// Errors that abort a `build` or `clean` invocation.
#[derive(Debug, Error)]
pub enum BuildError {
	#[error("configuration failed: cannot read {}", path.display())]
	ConfigRead {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("configuration failed: malformed {}", path.display())]
	ConfigParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},
	#[error("scaffolding failed: output directory {} already exists, run `modtable clean` first", .0.display())]
	PreexistingOutputDirectory(PathBuf),
	#[error("scaffolding failed: cannot {action} {}", path.display())]
	Scaffold {
		action: &'static str,
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("scaffolding failed: cannot walk source tree")]
	Walk(#[from] walkdir::Error),
	#[error(transparent)]
	Generate(#[from] GenerateError),
	#[error("compile failed: cannot run `{program}`")]
	TriggerSpawn {
		program: String,
		#[source]
		source: io::Error,
	},
	#[error("compile failed: `{program}` exited with {status}")]
	CompileFailed { program: String, status: ExitStatus },
	#[error("clean failed: cannot remove {}", path.display())]
	Clean {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

/// Result type for command operations.
pub type Result<T> = std::result::Result<T, BuildError>;
