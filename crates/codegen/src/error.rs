use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::collect::ModuleId;
use crate::discover::Numeral;

/// Errors raised while generating a module table.
///
/// Every message starts with the stage that failed so the operator can tell
/// discovery problems from emission problems without reading the chain.
#[derive(Debug, Error)]
pub enum GenerateError {
	#[error("discovery failed: cannot list {}", dir.display())]
	Discovery {
		dir: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("discovery failed: invalid module extension pattern")]
	Pattern(#[from] regex::Error),
	#[error("collection failed: {file} declares identifier {numeral}, outside 0..={max}", max = ModuleId::MAX)]
	OutOfRangeIdentifier { file: String, numeral: Numeral },
	#[error("collection failed: identifier {id} is declared by both {first} and {second}")]
	DuplicateIdentifier {
		id: ModuleId,
		first: String,
		second: String,
	},
	#[error("table construction failed: no numbered module with an identifier in 0..={max}", max = ModuleId::MAX)]
	EmptyIdentifierSet,
	#[error("emission failed: cannot append to {}", path.display())]
	Emission {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

/// Result type for generation passes.
pub type Result<T> = std::result::Result<T, GenerateError>;
