//! Command layer of `modtable`: configuration, scaffolding of the output
//! directory, table generation through [`modtable_codegen`], and the compile
//! trigger.

pub mod commands;
pub mod config;
pub mod error;
pub mod scaffold;
pub mod trigger;

// Used by the `modtable` binary only.
use {anyhow as _, clap as _, tracing_subscriber as _};

pub use commands::{BuildReport, build, clean};
pub use config::{CompileConfig, Config, Layout};
pub use error::{BuildError, Result};
