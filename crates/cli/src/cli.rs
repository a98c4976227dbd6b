use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Printed for any argument form other than `build` or `clean`.
pub const USAGE: &str = "argument must be clean or build, must run clean before every build";

#[derive(Parser, Debug)]
#[command(name = "modtable")]
#[command(about = "Generate a dense module table from numbered module files")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Project root containing the manifest and source tree
	#[arg(long, value_name = "DIR", default_value = ".", global = true)]
	pub root: PathBuf,

	/// Configuration file (defaults to `<root>/modtable.toml` when present)
	#[arg(long, value_name = "FILE", global = true)]
	pub config: Option<PathBuf>,

	/// Verbose logging
	#[arg(short, long, global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Copy the project into the output directory, generate the module table and compile
	Build {
		/// Stop after emitting the table
		#[arg(long)]
		no_compile: bool,
	},
	/// Remove the output directory
	Clean,
}
