//! `modtable` binary.

mod cli;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use clap::error::ErrorKind;
use cli::{Cli, Command, USAGE};
use modtable_cli::Config;
use tracing::info;
// Used through the library target.
use {modtable_codegen as _, serde as _, thiserror as _, toml as _, walkdir as _};

fn main() -> ExitCode {
	let cli = match Cli::try_parse() {
		Ok(cli) => cli,
		Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
			let _ = err.print();
			return ExitCode::SUCCESS;
		}
		Err(_) => {
			println!("{USAGE}");
			return ExitCode::SUCCESS;
		}
	};

	setup_tracing(cli.verbose);

	match run(cli) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			eprintln!("error: {err:#}");
			ExitCode::FAILURE
		}
	}
}

fn run(cli: Cli) -> anyhow::Result<()> {
	let Some(command) = cli.command else {
		println!("{USAGE}");
		return Ok(());
	};

	let config =
		Config::resolve(&cli.root, cli.config.as_deref()).context("cannot load configuration")?;

	match command {
		Command::Build { no_compile } => {
			let report = modtable_cli::build(&cli.root, &config, !no_compile)?;
			info!(
				modules = report.modules,
				slots = report.slots,
				pruned = report.pruned,
				compiled = report.compiled,
				"build finished"
			);
		}
		Command::Clean => {
			modtable_cli::clean(&cli.root, &config)?;
		}
	}
	Ok(())
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("modtable=debug,modtable_cli=debug,modtable_codegen=debug,info")
		} else {
			EnvFilter::new("modtable=info,modtable_cli=info,modtable_codegen=info,warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}
