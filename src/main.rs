//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `redirect_check` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing exit status
//!
//! All core functionality is implemented in the library crate.

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use redirect_check::cli::{Cli, Command};
use redirect_check::initialization::init_logger_with;
use redirect_check::{route_input, run_check, StdoutSink};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    let outcome = match &cli.command {
        Command::Check(args) => {
            let config = cli.to_config(args);
            run_check(&args.path, &config, Arc::new(StdoutSink))
                .await
                .map(|_| ())
        }
        Command::Route(args) => {
            route_input(args.input.as_deref(), &args.results_dir).map(|_| ())
        }
    };

    if let Err(e) = outcome {
        eprintln!("redirect_check error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
