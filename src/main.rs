//! jwt-decoder: decode and display JWT tokens for inspection.
//!
//! Entry point for the application. Parses CLI arguments, sets up
//! logging, and delegates to the appropriate command handler.

#![forbid(unsafe_code)]

mod cli;
mod commands;
mod core;
mod display;
mod error;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use display::OutputConfig;

/// Environment variable holding the tracing filter directives.
const LOG_ENV_VAR: &str = "JWT_DECODER_LOG";

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and --version are "errors" that print to stdout.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Install a stderr fmt subscriber filtered by `JWT_DECODER_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Dispatch to the appropriate command handler.
///
/// Returns `ExitCode` so the caller can exit without `process::exit`,
/// allowing all destructors (including `Zeroizing`) to run.
fn run(cli: Cli) -> Result<ExitCode> {
    tracing::debug!(args = ?cli, "parsed arguments");

    match &cli.command {
        Some(Commands::Version) => commands::version::execute()?,
        None => {
            let config = OutputConfig::detect(cli.decode.raw, cli.decode.no_color);
            commands::decode::execute(&cli.decode, config)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}
