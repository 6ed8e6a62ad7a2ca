//! Handler for the `version` subcommand.

use std::io::{self, Write};

use anyhow::Result;

/// The version string printed by `jwt-decoder version`.
pub fn version_line() -> String {
    format!("{} version {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Print the version string and exit without decoding anything.
pub fn execute() -> Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{}", version_line())?;
    Ok(())
}
