//! CLI argument definitions for jwt-decoder.
//!
//! Uses `clap` derive macros to define the command-line interface. The
//! top-level command decodes a token; the `version` subcommand bypasses
//! decoding entirely.
//!
//! # Security
//!
//! `DecodeArgs` implements a custom `Debug` that redacts the token to
//! prevent accidental leakage through debug formatting or logging.

use std::fmt;

use clap::{Parser, Subcommand};
use zeroize::Zeroizing;

const LONG_ABOUT: &str = concat!(
    "JWT Decoder is a command-line tool that decodes JWT (JSON Web Tokens)\n",
    "and displays the header, payload, and signature in a formatted manner.\n",
    "The signature is shown as-is and is never verified.\n",
    "\n",
    "Example:\n",
    "  jwt-decoder eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.",
    "eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIiwiaWF0IjoxNTE2MjM5MDIyfQ.",
    "SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c",
);

/// A CLI tool to decode and display JWT tokens.
#[derive(Debug, Parser)]
#[command(name = "jwt-decoder")]
#[command(version, about, long_about = LONG_ABOUT)]
#[command(args_conflicts_with_subcommands = true, subcommand_negates_reqs = true)]
pub struct Cli {
    /// Optional subcommand; without one the token argument is decoded.
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub decode: DecodeArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the version number.
    Version,
}

/// Arguments for decoding a token.
#[derive(clap::Args)]
pub struct DecodeArgs {
    /// The JWT to decode.
    #[arg(required = true, value_name = "TOKEN", value_parser = parse_zeroizing_string)]
    pub token: Option<Zeroizing<String>>,

    /// Show raw JSON without formatting.
    #[arg(short, long)]
    pub raw: bool,

    /// Disable colored output.
    #[arg(short, long)]
    pub no_color: bool,

    /// Check if the token is expired.
    #[arg(short = 'e', long)]
    pub check_expiry: bool,

    /// Evaluate the expiry check at a simulated time instead of now.
    ///
    /// Accepts relative expressions like "+7d", "-1h", "+30m" or
    /// absolute timestamps in RFC 3339 or Unix epoch format.
    #[arg(
        long,
        value_name = "EXPR",
        allow_hyphen_values = true,
        requires = "check_expiry"
    )]
    pub time_travel: Option<String>,
}

/// Parse a string into a `Zeroizing<String>` for the token argument.
fn parse_zeroizing_string(s: &str) -> Result<Zeroizing<String>, std::convert::Infallible> {
    Ok(Zeroizing::new(s.to_string()))
}

/// Custom `Debug` that redacts the token field to prevent accidental leakage.
impl fmt::Debug for DecodeArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodeArgs")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("raw", &self.raw)
            .field("no_color", &self.no_color)
            .field("check_expiry", &self.check_expiry)
            .field("time_travel", &self.time_travel)
            .finish()
    }
}
