//! Terminal display and formatting utilities.
//!
//! Handles colorized JSON output, section framing, and expiry status
//! rendering. Every function writes to a caller-supplied
//! [`std::io::Write`] and receives an explicit [`OutputConfig`].

use std::env;
use std::ffi::OsStr;
use std::io::{self, IsTerminal};

pub mod json_printer;
pub mod sections;
pub mod token_status;

/// Environment variable that disables color when set to a non-empty value.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Resolved rendering options for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Emit compact JSON instead of the pretty form.
    pub raw: bool,
    /// Emit ANSI styling.
    pub color: bool,
}

impl OutputConfig {
    /// Resolve the config from CLI flags and the process environment.
    pub fn detect(raw: bool, no_color_flag: bool) -> Self {
        let no_color_env = env::var_os(NO_COLOR_ENV);
        Self::resolve(
            raw,
            no_color_flag,
            no_color_env.as_deref(),
            io::stdout().is_terminal(),
        )
    }

    /// Decide the config from already-gathered inputs.
    ///
    /// Color is enabled only when `--no-color` is absent, `NO_COLOR` is
    /// unset or empty, and stdout is a terminal.
    pub fn resolve(
        raw: bool,
        no_color_flag: bool,
        no_color_env: Option<&OsStr>,
        is_tty: bool,
    ) -> Self {
        let no_color_env = no_color_env.is_some_and(|v| !v.is_empty());
        Self {
            raw,
            color: !no_color_flag && !no_color_env && is_tty,
        }
    }
}
