//! Expiry status display.
//!
//! Renders an [`ExpiryStatus`] under the `EXPIRY CHECK` title with
//! color coding: red for expired, green for valid, dim for the
//! informational no-claim and invalid-format cases.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::style::{Stylize, style};

use super::OutputConfig;
use super::sections::write_title;
use crate::core::expiry::ExpiryStatus;
use crate::core::time_travel::TimeTarget;
use crate::core::timestamps::format_timestamp;

/// Write the expiry check section.
///
/// `simulated` is the time-travel target the status was evaluated
/// against, if any.
pub fn write_expiry_section<W: Write>(
    out: &mut W,
    status: &ExpiryStatus,
    simulated: Option<&TimeTarget>,
    config: OutputConfig,
) -> io::Result<()> {
    write_title(out, "EXPIRY CHECK", config)?;

    if let Some(target) = simulated {
        let line = format!(
            "  Evaluated at: {} (time travel: {})",
            format_timestamp(&target.timestamp),
            target.expression
        );
        write_info(out, &line, config)?;
    }

    match status {
        ExpiryStatus::NoClaim => {
            write_info(out, "  No expiration claim (exp) found in token.", config)
        }
        ExpiryStatus::InvalidFormat => {
            write_info(out, "  Invalid expiration claim format.", config)
        }
        ExpiryStatus::Expired {
            expired_at,
            elapsed,
        } => {
            if config.color {
                writeln!(out, "{}", style("  ✗ TOKEN EXPIRED").red().bold())?;
            } else {
                writeln!(out, "  ✗ TOKEN EXPIRED")?;
            }
            write_info(out, &format!("  Expired: {}", format_timestamp(expired_at)), config)?;
            write_info(out, &format!("  Expired: {} ago", format_duration(*elapsed)), config)
        }
        ExpiryStatus::Valid {
            expires_at,
            remaining,
        } => {
            if config.color {
                writeln!(out, "{}", style("  ✓ TOKEN VALID").green().bold())?;
            } else {
                writeln!(out, "  ✓ TOKEN VALID")?;
            }
            write_info(out, &format!("  Expires: {}", format_timestamp(expires_at)), config)?;
            write_info(out, &format!("  Expires in: {}", format_duration(*remaining)), config)
        }
    }
}

/// Format a whole-second duration as `1h2m3s`, `8m20s` or `45s`.
///
/// Hours do not roll over into days.
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);
    if hours > 0 {
        format!("{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m{seconds}s")
    } else {
        format!("{seconds}s")
    }
}

fn write_info<W: Write>(out: &mut W, line: &str, config: OutputConfig) -> io::Result<()> {
    if config.color {
        writeln!(out, "{}", style(line).dark_grey())
    } else {
        writeln!(out, "{line}")
    }
}
