//! Time-travel debugging for the expiry check.
//!
//! Parses time expressions (relative like "+7d" or absolute like RFC 3339)
//! into the instant the `exp` claim is evaluated against.

use chrono::{DateTime, TimeDelta, Utc};

use crate::error::JwtDecoderError;

/// A parsed time target for time-travel evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeTarget {
    /// The resolved absolute timestamp.
    pub timestamp: DateTime<Utc>,
    /// The original expression provided by the user.
    pub expression: String,
}

/// Parse a time-travel expression into an absolute timestamp.
///
/// Supports the following formats:
/// - Relative to `now`: `+7d`, `-1h`, `+30m`, `+1y`, `-5s`, `+2w`
/// - Absolute Unix epoch: `1705312200`
/// - Absolute RFC 3339: `2024-01-15T14:30:00Z`
///
/// # Errors
///
/// Returns an error if the expression doesn't match any known format
/// or the result is outside the representable range.
pub fn parse_time_expression(
    expression: &str,
    now: DateTime<Utc>,
) -> Result<TimeTarget, JwtDecoderError> {
    let expr = expression.trim();
    let invalid = |reason: String| JwtDecoderError::InvalidTimeExpression {
        expression: expression.to_string(),
        reason,
    };

    let timestamp = if expr.is_empty() {
        return Err(invalid("expression is empty".to_string()));
    } else if let Some(rest) = expr.strip_prefix('+') {
        let offset = parse_offset(rest).map_err(invalid)?;
        now.checked_add_signed(offset)
            .ok_or_else(|| invalid("result is out of range".to_string()))?
    } else if let Some(rest) = expr.strip_prefix('-') {
        let offset = parse_offset(rest).map_err(invalid)?;
        now.checked_sub_signed(offset)
            .ok_or_else(|| invalid("result is out of range".to_string()))?
    } else if expr.bytes().all(|b| b.is_ascii_digit()) {
        expr.parse::<i64>()
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .ok_or_else(|| invalid("epoch seconds out of range".to_string()))?
    } else {
        DateTime::parse_from_rfc3339(expr)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| {
                invalid(format!(
                    "expected +/-N<unit>, Unix epoch seconds, or an RFC 3339 timestamp ({e})"
                ))
            })?
    };

    Ok(TimeTarget {
        timestamp,
        expression: expression.to_string(),
    })
}

/// Parse the `N<unit>` part of a relative expression.
fn parse_offset(text: &str) -> Result<TimeDelta, String> {
    let Some(unit) = text.chars().last() else {
        return Err("missing amount and unit".to_string());
    };
    let amount = &text[..text.len() - unit.len_utf8()];

    let unit_seconds: i64 = match unit {
        's' => 1,
        'm' => 60,
        'h' => 3_600,
        'd' => 86_400,
        'w' => 604_800,
        'y' => 31_536_000,
        c if c.is_ascii_digit() => return Err("missing unit (one of s, m, h, d, w, y)".to_string()),
        other => return Err(format!("unknown unit '{other}'")),
    };

    if amount.is_empty() || !amount.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("invalid amount '{amount}'"));
    }

    amount
        .parse::<i64>()
        .ok()
        .and_then(|n| n.checked_mul(unit_seconds))
        .and_then(TimeDelta::try_seconds)
        .ok_or_else(|| "offset is too large".to_string())
}
