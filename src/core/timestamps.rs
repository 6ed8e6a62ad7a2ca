//! Recognition of registered time claims.
//!
//! `iat`, `exp` and `nbf` hold Unix epoch seconds. This module extracts
//! them from a claims object in a fixed display order and formats them
//! as calendar times.

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::decoder::Claims;

/// Recognized time claims and their labels, in display order.
pub const TIMESTAMP_CLAIMS: [(&str, &str); 3] = [
    ("iat", "Issued At"),
    ("exp", "Expires At"),
    ("nbf", "Not Before"),
];

/// A recognized time claim resolved to an instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampAnnotation {
    pub label: &'static str,
    pub at: DateTime<Utc>,
}

/// Collect human-readable annotations for the recognized time claims.
///
/// Returns `None` when none of the recognized claims is present.
/// Otherwise returns one entry for every recognized claim with a numeric
/// value, in [`TIMESTAMP_CLAIMS`] order. Claims with non-numeric or
/// out-of-range values are skipped.
pub fn annotate(claims: &Claims) -> Option<Vec<TimestampAnnotation>> {
    if !TIMESTAMP_CLAIMS
        .iter()
        .any(|(claim, _)| claims.contains_key(*claim))
    {
        return None;
    }

    let annotations = TIMESTAMP_CLAIMS
        .iter()
        .filter_map(|&(claim, label)| {
            let at = claims.get(claim).and_then(claim_instant)?;
            Some(TimestampAnnotation { label, at })
        })
        .collect();
    Some(annotations)
}

/// Interpret a claim value as an instant, truncating fractional seconds.
///
/// Returns `None` for non-numeric values and for numbers outside the
/// range `chrono` can represent.
pub fn claim_instant(value: &Value) -> Option<DateTime<Utc>> {
    let seconds = value
        .as_i64()
        .or_else(|| value.as_f64().map(|secs| secs.trunc() as i64))?;
    DateTime::from_timestamp(seconds, 0)
}

/// Format an instant in a fixed, locale-independent RFC 1123 style.
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format("%a, %d %b %Y %H:%M:%S UTC").to_string()
}
