//! Expiry evaluation for the `exp` claim.
//!
//! The decision is a pure function of the payload and an injected
//! current time; rendering lives in `display::token_status`.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use tracing::debug;

use super::decoder::Claims;
use super::timestamps::claim_instant;

/// Outcome of comparing a token's `exp` claim with the current time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpiryStatus {
    /// The payload has no `exp` claim.
    NoClaim,
    /// `exp` is present but is not a usable epoch number.
    InvalidFormat,
    /// The current time is at or after `exp`.
    Expired {
        expired_at: DateTime<Utc>,
        /// Time since expiry, rounded to whole seconds.
        elapsed: Duration,
    },
    /// The current time is before `exp`.
    Valid {
        expires_at: DateTime<Utc>,
        /// Time until expiry, rounded to whole seconds.
        remaining: Duration,
    },
}

/// Evaluate the `exp` claim of `payload` against `now`.
pub fn check_expiry(payload: &Claims, now: DateTime<Utc>) -> ExpiryStatus {
    let Some(exp) = payload.get("exp") else {
        debug!("payload has no exp claim");
        return ExpiryStatus::NoClaim;
    };

    let Some(expires_at) = claim_instant(exp) else {
        debug!("exp claim is not a usable epoch number");
        return ExpiryStatus::InvalidFormat;
    };

    if now >= expires_at {
        ExpiryStatus::Expired {
            expired_at: expires_at,
            elapsed: round_to_seconds(now - expires_at),
        }
    } else {
        ExpiryStatus::Valid {
            expires_at,
            remaining: round_to_seconds(expires_at - now),
        }
    }
}

/// Round a non-negative delta to the nearest whole second, halves up.
fn round_to_seconds(delta: TimeDelta) -> Duration {
    let exact = delta.to_std().unwrap_or_default();
    let round_up = u64::from(exact.subsec_nanos() >= 500_000_000);
    Duration::from_secs(exact.as_secs().saturating_add(round_up))
}
