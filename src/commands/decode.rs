//! Handler for decoding a token.
//!
//! Decodes a JWT's header and payload without verifying its signature,
//! optionally evaluates the `exp` claim, and writes every section to
//! stdout. All fallible work happens before the first byte is written,
//! so a bad token never produces partial output.

use std::io::{self, Write};

use anyhow::Result;
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::cli::DecodeArgs;
use crate::core::decoder::{DecodedToken, decode_token};
use crate::core::expiry::{ExpiryStatus, check_expiry};
use crate::core::time_travel::{TimeTarget, parse_time_expression};
use crate::display::OutputConfig;
use crate::display::sections::{
    write_claims_section, write_payload_section, write_signature_section,
};
use crate::display::token_status::write_expiry_section;
use crate::error::JwtDecoderError;

/// The evaluated expiry section, ready to render.
#[derive(Debug)]
pub struct ExpiryReport {
    pub status: ExpiryStatus,
    pub simulated: Option<TimeTarget>,
}

/// Execute the decode command with the given arguments.
pub fn execute(args: &DecodeArgs, config: OutputConfig) -> Result<()> {
    let token = args
        .token
        .as_deref()
        .ok_or(JwtDecoderError::NoTokenProvided)?;

    let decoded = decode_token(token)?;

    let expiry = if args.check_expiry {
        Some(evaluate_expiry(
            &decoded,
            args.time_travel.as_deref(),
            Utc::now(),
        )?)
    } else {
        None
    };

    debug!(raw = config.raw, color = config.color, "rendering token");
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(&mut out, &decoded, expiry.as_ref(), config)?;
    out.flush()?;
    Ok(())
}

/// Evaluate `exp` against `now`, or against the time-travel target when
/// an expression is given.
pub fn evaluate_expiry(
    decoded: &DecodedToken,
    time_travel: Option<&str>,
    now: DateTime<Utc>,
) -> Result<ExpiryReport, JwtDecoderError> {
    let simulated = time_travel
        .map(|expr| parse_time_expression(expr, now))
        .transpose()?;
    let at = simulated.as_ref().map_or(now, |target| target.timestamp);

    Ok(ExpiryReport {
        status: check_expiry(&decoded.payload, at),
        simulated,
    })
}

/// Write all sections in order: header, payload, signature, expiry.
pub fn render<W: Write>(
    out: &mut W,
    decoded: &DecodedToken,
    expiry: Option<&ExpiryReport>,
    config: OutputConfig,
) -> io::Result<()> {
    write_claims_section(out, "HEADER", &decoded.header, config)?;
    writeln!(out)?;
    write_payload_section(out, &decoded.payload, config)?;
    writeln!(out)?;
    write_signature_section(out, &decoded.signature, config)?;

    if let Some(report) = expiry {
        writeln!(out)?;
        write_expiry_section(out, &report.status, report.simulated.as_ref(), config)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use zeroize::Zeroizing;

    // Header: {"alg":"HS256","typ":"JWT"}, Payload: {"sub":"1234567890","exp":1500}
    const EXPIRING_TOKEN: &str =
        "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.eyJzdWIiOiIxMjM0NTY3ODkwIiwiZXhwIjoxNTAwfQ.sig";

    const PLAIN: OutputConfig = OutputConfig {
        raw: false,
        color: false,
    };

    fn at(seconds: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(seconds, 0).unwrap()
    }

    fn args(token: Option<&str>) -> DecodeArgs {
        DecodeArgs {
            token: token.map(|t| Zeroizing::new(t.to_string())),
            raw: false,
            no_color: true,
            check_expiry: false,
            time_travel: None,
        }
    }

    fn render_to_string(decoded: &DecodedToken, expiry: Option<&ExpiryReport>) -> String {
        let mut buf = Vec::new();
        render(&mut buf, decoded, expiry, PLAIN).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_evaluate_expiry_uses_now_without_time_travel() {
        let decoded = decode_token(EXPIRING_TOKEN).unwrap();
        let report = evaluate_expiry(&decoded, None, at(1000)).unwrap();
        assert!(matches!(report.status, ExpiryStatus::Valid { .. }));
        assert!(report.simulated.is_none());
    }

    #[test]
    fn test_evaluate_expiry_uses_time_travel_target() {
        let decoded = decode_token(EXPIRING_TOKEN).unwrap();
        let report = evaluate_expiry(&decoded, Some("+1h"), at(1000)).unwrap();
        assert!(matches!(report.status, ExpiryStatus::Expired { .. }));
        assert_eq!(report.simulated.unwrap().timestamp, at(4600));
    }

    #[test]
    fn test_evaluate_expiry_rejects_bad_expression() {
        let decoded = decode_token(EXPIRING_TOKEN).unwrap();
        let err = evaluate_expiry(&decoded, Some("soon"), at(1000)).unwrap_err();
        assert!(matches!(err, JwtDecoderError::InvalidTimeExpression { .. }));
    }

    #[test]
    fn test_render_orders_sections() {
        let decoded = decode_token(EXPIRING_TOKEN).unwrap();
        let report = evaluate_expiry(&decoded, None, at(1000)).unwrap();
        let output = render_to_string(&decoded, Some(&report));

        let header = output.find("HEADER").unwrap();
        let payload = output.find("PAYLOAD").unwrap();
        let signature = output.find("SIGNATURE").unwrap();
        let expiry = output.find("EXPIRY CHECK").unwrap();
        assert!(header < payload && payload < signature && signature < expiry);
    }

    #[test]
    fn test_render_without_expiry_omits_section() {
        let decoded = decode_token(EXPIRING_TOKEN).unwrap();
        let output = render_to_string(&decoded, None);
        assert!(!output.contains("EXPIRY CHECK"));
        assert!(output.contains("Expires At: Thu, 01 Jan 1970 00:25:00 UTC"));
    }

    #[test]
    fn test_execute_empty_token_is_a_format_error() {
        for token in ["", "   ", "\n\t"] {
            let err = execute(&args(Some(token)), PLAIN).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<JwtDecoderError>(),
                Some(JwtDecoderError::InvalidTokenFormat)
            ));
        }
    }

    #[test]
    fn test_execute_absent_token_reports_no_token() {
        let err = execute(&args(None), PLAIN).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<JwtDecoderError>(),
            Some(JwtDecoderError::NoTokenProvided)
        ));
    }
}
