//! JWT decoding logic.
//!
//! Handles splitting a raw JWT string into its three parts (header,
//! payload, signature), base64url-decoding the header and payload with
//! padding repair, and parsing each as a JSON object.

use std::fmt;

use base64::Engine;
use base64::alphabet;
use base64::engine::DecodePaddingMode;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, URL_SAFE};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::JwtDecoderError;

/// A decoded JSON object from a token segment, keys in parse order.
pub type Claims = Map<String, Value>;

/// Unpadded base64url engine that also accepts non-zero trailing bits.
///
/// Used as the second attempt after the canonical padded decode fails.
const LENIENT_URL_SAFE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// The three raw segments of a token, borrowed from the input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSegments<'a> {
    pub header: &'a str,
    pub payload: &'a str,
    pub signature: &'a str,
}

/// The decoded parts of a JWT.
///
/// Implements a custom `Debug` that redacts `payload` and `signature`
/// to prevent accidental leakage of sensitive claim data.
pub struct DecodedToken {
    /// The parsed JWT header (typically contains `alg` and `typ`).
    pub header: Claims,
    /// The parsed JWT payload (claims).
    pub payload: Claims,
    /// The raw base64url-encoded signature segment, never decoded.
    pub signature: String,
}

/// Custom `Debug` that redacts payload and signature to prevent
/// accidental leakage through debug formatting or error chains.
impl fmt::Debug for DecodedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodedToken")
            .field("header", &self.header)
            .field("payload", &"[REDACTED]")
            .field("signature", &"[REDACTED]")
            .finish()
    }
}

/// Decode a raw JWT string into its constituent parts.
///
/// Trims surrounding whitespace, splits the token on `.` separators,
/// and decodes the header and payload segments. The signature is
/// returned as its raw base64url-encoded string.
///
/// # Errors
///
/// Returns an error if the token doesn't have exactly three parts,
/// if base64url decoding fails, or if a segment is not a JSON object.
pub fn decode_token(token: &str) -> Result<DecodedToken, JwtDecoderError> {
    let segments = split_token(token.trim())?;

    let header = decode_segment(segments.header, "header")?;
    let payload = decode_segment(segments.payload, "payload")?;

    Ok(DecodedToken {
        header,
        payload,
        signature: segments.signature.to_string(),
    })
}

/// Split a token into exactly three `.`-separated segments.
///
/// # Errors
///
/// Returns [`JwtDecoderError::InvalidTokenFormat`] for any other count.
pub fn split_token(token: &str) -> Result<TokenSegments<'_>, JwtDecoderError> {
    let mut parts = token.split('.');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(header), Some(payload), Some(signature), None) => {
            debug!(
                header_len = header.len(),
                payload_len = payload.len(),
                signature_len = signature.len(),
                "split token into segments"
            );
            Ok(TokenSegments {
                header,
                payload,
                signature,
            })
        }
        _ => Err(JwtDecoderError::InvalidTokenFormat),
    }
}

/// Base64url-decode a segment and parse it as a JSON object.
///
/// # Errors
///
/// Returns [`JwtDecoderError::Base64DecodeError`] when the segment is not
/// valid base64url and [`JwtDecoderError::JsonParseError`] when the bytes
/// are not a JSON object.
pub fn decode_segment(encoded: &str, segment_name: &str) -> Result<Claims, JwtDecoderError> {
    let bytes = decode_base64url(encoded).map_err(|reason| JwtDecoderError::Base64DecodeError {
        segment: segment_name.to_string(),
        reason,
    })?;
    debug!(segment = segment_name, bytes = bytes.len(), "decoded segment");

    parse_object(&bytes).map_err(|reason| JwtDecoderError::JsonParseError {
        segment: segment_name.to_string(),
        reason,
    })
}

/// Repair padding and decode a base64url string.
///
/// Trailing `=` characters are stripped and the padding recomputed from
/// the remaining length. A length of `4n + 1` can never be valid.
fn decode_base64url(encoded: &str) -> Result<Vec<u8>, String> {
    let stripped = encoded.trim_end_matches('=');
    let padded = match stripped.len() % 4 {
        0 => stripped.to_string(),
        2 => format!("{stripped}=="),
        3 => format!("{stripped}="),
        _ => {
            return Err(format!(
                "invalid length {} (a base64url segment cannot have length 4n+1)",
                stripped.len()
            ));
        }
    };

    URL_SAFE.decode(&padded).or_else(|canonical_err| {
        debug!(error = %canonical_err, "canonical base64url decode failed, retrying leniently");
        LENIENT_URL_SAFE
            .decode(stripped)
            .map_err(|_| canonical_err.to_string())
    })
}

/// Parse bytes as JSON and require a top-level object.
fn parse_object(bytes: &[u8]) -> Result<Claims, String> {
    match serde_json::from_slice::<Value>(bytes).map_err(|e| e.to_string())? {
        Value::Object(map) => Ok(map),
        other => Err(format!("expected a JSON object, found {}", kind_of(&other))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
