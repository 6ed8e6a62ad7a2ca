//! Titled output sections: header, payload, signature.

use std::io::{self, Write};

use crossterm::style::{Stylize, style};

use super::OutputConfig;
use super::json_printer::{write_compact, write_json};
use crate::core::decoder::Claims;
use crate::core::timestamps::{self, TimestampAnnotation, format_timestamp};

const BORDER: &str = "═══════════════════════════════════════════════════════════════";

/// Write a section title framed by border lines.
pub fn write_title<W: Write>(out: &mut W, title: &str, config: OutputConfig) -> io::Result<()> {
    let heading = format!("  {title}");
    for line in [BORDER, heading.as_str(), BORDER] {
        if config.color {
            writeln!(out, "{}", style(line).cyan().bold())?;
        } else {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

/// Write a titled claims object, compact in raw mode and pretty otherwise.
pub fn write_claims_section<W: Write>(
    out: &mut W,
    title: &str,
    claims: &Claims,
    config: OutputConfig,
) -> io::Result<()> {
    write_title(out, title, config)?;
    if config.raw {
        write_compact(out, claims)
    } else {
        write_json(out, claims, config.color)
    }
}

/// Write the payload section, followed in pretty mode by the
/// human-readable rendering of its time claims.
pub fn write_payload_section<W: Write>(
    out: &mut W,
    payload: &Claims,
    config: OutputConfig,
) -> io::Result<()> {
    write_claims_section(out, "PAYLOAD", payload, config)?;
    if config.raw {
        return Ok(());
    }
    match timestamps::annotate(payload) {
        Some(annotations) => write_timestamps(out, &annotations, config),
        None => Ok(()),
    }
}

/// Write the human-readable timestamp subsection.
pub fn write_timestamps<W: Write>(
    out: &mut W,
    annotations: &[TimestampAnnotation],
    config: OutputConfig,
) -> io::Result<()> {
    writeln!(out)?;
    write_dim(out, "  ── Timestamps (Human Readable) ──", config)?;
    for annotation in annotations {
        let line = format!("  {}: {}", annotation.label, format_timestamp(&annotation.at));
        write_dim(out, &line, config)?;
    }
    Ok(())
}

/// Write the signature section with its not-verified disclaimer.
pub fn write_signature_section<W: Write>(
    out: &mut W,
    signature: &str,
    config: OutputConfig,
) -> io::Result<()> {
    write_title(out, "SIGNATURE", config)?;
    let line = format!("  {signature}");
    if config.color {
        writeln!(out, "{}", style(line).red())?;
    } else {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;
    write_dim(out, "  ⚠ Note: This tool does not verify the signature.", config)?;
    write_dim(out, "  Use appropriate libraries to verify token authenticity.", config)
}

fn write_dim<W: Write>(out: &mut W, line: &str, config: OutputConfig) -> io::Result<()> {
    if config.color {
        writeln!(out, "{}", style(line).dark_grey().italic())
    } else {
        writeln!(out, "{line}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    const PLAIN: OutputConfig = OutputConfig {
        raw: false,
        color: false,
    };
    const RAW: OutputConfig = OutputConfig {
        raw: true,
        color: false,
    };

    fn claims(value: Value) -> Claims {
        match value {
            Value::Object(map) => map,
            _ => panic!("test claims must be an object"),
        }
    }

    fn capture(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_title_is_framed_by_borders() {
        let output = capture(|out| write_title(out, "HEADER", PLAIN));
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines, [BORDER, "  HEADER", BORDER]);
    }

    #[test]
    fn test_raw_claims_section_is_one_compact_line() {
        let header = claims(json!({"alg": "HS256", "typ": "JWT"}));
        let output = capture(|out| write_claims_section(out, "HEADER", &header, RAW));
        assert_eq!(output.lines().nth(3), Some(r#"{"alg":"HS256","typ":"JWT"}"#));
        assert_eq!(output.lines().count(), 4);
    }

    #[test]
    fn test_pretty_payload_appends_timestamps_in_order() {
        let payload = claims(json!({"nbf": 0, "exp": 1516239022, "iat": 1516239022}));
        let output = capture(|out| write_payload_section(out, &payload, PLAIN));
        let iat = output.find("Issued At: Thu, 18 Jan 2018 01:30:22 UTC").unwrap();
        let exp = output.find("Expires At:").unwrap();
        let nbf = output.find("Not Before: Thu, 01 Jan 1970 00:00:00 UTC").unwrap();
        assert!(iat < exp && exp < nbf);
        assert!(output.contains("── Timestamps (Human Readable) ──"));
    }

    #[test]
    fn test_payload_without_time_claims_has_no_timestamp_section() {
        let payload = claims(json!({"sub": "1234567890"}));
        let output = capture(|out| write_payload_section(out, &payload, PLAIN));
        assert!(!output.contains("Timestamps"));
    }

    #[test]
    fn test_raw_payload_has_no_timestamp_section() {
        let payload = claims(json!({"iat": 1516239022}));
        let output = capture(|out| write_payload_section(out, &payload, RAW));
        assert!(!output.contains("Timestamps"));
    }

    #[test]
    fn test_signature_section_includes_disclaimer() {
        let output = capture(|out| write_signature_section(out, "abc-_123", PLAIN));
        assert!(output.contains("  abc-_123\n"));
        assert!(output.contains("does not verify the signature"));
    }

    #[test]
    fn test_colored_title_contains_escape_sequences() {
        let config = OutputConfig {
            raw: false,
            color: true,
        };
        let output = capture(|out| write_title(out, "HEADER", config));
        assert!(output.contains('\x1b'));
        assert!(output.contains("HEADER"));
    }
}
