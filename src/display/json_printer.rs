//! Colorized JSON pretty-printing for terminal output.
//!
//! Renders JSON values with syntax highlighting:
//! - Field names in yellow
//! - Strings in green
//! - Numbers in magenta
//! - Booleans in blue
//! - Null in red
//!
//! Styling is chosen from the value's variant, so a string that happens
//! to read `"true"` is still rendered as a string.

use std::io::{self, Write};

use crossterm::style::{Stylize, style};
use serde_json::{Map, Value};

const INDENT: &str = "  ";

/// Write a JSON object with 2-space indentation and a trailing newline.
///
/// When `use_color` is false the output is byte-for-byte what
/// `serde_json::to_string_pretty` produces.
pub fn write_json<W: Write>(
    out: &mut W,
    object: &Map<String, Value>,
    use_color: bool,
) -> io::Result<()> {
    write_object(out, object, 0, use_color)?;
    writeln!(out)
}

/// Write a JSON object as compact single-line JSON, never colored.
pub fn write_compact<W: Write>(out: &mut W, object: &Map<String, Value>) -> io::Result<()> {
    serde_json::to_writer(&mut *out, object)?;
    writeln!(out)
}

fn write_object<W: Write>(
    out: &mut W,
    object: &Map<String, Value>,
    depth: usize,
    use_color: bool,
) -> io::Result<()> {
    if object.is_empty() {
        return write!(out, "{{}}");
    }
    writeln!(out, "{{")?;
    for (i, (key, item)) in object.iter().enumerate() {
        write_indent(out, depth + 1)?;
        let key = Value::String(key.clone()).to_string();
        if use_color {
            write!(out, "{}: ", style(key).yellow())?;
        } else {
            write!(out, "{key}: ")?;
        }
        write_value(out, item, depth + 1, use_color)?;
        if i + 1 < object.len() {
            write!(out, ",")?;
        }
        writeln!(out)?;
    }
    write_indent(out, depth)?;
    write!(out, "}}")
}

fn write_value<W: Write>(
    out: &mut W,
    value: &Value,
    depth: usize,
    use_color: bool,
) -> io::Result<()> {
    match value {
        Value::Object(object) => write_object(out, object, depth, use_color),
        Value::Array(items) if items.is_empty() => write!(out, "[]"),
        Value::Array(items) => {
            writeln!(out, "[")?;
            for (i, item) in items.iter().enumerate() {
                write_indent(out, depth + 1)?;
                write_value(out, item, depth + 1, use_color)?;
                if i + 1 < items.len() {
                    write!(out, ",")?;
                }
                writeln!(out)?;
            }
            write_indent(out, depth)?;
            write!(out, "]")
        }
        scalar => write_scalar(out, scalar, use_color),
    }
}

fn write_scalar<W: Write>(out: &mut W, value: &Value, use_color: bool) -> io::Result<()> {
    let text = value.to_string();
    if !use_color {
        return write!(out, "{text}");
    }
    match value {
        Value::String(_) => write!(out, "{}", style(text).green()),
        Value::Number(_) => write!(out, "{}", style(text).magenta()),
        Value::Bool(_) => write!(out, "{}", style(text).blue()),
        _ => write!(out, "{}", style(text).red()),
    }
}

fn write_indent<W: Write>(out: &mut W, depth: usize) -> io::Result<()> {
    for _ in 0..depth {
        out.write_all(INDENT.as_bytes())?;
    }
    Ok(())
}
