//! Canonical text rendering.
//!
//! The renderer walks the tree depth-first and writes straight into the
//! caller's sink: `[ a, b ]` for arrays, `{ "k": v }` for objects, `[ ]`
//! and `{ }` when empty.

pub mod primitives;
pub mod writer;

use core::fmt::{self, Write};
use std::io;

use crate::{Result, options::Options, value::Value};

pub fn render<W: Write>(value: &Value, out: &mut W, options: &Options) -> fmt::Result {
    match value {
        Value::Null => out.write_str(primitives::format_null()),
        Value::Bool(b) => out.write_str(primitives::format_bool(*b)),
        Value::Integer(i) => write!(out, "{i}"),
        Value::Float(f) => primitives::write_f64(out, *f),
        Value::String(s) => primitives::escape_and_quote_into(out, s, options.escape_solidus),
        Value::Array(items) => {
            if items.is_empty() {
                return out.write_str("[ ]");
            }
            let mut prefix = "[ ";
            for item in items {
                out.write_str(prefix)?;
                render(item, out, options)?;
                prefix = ", ";
            }
            out.write_str(" ]")
        }
        Value::Object(obj) => {
            if obj.is_empty() {
                return out.write_str("{ }");
            }
            let mut prefix = "{ ";
            for (key, item) in obj {
                out.write_str(prefix)?;
                primitives::escape_and_quote_into(out, key, options.escape_solidus)?;
                out.write_str(": ")?;
                render(item, out, options)?;
                prefix = ", ";
            }
            out.write_str(" }")
        }
    }
}

pub fn encode_to_string(value: &Value, options: &Options) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = render(value, &mut out, options);
    out
}

/// Streams the rendering into `writer`. Each fragment is written as it is
/// produced, so wrap unbuffered sinks in a `BufWriter`.
pub fn encode_to_writer<W: io::Write>(writer: W, value: &Value, options: &Options) -> Result<()> {
    let mut w = writer::IoWriter::new(writer);
    if render(value, &mut w, options).is_err() {
        let err = w
            .take_error()
            .unwrap_or_else(|| io::Error::other("formatter error"));
        return Err(err.into());
    }
    Ok(())
}
