#![doc = include_str!("../README.md")]

pub mod array;
pub mod decode;
pub mod encode;
pub mod error;
pub mod object;
pub mod options;
pub mod value;

mod number;

#[cfg(feature = "serde")]
pub mod de;
#[cfg(feature = "serde")]
pub mod ser;

#[cfg(feature = "json")]
mod json;

pub use crate::array::Array;
pub use crate::error::{Error, Result};
pub use crate::object::Object;
pub use crate::options::Options;
pub use crate::value::{Kind, Value};

use std::io::{Read, Write};

/// Canonical text of `value`.
pub fn encode_to_string(value: &Value, options: &Options) -> String {
    crate::encode::encode_to_string(value, options)
}

/// Streams the canonical text of `value` into `writer`.
pub fn encode_to_writer<W: Write>(writer: W, value: &Value, options: &Options) -> Result<()> {
    crate::encode::encode_to_writer(writer, value, options)
}

/// Parses exactly one value from `s`.
pub fn decode_from_str(s: &str, options: &Options) -> Result<Value> {
    crate::decode::decode_from_str(s, options)
}

/// Reads `reader` to the end and parses exactly one value from it.
pub fn decode_from_reader<R: Read>(reader: R, options: &Options) -> Result<Value> {
    crate::decode::decode_from_reader(reader, options)
}
