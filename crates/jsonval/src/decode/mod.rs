//! Decoding pipeline: scanner (tokens) -> parser (values)

pub mod parser;
pub mod scanner;
pub mod unescape;

use std::io::Read;

use crate::{Result, options::Options, value::Value};

pub fn decode_from_str(s: &str, options: &Options) -> Result<Value> {
    parser::parse(s, options)
}

pub fn decode_from_reader<R: Read>(mut reader: R, options: &Options) -> Result<Value> {
    let mut s = String::new();
    reader.read_to_string(&mut s)?;
    decode_from_str(&s, options)
}
