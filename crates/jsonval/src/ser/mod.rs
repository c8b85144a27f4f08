//! Serde encoding helpers: `Serialize for Value` and conversion of any
//! `Serialize` type into a [`Value`] tree.

use serde::{Serialize, Serializer};

use crate::{Result, options::Options, value::Value};

mod value_builder;

pub use value_builder::ValueSerializer;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(a) => serializer.collect_seq(a),
            Value::Object(o) => serializer.collect_map(o),
        }
    }
}

pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}

pub fn to_string<T: Serialize + ?Sized>(value: &T, options: &Options) -> Result<String> {
    let v = to_value(value)?;
    Ok(crate::encode::encode_to_string(&v, options))
}

pub fn to_writer<W: std::io::Write, T: Serialize + ?Sized>(
    writer: W,
    value: &T,
    options: &Options,
) -> Result<()> {
    let v = to_value(value)?;
    crate::encode::encode_to_writer(writer, &v, options)
}
