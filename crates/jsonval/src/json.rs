//! Conversions between [`Value`] and `serde_json::Value`.

use serde_json::Value as JsonValue;

use crate::value::Value;

impl From<JsonValue> for Value {
    fn from(v: JsonValue) -> Self {
        match v {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => n.as_f64().map_or(Value::Null, Value::Float),
            },
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(a) => Value::Array(a.into_iter().map(Value::from).collect()),
            JsonValue::Object(m) => Value::Object(
                m.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for JsonValue {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(b),
            Value::Integer(i) => JsonValue::from(i),
            Value::Float(f) => {
                serde_json::Number::from_f64(f).map_or(JsonValue::Null, JsonValue::Number)
            }
            Value::String(s) => JsonValue::String(s),
            Value::Array(a) => JsonValue::Array(a.into_iter().map(JsonValue::from).collect()),
            Value::Object(o) => JsonValue::Object(
                o.into_iter()
                    .map(|(k, v)| (k, JsonValue::from(v)))
                    .collect(),
            ),
        }
    }
}
