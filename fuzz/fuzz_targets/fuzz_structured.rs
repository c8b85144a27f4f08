#![no_main]
use libfuzzer_sys::{arbitrary, fuzz_target};
use jsonval::{Array, Object, Options, Value, decode_from_str, encode_to_string};
use arbitrary::Arbitrary;

const MAX_DEPTH: usize = 8;
const MAX_ARRAY_SIZE: usize = 20;
const MAX_OBJECT_SIZE: usize = 20;

#[derive(Arbitrary, Debug)]
struct FuzzValue {
    choice: u8,
}

impl FuzzValue {
    fn to_value(&self, u: &mut arbitrary::Unstructured, depth: usize) -> arbitrary::Result<Value> {
        if depth >= MAX_DEPTH {
            return Ok(Value::Null);
        }

        Ok(match self.choice % 10 {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => Value::Integer(u.arbitrary()?),
            3 => {
                let n: f64 = u.arbitrary()?;
                if n.is_finite() { Value::Float(n) } else { Value::Null }
            }
            4 => Value::String(u.arbitrary()?),
            5..=7 => {
                let size = u.int_in_range(0..=MAX_ARRAY_SIZE)?;
                let mut arr = Array::with_capacity(size);
                for _ in 0..size {
                    let fv: FuzzValue = u.arbitrary()?;
                    arr.push(fv.to_value(u, depth + 1)?);
                }
                Value::Array(arr)
            }
            _ => {
                let size = u.int_in_range(0..=MAX_OBJECT_SIZE)?;
                let mut obj = Object::new();
                for _ in 0..size {
                    let key: String = u.arbitrary()?;
                    let fv: FuzzValue = u.arbitrary()?;
                    obj.insert(key, fv.to_value(u, depth + 1)?);
                }
                Value::Object(obj)
            }
        })
    }
}

fuzz_target!(|data: &[u8]| {
    let mut u = arbitrary::Unstructured::new(data);

    if let Ok(fv) = u.arbitrary::<FuzzValue>() {
        if let Ok(value) = fv.to_value(&mut u, 0) {
            let opts = Options::default();
            let rendered = encode_to_string(&value, &opts);

            // order must agree with equality
            let copy = value.clone();
            assert_eq!(copy.cmp(&value), std::cmp::Ordering::Equal);

            match decode_from_str(&rendered, &opts) {
                Ok(decoded) => {
                    if value != decoded {
                        panic!(
                            "Structured roundtrip mismatch!\nOriginal: {:?}\nRendered: {}\nDecoded: {:?}",
                            value, rendered, decoded
                        );
                    }
                }
                Err(e) => {
                    panic!(
                        "Failed to parse structured input!\nOriginal: {:?}\nRendered: {}\nError: {}",
                        value, rendered, e
                    );
                }
            }
        }
    }
});
