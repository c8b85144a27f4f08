use jsonval::{Array, Object, Options, Value};

fn corpus() -> Vec<Value> {
    let mut me = Object::new();
    me.insert("first", "Dave");
    me.insert("age", 48.2);
    me.insert("registered", true);
    me.insert("catchphrase", ());
    me.insert("interests", vec!["Reading", "Biking"]);
    me.insert("zip code", 12345);

    let mut weird = Object::new();
    weird.insert("", "empty key");
    weird.insert("quo\"te", "back\\slash");
    weird.insert("ctl", "\u{8}\u{c}\n\r\t");
    weird.insert("slash/", "a/b");
    weird.insert("uni", "héllo 😀 \u{1}");

    vec![
        Value::Null,
        Value::from(true),
        Value::from(i64::MIN),
        Value::from(i64::MAX),
        Value::from(0.1),
        Value::from(-0.0),
        Value::from(1.0),
        Value::from(1e21),
        Value::from(5e-324),
        Value::from(f64::MAX),
        Value::from(""),
        Value::from(Array::new()),
        Value::from(Object::new()),
        Value::from(me),
        Value::from(weird),
        Value::from(vec![
            Value::from(vec![Value::from(vec![Value::Null])]),
            Value::from(Object::new()),
        ]),
    ]
}

#[test]
fn render_then_parse_is_identity() -> Result<(), Box<dyn std::error::Error>> {
    for escape_solidus in [true, false] {
        let options = Options {
            escape_solidus,
            ..Options::default()
        };
        for value in corpus() {
            let text = jsonval::encode_to_string(&value, &options);
            let back = jsonval::decode_from_str(&text, &options)?;
            assert_eq!(back, value, "{text}");
            assert_eq!(back.kind(), value.kind());
        }
    }
    Ok(())
}

#[test]
fn canonical_text_is_a_fixed_point() -> Result<(), Box<dyn std::error::Error>> {
    let options = Options::default();
    let input = "{\"b\":[1,2.50,\"\\u0041\"],\n \"a\" : {\"x\":null}, \"c\":1E2}";
    let first = jsonval::encode_to_string(&jsonval::decode_from_str(input, &options)?, &options);
    assert_eq!(
        first,
        r#"{ "a": { "x": null }, "b": [ 1, 2.5, "A" ], "c": 100.0 }"#
    );
    let second = jsonval::encode_to_string(&jsonval::decode_from_str(&first, &options)?, &options);
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn non_finite_floats_do_not_survive() -> Result<(), Box<dyn std::error::Error>> {
    let v = Value::from(vec![f64::NAN, f64::INFINITY]);
    let back: Value = v.to_string().parse()?;
    assert_eq!(back, Value::from(vec![Value::Null, Value::Null]));
    Ok(())
}

#[test]
fn random_trees_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn gen_value(rng: &mut StdRng, depth: usize) -> Value {
        let pick = if depth == 0 { rng.random_range(0..5) } else { rng.random_range(0..7) };
        match pick {
            0 => Value::Null,
            1 => Value::from(rng.random_bool(0.5)),
            2 => Value::from(rng.random::<i64>()),
            3 => Value::from(rng.random_range(-1e6..1e6)),
            4 => {
                let len = rng.random_range(0..8);
                (0..len)
                    .map(|_| char::from_u32(rng.random_range(1..0x800)).unwrap_or('?'))
                    .collect::<String>()
                    .into()
            }
            5 => Value::Array(
                (0..rng.random_range(0..5))
                    .map(|_| gen_value(rng, depth - 1))
                    .collect(),
            ),
            _ => Value::Object(
                (0..rng.random_range(0..5))
                    .map(|i| (format!("k{i}/{}", rng.random_range(0..3)), gen_value(rng, depth - 1)))
                    .collect(),
            ),
        }
    }

    let mut rng = StdRng::seed_from_u64(0x5eed);
    let options = Options::default();
    for _ in 0..200 {
        let value = gen_value(&mut rng, 4);
        let text = jsonval::encode_to_string(&value, &options);
        assert_eq!(jsonval::decode_from_str(&text, &options)?, value, "{text}");
    }
    Ok(())
}
