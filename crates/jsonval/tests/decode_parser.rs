use jsonval::decode::parser::{Parser, parse};
use jsonval::decode::scanner;
use jsonval::{Error, Options, Value};

fn syntax_error(input: &str) -> (usize, usize, String) {
    syntax_error_with(input, &Options::default())
}

fn syntax_error_with(input: &str, options: &Options) -> (usize, usize, String) {
    match parse(input, options) {
        Err(Error::Syntax {
            line,
            column,
            message,
        }) => (line, column, message),
        other => panic!("expected a syntax error for {input:?}, got {other:?}"),
    }
}

#[test]
fn parse_scalars() -> Result<(), Box<dyn std::error::Error>> {
    let options = Options::default();
    assert_eq!(parse("null", &options)?, Value::Null);
    assert_eq!(parse(" true ", &options)?, Value::Bool(true));
    assert_eq!(parse("false", &options)?, Value::Bool(false));
    assert_eq!(parse("42", &options)?, Value::Integer(42));
    assert_eq!(parse("-7", &options)?, Value::Integer(-7));
    assert_eq!(parse("48.2", &options)?, Value::Float(48.2));
    assert_eq!(parse("1.0", &options)?, Value::Float(1.0));
    assert_eq!(parse("2e3", &options)?, Value::Float(2000.0));
    assert_eq!(parse("\"Dave\"", &options)?, Value::from("Dave"));
    Ok(())
}

#[test]
fn parse_integer_edges() -> Result<(), Box<dyn std::error::Error>> {
    let options = Options::default();
    assert_eq!(
        parse("-9223372036854775808", &options)?,
        Value::Integer(i64::MIN)
    );
    assert_eq!(
        parse("9223372036854775807", &options)?,
        Value::Integer(i64::MAX)
    );
    assert_eq!(
        parse("9223372036854775808", &options)?,
        Value::Float(9_223_372_036_854_775_808.0)
    );
    Ok(())
}

#[test]
fn parse_containers() -> Result<(), Box<dyn std::error::Error>> {
    let options = Options::default();
    let v = parse(
        "{\n  \"b\": [1, 2.5, \"x\", null],\n  \"a\": {\"nested\": []},\n  \"c\": {}\n}",
        &options,
    )?;
    let obj = v.as_object().ok_or("object")?;
    assert_eq!(obj.keys().collect::<Vec<_>>(), ["a", "b", "c"]);
    assert_eq!(
        v.get("b"),
        Some(&Value::from(vec![
            Value::from(1),
            Value::from(2.5),
            Value::from("x"),
            Value::Null
        ]))
    );
    assert_eq!(
        v.get("a").and_then(|a| a.get("nested")),
        Some(&Value::from(jsonval::Array::new()))
    );
    assert_eq!(v.get("c"), Some(&Value::from(jsonval::Object::new())));
    Ok(())
}

#[test]
fn duplicate_keys_keep_the_last_value() -> Result<(), Box<dyn std::error::Error>> {
    let v = parse(r#"{"a": 1, "b": 2, "a": 3}"#, &Options::default())?;
    assert_eq!(v.get("a"), Some(&Value::from(3)));
    assert_eq!(v.as_object().map(|o| o.len()), Some(2));
    Ok(())
}

#[test]
fn string_escapes_decode() -> Result<(), Box<dyn std::error::Error>> {
    let options = Options::default();
    let v = parse(r#""q\" b\\ s\/ \b\f\n\r\t""#, &options)?;
    assert_eq!(v, Value::from("q\" b\\ s/ \u{8}\u{c}\n\r\t"));
    assert_eq!(parse(r#""éA""#, &options)?, Value::from("éA"));
    assert_eq!(parse(r#""😀""#, &options)?, Value::from("😀"));
    // Raw control characters are taken as-is.
    assert_eq!(parse("\"a\tb\"", &options)?, Value::from("a\tb"));
    Ok(())
}

#[test]
fn trailing_comma_in_array() {
    let (line, column, message) = syntax_error("[1, 2,]");
    assert_eq!((line, column), (1, 7));
    assert_eq!(message, "expected a value, found `]`");
}

#[test]
fn trailing_comma_in_object() {
    let (line, column, message) = syntax_error(r#"{"a":1,}"#);
    assert_eq!((line, column), (1, 8));
    assert_eq!(message, "expected a string key, found `}`");
}

#[test]
fn non_string_key() {
    let (_, column, message) = syntax_error("{1: 2}");
    assert_eq!(column, 2);
    assert_eq!(message, "expected a string key, found number `1`");
}

#[test]
fn missing_colon() {
    let (line, column, message) = syntax_error(r#"{"a" 1}"#);
    assert_eq!((line, column), (1, 6));
    assert_eq!(message, "expected `:`, found number `1`");
}

#[test]
fn mismatched_and_unterminated_brackets() {
    let (_, column, message) = syntax_error("[1}");
    assert_eq!(column, 3);
    assert_eq!(message, "expected `,` or `]`, found `}`");

    let (_, column, message) = syntax_error(r#"{"a": 1]"#);
    assert_eq!(column, 8);
    assert_eq!(message, "expected `,` or `}`, found `]`");

    let (line, column, message) = syntax_error("[1, 2");
    assert_eq!((line, column), (1, 6));
    assert_eq!(message, "unexpected end of input, expected `,` or `]`");

    let (_, _, message) = syntax_error("]");
    assert_eq!(message, "expected a value, found `]`");
}

#[test]
fn trailing_content() {
    let (line, column, message) = syntax_error("[1] 2");
    assert_eq!((line, column), (1, 5));
    assert_eq!(message, "unexpected number `2` after the top-level value");
}

#[test]
fn empty_input() {
    for input in ["", "   \n\t "] {
        let (_, _, message) = syntax_error(input);
        assert_eq!(message, "unexpected end of input, expected a value");
    }
    assert_eq!(syntax_error("").0, 1);
}

#[test]
fn bad_literals() {
    let (_, column, message) = syntax_error("[tru]");
    assert_eq!(column, 2);
    assert_eq!(message, "unrecognized literal `tru`");

    let (_, _, message) = syntax_error("01");
    assert_eq!(message, "invalid number `01`");

    let (_, _, message) = syntax_error("-");
    assert_eq!(message, "invalid number `-`");

    let (_, _, message) = syntax_error("1e400");
    assert_eq!(message, "number `1e400` is out of range");

    let (_, column, message) = syntax_error("[1, @]");
    assert_eq!(column, 5);
    assert_eq!(message, "unexpected character `@`");
}

#[test]
fn bad_strings() {
    let (_, column, message) = syntax_error(r#""a\qb""#);
    assert_eq!(column, 3);
    assert_eq!(message, "unrecognized escape `\\q`");

    let (_, _, message) = syntax_error(r#""\ud83d""#);
    assert_eq!(message, "unpaired surrogate in `\\u` escape");

    let (_, _, message) = syntax_error(r#""\u12""#);
    assert_eq!(message, "`\\u` needs four hex digits");

    let (_, column, message) = syntax_error("[\"abc");
    assert_eq!(column, 2);
    assert_eq!(message, "unterminated string literal");
}

#[test]
fn positions_span_lines() {
    let (line, column, _) = syntax_error("[\n  1,\n  ]");
    assert_eq!((line, column), (3, 3));

    // a newline inside a string literal still advances the line count
    let (line, column, message) = syntax_error("\"a\nb\" x");
    assert_eq!((line, column), (2, 4));
    assert_eq!(message, "unrecognized literal `x`");
}

#[test]
fn positions_after_multiline_string_literals() {
    let (line, column, message) = syntax_error("[\"a\nbc\"");
    assert_eq!((line, column), (2, 4));
    assert_eq!(message, "unexpected end of input, expected `,` or `]`");

    let (line, column, message) = syntax_error("[\"a\nb\\q\"]");
    assert_eq!((line, column), (2, 2));
    assert_eq!(message, "unrecognized escape `\\q`");
}

#[test]
fn depth_limit() -> Result<(), Box<dyn std::error::Error>> {
    let options = Options {
        max_depth: 2,
        ..Options::default()
    };
    assert_eq!(parse("[[1]]", &options)?, Value::from(vec![vec![1]]));
    let (line, column, message) = syntax_error_with("[[[1]]]", &options);
    assert_eq!((line, column), (1, 3));
    assert_eq!(message, "nesting exceeds the maximum depth of 2");

    let deep = "[".repeat(200) + &"]".repeat(200);
    let (_, _, message) = syntax_error(&deep);
    assert_eq!(message, "nesting exceeds the maximum depth of 128");
    Ok(())
}

#[test]
fn parser_over_custom_token_stream() -> Result<(), Box<dyn std::error::Error>> {
    let tokens = scanner::scan("[1, 2, 3]")?;
    let filtered = tokens
        .into_iter()
        .filter(|t| !matches!(t.token, scanner::Token::Number("2")))
        .collect::<Vec<_>>();
    // dropping `2` leaves `[1, , 3]`
    let err = Parser::from_tokens(filtered.into_iter().map(Ok), &Options::default())
        .parse_document()
        .unwrap_err();
    assert_eq!(err.position(), Some((1, 6)));
    Ok(())
}

#[test]
fn decode_entry_points_agree() -> Result<(), Box<dyn std::error::Error>> {
    let text = r#"{"k": [true, 1.5]}"#;
    let options = Options::default();
    let a = jsonval::decode_from_str(text, &options)?;
    let b = jsonval::decode_from_reader(text.as_bytes(), &options)?;
    let c: Value = text.parse()?;
    assert_eq!(a, b);
    assert_eq!(a, c);
    Ok(())
}
