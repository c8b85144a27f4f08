use jsonval::decode::scanner::{Spanned, Token, iter, scan};

fn at(token: Token<'_>, line: usize, column: usize) -> Spanned<'_> {
    Spanned {
        token,
        line,
        column,
    }
}

#[test]
fn scan_tokens_with_positions() -> Result<(), Box<dyn std::error::Error>> {
    let tokens = scan("{\"k\": [1, -2.5e3, true]}\n null")?;
    assert_eq!(
        tokens,
        vec![
            at(Token::ObjectOpen, 1, 1),
            at(Token::String("\"k\""), 1, 2),
            at(Token::Colon, 1, 5),
            at(Token::ArrayOpen, 1, 7),
            at(Token::Number("1"), 1, 8),
            at(Token::Comma, 1, 9),
            at(Token::Number("-2.5e3"), 1, 11),
            at(Token::Comma, 1, 17),
            at(Token::True, 1, 19),
            at(Token::ArrayClose, 1, 23),
            at(Token::ObjectClose, 1, 24),
            at(Token::Null, 2, 2),
        ]
    );
    Ok(())
}

#[test]
fn string_tokens_stay_raw() -> Result<(), Box<dyn std::error::Error>> {
    let tokens = scan(r#""a\"b" "c\\""#)?;
    assert_eq!(tokens[0].token, Token::String(r#""a\"b""#));
    assert_eq!(tokens[1].token, Token::String(r#""c\\""#));
    assert_eq!(tokens[1].column, 8);
    Ok(())
}

#[test]
fn columns_count_characters() -> Result<(), Box<dyn std::error::Error>> {
    let tokens = scan("\"é\" null")?;
    assert_eq!(tokens[1], at(Token::Null, 1, 5));
    Ok(())
}

#[test]
fn words_must_be_exact_literals() {
    let err = scan("truex").unwrap_err();
    assert_eq!(err.position(), Some((1, 1)));
    assert!(err.to_string().contains("unrecognized literal `truex`"));
    assert!(scan("False").is_err());
}

#[test]
fn scanner_stops_after_first_error() {
    let mut tokens = iter("[ @ 1");
    assert!(matches!(tokens.next(), Some(Ok(Spanned { token: Token::ArrayOpen, .. }))));
    let err = tokens.next();
    assert!(matches!(err, Some(Err(_))));
    assert!(tokens.next().is_none());
}

#[test]
fn empty_and_blank_input_yield_nothing() -> Result<(), Box<dyn std::error::Error>> {
    assert!(scan("")?.is_empty());
    assert!(scan(" \r\n\t")?.is_empty());
    Ok(())
}

#[test]
fn position_tracks_consumption() {
    let mut tokens = iter("[\n  1");
    assert_eq!(tokens.position(), (1, 1));
    tokens.next();
    tokens.next();
    assert_eq!(tokens.position(), (2, 4));
}
