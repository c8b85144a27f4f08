use core::iter::Peekable;

use tracing::trace;

use crate::array::Array;
use crate::decode::scanner::{self, Scanner, Spanned, Token};
use crate::decode::unescape::unescape;
use crate::error::{Error, Result};
use crate::number::parse_number_literal;
use crate::object::Object;
use crate::options::Options;
use crate::value::Value;

/// Recursive-descent parser over a stream of classified tokens.
///
/// Any iterator of `Result<Spanned>` can drive it; [`Parser::new`] wires up
/// the built-in [`Scanner`].
pub struct Parser<'a, I>
where
    I: Iterator<Item = Result<Spanned<'a>>>,
{
    tokens: Peekable<I>,
    max_depth: usize,
    depth: usize,
    /// Position just past the last consumed token, for end-of-input errors.
    end: (usize, usize),
}

impl<'a> Parser<'a, Scanner<'a>> {
    pub fn new(input: &'a str, options: &Options) -> Self {
        Self::from_tokens(scanner::iter(input), options)
    }
}

impl<'a, I> Parser<'a, I>
where
    I: Iterator<Item = Result<Spanned<'a>>>,
{
    pub fn from_tokens(tokens: I, options: &Options) -> Self {
        Self {
            tokens: tokens.peekable(),
            max_depth: options.max_depth,
            depth: 0,
            end: (1, 1),
        }
    }

    /// Parses exactly one value and requires the input to end after it.
    pub fn parse_document(&mut self) -> Result<Value> {
        let value = self.parse_value()?;
        if let Some(extra) = self.next_token()? {
            return Err(at(
                extra,
                format!("unexpected {} after the top-level value", extra.token),
            ));
        }
        Ok(value)
    }

    pub fn parse_value(&mut self) -> Result<Value> {
        let tok = self.expect_token("a value")?;
        match tok.token {
            Token::ArrayOpen => self.parse_array(tok),
            Token::ObjectOpen => self.parse_object(tok),
            Token::String(raw) => parse_string(tok, raw).map(Value::String),
            Token::Number(text) => parse_number_literal(text)
                .ok_or_else(|| at(tok, format!("number `{text}` is out of range"))),
            Token::True => Ok(Value::Bool(true)),
            Token::False => Ok(Value::Bool(false)),
            Token::Null => Ok(Value::Null),
            other => Err(at(tok, format!("expected a value, found {other}"))),
        }
    }

    fn parse_array(&mut self, open: Spanned<'a>) -> Result<Value> {
        trace!(line = open.line, column = open.column, "parse array");
        self.enter(open)?;
        let mut arr = Array::new();
        if self.peek_token()? == Some(Token::ArrayClose) {
            self.next_token()?;
        } else {
            loop {
                arr.push(self.parse_value()?);
                let sep = self.expect_token("`,` or `]`")?;
                match sep.token {
                    Token::Comma => continue,
                    Token::ArrayClose => break,
                    other => return Err(at(sep, format!("expected `,` or `]`, found {other}"))),
                }
            }
        }
        self.depth -= 1;
        Ok(Value::Array(arr))
    }

    fn parse_object(&mut self, open: Spanned<'a>) -> Result<Value> {
        trace!(line = open.line, column = open.column, "parse object");
        self.enter(open)?;
        let mut obj = Object::new();
        if self.peek_token()? == Some(Token::ObjectClose) {
            self.next_token()?;
        } else {
            loop {
                let key_tok = self.expect_token("a string key")?;
                let Token::String(raw) = key_tok.token else {
                    return Err(at(
                        key_tok,
                        format!("expected a string key, found {}", key_tok.token),
                    ));
                };
                let key = parse_string(key_tok, raw)?;
                let colon = self.expect_token("`:`")?;
                if colon.token != Token::Colon {
                    return Err(at(colon, format!("expected `:`, found {}", colon.token)));
                }
                let value = self.parse_value()?;
                if obj.insert(key, value).is_some() {
                    trace!(line = key_tok.line, column = key_tok.column, "duplicate key replaced");
                }
                let sep = self.expect_token("`,` or `}`")?;
                match sep.token {
                    Token::Comma => continue,
                    Token::ObjectClose => break,
                    other => return Err(at(sep, format!("expected `,` or `}}`, found {other}"))),
                }
            }
        }
        self.depth -= 1;
        Ok(Value::Object(obj))
    }

    fn enter(&mut self, open: Spanned<'a>) -> Result<()> {
        if self.depth >= self.max_depth {
            return Err(at(
                open,
                format!("nesting exceeds the maximum depth of {}", self.max_depth),
            ));
        }
        self.depth += 1;
        Ok(())
    }

    fn next_token(&mut self) -> Result<Option<Spanned<'a>>> {
        let next = self.tokens.next().transpose()?;
        if let Some(tok) = next {
            self.end = advance((tok.line, tok.column), token_text(tok.token));
        }
        Ok(next)
    }

    fn peek_token(&mut self) -> Result<Option<Token<'a>>> {
        if matches!(self.tokens.peek(), Some(Err(_))) {
            if let Some(Err(e)) = self.tokens.next() {
                return Err(e);
            }
        }
        Ok(self
            .tokens
            .peek()
            .and_then(|r| r.as_ref().ok())
            .map(|s| s.token))
    }

    fn expect_token(&mut self, expected: &str) -> Result<Spanned<'a>> {
        match self.next_token()? {
            Some(tok) => Ok(tok),
            None => {
                let (line, column) = self.end;
                Err(Error::syntax(
                    line,
                    column,
                    format!("unexpected end of input, expected {expected}"),
                ))
            }
        }
    }
}

/// Parses one complete document.
pub fn parse(input: &str, options: &Options) -> Result<Value> {
    Parser::new(input, options).parse_document()
}

fn parse_string(tok: Spanned<'_>, raw: &str) -> Result<String> {
    unescape(raw).map_err(|m| {
        let (line, column) = advance((tok.line, tok.column), &raw[..m.offset]);
        Error::syntax(line, column, m.message)
    })
}

fn token_text<'a>(token: Token<'a>) -> &'a str {
    match token {
        Token::String(s) | Token::Number(s) => s,
        Token::True => "true",
        Token::False => "false",
        Token::Null => "null",
        Token::ArrayOpen => "[",
        Token::ArrayClose => "]",
        Token::ObjectOpen => "{",
        Token::ObjectClose => "}",
        Token::Colon => ":",
        Token::Comma => ",",
    }
}

/// Position reached after reading `text` from `start`. String literals may
/// hold raw newlines, so lines are counted rather than assumed.
fn advance((mut line, mut column): (usize, usize), text: &str) -> (usize, usize) {
    for ch in text.chars() {
        if ch == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    (line, column)
}

fn at(tok: Spanned<'_>, message: String) -> Error {
    Error::syntax(tok.line, tok.column, message)
}
