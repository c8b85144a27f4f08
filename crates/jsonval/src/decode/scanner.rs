use core::fmt;

use crate::error::{Error, Result};
use crate::number::is_number_literal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    ArrayOpen,
    ArrayClose,
    ObjectOpen,
    ObjectClose,
    Colon,
    Comma,
    /// Raw literal including both quotes; escapes are still encoded.
    String(&'a str),
    /// Raw literal, already checked against the number grammar.
    Number(&'a str),
    True,
    False,
    Null,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::ArrayOpen => f.write_str("`[`"),
            Token::ArrayClose => f.write_str("`]`"),
            Token::ObjectOpen => f.write_str("`{`"),
            Token::ObjectClose => f.write_str("`}`"),
            Token::Colon => f.write_str("`:`"),
            Token::Comma => f.write_str("`,`"),
            Token::String(s) => write!(f, "string {s}"),
            Token::Number(n) => write!(f, "number `{n}`"),
            Token::True => f.write_str("`true`"),
            Token::False => f.write_str("`false`"),
            Token::Null => f.write_str("`null`"),
        }
    }
}

/// A token with the 1-based line and column of its first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spanned<'a> {
    pub token: Token<'a>,
    pub line: usize,
    pub column: usize,
}

pub fn scan(input: &str) -> Result<Vec<Spanned<'_>>> {
    iter(input).collect()
}

pub fn iter(input: &str) -> Scanner<'_> {
    Scanner {
        input,
        pos: 0,
        line: 1,
        line_start: 0,
    }
}

/// Splits input into classified tokens. Stops after the first error.
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    line_start: usize,
}

impl<'a> Scanner<'a> {
    /// Position of the next unread character.
    pub fn position(&self) -> (usize, usize) {
        (self.line, self.column_at(self.pos))
    }

    fn column_at(&self, pos: usize) -> usize {
        self.input[self.line_start..pos].chars().count() + 1
    }

    fn skip_whitespace(&mut self) {
        let b = self.input.as_bytes();
        while self.pos < b.len() {
            match b[self.pos] {
                b' ' | b'\t' | b'\r' => self.pos += 1,
                b'\n' => {
                    self.pos += 1;
                    self.line += 1;
                    self.line_start = self.pos;
                }
                _ => break,
            }
        }
    }

    fn fail(&mut self, at: usize, message: String) -> Error {
        let column = self.column_at(at);
        self.pos = self.input.len();
        Error::syntax(self.line, column, message)
    }

    fn scan_string(&mut self, start: usize) -> Result<Token<'a>> {
        let Some(end) = find_closing_quote(self.input.as_bytes(), start + 1) else {
            return Err(self.fail(start, "unterminated string literal".to_string()));
        };
        let raw = &self.input[start..=end];
        // Raw newlines are accepted inside literals; keep positions honest.
        if let Some(nl) = raw.rfind('\n') {
            self.line += raw.matches('\n').count();
            self.line_start = start + nl + 1;
        }
        self.pos = end + 1;
        Ok(Token::String(raw))
    }

    fn scan_while(&mut self, start: usize, pred: impl Fn(u8) -> bool) -> &'a str {
        let b = self.input.as_bytes();
        let mut end = start;
        while end < b.len() && pred(b[end]) {
            end += 1;
        }
        self.pos = end;
        &self.input[start..end]
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Spanned<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();
        let start = self.pos;
        let first = *self.input.as_bytes().get(start)?;
        let (line, column) = (self.line, self.column_at(start));
        let token = match first {
            b'[' | b']' | b'{' | b'}' | b':' | b',' => {
                self.pos += 1;
                match first {
                    b'[' => Token::ArrayOpen,
                    b']' => Token::ArrayClose,
                    b'{' => Token::ObjectOpen,
                    b'}' => Token::ObjectClose,
                    b':' => Token::Colon,
                    _ => Token::Comma,
                }
            }
            b'"' => match self.scan_string(start) {
                Ok(t) => t,
                Err(e) => return Some(Err(e)),
            },
            b'-' | b'0'..=b'9' => {
                let text = self.scan_while(start, |c| {
                    c.is_ascii_digit() || matches!(c, b'-' | b'+' | b'.' | b'e' | b'E')
                });
                if !is_number_literal(text) {
                    return Some(Err(self.fail(start, format!("invalid number `{text}`"))));
                }
                Token::Number(text)
            }
            c if c.is_ascii_alphabetic() => {
                let word = self.scan_while(start, |c| c.is_ascii_alphanumeric() || c == b'_');
                match word {
                    "true" => Token::True,
                    "false" => Token::False,
                    "null" => Token::Null,
                    _ => {
                        return Some(Err(self.fail(start, format!("unrecognized literal `{word}`"))));
                    }
                }
            }
            _ => {
                let ch = self.input[start..].chars().next().unwrap_or('\u{FFFD}');
                return Some(Err(self.fail(start, format!("unexpected character `{ch}`"))));
            }
        };
        Some(Ok(Spanned {
            token,
            line,
            column,
        }))
    }
}

/// Index of the quote closing a literal whose body starts at `from`.
#[cfg(not(feature = "perf_memchr"))]
fn find_closing_quote(b: &[u8], from: usize) -> Option<usize> {
    let mut escape = false;
    for (i, &ch) in b.iter().enumerate().skip(from) {
        if escape {
            escape = false;
            continue;
        }
        match ch {
            b'\\' => escape = true,
            b'"' => return Some(i),
            _ => {}
        }
    }
    None
}

#[cfg(feature = "perf_memchr")]
fn find_closing_quote(b: &[u8], from: usize) -> Option<usize> {
    let mut i = from;
    while i < b.len() {
        let idx = i + memchr::memchr2(b'"', b'\\', &b[i..])?;
        match b[idx] {
            b'"' => return Some(idx),
            // skip the escaped byte; escapes never hide a multi-byte quote
            _ => i = idx + 2,
        }
    }
    None
}
