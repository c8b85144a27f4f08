use core::fmt::{self, Write};

use crate::number::format_f64;

/// Characters that get a two-character escape, paired with the escape
/// letter. `/` is handled separately because it is optional.
const ESCAPES: [(char, char); 7] = [
    ('\\', '\\'),
    ('"', '"'),
    ('\u{0008}', 'b'),
    ('\u{000C}', 'f'),
    ('\n', 'n'),
    ('\r', 'r'),
    ('\t', 't'),
];

pub fn escape_for(c: char, escape_solidus: bool) -> Option<char> {
    if c == '/' {
        return escape_solidus.then_some('/');
    }
    ESCAPES
        .iter()
        .find_map(|&(raw, letter)| (raw == c).then_some(letter))
}

/// Writes `s` in double quotes with `\\ \" \/ \b \f \n \r \t` escaped.
/// Everything else, control characters included, passes through as is.
pub fn escape_and_quote_into<W: Write>(out: &mut W, s: &str, escape_solidus: bool) -> fmt::Result {
    out.write_char('"')?;
    let mut start = 0usize;
    for (idx, ch) in s.char_indices() {
        if let Some(letter) = escape_for(ch, escape_solidus) {
            out.write_str(&s[start..idx])?;
            out.write_char('\\')?;
            out.write_char(letter)?;
            start = idx + ch.len_utf8();
        }
    }
    out.write_str(&s[start..])?;
    out.write_char('"')
}

pub fn escape_and_quote(s: &str, escape_solidus: bool) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    let _ = escape_and_quote_into(&mut out, s, escape_solidus);
    out
}

pub fn write_f64<W: Write>(out: &mut W, f: f64) -> fmt::Result {
    let mut buf = ryu::Buffer::new();
    out.write_str(format_f64(&mut buf, f))
}

pub fn format_bool(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}

pub fn format_null() -> &'static str {
    "null"
}
