use core::str::CharIndices;

/// Malformed escape inside a string literal. `offset` is the byte offset of
/// the offending backslash within the literal (opening quote included).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Malformed {
    pub offset: usize,
    pub message: String,
}

/// Decodes a raw string literal (with its quotes) into its text.
///
/// Accepts `\" \\ \/ \b \f \n \r \t` and `\uXXXX`, combining surrogate
/// pairs. Any other escape, a short `\u` sequence or an unpaired surrogate
/// is rejected.
pub fn unescape(literal: &str) -> Result<String, Malformed> {
    let inner = literal
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .ok_or_else(|| Malformed {
            offset: 0,
            message: "string literal must be enclosed in double quotes".to_string(),
        })?;
    if !inner.contains('\\') {
        return Ok(inner.to_string());
    }
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.char_indices();
    while let Some((idx, ch)) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        let malformed = |message: &str| Malformed {
            offset: idx + 1,
            message: message.to_string(),
        };
        let decoded = match chars.next().map(|(_, c)| c) {
            Some('"') => '"',
            Some('\\') => '\\',
            Some('/') => '/',
            Some('b') => '\u{0008}',
            Some('f') => '\u{000C}',
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            Some('u') => {
                let high = read_hex4(&mut chars).ok_or_else(|| malformed("`\\u` needs four hex digits"))?;
                let code = match high {
                    0xD800..=0xDBFF => {
                        let low = match (chars.next(), chars.next()) {
                            (Some((_, '\\')), Some((_, 'u'))) => read_hex4(&mut chars),
                            _ => None,
                        };
                        match low {
                            Some(low @ 0xDC00..=0xDFFF) => {
                                0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00)
                            }
                            _ => return Err(malformed("unpaired surrogate in `\\u` escape")),
                        }
                    }
                    0xDC00..=0xDFFF => return Err(malformed("unpaired surrogate in `\\u` escape")),
                    _ => high,
                };
                char::from_u32(code).ok_or_else(|| malformed("invalid `\\u` code point"))?
            }
            Some(other) => {
                return Err(malformed(&format!("unrecognized escape `\\{other}`")));
            }
            None => return Err(malformed("dangling backslash")),
        };
        out.push(decoded);
    }
    Ok(out)
}

fn read_hex4(chars: &mut CharIndices<'_>) -> Option<u32> {
    let mut code = 0u32;
    for _ in 0..4 {
        let (_, d) = chars.next()?;
        code = (code << 4) | d.to_digit(16)?;
    }
    Some(code)
}
