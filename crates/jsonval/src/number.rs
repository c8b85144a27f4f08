use crate::value::Value;

/// Shortest round-trip decimal text for a finite f64.
///
/// Integral values keep a `.0` (or an exponent) so the text reads back as a
/// float rather than an integer. Non-finite values have no JSON spelling and
/// are written as `null`.
pub(crate) fn format_f64(buf: &mut ryu::Buffer, value: f64) -> &str {
    if !value.is_finite() {
        return "null";
    }
    buf.format_finite(value)
}

/// Checks a number token against
/// `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`.
pub(crate) fn is_number_literal(token: &str) -> bool {
    let b = token.as_bytes();
    let mut i = 0usize;
    if b.first() == Some(&b'-') {
        i += 1;
    }
    match b.get(i) {
        Some(b'0') => i += 1,
        Some(b'1'..=b'9') => i = skip_digits(b, i),
        _ => return false,
    }
    if b.get(i) == Some(&b'.') {
        let start = i + 1;
        i = skip_digits(b, start);
        if i == start {
            return false;
        }
    }
    if matches!(b.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(b.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let start = i;
        i = skip_digits(b, start);
        if i == start {
            return false;
        }
    }
    i == b.len()
}

fn skip_digits(b: &[u8], mut i: usize) -> usize {
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    i
}

/// Converts a validated number literal. A fraction or exponent makes a
/// float; otherwise an integer, widening to float past the i64 range.
/// Returns `None` when the magnitude overflows f64.
pub(crate) fn parse_number_literal(token: &str) -> Option<Value> {
    let is_float = token.bytes().any(|c| matches!(c, b'.' | b'e' | b'E'));
    if !is_float {
        if let Ok(i) = token.parse::<i64>() {
            return Some(Value::Integer(i));
        }
    }
    match token.parse::<f64>() {
        Ok(f) if f.is_finite() => Some(Value::Float(f)),
        _ => None,
    }
}
