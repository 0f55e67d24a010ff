//! Parameter value encoding (RFC 6868).

use std::fmt::Display;

/// Encodes a parameter value with RFC 6868 circumflex escapes.
///
/// `^` becomes `^^`, a line break (CRLF or bare LF) becomes `^n`, and `"`
/// becomes `^'`. A value wrapped in a pair of double quotes keeps its
/// wrapping quotes; only the interior is encoded. Unquoted values are never
/// quoted here.
#[must_use]
pub fn encode_param_value(value: impl Display) -> String {
    let text = value.to_string();
    let (quoted, inner) = match strip_quotes(&text) {
        Some(inner) => (true, inner),
        None => (false, text.as_str()),
    };

    let mut result = String::with_capacity(inner.len() + 2);
    if quoted {
        result.push('"');
    }

    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '^' => result.push_str("^^"),
            '\r' if chars.peek() == Some(&'\n') => {
                chars.next();
                result.push_str("^n");
            }
            '\n' => result.push_str("^n"),
            '"' => result.push_str("^'"),
            _ => result.push(c),
        }
    }

    if quoted {
        result.push('"');
    }
    result
}

/// Returns the interior of a value wrapped in a matching pair of double quotes.
pub(crate) fn strip_quotes(s: &str) -> Option<&str> {
    if s.len() >= 2 {
        s.strip_prefix('"')?.strip_suffix('"')
    } else {
        None
    }
}
