//! vCard text value escaping (RFC 6350 §3.4).

/// Escapes a vCard text value.
///
/// Backslash, comma, semicolon, and line feed are escaped as `\\`, `\,`,
/// `\;`, and `\n`. Every other character, including CR, passes through.
/// Each input character maps independently, so a backslash inserted for a
/// comma is never escaped a second time.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + s.len() / 8);

    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            ',' => result.push_str("\\,"),
            ';' => result.push_str("\\;"),
            '\n' => result.push_str("\\n"),
            _ => result.push(c),
        }
    }

    result
}

/// Counts semicolons not preceded by a backslash.
///
/// Structured values (N, ADR, CLIENTPIDMAP) use this to check their
/// component count. Only the single preceding character is inspected, so
/// the semicolon in `\\;` counts as escaped even though the backslash before
/// it is itself escaped.
#[must_use]
pub fn count_unescaped_semicolons(s: &str) -> usize {
    let mut count = 0;
    let mut prev = None;

    for c in s.chars() {
        if c == ';' && prev != Some('\\') {
            count += 1;
        }
        prev = Some(c);
    }

    count
}
