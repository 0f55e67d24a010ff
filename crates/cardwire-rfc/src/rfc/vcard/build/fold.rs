//! vCard line folding (RFC 6350 §3.2).

use cardwire_core::config::FoldStyle;
use cardwire_core::constants::MAX_LINE_OCTETS;

/// Folds a content line using CRLF + space continuations.
///
/// See [`fold_line_with`].
#[must_use]
pub fn fold_line(line: &str) -> String {
    fold_line_with(line, FoldStyle::Space)
}

/// Folds a content line to at most 75 octets of content per physical line.
///
/// A segment is closed before any character whose octets would overflow
/// the limit, so multi-octet characters are never split. The continuation
/// character of each folded line is not counted against the limit. Lines
/// of 75 octets or fewer are returned unchanged.
#[must_use]
pub fn fold_line_with(line: &str, style: FoldStyle) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let fold = style.as_str();
    let mut result = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * fold.len());
    let mut current_len = 0;
    let mut segments = 1_usize;

    for c in line.chars() {
        let char_len = c.len_utf8();

        if current_len + char_len > MAX_LINE_OCTETS {
            result.push_str(fold);
            current_len = 0;
            segments += 1;
        }

        result.push(c);
        current_len += char_len;
    }

    tracing::trace!(octets = line.len(), segments, "Folded content line");
    result
}
