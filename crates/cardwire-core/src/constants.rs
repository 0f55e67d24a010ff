/// Wire constants shared across crates (RFC 6350 §3.2)
pub const CRLF: &str = "\r\n";

/// Maximum content octets per physical line, excluding the line break and
/// the continuation character of a folded line.
pub const MAX_LINE_OCTETS: usize = 75;

pub const VCARD_VERSION: &str = "4.0";

pub const FOLD_SPACE: &str = const_str::concat!(CRLF, " ");
pub const FOLD_TAB: &str = const_str::concat!(CRLF, "\t");
