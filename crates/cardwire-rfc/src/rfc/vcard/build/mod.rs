//! vCard serialization (RFC 6350).
//!
//! This module provides serializers for vCard content:
//! - Escape: Text value escaping and structured component counting
//! - Encode: RFC 6868 parameter value encoding
//! - Fold: Content line folding at 75 octets
//! - Serializer: Content line assembly and full document serialization

mod encode;
mod escape;
mod fold;
mod serializer;

pub use encode::encode_param_value;
pub use escape::{count_unescaped_semicolons, escape_text};
pub use fold::{fold_line, fold_line_with};
pub use serializer::{SerializeOptions, content_line, serialize, serialize_with, wire_line};
