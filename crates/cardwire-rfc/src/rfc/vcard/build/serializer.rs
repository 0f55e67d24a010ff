//! Content line assembly and document serialization.

use cardwire_core::config::{FoldStyle, SerializerConfig};
use cardwire_core::constants::{CRLF, VCARD_VERSION};

use super::encode::{encode_param_value, strip_quotes};
use super::fold::fold_line_with;
use crate::rfc::vcard::core::{GroupId, ParamValue, Parameters, VCard};

/// Options controlling how content lines are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Fold lines longer than 75 octets.
    pub fold: bool,
    /// Continuation character used when folding.
    pub fold_style: FoldStyle,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            fold: true,
            fold_style: FoldStyle::Space,
        }
    }
}

impl From<&SerializerConfig> for SerializeOptions {
    fn from(config: &SerializerConfig) -> Self {
        Self {
            fold: config.fold,
            fold_style: config.fold_style,
        }
    }
}

/// Assembles an unfolded content line: `[group.]NAME[;PARAM=value]*:VALUE`.
///
/// `value` must already be escaped. Parameter values are RFC 6868 encoded,
/// list members are joined with commas, and a member containing `:`, `;`,
/// or `,` is double-quoted unless it already was.
#[must_use]
pub fn content_line(
    group: Option<&GroupId>,
    name: &str,
    parameters: &Parameters,
    value: &str,
) -> String {
    let mut line = String::with_capacity(name.len() + value.len() + 16);

    if let Some(group) = group {
        line.push_str(&group.to_string());
        line.push('.');
    }
    line.push_str(name);

    for (param, param_value) in parameters.iter() {
        line.push(';');
        line.push_str(param);
        line.push('=');
        write_param_value(&mut line, param_value);
    }

    line.push(':');
    line.push_str(value);
    line
}

fn write_param_value(line: &mut String, value: &ParamValue) {
    for (i, item) in value.items().iter().enumerate() {
        if i > 0 {
            line.push(',');
        }

        let encoded = encode_param_value(item);
        if strip_quotes(&encoded).is_none() && encoded.contains([':', ';', ',']) {
            line.push('"');
            line.push_str(&encoded);
            line.push('"');
        } else {
            line.push_str(&encoded);
        }
    }
}

/// Turns an unfolded content line into CRLF-terminated wire text.
///
/// An empty line produces no output.
#[must_use]
pub fn wire_line(line: &str, options: &SerializeOptions) -> String {
    if line.is_empty() {
        return String::new();
    }

    let mut out = if options.fold {
        fold_line_with(line, options.fold_style)
    } else {
        line.to_string()
    };
    out.push_str(CRLF);
    out
}

/// Serializes vCards with default options.
#[must_use]
pub fn serialize(cards: &[VCard]) -> String {
    serialize_with(cards, &SerializeOptions::default())
}

/// Serializes vCards to wire text.
///
/// Each card is written as `BEGIN:VCARD`, `VERSION:4.0`, its properties in
/// insertion order, and `END:VCARD`.
#[must_use]
pub fn serialize_with(cards: &[VCard], options: &SerializeOptions) -> String {
    let mut out = String::new();
    for card in cards {
        serialize_card(&mut out, card, options);
    }
    out
}

#[tracing::instrument(skip_all, fields(properties = card.len()))]
fn serialize_card(out: &mut String, card: &VCard, options: &SerializeOptions) {
    out.push_str(&wire_line("BEGIN:VCARD", options));
    out.push_str(&wire_line(&format!("VERSION:{VCARD_VERSION}"), options));
    for property in card.properties() {
        out.push_str(&property.serialize_with(options));
    }
    out.push_str(&wire_line("END:VCARD", options));
    tracing::debug!(octets = out.len(), "Serialized vCard");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_line_without_parameters() {
        assert_eq!(
            content_line(None, "FN", &Parameters::new(), "Jane Doe"),
            "FN:Jane Doe"
        );
    }

    #[test]
    fn content_line_with_group() {
        let line = content_line(
            Some(&GroupId::Name("item1".to_string())),
            "TEL",
            &Parameters::new(),
            "+1-555-0100",
        );
        assert_eq!(line, "item1.TEL:+1-555-0100");

        let line = content_line(Some(&GroupId::Index(2)), "NOTE", &Parameters::new(), "x");
        assert_eq!(line, "2.NOTE:x");
    }

    #[test]
    fn content_line_parameters_sorted_and_listed() {
        let params = Parameters::new()
            .with("TYPE", vec!["home", "voice"])
            .with("PREF", 1);
        assert_eq!(
            content_line(None, "TEL", &params, "+1-555-0100"),
            "TEL;PREF=1;TYPE=home,voice:+1-555-0100"
        );
    }

    #[test]
    fn content_line_encodes_parameter_values() {
        let params = Parameters::new().with("LABEL", "\"Mr. John Q. Public\n123 Main St\"");
        assert_eq!(
            content_line(None, "ADR", &params, ";;123 Main St;;;;"),
            "ADR;LABEL=\"Mr. John Q. Public^n123 Main St\":;;123 Main St;;;;"
        );
    }

    #[test]
    fn content_line_quotes_structural_characters() {
        let params = Parameters::new().with("GEO", "geo:12.3457,78.9012");
        assert_eq!(
            content_line(None, "ADR", &params, ";;;;;;"),
            "ADR;GEO=\"geo:12.3457,78.9012\":;;;;;;"
        );
    }

    #[test]
    fn wire_line_folds_and_terminates() {
        let line = format!("NOTE:{}", "n".repeat(71));
        let out = wire_line(&line, &SerializeOptions::default());
        assert_eq!(out, format!("{}\r\n n\r\n", &line[..75]));
    }

    #[test]
    fn wire_line_without_folding() {
        let line = format!("NOTE:{}", "n".repeat(100));
        let options = SerializeOptions {
            fold: false,
            ..SerializeOptions::default()
        };
        assert_eq!(wire_line(&line, &options), format!("{line}\r\n"));
    }

    #[test]
    fn wire_line_empty() {
        assert_eq!(wire_line("", &SerializeOptions::default()), "");
    }

    #[test]
    fn options_from_config() {
        let config = SerializerConfig {
            fold: false,
            fold_style: FoldStyle::Tab,
        };
        let options = SerializeOptions::from(&config);
        assert!(!options.fold);
        assert_eq!(options.fold_style, FoldStyle::Tab);
    }
}
