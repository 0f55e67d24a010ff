//! vCard property abstraction (RFC 6350 §3.3).

use std::fmt;

use serde::Deserialize;

use super::parameter::{GroupId, ParamValue, Parameters, is_name_token, names};
use crate::error::{RfcError, RfcResult};
use crate::rfc::validation::{
    is_valid_cc, is_valid_index, is_valid_pid, is_valid_pref, is_valid_script,
};
use crate::rfc::vcard::build::{SerializeOptions, content_line, wire_line};

/// A vCard property.
///
/// Implementors supply the group, name, parameters, and value; the content
/// line and wire text are derived from those.
pub trait Property: fmt::Debug {
    /// Optional property group (e.g., "item1" in "item1.TEL").
    fn group(&self) -> Option<&GroupId>;

    /// Property name (uppercase).
    fn name(&self) -> &'static str;

    /// Parameters in name order.
    fn parameters(&self) -> &Parameters;

    /// The value as supplied when the property was built.
    fn value(&self) -> String;

    /// The value as it appears on the wire, escaped where the value type
    /// requires it.
    fn wire_value(&self) -> String;

    /// The assembled, escaped, and encoded content line, not yet folded.
    fn content_line(&self) -> String {
        content_line(
            self.group(),
            self.name(),
            self.parameters(),
            &self.wire_value(),
        )
    }

    /// Folded, CRLF-terminated wire text.
    fn serialize_with(&self, options: &SerializeOptions) -> String {
        wire_line(&self.content_line(), options)
    }

    /// Folded, CRLF-terminated wire text using default options.
    fn serialize(&self) -> String {
        self.serialize_with(&SerializeOptions::default())
    }

    /// Returns the PREF value if present.
    fn pref(&self) -> Option<i64> {
        self.parameters()
            .get(names::PREF)
            .and_then(ParamValue::as_integer)
    }
}

/// Construction of a property from raw input.
///
/// Construction either produces a fully validated property or fails; a
/// property value never exists in an unvalidated state.
pub trait FromRaw: Property + Sized {
    /// Raw input accepted by [`FromRaw::from_raw`].
    type Raw;

    /// Builds and validates a property.
    ///
    /// # Errors
    /// Returns an error if the group, a parameter, or the value is invalid.
    fn from_raw(raw: Self::Raw) -> RfcResult<Self>;
}

/// Stand-in for an absent property.
///
/// Every accessor yields an empty result, so an absent property can be
/// serialized or displayed without a presence check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullProperty;

impl Property for NullProperty {
    fn group(&self) -> Option<&GroupId> {
        None
    }

    fn name(&self) -> &'static str {
        ""
    }

    fn parameters(&self) -> &Parameters {
        static EMPTY: Parameters = Parameters::EMPTY;
        &EMPTY
    }

    fn value(&self) -> String {
        String::new()
    }

    fn wire_value(&self) -> String {
        String::new()
    }

    fn content_line(&self) -> String {
        String::new()
    }

    fn serialize_with(&self, _options: &SerializeOptions) -> String {
        String::new()
    }
}

/// Raw property input: an optional group, parameters, and a value.
///
/// Deserializes from either a bare value (`"Jane Doe"`) or an object
/// (`{"group": "item1", "params": {"PREF": 1}, "value": "Jane Doe"}`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawInput<V>")]
pub struct PropertyInput<V> {
    pub group: Option<GroupId>,
    pub params: Parameters,
    pub value: V,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawInput<V> {
    Full {
        #[serde(default)]
        group: Option<GroupId>,
        #[serde(default)]
        params: Parameters,
        value: V,
    },
    Bare(V),
}

impl<V> From<RawInput<V>> for PropertyInput<V> {
    fn from(raw: RawInput<V>) -> Self {
        match raw {
            RawInput::Full {
                group,
                params,
                value,
            } => Self {
                group,
                params,
                value,
            },
            RawInput::Bare(value) => Self::new(value),
        }
    }
}

impl<V> PropertyInput<V> {
    /// Creates input with no group and no parameters.
    #[must_use]
    pub fn new(value: V) -> Self {
        Self {
            group: None,
            params: Parameters::new(),
            value,
        }
    }

    /// Sets the group.
    #[must_use]
    pub fn group(mut self, group: impl Into<GroupId>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Adds a parameter.
    #[must_use]
    pub fn param(mut self, name: &str, value: impl Into<ParamValue>) -> Self {
        self.params.insert(name, value);
        self
    }

    /// Parses input from a JSON value.
    ///
    /// # Errors
    /// Returns `RfcError::InvalidValue` if the JSON does not have the shape
    /// of a property input.
    pub fn from_json(property: &'static str, json: serde_json::Value) -> RfcResult<Self>
    where
        V: serde::de::DeserializeOwned,
    {
        serde_json::from_value(json).map_err(|e| RfcError::InvalidValue {
            property,
            message: e.to_string(),
        })
    }
}

impl<'a, V: From<&'a str>> From<&'a str> for PropertyInput<V> {
    fn from(value: &'a str) -> Self {
        Self::new(V::from(value))
    }
}

impl<V: From<String>> From<String> for PropertyInput<V> {
    fn from(value: String) -> Self {
        Self::new(V::from(value))
    }
}

/// Checks the group, every parameter name, and the domain of every known
/// parameter.
///
/// `INDEX` and `CC` are only meaningful on some properties and are rejected
/// unless listed in `restricted`.
pub(crate) fn validate_input<V>(
    property: &'static str,
    input: &PropertyInput<V>,
    restricted: &[&str],
) -> RfcResult<()> {
    if let Some(group) = &input.group {
        group.validate()?;
    }

    for (name, value) in input.params.iter() {
        let valid = is_name_token(name)
            && match name {
                names::PREF => is_valid_pref(value),
                names::PID => is_valid_pid(value),
                names::SCRIPT => is_valid_script(value),
                names::INDEX => restricted.contains(&names::INDEX) && is_valid_index(value),
                names::CC => restricted.contains(&names::CC) && is_valid_cc(value),
                _ => true,
            };

        if !valid {
            tracing::debug!(property, parameter = name, value = %value, "Rejected parameter");
            return Err(RfcError::InvalidParameter {
                property,
                parameter: name.to_string(),
                value: value.to_string(),
            });
        }
    }

    Ok(())
}
