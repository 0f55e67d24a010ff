//! Structured vCard properties (RFC 6350).
//!
//! N, ADR, and CLIENTPIDMAP carry semicolon-separated components. They
//! accept either component structs or an already escaped wire string, whose
//! component count is checked by counting unescaped semicolons.

use std::fmt;
use std::marker::PhantomData;

use serde::Deserialize;

use super::parameter::{GroupId, Parameters, names};
use super::property::{FromRaw, Property, PropertyInput, validate_input};
use crate::error::{RfcError, RfcResult};
use crate::rfc::vcard::build::{count_unescaped_semicolons, escape_text};

/// A structured value that can be written as escaped wire text.
pub trait StructuredValue {
    /// Escaped components joined with `;`.
    fn to_wire(&self) -> String;
}

fn join_components(components: &[&[String]]) -> String {
    components
        .iter()
        .map(|values| {
            values
                .iter()
                .map(|v| escape_text(v))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join(";")
}

/// Structured name (N property, RFC 6350 §6.2.2).
///
/// All components are optional per RFC 6350.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StructuredName {
    /// Family names (surnames).
    pub family: Vec<String>,
    /// Given names (first names).
    pub given: Vec<String>,
    /// Additional names (middle names).
    pub additional: Vec<String>,
    /// Honorific prefixes (e.g., "Mr.", "Dr.").
    pub prefixes: Vec<String>,
    /// Honorific suffixes (e.g., "Jr.", "M.D.").
    pub suffixes: Vec<String>,
}

impl StructuredName {
    /// Creates a structured name with family and given names.
    #[must_use]
    pub fn simple(family: impl Into<String>, given: impl Into<String>) -> Self {
        Self {
            family: vec![family.into()],
            given: vec![given.into()],
            ..Self::default()
        }
    }
}

impl StructuredValue for StructuredName {
    fn to_wire(&self) -> String {
        join_components(&[
            &self.family,
            &self.given,
            &self.additional,
            &self.prefixes,
            &self.suffixes,
        ])
    }
}

/// Address (ADR property, RFC 6350 §6.3.1).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Address {
    /// Post office box.
    pub po_box: Vec<String>,
    /// Extended address (e.g., apartment or suite number).
    pub extended: Vec<String>,
    /// Street address.
    pub street: Vec<String>,
    /// Locality (city).
    pub locality: Vec<String>,
    /// Region (state or province).
    pub region: Vec<String>,
    /// Postal code.
    pub postal_code: Vec<String>,
    /// Country name.
    pub country: Vec<String>,
}

impl StructuredValue for Address {
    fn to_wire(&self) -> String {
        join_components(&[
            &self.po_box,
            &self.extended,
            &self.street,
            &self.locality,
            &self.region,
            &self.postal_code,
            &self.country,
        ])
    }
}

/// Client PID map entry (CLIENTPIDMAP property, RFC 6350 §6.7.7).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientPidMap {
    /// Source ID (integer ≥ 1).
    pub source_id: u32,
    /// URI identifying the source.
    pub uri: String,
}

impl ClientPidMap {
    /// Creates a new client PID map entry.
    #[must_use]
    pub fn new(source_id: u32, uri: impl Into<String>) -> Self {
        Self {
            source_id,
            uri: uri.into(),
        }
    }
}

impl StructuredValue for ClientPidMap {
    fn to_wire(&self) -> String {
        format!("{};{}", self.source_id, self.uri)
    }
}

/// Raw structured value: escaped wire text or components.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StructuredInput<T> {
    Wire(String),
    Components(T),
}

impl<T> From<&str> for StructuredInput<T> {
    fn from(wire: &str) -> Self {
        Self::Wire(wire.to_string())
    }
}

impl<T> From<String> for StructuredInput<T> {
    fn from(wire: String) -> Self {
        Self::Wire(wire)
    }
}

impl From<StructuredName> for StructuredInput<StructuredName> {
    fn from(name: StructuredName) -> Self {
        Self::Components(name)
    }
}

impl From<Address> for StructuredInput<Address> {
    fn from(address: Address) -> Self {
        Self::Components(address)
    }
}

impl From<ClientPidMap> for StructuredInput<ClientPidMap> {
    fn from(map: ClientPidMap) -> Self {
        Self::Components(map)
    }
}

/// Static description of a structured property type.
pub trait StructuredKind: fmt::Debug + Clone + PartialEq {
    const NAME: &'static str;

    /// Unescaped semicolons a valid value contains.
    const SEMICOLONS: usize;

    /// Restricted parameters (`INDEX`, `CC`) this property accepts.
    const RESTRICTED: &'static [&'static str] = &[];

    type Components: StructuredValue;

    /// Additional checks on the wire form, after the semicolon count.
    ///
    /// # Errors
    /// Returns `RfcError::InvalidValue` if the value is malformed.
    fn check_wire(_wire: &str) -> RfcResult<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameKind;

impl StructuredKind for NameKind {
    const NAME: &'static str = "N";
    const SEMICOLONS: usize = 4;
    type Components = StructuredName;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressKind;

impl StructuredKind for AddressKind {
    const NAME: &'static str = "ADR";
    const SEMICOLONS: usize = 6;
    const RESTRICTED: &'static [&'static str] = &[names::CC];
    type Components = Address;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientPidMapKind;

impl StructuredKind for ClientPidMapKind {
    const NAME: &'static str = "CLIENTPIDMAP";
    const SEMICOLONS: usize = 1;
    type Components = ClientPidMap;

    fn check_wire(wire: &str) -> RfcResult<()> {
        let source_id = wire.split(';').next().unwrap_or_default();
        let valid = !source_id.is_empty()
            && source_id.bytes().all(|b| b.is_ascii_digit())
            && source_id.bytes().any(|b| b != b'0');
        if valid {
            Ok(())
        } else {
            Err(RfcError::InvalidValue {
                property: Self::NAME,
                message: format!("source id must be a positive integer, got {source_id:?}"),
            })
        }
    }
}

/// A property whose value has semicolon-separated components.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredProperty<K> {
    group: Option<GroupId>,
    params: Parameters,
    value: String,
    kind: PhantomData<K>,
}

pub type NameProperty = StructuredProperty<NameKind>;
pub type AddressProperty = StructuredProperty<AddressKind>;
pub type ClientPidMapProperty = StructuredProperty<ClientPidMapKind>;

impl<K: StructuredKind> StructuredProperty<K> {
    /// Builds a property from components.
    ///
    /// # Errors
    /// Returns an error if the components produce an invalid value.
    pub fn new(components: K::Components) -> RfcResult<Self> {
        Self::from_raw(PropertyInput::new(StructuredInput::Components(components)))
    }
}

impl<K: StructuredKind> Property for StructuredProperty<K> {
    fn group(&self) -> Option<&GroupId> {
        self.group.as_ref()
    }

    fn name(&self) -> &'static str {
        K::NAME
    }

    fn parameters(&self) -> &Parameters {
        &self.params
    }

    fn value(&self) -> String {
        self.value.clone()
    }

    fn wire_value(&self) -> String {
        self.value.clone()
    }
}

impl<K: StructuredKind> FromRaw for StructuredProperty<K> {
    type Raw = PropertyInput<StructuredInput<K::Components>>;

    fn from_raw(raw: Self::Raw) -> RfcResult<Self> {
        validate_input(K::NAME, &raw, K::RESTRICTED)?;

        let value = match raw.value {
            StructuredInput::Wire(wire) => wire,
            StructuredInput::Components(components) => components.to_wire(),
        };

        if value.contains(['\r', '\n']) {
            return Err(RfcError::InvalidValue {
                property: K::NAME,
                message: "unescaped line break".to_string(),
            });
        }

        let found = count_unescaped_semicolons(&value);
        if found != K::SEMICOLONS {
            tracing::debug!(property = K::NAME, found, "Rejected structured value");
            return Err(RfcError::ComponentCount {
                property: K::NAME,
                expected: K::SEMICOLONS,
                found,
            });
        }
        K::check_wire(&value)?;

        Ok(Self {
            group: raw.group,
            params: raw.params,
            value,
            kind: PhantomData,
        })
    }
}
