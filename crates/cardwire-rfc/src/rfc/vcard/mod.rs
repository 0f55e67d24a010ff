//! vCard implementation (RFC 6350).
//!
//! This module provides the property model and wire serialization for
//! vCard 4.0, including the parameter extensions of RFC 6715 (`INDEX`),
//! RFC 8605 (`CC`), RFC 9554 (`SCRIPT`), and RFC 6868 parameter encoding.
//!
//! ## Usage
//!
//! ```rust
//! use cardwire_rfc::rfc::vcard::{
//!     Email, FormattedName, PropertyInput, PropertyList, VCard, serialize,
//! };
//!
//! let mut emails: PropertyList<Email> = PropertyList::new();
//! emails.push(PropertyInput::from("jane@example.com").param("PREF", 1)).unwrap();
//!
//! let mut card = VCard::new();
//! card.add_property(FormattedName::new("Jane Doe").unwrap());
//! card.add_properties(emails);
//!
//! let output = serialize(&[card]);
//! assert!(output.contains("EMAIL;PREF=1:jane@example.com\r\n"));
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Property abstraction, concrete properties, `VCard`
//! - [`build`] - Escaping, parameter encoding, folding, and serialization

pub mod build;
pub mod core;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use build::{SerializeOptions, fold_line, serialize, serialize_with};
pub use core::{
    Address, AddressProperty, ClientPidMap, ClientPidMapProperty, Email, FormattedName, FromRaw,
    GroupId, NameProperty, Note, NullProperty, ParamValue, Parameters, Property, PropertyInput,
    PropertyList, StructuredName, Telephone, VCard,
};
