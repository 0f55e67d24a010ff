//! Core vCard types.
//!
//! This module contains the property abstraction, its concrete property
//! types, the parameter model, and the document container.

mod collection;
mod document;
mod parameter;
mod property;
mod structured;
mod text;

pub use collection::PropertyList;
pub use document::VCard;
pub use parameter::{GroupId, ParamValue, Parameters, names};
pub use property::{FromRaw, NullProperty, Property, PropertyInput};
pub use structured::{
    Address, AddressKind, AddressProperty, ClientPidMap, ClientPidMapKind, ClientPidMapProperty,
    NameKind, NameProperty, StructuredInput, StructuredKind, StructuredName, StructuredProperty,
    StructuredValue,
};
pub use text::{
    Email, Expertise, FormattedName, Hobby, Interest, Nickname, Note, OrgDirectory, Role,
    Telephone, TextKind, TextProperty, Title, Url, kinds,
};
