//! Single-valued text and URI properties.
//!
//! These properties differ only in name and in which restricted parameters
//! they accept, so one generic [`TextProperty`] covers all of them.

use std::fmt;
use std::marker::PhantomData;

use super::parameter::{GroupId, ParamValue, Parameters, names};
use super::property::{FromRaw, Property, PropertyInput, validate_input};
use crate::error::{RfcError, RfcResult};
use crate::rfc::vcard::build::escape_text;

/// Static description of a text property type.
pub trait TextKind: fmt::Debug + Clone + PartialEq {
    /// Property name.
    const NAME: &'static str;

    /// Restricted parameters (`INDEX`, `CC`) this property accepts.
    const RESTRICTED: &'static [&'static str] = &[];

    /// Whether the default value type is URI rather than text.
    const URI: bool = false;
}

/// A property whose value is a single text or URI string.
#[derive(Debug, Clone, PartialEq)]
pub struct TextProperty<K> {
    group: Option<GroupId>,
    params: Parameters,
    value: String,
    kind: PhantomData<K>,
}

impl<K: TextKind> TextProperty<K> {
    /// Builds a property from a plain value.
    ///
    /// # Errors
    /// Returns an error if the value is invalid for this property.
    pub fn new(value: impl Into<String>) -> RfcResult<Self> {
        Self::from_raw(PropertyInput::new(value.into()))
    }

    /// Whether the value is written as a URI, taking `VALUE=` into account.
    fn is_uri(&self) -> bool {
        match self.params.get(names::VALUE).and_then(ParamValue::as_text) {
            Some(value_type) => value_type.eq_ignore_ascii_case("uri"),
            None => K::URI,
        }
    }
}

impl<K: TextKind> Property for TextProperty<K> {
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
        if self.is_uri() {
            self.value.clone()
        } else {
            escape_text(&self.value)
        }
    }
}

impl<K: TextKind> FromRaw for TextProperty<K> {
    type Raw = PropertyInput<String>;

    fn from_raw(raw: Self::Raw) -> RfcResult<Self> {
        validate_input(K::NAME, &raw, K::RESTRICTED)?;

        let property = Self {
            group: raw.group,
            params: raw.params,
            value: raw.value,
            kind: PhantomData,
        };

        if property.is_uri() && property.value.contains(['\r', '\n']) {
            return Err(RfcError::InvalidValue {
                property: K::NAME,
                message: "URI value contains a line break".to_string(),
            });
        }

        Ok(property)
    }
}

/// Marker types for [`TextProperty`].
pub mod kinds {
    use super::TextKind;
    use crate::rfc::vcard::core::parameter::names;

    macro_rules! text_kind {
        (@ty RESTRICTED) => { &'static [&'static str] };
        (@ty URI) => { bool };
        ($(#[$meta:meta])* $kind:ident, $name:literal $(, $key:ident = $val:expr)*) => {
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            pub struct $kind;

            impl TextKind for $kind {
                const NAME: &'static str = $name;
                $(const $key: text_kind!(@ty $key) = $val;)*
            }
        };
    }

    text_kind!(
        /// FN (RFC 6350 §6.2.1)
        FormattedName, "FN"
    );
    text_kind!(
        /// NICKNAME (RFC 6350 §6.2.3)
        Nickname, "NICKNAME"
    );
    text_kind!(
        /// EMAIL (RFC 6350 §6.4.2)
        Email, "EMAIL"
    );
    text_kind!(
        /// TEL (RFC 6350 §6.4.1), text by default, `VALUE=uri` for tel: URIs
        Telephone, "TEL"
    );
    text_kind!(
        /// TITLE (RFC 6350 §6.6.1)
        Title, "TITLE"
    );
    text_kind!(
        /// ROLE (RFC 6350 §6.6.2)
        Role, "ROLE"
    );
    text_kind!(
        /// NOTE (RFC 6350 §6.7.2)
        Note, "NOTE"
    );
    text_kind!(
        /// URL (RFC 6350 §6.7.8)
        Url, "URL", URI = true
    );
    text_kind!(
        /// EXPERTISE (RFC 6715 §2.1)
        Expertise, "EXPERTISE", RESTRICTED = &[names::INDEX]
    );
    text_kind!(
        /// HOBBY (RFC 6715 §2.2)
        Hobby, "HOBBY", RESTRICTED = &[names::INDEX]
    );
    text_kind!(
        /// INTEREST (RFC 6715 §2.3)
        Interest, "INTEREST", RESTRICTED = &[names::INDEX]
    );
    text_kind!(
        /// ORG-DIRECTORY (RFC 6715 §2.4)
        OrgDirectory, "ORG-DIRECTORY", RESTRICTED = &[names::INDEX], URI = true
    );
}

pub type FormattedName = TextProperty<kinds::FormattedName>;
pub type Nickname = TextProperty<kinds::Nickname>;
pub type Email = TextProperty<kinds::Email>;
pub type Telephone = TextProperty<kinds::Telephone>;
pub type Title = TextProperty<kinds::Title>;
pub type Role = TextProperty<kinds::Role>;
pub type Note = TextProperty<kinds::Note>;
pub type Url = TextProperty<kinds::Url>;
pub type Expertise = TextProperty<kinds::Expertise>;
pub type Hobby = TextProperty<kinds::Hobby>;
pub type Interest = TextProperty<kinds::Interest>;
pub type OrgDirectory = TextProperty<kinds::OrgDirectory>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatted_name_content_line() {
        let fn_prop = FormattedName::new("Doe, Jane").unwrap();
        assert_eq!(fn_prop.value(), "Doe, Jane");
        assert_eq!(fn_prop.content_line(), r"FN:Doe\, Jane");
        assert_eq!(fn_prop.serialize(), "FN:Doe\\, Jane\r\n");
    }

    #[test]
    fn note_escapes_newlines() {
        let note = Note::new("line one\nline two; more").unwrap();
        assert_eq!(note.content_line(), r"NOTE:line one\nline two\; more");
    }

    #[test]
    fn telephone_with_parameters() {
        let tel = Telephone::from_raw(
            PropertyInput::new("tel:+1-555-555-5555;ext=5555".to_string())
                .param("VALUE", "uri")
                .param("TYPE", vec!["work", "voice"])
                .param("PREF", 1),
        )
        .unwrap();
        assert_eq!(
            tel.content_line(),
            "TEL;PREF=1;TYPE=work,voice;VALUE=uri:tel:+1-555-555-5555;ext=5555"
        );
        assert_eq!(tel.pref(), Some(1));
    }

    #[test]
    fn email_rejects_out_of_range_pref() {
        let result = Email::from_raw(PropertyInput::from("jane@example.com").param("PREF", 101));
        assert!(matches!(result, Err(RfcError::InvalidParameter { .. })));
    }

    #[test]
    fn grouped_email() {
        let email =
            Email::from_raw(PropertyInput::from("jane@example.com").group("item1")).unwrap();
        assert_eq!(email.content_line(), "item1.EMAIL:jane@example.com");
    }

    #[test]
    fn uri_value_not_escaped() {
        let url = Url::new("https://example.com/a,b;c").unwrap();
        assert_eq!(url.content_line(), "URL:https://example.com/a,b;c");
    }

    #[test]
    fn uri_value_rejects_line_break() {
        assert!(Url::new("https://example.com/\nx").is_err());
    }

    #[test]
    fn org_directory_accepts_index() {
        let dir = OrgDirectory::from_raw(
            PropertyInput::from("ldap://ldap.example.com/cn=people").param("INDEX", 1),
        )
        .unwrap();
        assert_eq!(
            dir.content_line(),
            "ORG-DIRECTORY;INDEX=1:ldap://ldap.example.com/cn=people"
        );

        let bad = OrgDirectory::from_raw(PropertyInput::from("ldap://x").param("INDEX", 0));
        assert!(bad.is_err());
    }

    #[test]
    fn index_rejected_on_note() {
        let result = Note::from_raw(PropertyInput::from("text").param("INDEX", 1));
        assert!(result.is_err());
    }

    #[test]
    fn script_parameter() {
        let fn_prop = FormattedName::from_raw(
            PropertyInput::from("Иван Петров").param("SCRIPT", "Cyrl"),
        )
        .unwrap();
        assert_eq!(fn_prop.content_line(), "FN;SCRIPT=Cyrl:Иван Петров");

        let bad = FormattedName::from_raw(PropertyInput::from("x").param("SCRIPT", "Cy"));
        assert!(bad.is_err());
    }
}
