pub mod validation;
pub mod vcard;
