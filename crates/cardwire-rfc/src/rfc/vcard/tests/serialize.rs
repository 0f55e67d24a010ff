//! Document serialization tests for vCard.
//!
//! These tests check complete cards against expected wire text and check
//! the folding invariants on every physical line produced.

use cardwire_core::config::{FoldStyle, Settings};
use cardwire_core::constants::MAX_LINE_OCTETS;

use crate::rfc::vcard::build::{SerializeOptions, serialize, serialize_with};
use crate::rfc::vcard::core::{
    Address, AddressProperty, FormattedName, FromRaw, NameProperty, Note, NullProperty, Property,
    PropertyInput, PropertyList, StructuredInput, StructuredName, Telephone, VCard,
};

/// Removes fold sequences, returning logical lines.
fn unfold(wire: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for physical in wire.split_terminator("\r\n") {
        match physical.strip_prefix([' ', '\t']) {
            Some(rest) => {
                if let Some(last) = lines.last_mut() {
                    last.push_str(rest);
                }
            }
            None => lines.push(physical.to_string()),
        }
    }
    lines
}

/// Checks every physical line is within the octet limit.
fn assert_line_limits(wire: &str) {
    assert!(wire.ends_with("\r\n"));
    for physical in wire.split_terminator("\r\n") {
        let content = physical.strip_prefix([' ', '\t']).unwrap_or(physical);
        assert!(
            content.len() <= MAX_LINE_OCTETS,
            "line exceeds {MAX_LINE_OCTETS} octets: {physical:?}"
        );
    }
}

fn sample_card() -> VCard {
    let mut card = VCard::new();
    card.add_property(FormattedName::new("Jane Doe").unwrap());
    card.add_property(NameProperty::new(StructuredName::simple("Doe", "Jane")).unwrap());
    card.add_property(
        Telephone::from_raw(
            PropertyInput::from("+1-555-555-0100")
                .group("item1")
                .param("TYPE", vec!["work", "voice"])
                .param("PREF", 1),
        )
        .unwrap(),
    );
    card
}

#[test_log::test]
fn serialize_simple_card() {
    let output = serialize(&[sample_card()]);
    assert_eq!(
        output,
        "BEGIN:VCARD\r\n\
         VERSION:4.0\r\n\
         FN:Jane Doe\r\n\
         N:Doe;Jane;;;\r\n\
         item1.TEL;PREF=1;TYPE=work,voice:+1-555-555-0100\r\n\
         END:VCARD\r\n"
    );
}

#[test]
fn serialize_multiple_cards() {
    let output = serialize(&[sample_card(), sample_card()]);
    assert_eq!(output.matches("BEGIN:VCARD\r\n").count(), 2);
    assert_eq!(output.matches("END:VCARD\r\n").count(), 2);
}

#[test]
fn empty_card_has_envelope_only() {
    assert_eq!(
        serialize(&[VCard::new()]),
        "BEGIN:VCARD\r\nVERSION:4.0\r\nEND:VCARD\r\n"
    );
}

#[test]
fn null_property_contributes_nothing() {
    let mut card = VCard::new();
    card.add_property(NullProperty);
    card.add_property(FormattedName::new("A").unwrap());
    assert_eq!(
        serialize(&[card]),
        "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:A\r\nEND:VCARD\r\n"
    );
}

#[test_log::test]
fn long_note_is_folded_and_recoverable() {
    let text = "Grüße aus Köln; 日本語のメモ, with emoji 🎉🎉 and a newline\nsecond line. "
        .repeat(4);
    let mut card = VCard::new();
    card.add_property(Note::new(text.clone()).unwrap());

    let output = serialize(&[card]);
    assert_line_limits(&output);

    let lines = unfold(&output);
    assert_eq!(lines.len(), 4);
    let note = &lines[2];
    assert!(note.starts_with("NOTE:"));
    assert!(!note.contains('\n'));
    assert!(note.contains(r"Köln\; 日本語のメモ\, with"));
}

#[test]
fn folded_address_with_encoded_label() {
    let address = Address {
        street: vec!["4321 Long Boulevard Name That Keeps Going".to_string()],
        locality: vec!["Springfield".to_string()],
        region: vec!["IL".to_string()],
        postal_code: vec!["62704".to_string()],
        country: vec!["United States of America".to_string()],
        ..Address::default()
    };
    let adr = AddressProperty::from_raw(
        PropertyInput::new(StructuredInput::Components(address))
            .param("CC", "US")
            .param("LABEL", "\"4321 Long Boulevard\nSpringfield, IL\""),
    )
    .unwrap();

    let mut card = VCard::new();
    card.add_property(adr);
    let output = serialize(&[card]);
    assert_line_limits(&output);

    let lines = unfold(&output);
    assert_eq!(
        lines[2],
        "ADR;CC=US;LABEL=\"4321 Long Boulevard^nSpringfield, IL\":;;4321 Long Boulevard \
         Name That Keeps Going;Springfield;IL;62704;United States of America"
    );
}

#[test]
fn tab_folding_and_disabled_folding() {
    let mut card = VCard::new();
    card.add_property(Note::new("x".repeat(100)).unwrap());

    let tab = SerializeOptions {
        fold: true,
        fold_style: FoldStyle::Tab,
    };
    let output = serialize_with(std::slice::from_ref(&card), &tab);
    assert!(output.contains("\r\n\t"));
    assert_line_limits(&output);

    let flat = SerializeOptions {
        fold: false,
        ..SerializeOptions::default()
    };
    let output = serialize_with(&[card], &flat);
    assert!(output.contains(&format!("NOTE:{}\r\n", "x".repeat(100))));
}

#[test]
fn options_from_settings() {
    let settings = Settings::from_toml_str("[serializer]\nfold_style = \"tab\"\n").unwrap();
    let options = SerializeOptions::from(&settings.serializer);
    assert_eq!(options.fold_style, FoldStyle::Tab);
    assert!(options.fold);
}

#[test]
fn collection_into_card() {
    let mut notes: PropertyList<Note> = PropertyList::new();
    assert_eq!(notes.push("first").unwrap(), 1);
    assert_eq!(notes.push_all(["second", "third"]).unwrap(), 3);

    let mut card = VCard::new();
    card.add_properties(notes);
    assert_eq!(card.len(), 3);
    assert_eq!(card.get_property("note").map(|p| p.value()), Some("first".to_string()));

    let lines = unfold(&serialize(&[card]));
    assert_eq!(&lines[2..5], ["NOTE:first", "NOTE:second", "NOTE:third"]);
}

#[test]
fn fold_boundary_scenarios() {
    for (len, expected) in [(70, 1), (71, 2), (146, 3)] {
        let note = Note::new("n".repeat(len)).unwrap();
        let wire = note.serialize();
        assert_line_limits(&wire);
        assert_eq!(wire.split_terminator("\r\n").count(), expected, "len {len}");
        assert_eq!(unfold(&wire), vec![format!("NOTE:{}", "n".repeat(len))]);
    }
}
