//! Integration tests combining the helper modules

use std::collections::BTreeMap;

use datatools_common::{
    coalesce, crop_text_line_by_line, extract_subelements, parse_full_name, parse_int,
    split_sequence, try_bool, validate_inn, CommonError, CompositeKey, KeyType, KeyValue,
    Nested, NumberInput, UniqueIdGenerator, ValidationError,
};
use proptest::prelude::*;

fn report_key() -> CompositeKey {
    CompositeKey::new([
        ("org", KeyType::Int),
        ("period", KeyType::Text),
        ("ratio", KeyType::Int),
        ("final", KeyType::Bool),
    ])
}

#[test]
fn test_composite_keys_round_trip_through_pack() {
    let key = report_key();
    let values = key.unpack_map("1024.2024Q1.75.y").unwrap();
    let packed = key.pack(&values).unwrap();
    assert_eq!(packed, "1024.2024Q1.75.true");
    assert_eq!(key.unpack_map(&packed).unwrap(), values);
}

#[test]
fn test_unpack_list_in_batches() {
    let key = report_key();
    let raw: Vec<String> = (1..=5).map(|org| format!("{org}.2024Q{org}.0.n")).collect();

    let mut orgs = Vec::new();
    for batch in split_sequence(&raw, 2).unwrap() {
        for row in key.unpack_list(batch, &["org"]).unwrap() {
            orgs.push(row[0].clone());
        }
    }
    let expected: Vec<Option<KeyValue>> = (1..=5).map(|org| Some(KeyValue::Int(org))).collect();
    assert_eq!(orgs, expected);
}

#[test]
fn test_pack_leaves_gaps_for_missing_values() {
    let mut values = BTreeMap::new();
    values.insert("period".to_string(), Some(KeyValue::Text("2024H1".to_string())));
    assert_eq!(report_key().pack(&values).unwrap(), ".2024H1..");
}

#[test]
fn test_flags_from_mixed_sources() {
    let raw = ["on", "Y", "0", "TRUE"];
    let flags: Vec<Option<bool>> = raw.iter().map(|value| try_bool(value)).collect();
    assert_eq!(flags, vec![None, Some(true), Some(false), Some(true)]);
}

#[test]
fn test_first_known_identifier() {
    let ids = extract_subelements(
        &[Nested::Group(vec![0, 0]), Nested::Item(0), Nested::Group(vec![17, 3])],
        true,
    );
    assert_eq!(ids, vec![0, 17, 3]);
    assert_eq!(coalesce(ids), Some(17));
}

#[test]
fn test_parse_int_from_labels() {
    assert_eq!(parse_int(&NumberInput::from("1234,Enterprise Structure")).unwrap(), 1234);
    assert_eq!(
        parse_int(&NumberInput::from("Structure")),
        Err(CommonError::NoNumber {
            input: "Structure".to_string()
        })
    );
}

#[test]
fn test_person_card() {
    let person = parse_full_name("prokudina-gorskaya anna-maria fedorovna").unwrap();
    let caption = format!("{} {} {}", person.surname, person.name, person.patronymic);
    assert_eq!(
        crop_text_line_by_line(&caption, 1, 20),
        "Prokudina-Gorskaya&#133;"
    );
}

#[test]
fn test_validation_messages_are_user_facing() {
    let err = validate_inn("500100732259", Some("773601001")).unwrap_err();
    assert!(matches!(err, ValidationError::InnWithKpp { .. }));
    assert!(err.to_string().contains("kpp cannot be specified"));
}

#[test]
fn test_generators_are_independent() {
    let mut first = UniqueIdGenerator::with_seed(100);
    let mut second = first.clone();
    assert_eq!(first.next(), Some(100));
    assert_eq!(first.next(), Some(101));
    assert_eq!(second.next(), Some(100));
}

proptest! {
    #[test]
    fn cropped_text_stays_bounded(text in "[a-z ]{0,120}", lines in 1usize..4, width in 4usize..40) {
        let cropped = crop_text_line_by_line(&text, lines, width);
        let ellipsis = if cropped.ends_with("&#133;") { 6 } else { 0 };
        // every kept word carries at most one trailing space
        prop_assert!(cropped.chars().count() <= text.chars().count() + 1 + ellipsis);
    }

    #[test]
    fn split_sequence_preserves_items(items in proptest::collection::vec(any::<u8>(), 0..64), size in 1usize..10) {
        let rejoined: Vec<u8> = split_sequence(&items, size)
            .unwrap()
            .flat_map(|chunk| chunk.iter().copied())
            .collect();
        prop_assert_eq!(rejoined, items);
    }
}
