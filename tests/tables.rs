use std::collections::HashSet;

use bs83b_rs::decoder::Format;
use bs83b_rs::instructions::{
    OpcodeGroup, ADDRESS, BIT, FIXED_FIELD, FIXED_FIELD_MASK, LITERAL, M2A, SPECIAL,
};

const GROUPS: &[(&str, &OpcodeGroup)] = &[
    ("special", &SPECIAL),
    ("bit", &BIT),
    ("address", &ADDRESS),
    ("literal", &LITERAL),
    ("m2a", &M2A),
];

#[test]
fn group_keys_are_consistent_with_their_masks() {
    for (name, group) in GROUPS {
        for &(key, mnemonic) in group.entries {
            assert_eq!(
                key & group.mask,
                group.mark,
                "{name}/{mnemonic}: key {key:#06X} escapes its own mark"
            );
            assert_eq!(
                key & group.select,
                key,
                "{name}/{mnemonic}: key {key:#06X} has bits outside the selector"
            );
        }
    }
}

#[test]
fn group_keys_are_unique() {
    for (name, group) in GROUPS {
        let keys: HashSet<u16> = group.entries.iter().map(|&(k, _)| k).collect();
        assert_eq!(keys.len(), group.entries.len(), "{name}: duplicate key");
    }
}

#[test]
fn fixed_field_keys_are_pre_masked_and_unique() {
    let mut seen = HashSet::new();
    for &(key, format, mnemonic) in FIXED_FIELD {
        assert_eq!(
            key & FIXED_FIELD_MASK,
            key,
            "{mnemonic}: key {key:#06X} has bits outside the field mask"
        );
        assert!(seen.insert(key), "{mnemonic}: duplicate key {key:#06X}");
        assert!(
            matches!(format, Format::M2A | Format::A2M | Format::Memory),
            "{mnemonic}: unexpected format {format:?}"
        );
    }
    assert_eq!(FIXED_FIELD.len(), 43);
}

#[test]
fn fixed_field_shadows_the_m2a_fallback() {
    // The fallback group's single entry must also be a fixed-field key with
    // the same mnemonic, otherwise decode order would change its meaning.
    let (key, name) = M2A.entries[0];
    let shadow = FIXED_FIELD
        .iter()
        .find(|&&(k, _, _)| k == key)
        .expect("fallback key missing from the fixed-field table");
    assert_eq!(shadow.1, Format::M2A);
    assert_eq!(shadow.2, name);
}
