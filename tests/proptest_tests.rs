// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests check the coercion and validation rules against arbitrary
//! inputs rather than hand-picked cases.

use configdef::domain::{CoercionTable, ConfigType, ConfigValue, ErrorKind};
use configdef::ports::Validator;
use configdef::prelude::{ConfigDef, IntRangeValidator};
use proptest::prelude::*;
use std::collections::BTreeMap;

// Any decimal i32 string coerces to the same Int
proptest! {
    #[test]
    fn test_int_from_decimal_string(v in any::<i32>()) {
        let table = CoercionTable::new();
        let value = table.coerce("k", ConfigType::Int, &ConfigValue::from(v.to_string())).unwrap();
        prop_assert_eq!(value, ConfigValue::Int(v));
    }
}

// Any decimal i64 string coerces to the same Long
proptest! {
    #[test]
    fn test_long_from_decimal_string(v in any::<i64>()) {
        let table = CoercionTable::new();
        let value = table.coerce("k", ConfigType::Long, &ConfigValue::from(v.to_string())).unwrap();
        prop_assert_eq!(value, ConfigValue::Long(v));
    }
}

// Strings with non-digit characters never become an Int
proptest! {
    #[test]
    fn test_int_rejects_non_numeric(s in "[a-z ]{1,12}") {
        let table = CoercionTable::new();
        let err = table.coerce("k", ConfigType::Int, &ConfigValue::from(s)).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }
}

// Bool coercion never fails on a string, and is true only for "true" in any case
proptest! {
    #[test]
    fn test_bool_never_fails_on_strings(s in "\\PC*") {
        let table = CoercionTable::new();
        let value = table.coerce("k", ConfigType::Bool, &ConfigValue::from(s.as_str())).unwrap();
        prop_assert_eq!(value, ConfigValue::Bool(s.eq_ignore_ascii_case("true")));
    }
}

// List items come back trimmed, in order, with blanks dropped
proptest! {
    #[test]
    fn test_list_items_trimmed_and_non_empty(
        items in prop::collection::vec("[a-z0-9]{0,6}", 0..8),
        pad in " {0,3}",
    ) {
        let raw = items.join(&format!("{},{}", pad, pad));
        let table = CoercionTable::new();
        let value = table.coerce("k", ConfigType::List, &ConfigValue::from(raw)).unwrap();

        let expected: Vec<String> = items.into_iter().filter(|s| !s.is_empty()).collect();
        prop_assert_eq!(value, ConfigValue::List(expected));
    }
}

// Well-formed map strings keep every entry
proptest! {
    #[test]
    fn test_map_keeps_every_entry(
        entries in prop::collection::btree_map("[a-z]{1,8}", "[a-z0-9]{1,8}", 1..6)
    ) {
        let raw = entries
            .iter()
            .map(|(k, v)| format!("{} : {}", k, v))
            .collect::<Vec<_>>()
            .join(", ");
        let table = CoercionTable::new();
        let value = table.coerce("k", ConfigType::Map, &ConfigValue::from(raw)).unwrap();
        prop_assert_eq!(value, ConfigValue::Map(entries));
    }
}

// The range validator accepts exactly the values within its bounds
proptest! {
    #[test]
    fn test_range_validator_bounds(
        a in -1000i32..1000,
        b in -1000i32..1000,
        v in -2000i32..2000,
    ) {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        let validator = IntRangeValidator::new(min, max);
        let result = validator.verify("k", &ConfigValue::from(v.to_string()));
        prop_assert_eq!(result.is_ok(), min <= v && v <= max);
    }
}

// Defining the same name twice always fails and leaves the first definition
proptest! {
    #[test]
    fn test_duplicate_define_fails(name in "[a-z][a-z.]{0,15}", first in any::<i32>()) {
        let mut def = ConfigDef::new();
        def.define(name.as_str(), ConfigType::Int, first).unwrap();

        let err = def.define(name.as_str(), ConfigType::Text, "x").unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::DuplicateKey);
        prop_assert_eq!(def.find(&name).unwrap().default_value(), &ConfigValue::Int(first));
        prop_assert_eq!(def.len(), 1);
    }
}

// Whitespace-only names are never accepted
proptest! {
    #[test]
    fn test_blank_name_rejected(name in "[ \\t\\n]{0,8}") {
        let mut def = ConfigDef::new();
        let err = def.define(name, ConfigType::Text, "").unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        prop_assert!(def.is_empty());
    }
}

// Parse output contains exactly the supplied keys
proptest! {
    #[test]
    fn test_parse_output_keys(raw in prop::collection::btree_map("[a-e]", "[0-9]{1,4}", 0..5)) {
        let mut def = ConfigDef::new();
        for name in ["a", "b", "c", "d", "e"] {
            def.define(name, ConfigType::Int, 0).unwrap();
        }

        let values = def.parse(raw.clone()).unwrap();
        let keys: Vec<&String> = values.iter().map(|(k, _)| k).collect();
        let expected: Vec<&String> = raw.keys().collect();
        prop_assert_eq!(keys, expected);
    }
}

// Undefined names are rejected regardless of value
proptest! {
    #[test]
    fn test_unknown_key_rejected(name in "[a-z]{2,10}", value in "\\PC*") {
        let mut def = ConfigDef::new();
        def.define("x", ConfigType::Text, "").unwrap();

        let mut raw = BTreeMap::new();
        raw.insert(name, value);
        let err = def.parse(raw).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::UnknownKey);
    }
}
