//! Property-based invariants for the classifier, equality engine, and
//! flattener over randomly generated value trees.
//!
//! Strategies generate scalars, flat objects, and nested objects/arrays up
//! to a few levels deep. Symmetry of the structural comparison is *not*
//! asserted anywhere: the algorithm is intentionally direction-driven.

use proptest::prelude::*;
use serde_json::{json, Map, Value};

use datamodel_core::{classify, flatten, is_document, parse_document, structural_equals};

// ============================================================================
// Strategies
// ============================================================================

fn arb_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z_][a-zA-Z0-9_]{0,10}").unwrap()
}

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Value::String),
        Just(json!("")),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec((arb_key(), inner), 0..4).prop_map(|entries| {
                let mut map = Map::new();
                for (key, value) in entries {
                    map.insert(key, value);
                }
                Value::Object(map)
            }),
        ]
    })
}

fn arb_object() -> impl Strategy<Value = Value> {
    prop::collection::vec((arb_key(), arb_value()), 0..4).prop_map(|entries| {
        let mut map = Map::new();
        for (key, value) in entries {
            map.insert(key, value);
        }
        Value::Object(map)
    })
}

fn count_leaves(value: &Value) -> usize {
    match value {
        Value::Object(map) => map.values().map(count_leaves).sum(),
        Value::Array(items) => items.iter().map(count_leaves).sum(),
        _ => 1,
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn classifier_never_panics_on_arbitrary_strings(text in ".{0,40}") {
        let _ = is_document(&Value::String(text));
    }

    #[test]
    fn structural_equality_is_reflexive(value in arb_object()) {
        let doc = parse_document(&value).unwrap();
        prop_assert!(structural_equals(&doc, &doc));
    }

    #[test]
    fn clone_compares_equal(value in arb_object()) {
        let a = parse_document(&value).unwrap();
        let b = parse_document(&value).unwrap();
        prop_assert!(structural_equals(&a, &b));
    }

    #[test]
    fn blank_extra_property_never_breaks_equality(value in arb_object()) {
        // Reserve the pad key so it is genuinely absent from the base.
        let mut base_map = value.as_object().unwrap().clone();
        base_map.remove("__pad");
        let doc = parse_document(&Value::Object(base_map.clone())).unwrap();

        let mut padded_map = base_map;
        padded_map.insert("__pad".to_string(), json!(""));
        let padded = parse_document(&Value::Object(padded_map)).unwrap();

        prop_assert!(structural_equals(&doc, &padded));
        prop_assert!(structural_equals(&padded, &doc));
    }

    #[test]
    fn flatten_emits_exactly_the_scalar_leaves(value in arb_value()) {
        let pairs = flatten(&value);
        prop_assert_eq!(pairs.len(), count_leaves(&value));
        for (_, leaf) in &pairs {
            prop_assert!(!leaf.is_object() && !leaf.is_array());
        }
    }

    #[test]
    fn flatten_of_scalar_is_single_empty_path(value in arb_scalar()) {
        let pairs = flatten(&value);
        prop_assert_eq!(pairs, vec![(String::new(), value)]);
    }

    #[test]
    fn flatten_paths_of_objects_are_nonempty(value in arb_object()) {
        for (path, _) in flatten(&value) {
            prop_assert!(!path.is_empty());
        }
    }

    #[test]
    fn classify_roundtrips_structured_values(value in arb_object()) {
        let doc = classify(&value).expect("objects always classify");
        prop_assert_eq!(doc.into_value(), value);
    }
}
