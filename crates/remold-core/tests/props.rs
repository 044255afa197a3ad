//! Property-based tests for engine-level laws
//!
//! These verify that the documented contracts hold over generated documents:
//! the input is never mutated, reorder is idempotent, and rename round-trips
//! when the target key is free.

use proptest::prelude::*;
use remold_core::transform;
use serde_json::{json, Map, Value};

/// JSON values with controlled depth and object keys drawn from a small set
fn json_value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| Value::Number(n.into())),
        "[a-z ]{0,12}".prop_map(Value::String),
    ];

    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            proptest::collection::vec(("[a-e]", inner), 0..4).prop_map(|entries| {
                let mut map = Map::new();
                for (key, value) in entries {
                    map.insert(key, value);
                }
                Value::Object(map)
            }),
        ]
    })
}

/// Documents: always a top-level object, like the engine's usual scope
fn document_strategy() -> impl Strategy<Value = Value> {
    proptest::collection::vec(("[a-e]", json_value_strategy()), 0..5).prop_map(|entries| {
        let mut map = Map::new();
        for (key, value) in entries {
            map.insert(key, value);
        }
        Value::Object(map)
    })
}

proptest! {
    #[test]
    fn transform_never_mutates_the_input(document in document_strategy()) {
        let snapshot = document.clone();
        let config = json!({
            "transformations": [
                {"type": "rename", "source": "a", "target": "renamed"},
                {"type": "remove", "target": "b"},
                {"type": "merge", "sources": ["c", "d"], "target": "merged"},
                {"type": "modify_text", "target": "e", "modification": "uppercase"},
                {"type": "copy_structure", "modifications": [
                    {"type": "add", "target": "stamp", "value": 1}
                ]}
            ]
        });

        let _ = transform(&document, &config).unwrap();
        prop_assert_eq!(document, snapshot);
    }

    #[test]
    fn reorder_is_idempotent(document in document_strategy()) {
        let config = json!({
            "transformations": [{"type": "reorder", "order": ["d", "b", "a"]}]
        });

        let once = transform(&document, &config).unwrap();
        let twice = transform(&once, &config).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn rename_round_trips_when_target_is_free(document in document_strategy()) {
        // only meaningful when the target key is not already taken
        prop_assume!(document.get("z").is_none());

        let config = json!({
            "transformations": [
                {"type": "rename", "source": "a", "target": "z"},
                {"type": "rename", "source": "z", "target": "a"}
            ]
        });

        let output = transform(&document, &config).unwrap();
        prop_assert_eq!(output, document);
    }

    #[test]
    fn noop_config_returns_document_unchanged(document in document_strategy()) {
        let config = json!({"transformations": []});
        let output = transform(&document, &config).unwrap();
        prop_assert_eq!(output, document);
    }
}
