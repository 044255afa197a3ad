//! The transformation catalog
//!
//! One pure function per transformation kind. Every function receives the
//! in-scope value and returns its replacement; non-object scopes, absent
//! keys, and type mismatches pass through unchanged. `conditional` and
//! `copy_structure` need the dispatcher and live in the engine module.
//!
//! Removals use `shift_remove` throughout: the relative order of the
//! remaining keys is part of the contract.
//!
//! Copyright (c) 2026 Remold Team
//! Licensed under the Apache-2.0 license

use crate::types::TextModification;
use serde_json::{Map, Value};

/// Move the value under `source` to `target`
pub fn rename(scope: Value, source: &str, target: &str) -> Value {
    match scope {
        Value::Object(mut map) => {
            if let Some(value) = map.shift_remove(source) {
                map.insert(target.to_string(), value);
            }
            Value::Object(map)
        }
        other => other,
    }
}

/// Rebuild the scope keeping only the keys in `order`, in that order
pub fn reorder(scope: Value, order: &[String]) -> Value {
    match scope {
        Value::Object(mut map) => {
            let mut reordered = Map::new();
            for key in order {
                if let Some(value) = map.shift_remove(key) {
                    reordered.insert(key.clone(), value);
                }
            }
            Value::Object(reordered)
        }
        other => other,
    }
}

/// Wrap the value under `source` as `target: {source: value}`
pub fn attribute_to_element(scope: Value, source: &str, target: &str) -> Value {
    match scope {
        Value::Object(mut map) => {
            if let Some(value) = map.shift_remove(source) {
                let mut element = Map::new();
                element.insert(source.to_string(), value);
                map.insert(target.to_string(), Value::Object(element));
            }
            Value::Object(map)
        }
        other => other,
    }
}

/// Replace the object under `source` with its first value, under `target`
pub fn element_to_attribute(scope: Value, source: &str, target: &str) -> Value {
    match scope {
        Value::Object(mut map) => {
            let has_values = matches!(map.get(source), Some(Value::Object(inner)) if !inner.is_empty());
            if has_values {
                if let Some(Value::Object(inner)) = map.shift_remove(source) {
                    if let Some((_, first)) = inner.into_iter().next() {
                        map.insert(target.to_string(), first);
                    }
                }
            }
            Value::Object(map)
        }
        other => other,
    }
}

/// Collect the `sources` entries under `target`, searching nested objects
pub fn merge(scope: Value, sources: &[String], target: &str) -> Value {
    match scope {
        Value::Object(map) => Value::Object(merge_object(map, sources, target)),
        other => other,
    }
}

fn merge_object(map: Map<String, Value>, sources: &[String], target: &str) -> Map<String, Value> {
    let mut collected = Map::new();
    let mut rebuilt = Map::new();
    for (key, value) in map {
        if sources.iter().any(|source| *source == key) {
            match value {
                // object sources splice entry-wise, scalars keep their key
                Value::Object(inner) => collected.extend(inner),
                other => {
                    collected.insert(key, other);
                }
            }
        } else {
            match value {
                Value::Object(inner) => {
                    rebuilt.insert(key, Value::Object(merge_object(inner, sources, target)));
                }
                other => {
                    rebuilt.insert(key, other);
                }
            }
        }
    }
    if !collected.is_empty() {
        rebuilt.insert(target.to_string(), Value::Object(collected));
    }
    rebuilt
}

/// Distribute the values of the object under `source` to the `targets`,
/// searching nested objects
pub fn split(scope: Value, source: &str, targets: &[String]) -> Value {
    match scope {
        Value::Object(map) => Value::Object(split_object(map, source, targets)),
        other => other,
    }
}

fn split_object(
    mut map: Map<String, Value>,
    source: &str,
    targets: &[String],
) -> Map<String, Value> {
    if matches!(map.get(source), Some(Value::Object(_))) {
        if let Some(Value::Object(inner)) = map.shift_remove(source) {
            // positional assignment; excess targets are skipped
            for (target, value) in targets.iter().zip(inner.into_iter().map(|(_, v)| v)) {
                map.insert(target.clone(), value);
            }
        }
    }
    for (_, value) in map.iter_mut() {
        if value.is_object() {
            if let Value::Object(inner) = std::mem::take(value) {
                *value = Value::Object(split_object(inner, source, targets));
            }
        }
    }
    map
}

/// Set `target` to `value`, creating or overwriting
pub fn add(scope: Value, target: &str, value: &Value) -> Value {
    match scope {
        Value::Object(mut map) => {
            map.insert(target.to_string(), value.clone());
            Value::Object(map)
        }
        other => other,
    }
}

/// Delete `target` if present
pub fn remove(scope: Value, target: &str) -> Value {
    match scope {
        Value::Object(mut map) => {
            map.shift_remove(target);
            Value::Object(map)
        }
        other => other,
    }
}

/// Apply a text modification to the string under `target`
pub fn modify_text(
    scope: Value,
    target: &str,
    modification: TextModification,
    replace_old: Option<&str>,
    replace_new: Option<&str>,
) -> Value {
    match scope {
        Value::Object(mut map) => {
            if let Some(Value::String(text)) = map.get_mut(target) {
                let updated = match modification {
                    TextModification::Uppercase => Some(text.to_uppercase()),
                    TextModification::Lowercase => Some(text.to_lowercase()),
                    TextModification::Capitalize => Some(capitalize(text)),
                    TextModification::Title => Some(title_case(text)),
                    TextModification::Strip => Some(text.trim().to_string()),
                    TextModification::Replace => match (replace_old, replace_new) {
                        (Some(old), Some(new)) => Some(text.replace(old, new)),
                        _ => None,
                    },
                };
                if let Some(updated) = updated {
                    *text = updated;
                }
            }
            Value::Object(map)
        }
        other => other,
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(ch);
            word_start = true;
        }
    }
    out
}

/// Bucket the array under `source` by each element's `group_by` value
pub fn group(scope: Value, source: &str, target: &str, group_by: &str) -> Value {
    match scope {
        Value::Object(mut map) => {
            if matches!(map.get(source), Some(Value::Array(_))) {
                if let Some(Value::Array(items)) = map.shift_remove(source) {
                    let mut grouped: Map<String, Value> = Map::new();
                    for item in items {
                        // elements without the group_by key (or that are not
                        // objects) are dropped from every bucket
                        let key = match item.as_object().and_then(|obj| obj.get(group_by)) {
                            Some(value) => value_to_text(value),
                            None => continue,
                        };
                        let bucket = grouped
                            .entry(key)
                            .or_insert_with(|| Value::Array(Vec::new()));
                        if let Value::Array(elements) = bucket {
                            elements.push(item);
                        }
                    }
                    map.insert(target.to_string(), Value::Object(grouped));
                }
            }
            Value::Object(map)
        }
        other => other,
    }
}

/// Join the stringified values of the present `sources` into `target`
pub fn concat(scope: Value, sources: &[String], target: &str, delimiter: Option<&str>) -> Value {
    match scope {
        Value::Object(mut map) => {
            let values: Vec<String> = sources
                .iter()
                .filter_map(|source| map.get(source))
                .map(value_to_text)
                .collect();
            if !values.is_empty() {
                map.insert(
                    target.to_string(),
                    Value::String(values.join(delimiter.unwrap_or(""))),
                );
            }
            Value::Object(map)
        }
        other => other,
    }
}

/// Strings verbatim, everything else as compact JSON
fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
