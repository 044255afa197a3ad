//! Condition evaluation for conditional transformations
//!
//! Conditions compare two operands, each of which is a nested condition, a
//! dotted path into the current scope, or a JSON literal. Evaluation is pure
//! and total: unresolvable paths degrade to literals, and comparisons between
//! mixed types fall back to one documented total order.
//!
//! Copyright (c) 2026 Remold Team
//! Licensed under the Apache-2.0 license

use crate::types::{Condition, ConditionOperator, Operand};
use serde_json::Value;
use std::cmp::Ordering;

/// Evaluate a condition against the scope object
pub fn evaluate(condition: &Condition, scope: &Value) -> bool {
    let left = resolve(&condition.left, scope);
    let right = match &condition.right {
        Some(operand) => resolve(operand, scope),
        None => Value::Null,
    };
    match condition.operator {
        ConditionOperator::Eq => left == right,
        ConditionOperator::Ne => left != right,
        ConditionOperator::Gt => total_cmp(&left, &right) == Ordering::Greater,
        ConditionOperator::Lt => total_cmp(&left, &right) == Ordering::Less,
        ConditionOperator::Ge => total_cmp(&left, &right) != Ordering::Less,
        ConditionOperator::Le => total_cmp(&left, &right) != Ordering::Greater,
        // both operands are always resolved; evaluation has no side effects,
        // so there is nothing to short-circuit
        ConditionOperator::And => truthy(&left) && truthy(&right),
        ConditionOperator::Or => truthy(&left) || truthy(&right),
        ConditionOperator::Not => !truthy(&left),
    }
}

/// Resolve an operand to a concrete JSON value
fn resolve(operand: &Operand, scope: &Value) -> Value {
    match operand {
        Operand::Condition(inner) => Value::Bool(evaluate(inner, scope)),
        Operand::Literal(Value::String(text)) => resolve_path_or_literal(text, scope),
        Operand::Literal(value) => value.clone(),
    }
}

/// Walk a dotted path through the scope; fall back to an integer literal,
/// then to the string itself
fn resolve_path_or_literal(text: &str, scope: &Value) -> Value {
    let mut current = scope;
    for part in text.split('.') {
        match current.as_object().and_then(|map| map.get(part)) {
            Some(next) => current = next,
            None => {
                return match text.parse::<i64>() {
                    Ok(number) => Value::Number(number.into()),
                    Err(_) => Value::String(text.to_string()),
                };
            }
        }
    }
    current.clone()
}

/// JSON truthiness: null and empty/zero values are false
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().unwrap_or(0.0) != 0.0,
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Total order over JSON values used by `gt`/`lt`/`ge`/`le`
///
/// Values of different types order by type rank: null < bool < number <
/// string < array < object. Within a type: false < true, numbers compare as
/// f64, strings by code point, arrays element-wise, objects by their entry
/// sequences.
fn total_cmp(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => {
            let a = a.as_f64().unwrap_or(0.0);
            let b = b.as_f64().unwrap_or(0.0);
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        }
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Array(a), Value::Array(b)) => {
            for (x, y) in a.iter().zip(b.iter()) {
                let ordering = total_cmp(x, y);
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            a.len().cmp(&b.len())
        }
        (Value::Object(a), Value::Object(b)) => {
            for ((key_a, value_a), (key_b, value_b)) in a.iter().zip(b.iter()) {
                let key_ordering = key_a.cmp(key_b);
                if key_ordering != Ordering::Equal {
                    return key_ordering;
                }
                let value_ordering = total_cmp(value_a, value_b);
                if value_ordering != Ordering::Equal {
                    return value_ordering;
                }
            }
            a.len().cmp(&b.len())
        }
        _ => type_rank(left).cmp(&type_rank(right)),
    }
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}
