//! Core types for the Remold transformation model
//!
//! This module defines the configuration document model: the thirteen-variant
//! transformation sum type, the condition grammar used by conditional steps,
//! and the top-level transformation set.
//!
//! Copyright (c) 2026 Remold Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use serde_json::Value;

fn default_path() -> String {
    ".".to_string()
}

/// Top-level configuration document shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformSet {
    /// Ordered list of steps; execution is strictly sequential
    pub transformations: Vec<Transformation>,
}

/// A single transformation step
///
/// The wire format is an internally tagged object: `"type"` selects the kind,
/// the remaining fields are that kind's parameters. Every kind carries an
/// optional `"path"` (default `"."`) selecting the object scope it acts on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Transformation {
    /// Move the value under `source` to the `target` key
    Rename {
        #[serde(default = "default_path")]
        path: String,
        source: String,
        target: String,
    },
    /// Rebuild the scope keeping only the keys in `order`, in that order
    Reorder {
        #[serde(default = "default_path")]
        path: String,
        order: Vec<String>,
    },
    /// Wrap the value under `source` as `target: {source: value}`
    AttributeToElement {
        #[serde(default = "default_path")]
        path: String,
        source: String,
        target: String,
    },
    /// Replace the object under `source` with its first value, under `target`
    ElementToAttribute {
        #[serde(default = "default_path")]
        path: String,
        source: String,
        target: String,
    },
    /// Branch on a condition evaluated against the scope
    Conditional {
        #[serde(default = "default_path")]
        path: String,
        condition: Condition,
        true_transformation: Box<Transformation>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        false_transformation: Option<Box<Transformation>>,
    },
    /// Collect the `sources` entries (searching nested objects) under `target`
    Merge {
        #[serde(default = "default_path")]
        path: String,
        sources: Vec<String>,
        target: String,
    },
    /// Distribute the values of the object under `source` to the `targets`
    Split {
        #[serde(default = "default_path")]
        path: String,
        source: String,
        targets: Vec<String>,
    },
    /// Set `target` to `value`, creating or overwriting
    Add {
        #[serde(default = "default_path")]
        path: String,
        target: String,
        value: Value,
    },
    /// Delete `target` if present
    Remove {
        #[serde(default = "default_path")]
        path: String,
        target: String,
    },
    /// Apply a text modification to the string under `target`
    ModifyText {
        #[serde(default = "default_path")]
        path: String,
        target: String,
        modification: TextModification,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        replace_old: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        replace_new: Option<String>,
    },
    /// Clone the scope and apply the nested modifications to the clone
    CopyStructure {
        #[serde(default = "default_path")]
        path: String,
        modifications: Vec<Transformation>,
    },
    /// Bucket the array under `source` by each element's `group_by` value
    Group {
        #[serde(default = "default_path")]
        path: String,
        source: String,
        target: String,
        group_by: String,
    },
    /// Join the stringified values of `sources` into `target`
    Concat {
        #[serde(default = "default_path")]
        path: String,
        sources: Vec<String>,
        target: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        delimiter: Option<String>,
    },
}

impl Transformation {
    /// The path this step applies at
    pub fn path(&self) -> &str {
        match self {
            Transformation::Rename { path, .. }
            | Transformation::Reorder { path, .. }
            | Transformation::AttributeToElement { path, .. }
            | Transformation::ElementToAttribute { path, .. }
            | Transformation::Conditional { path, .. }
            | Transformation::Merge { path, .. }
            | Transformation::Split { path, .. }
            | Transformation::Add { path, .. }
            | Transformation::Remove { path, .. }
            | Transformation::ModifyText { path, .. }
            | Transformation::CopyStructure { path, .. }
            | Transformation::Group { path, .. }
            | Transformation::Concat { path, .. } => path,
        }
    }

    /// The kind tag, as it appears in the configuration document
    pub fn kind(&self) -> &'static str {
        match self {
            Transformation::Rename { .. } => "rename",
            Transformation::Reorder { .. } => "reorder",
            Transformation::AttributeToElement { .. } => "attribute_to_element",
            Transformation::ElementToAttribute { .. } => "element_to_attribute",
            Transformation::Conditional { .. } => "conditional",
            Transformation::Merge { .. } => "merge",
            Transformation::Split { .. } => "split",
            Transformation::Add { .. } => "add",
            Transformation::Remove { .. } => "remove",
            Transformation::ModifyText { .. } => "modify_text",
            Transformation::CopyStructure { .. } => "copy_structure",
            Transformation::Group { .. } => "group",
            Transformation::Concat { .. } => "concat",
        }
    }
}

/// Text modification kinds for `modify_text`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextModification {
    Uppercase,
    Lowercase,
    /// First letter uppercased, the rest lowercased
    Capitalize,
    /// Each word's first letter uppercased, the rest lowercased
    Title,
    /// Leading and trailing whitespace removed
    Strip,
    /// Literal substring replacement; requires `replace_old` and `replace_new`
    Replace,
}

/// A condition evaluated against the current scope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub operator: ConditionOperator,
    pub left: Operand,
    /// Required for every operator except `not`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Operand>,
}

/// Comparison and boolean operators of the condition grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionOperator {
    Eq,
    Ne,
    Gt,
    Lt,
    Ge,
    Le,
    And,
    Or,
    Not,
}

/// A condition operand: a nested condition, or a JSON value
///
/// String values double as dotted paths into the scope; resolution falls back
/// to an integer literal and finally to the string itself (see
/// `engine::condition`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Operand {
    Condition(Box<Condition>),
    Literal(Value),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_rename_with_default_path() {
        let step: Transformation =
            serde_json::from_value(json!({"type": "rename", "source": "a", "target": "b"}))
                .unwrap();
        assert_eq!(step.path(), ".");
        assert_eq!(step.kind(), "rename");
    }

    #[test]
    fn test_decode_unknown_kind_fails() {
        let result: std::result::Result<Transformation, _> =
            serde_json::from_value(json!({"type": "transmogrify"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_conditional_with_nested_condition() {
        let step: Transformation = serde_json::from_value(json!({
            "type": "conditional",
            "path": ".person",
            "condition": {
                "operator": "and",
                "left": {"operator": "gt", "left": "age", "right": 18},
                "right": {"operator": "ne", "left": "name", "right": ""}
            },
            "true_transformation": {"type": "add", "target": "ok", "value": true}
        }))
        .unwrap();

        let Transformation::Conditional { condition, .. } = step else {
            panic!("expected conditional");
        };
        assert_eq!(condition.operator, ConditionOperator::And);
        assert!(matches!(condition.left, Operand::Condition(_)));
        assert!(matches!(condition.right, Some(Operand::Condition(_))));
    }

    #[test]
    fn test_decode_operand_literals() {
        let condition: Condition = serde_json::from_value(json!({
            "operator": "eq",
            "left": "status",
            "right": 42
        }))
        .unwrap();
        assert_eq!(condition.left, Operand::Literal(json!("status")));
        assert_eq!(condition.right, Some(Operand::Literal(json!(42))));
    }

    #[test]
    fn test_decode_unknown_operator_fails() {
        let result: std::result::Result<Condition, _> =
            serde_json::from_value(json!({"operator": "xor", "left": "a", "right": "b"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_roundtrip_serialization() {
        let step = Transformation::Concat {
            path: ".".to_string(),
            sources: vec!["first".to_string(), "last".to_string()],
            target: "full".to_string(),
            delimiter: Some(" ".to_string()),
        };
        let encoded = serde_json::to_value(&step).unwrap();
        assert_eq!(encoded["type"], "concat");
        let decoded: Transformation = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, step);
    }
}
