//! Configuration shape validation
//!
//! Decode-with-errors: the configuration document is checked against the
//! transformation model and either yields a typed [`TransformSet`] or a list
//! of structured [`ValidationError`]s, one per broken step. Validation runs
//! before any mutation, so a failing config never partially applies.
//!
//! Copyright (c) 2026 Remold Team
//! Licensed under the Apache-2.0 license

use crate::engine::path::TransformPath;
use crate::types::{
    Condition, ConditionOperator, Operand, TextModification, TransformSet, Transformation,
};
use crate::Result;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// A single validation failure with the path of the offending field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    /// Dotted location inside the configuration document
    pub field_path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
}

impl ValidationError {
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field_path: field_path.into(),
            message: message.into(),
            expected: None,
            actual: None,
        }
    }

    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    pub fn with_actual(mut self, actual: impl Into<String>) -> Self {
        self.actual = Some(actual.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.field_path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.field_path, self.message)
        }
    }
}

/// Decode and validate a configuration document
///
/// Collects every error instead of stopping at the first: per-step decode
/// failures, malformed paths (nested transformations included), a missing
/// right operand on a binary condition operator, and a `replace` text
/// modification without its replacement strings.
pub fn decode_config(config: &Value) -> std::result::Result<TransformSet, Vec<ValidationError>> {
    let Some(root) = config.as_object() else {
        return Err(vec![ValidationError::new(
            "",
            "configuration document must be a JSON object",
        )
        .with_expected("object")
        .with_actual(type_name(config))]);
    };
    let Some(steps) = root.get("transformations") else {
        return Err(vec![ValidationError::new(
            "transformations",
            "missing required field",
        )
        .with_expected("array of transformation steps")]);
    };
    let Some(steps) = steps.as_array() else {
        return Err(vec![ValidationError::new(
            "transformations",
            "field must be an array",
        )
        .with_expected("array")
        .with_actual(type_name(steps))]);
    };

    let mut errors = Vec::new();
    let mut decoded = Vec::with_capacity(steps.len());
    for (index, raw) in steps.iter().enumerate() {
        let field_path = format!("transformations[{index}]");
        match serde_json::from_value::<Transformation>(raw.clone()) {
            Ok(step) => {
                check_step(&step, &field_path, &mut errors);
                decoded.push(step);
            }
            Err(err) => errors.push(ValidationError::new(field_path, err.to_string())),
        }
    }

    if errors.is_empty() {
        Ok(TransformSet {
            transformations: decoded,
        })
    } else {
        Err(errors)
    }
}

/// Parse and validate a configuration document from a JSON string
pub fn decode_config_str(config: &str) -> Result<TransformSet> {
    let value: Value = serde_json::from_str(config)?;
    decode_config(&value).map_err(crate::Error::from)
}

fn check_step(step: &Transformation, field_path: &str, errors: &mut Vec<ValidationError>) {
    if let Err(err) = TransformPath::parse(step.path()) {
        errors.push(
            ValidationError::new(format!("{field_path}.path"), err.to_string())
                .with_expected("\".\", \".key\", \".key[]\" or \".key[i]\" segments")
                .with_actual(step.path().to_string()),
        );
    }
    match step {
        Transformation::ModifyText {
            modification: TextModification::Replace,
            replace_old,
            replace_new,
            ..
        } => {
            if replace_old.is_none() || replace_new.is_none() {
                errors.push(
                    ValidationError::new(
                        field_path.to_string(),
                        "replace modification requires both replace_old and replace_new",
                    )
                    .with_expected("replace_old and replace_new strings"),
                );
            }
        }
        Transformation::Conditional {
            condition,
            true_transformation,
            false_transformation,
            ..
        } => {
            check_condition(condition, &format!("{field_path}.condition"), errors);
            check_step(
                true_transformation,
                &format!("{field_path}.true_transformation"),
                errors,
            );
            if let Some(step) = false_transformation {
                check_step(step, &format!("{field_path}.false_transformation"), errors);
            }
        }
        Transformation::CopyStructure { modifications, .. } => {
            for (index, nested) in modifications.iter().enumerate() {
                check_step(
                    nested,
                    &format!("{field_path}.modifications[{index}]"),
                    errors,
                );
            }
        }
        _ => {}
    }
}

fn check_condition(condition: &Condition, field_path: &str, errors: &mut Vec<ValidationError>) {
    if condition.operator != ConditionOperator::Not && condition.right.is_none() {
        errors.push(
            ValidationError::new(
                format!("{field_path}.right"),
                format!(
                    "operator '{}' requires a right operand",
                    operator_tag(condition.operator)
                ),
            )
            .with_expected("condition, path, or literal"),
        );
    }
    if let Operand::Condition(inner) = &condition.left {
        check_condition(inner, &format!("{field_path}.left"), errors);
    }
    if let Some(Operand::Condition(inner)) = &condition.right {
        check_condition(inner, &format!("{field_path}.right"), errors);
    }
}

fn operator_tag(operator: ConditionOperator) -> &'static str {
    match operator {
        ConditionOperator::Eq => "eq",
        ConditionOperator::Ne => "ne",
        ConditionOperator::Gt => "gt",
        ConditionOperator::Lt => "lt",
        ConditionOperator::Ge => "ge",
        ConditionOperator::Le => "le",
        ConditionOperator::And => "and",
        ConditionOperator::Or => "or",
        ConditionOperator::Not => "not",
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
