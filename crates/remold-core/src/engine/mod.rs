//! The transformation engine
//!
//! This module implements the dispatch loop: validate the configuration,
//! deep-copy the input, then fold the ordered steps over the working
//! document. `conditional` and `copy_structure` recurse through the single
//! [`apply`] entry point, so the catalog and the condition evaluator never
//! need their own dispatch logic.
//!
//! Copyright (c) 2026 Remold Team
//! Licensed under the Apache-2.0 license

pub mod condition;
pub mod ops;
pub mod path;

use crate::types::{Condition, TransformSet, Transformation};
use crate::{Error, Result};
use path::{apply_at_path, TransformPath};
use serde_json::Value;
use tracing::debug;

/// Transform `input` according to the configuration document
///
/// The configuration is validated before anything else happens; a shape
/// error fails the call with [`Error::InvalidConfig`] and the full list of
/// validation errors, and no step is applied. The input itself is never
/// mutated.
///
/// # Example
///
/// ```
/// use remold_core::transform;
/// use serde_json::json;
///
/// let input = json!({"a": 1, "b": 2});
/// let config = json!({"transformations": [{"type": "remove", "target": "b"}]});
/// assert_eq!(transform(&input, &config).unwrap(), json!({"a": 1}));
/// ```
pub fn transform(input: &Value, config: &Value) -> Result<Value> {
    let set = crate::validator::decode_config(config).map_err(Error::from)?;
    transform_decoded(input, &set)
}

/// Transform `input` with an already-decoded transformation set
///
/// Callers that validate once and execute many times (or that build the set
/// programmatically) enter here; [`transform`] is this plus decoding.
pub fn transform_decoded(input: &Value, set: &TransformSet) -> Result<Value> {
    let mut document = input.clone();
    for (index, step) in set.transformations.iter().enumerate() {
        debug!(step = index, kind = step.kind(), path = step.path(), "applying step");
        document = apply(document, step)?;
    }
    Ok(document)
}

/// Apply a single transformation step to a document
///
/// This is the recursion point: `conditional` branches and `copy_structure`
/// modifications call back into it with their nested steps.
pub fn apply(document: Value, step: &Transformation) -> Result<Value> {
    let path = TransformPath::parse(step.path())?;
    match step {
        Transformation::Rename { source, target, .. } => {
            apply_at_path(document, &path, &mut |scope| {
                Ok(ops::rename(scope, source, target))
            })
        }
        Transformation::Reorder { order, .. } => apply_at_path(document, &path, &mut |scope| {
            Ok(ops::reorder(scope, order))
        }),
        Transformation::AttributeToElement { source, target, .. } => {
            apply_at_path(document, &path, &mut |scope| {
                Ok(ops::attribute_to_element(scope, source, target))
            })
        }
        Transformation::ElementToAttribute { source, target, .. } => {
            apply_at_path(document, &path, &mut |scope| {
                Ok(ops::element_to_attribute(scope, source, target))
            })
        }
        Transformation::Conditional {
            condition,
            true_transformation,
            false_transformation,
            ..
        } => apply_at_path(document, &path, &mut |scope| {
            apply_conditional(
                scope,
                condition,
                true_transformation,
                false_transformation.as_deref(),
            )
        }),
        Transformation::Merge { sources, target, .. } => {
            apply_at_path(document, &path, &mut |scope| {
                Ok(ops::merge(scope, sources, target))
            })
        }
        Transformation::Split { source, targets, .. } => {
            apply_at_path(document, &path, &mut |scope| {
                Ok(ops::split(scope, source, targets))
            })
        }
        Transformation::Add { target, value, .. } => {
            apply_at_path(document, &path, &mut |scope| {
                Ok(ops::add(scope, target, value))
            })
        }
        Transformation::Remove { target, .. } => apply_at_path(document, &path, &mut |scope| {
            Ok(ops::remove(scope, target))
        }),
        Transformation::ModifyText {
            target,
            modification,
            replace_old,
            replace_new,
            ..
        } => apply_at_path(document, &path, &mut |scope| {
            Ok(ops::modify_text(
                scope,
                target,
                *modification,
                replace_old.as_deref(),
                replace_new.as_deref(),
            ))
        }),
        Transformation::CopyStructure { modifications, .. } => {
            apply_at_path(document, &path, &mut |scope| {
                apply_copy_structure(scope, modifications)
            })
        }
        Transformation::Group {
            source,
            target,
            group_by,
            ..
        } => apply_at_path(document, &path, &mut |scope| {
            Ok(ops::group(scope, source, target, group_by))
        }),
        Transformation::Concat {
            sources,
            target,
            delimiter,
            ..
        } => apply_at_path(document, &path, &mut |scope| {
            Ok(ops::concat(scope, sources, target, delimiter.as_deref()))
        }),
    }
}

fn apply_conditional(
    scope: Value,
    condition: &Condition,
    on_true: &Transformation,
    on_false: Option<&Transformation>,
) -> Result<Value> {
    if condition::evaluate(condition, &scope) {
        apply(scope, on_true)
    } else if let Some(step) = on_false {
        apply(scope, step)
    } else {
        Ok(scope)
    }
}

fn apply_copy_structure(scope: Value, modifications: &[Transformation]) -> Result<Value> {
    // the scope arrives by value, so rebuilding it in place is the same as
    // cloning it and discarding the original
    let mut replica = scope;
    for step in modifications {
        replica = apply(replica, step)?;
    }
    Ok(replica)
}
