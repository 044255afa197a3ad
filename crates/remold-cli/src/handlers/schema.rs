//! Schema command handler
//!
//! Renders the configuration document model as a JSON Schema so external
//! tools can validate or autocomplete transformation configs.

use crate::cli::SchemaArgs;
use crate::error::Result;
use crate::output::OutputWriter;
use serde_json::{json, Value};

/// Handle the schema command
pub fn handle_schema(args: SchemaArgs, output: &mut OutputWriter) -> Result<()> {
    let schema = config_schema();
    let rendered = if args.compact {
        serde_json::to_string(&schema)?
    } else {
        serde_json::to_string_pretty(&schema)?
    };
    output.emit(&rendered, None)?;
    Ok(())
}

/// JSON Schema (draft 2020-12) for the configuration document
pub fn config_schema() -> Value {
    let step = |kind: &str, properties: Value, required: &[&str]| -> Value {
        let mut merged = json!({
            "type": {"const": kind},
            "path": {"type": "string", "default": "."}
        });
        if let (Some(base), Some(extra)) = (merged.as_object_mut(), properties.as_object()) {
            for (key, value) in extra {
                base.insert(key.clone(), value.clone());
            }
        }
        let mut required_keys = vec![json!("type")];
        required_keys.extend(required.iter().map(|key| json!(key)));
        json!({
            "type": "object",
            "required": required_keys,
            "properties": merged
        })
    };

    let string = || json!({"type": "string"});
    let string_list = || json!({"type": "array", "items": {"type": "string"}});

    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "Remold configuration",
        "type": "object",
        "required": ["transformations"],
        "properties": {
            "transformations": {
                "type": "array",
                "items": {"$ref": "#/$defs/transformation"}
            }
        },
        "$defs": {
            "transformation": {
                "oneOf": [
                    {"$ref": "#/$defs/rename"},
                    {"$ref": "#/$defs/reorder"},
                    {"$ref": "#/$defs/attribute_to_element"},
                    {"$ref": "#/$defs/element_to_attribute"},
                    {"$ref": "#/$defs/conditional"},
                    {"$ref": "#/$defs/merge"},
                    {"$ref": "#/$defs/split"},
                    {"$ref": "#/$defs/add"},
                    {"$ref": "#/$defs/remove"},
                    {"$ref": "#/$defs/modify_text"},
                    {"$ref": "#/$defs/copy_structure"},
                    {"$ref": "#/$defs/group"},
                    {"$ref": "#/$defs/concat"}
                ]
            },
            "operand": {
                "anyOf": [
                    {"$ref": "#/$defs/condition"},
                    {"description": "dotted path into the scope, or a literal JSON value"}
                ]
            },
            "condition": {
                "type": "object",
                "required": ["operator", "left"],
                "properties": {
                    "operator": {"enum": ["eq", "ne", "gt", "lt", "ge", "le", "and", "or", "not"]},
                    "left": {"$ref": "#/$defs/operand"},
                    "right": {"$ref": "#/$defs/operand"}
                }
            },
            "rename": step(
                "rename",
                json!({"source": string(), "target": string()}),
                &["source", "target"],
            ),
            "reorder": step("reorder", json!({"order": string_list()}), &["order"]),
            "attribute_to_element": step(
                "attribute_to_element",
                json!({"source": string(), "target": string()}),
                &["source", "target"],
            ),
            "element_to_attribute": step(
                "element_to_attribute",
                json!({"source": string(), "target": string()}),
                &["source", "target"],
            ),
            "conditional": step(
                "conditional",
                json!({
                    "condition": {"$ref": "#/$defs/condition"},
                    "true_transformation": {"$ref": "#/$defs/transformation"},
                    "false_transformation": {"$ref": "#/$defs/transformation"}
                }),
                &["condition", "true_transformation"],
            ),
            "merge": step(
                "merge",
                json!({"sources": string_list(), "target": string()}),
                &["sources", "target"],
            ),
            "split": step(
                "split",
                json!({"source": string(), "targets": string_list()}),
                &["source", "targets"],
            ),
            "add": step("add", json!({"target": string(), "value": {}}), &["target", "value"]),
            "remove": step("remove", json!({"target": string()}), &["target"]),
            "modify_text": step(
                "modify_text",
                json!({
                    "target": string(),
                    "modification": {
                        "enum": ["uppercase", "lowercase", "capitalize", "title", "strip", "replace"]
                    },
                    "replace_old": string(),
                    "replace_new": string()
                }),
                &["target", "modification"],
            ),
            "copy_structure": step(
                "copy_structure",
                json!({
                    "modifications": {
                        "type": "array",
                        "items": {"$ref": "#/$defs/transformation"}
                    }
                }),
                &["modifications"],
            ),
            "group": step(
                "group",
                json!({"source": string(), "target": string(), "group_by": string()}),
                &["source", "target", "group_by"],
            ),
            "concat": step(
                "concat",
                json!({"sources": string_list(), "target": string(), "delimiter": string()}),
                &["sources", "target"],
            )
        }
    })
}
