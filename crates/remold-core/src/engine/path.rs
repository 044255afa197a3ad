//! Transformation path parsing and scope selection
//!
//! Paths address "which object substructure is in scope", not "which single
//! value": `.person.age` selects `document.person` as the scope, and the
//! catalog function itself locates `age` inside it. The grammar is `"."` for
//! the root, or a leading `.` followed by `.`-separated segments, where a
//! segment is a plain key, `name[]` (every element of the array at `name`),
//! or `name[i]` (one zero-based element).
//!
//! Copyright (c) 2026 Remold Team
//! Licensed under the Apache-2.0 license

use crate::Result;
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors raised while parsing a transformation path
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Path does not start at the document root
    #[error("path must be \".\" or start with '.': '{path}'")]
    MissingRoot { path: String },

    /// A `.`-separated segment is empty
    #[error("empty segment in path '{path}'")]
    EmptySegment { path: String },

    /// A list segment has a malformed index
    #[error("malformed list index in segment '{segment}' of path '{path}'")]
    MalformedIndex { segment: String, path: String },

    /// A list segment appears before the end of the path
    #[error("list segment '{segment}' must be the final segment of path '{path}'")]
    ListSegmentNotFinal { segment: String, path: String },
}

/// One parsed path segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Plain object key
    Key(String),
    /// `name[]`: every element of the array at `name`
    Each(String),
    /// `name[i]`: the element at index `i` of the array at `name`
    Index(String, usize),
}

/// A parsed transformation path
///
/// An empty segment list is the root path `"."`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransformPath {
    segments: Vec<Segment>,
}

impl TransformPath {
    /// Parse a path string into its segments
    pub fn parse(path: &str) -> std::result::Result<Self, PathError> {
        if path == "." {
            return Ok(Self::default());
        }
        let Some(rest) = path.strip_prefix('.') else {
            return Err(PathError::MissingRoot {
                path: path.to_string(),
            });
        };

        let pieces: Vec<&str> = rest.split('.').collect();
        let mut segments = Vec::with_capacity(pieces.len());
        for (position, piece) in pieces.iter().enumerate() {
            let segment = Self::parse_segment(piece, path)?;
            let is_last = position + 1 == pieces.len();
            if !is_last && !matches!(segment, Segment::Key(_)) {
                return Err(PathError::ListSegmentNotFinal {
                    segment: (*piece).to_string(),
                    path: path.to_string(),
                });
            }
            segments.push(segment);
        }
        Ok(Self { segments })
    }

    fn parse_segment(piece: &str, path: &str) -> std::result::Result<Segment, PathError> {
        if piece.is_empty() {
            return Err(PathError::EmptySegment {
                path: path.to_string(),
            });
        }
        if let Some(name) = piece.strip_suffix("[]") {
            if name.is_empty() || name.contains('[') {
                return Err(PathError::MalformedIndex {
                    segment: piece.to_string(),
                    path: path.to_string(),
                });
            }
            return Ok(Segment::Each(name.to_string()));
        }
        if piece.contains('[') || piece.contains(']') {
            let inner = piece
                .strip_suffix(']')
                .and_then(|prefix| prefix.split_once('['));
            let Some((name, index)) = inner else {
                return Err(PathError::MalformedIndex {
                    segment: piece.to_string(),
                    path: path.to_string(),
                });
            };
            let parsed = index.parse::<usize>().ok();
            match (name.is_empty(), parsed) {
                (false, Some(index)) if !name.contains('[') => {
                    return Ok(Segment::Index(name.to_string(), index))
                }
                _ => {
                    return Err(PathError::MalformedIndex {
                        segment: piece.to_string(),
                        path: path.to_string(),
                    })
                }
            }
        }
        Ok(Segment::Key(piece.to_string()))
    }

    /// Whether this is the root path `"."`
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// The parsed segments, root-first
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

/// Apply `f` to the scope(s) the path selects inside `document`
///
/// Missing intermediate keys are created as empty objects; a missing terminal
/// key, a non-object intermediate value, or an out-of-range index leaves the
/// document unchanged. Catalog functions guard against non-object scopes
/// themselves, so `f` receives whatever value sits at the selected slot.
pub fn apply_at_path<F>(document: Value, path: &TransformPath, f: &mut F) -> Result<Value>
where
    F: FnMut(Value) -> Result<Value>,
{
    if path.is_root() {
        return f(document);
    }
    let mut document = document;
    apply_segments(&mut document, path.segments(), f)?;
    Ok(document)
}

fn apply_segments<F>(value: &mut Value, segments: &[Segment], f: &mut F) -> Result<()>
where
    F: FnMut(Value) -> Result<Value>,
{
    let Some((segment, rest)) = segments.split_first() else {
        return Ok(());
    };
    let Value::Object(map) = value else {
        return Ok(());
    };
    match segment {
        Segment::Key(name) if rest.is_empty() => {
            if let Some(slot) = map.get_mut(name) {
                let current = std::mem::take(slot);
                *slot = f(current)?;
            }
            Ok(())
        }
        Segment::Key(name) => {
            let child = map
                .entry(name.clone())
                .or_insert_with(|| Value::Object(Map::new()));
            apply_segments(child, rest, f)
        }
        Segment::Each(name) => {
            if let Some(Value::Array(items)) = map.get_mut(name) {
                for slot in items.iter_mut() {
                    let current = std::mem::take(slot);
                    *slot = f(current)?;
                }
            }
            Ok(())
        }
        Segment::Index(name, index) => {
            if let Some(Value::Array(items)) = map.get_mut(name) {
                if let Some(slot) = items.get_mut(*index) {
                    let current = std::mem::take(slot);
                    *slot = f(current)?;
                }
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tag(document: Value, path: &str) -> Value {
        let parsed = TransformPath::parse(path).unwrap();
        apply_at_path(document, &parsed, &mut |scope| {
            Ok(match scope {
                Value::Object(mut map) => {
                    map.insert("tagged".to_string(), json!(true));
                    Value::Object(map)
                }
                other => other,
            })
        })
        .unwrap()
    }

    #[test]
    fn test_parse_root() {
        let path = TransformPath::parse(".").unwrap();
        assert!(path.is_root());
    }

    #[test]
    fn test_parse_segments() {
        let path = TransformPath::parse(".a.b.c").unwrap();
        assert_eq!(
            path.segments(),
            &[
                Segment::Key("a".to_string()),
                Segment::Key("b".to_string()),
                Segment::Key("c".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_list_segments() {
        assert_eq!(
            TransformPath::parse(".items[]").unwrap().segments(),
            &[Segment::Each("items".to_string())]
        );
        assert_eq!(
            TransformPath::parse(".items[3]").unwrap().segments(),
            &[Segment::Index("items".to_string(), 3)]
        );
        assert_eq!(
            TransformPath::parse(".a.items[0]").unwrap().segments(),
            &[
                Segment::Key("a".to_string()),
                Segment::Index("items".to_string(), 0),
            ]
        );
    }

    #[test]
    fn test_parse_rejects_missing_root() {
        assert!(matches!(
            TransformPath::parse("person"),
            Err(PathError::MissingRoot { .. })
        ));
        assert!(matches!(
            TransformPath::parse(""),
            Err(PathError::MissingRoot { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_empty_segment() {
        assert!(matches!(
            TransformPath::parse(".a..b"),
            Err(PathError::EmptySegment { .. })
        ));
        assert!(matches!(
            TransformPath::parse(".a."),
            Err(PathError::EmptySegment { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_malformed_index() {
        assert!(matches!(
            TransformPath::parse(".items[x]"),
            Err(PathError::MalformedIndex { .. })
        ));
        assert!(matches!(
            TransformPath::parse(".items[-1]"),
            Err(PathError::MalformedIndex { .. })
        ));
        assert!(matches!(
            TransformPath::parse(".items["),
            Err(PathError::MalformedIndex { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_non_final_list_segment() {
        assert!(matches!(
            TransformPath::parse(".items[].name"),
            Err(PathError::ListSegmentNotFinal { .. })
        ));
        assert!(matches!(
            TransformPath::parse(".items[0].name"),
            Err(PathError::ListSegmentNotFinal { .. })
        ));
    }

    #[test]
    fn test_apply_at_root() {
        let out = tag(json!({"a": 1}), ".");
        assert_eq!(out, json!({"a": 1, "tagged": true}));
    }

    #[test]
    fn test_apply_at_nested_key() {
        let out = tag(json!({"person": {"name": "John"}}), ".person");
        assert_eq!(out["person"]["tagged"], json!(true));
    }

    #[test]
    fn test_apply_creates_intermediates() {
        let out = tag(json!({}), ".a.b");
        // `a` is created on the way down, the terminal `b` is not
        assert_eq!(out, json!({"a": {}}));
    }

    #[test]
    fn test_apply_missing_terminal_is_noop() {
        let out = tag(json!({"a": {}}), ".a.b");
        assert_eq!(out, json!({"a": {}}));
    }

    #[test]
    fn test_apply_each_element() {
        let out = tag(json!({"items": [{"n": 1}, {"n": 2}]}), ".items[]");
        assert_eq!(out["items"][0]["tagged"], json!(true));
        assert_eq!(out["items"][1]["tagged"], json!(true));
    }

    #[test]
    fn test_apply_each_passes_non_objects_through() {
        let out = tag(json!({"items": [1, "two", {"n": 3}]}), ".items[]");
        assert_eq!(out["items"][0], json!(1));
        assert_eq!(out["items"][1], json!("two"));
        assert_eq!(out["items"][2]["tagged"], json!(true));
    }

    #[test]
    fn test_apply_indexed_element() {
        let out = tag(json!({"items": [{"n": 1}, {"n": 2}]}), ".items[1]");
        assert_eq!(out["items"][0], json!({"n": 1}));
        assert_eq!(out["items"][1]["tagged"], json!(true));
    }

    #[test]
    fn test_apply_index_out_of_range_is_noop() {
        let out = tag(json!({"items": [{"n": 1}]}), ".items[7]");
        assert_eq!(out, json!({"items": [{"n": 1}]}));
    }

    #[test]
    fn test_apply_through_non_object_is_noop() {
        let out = tag(json!({"a": 5}), ".a.b");
        assert_eq!(out, json!({"a": 5}));
    }
}
