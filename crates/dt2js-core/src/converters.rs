//! Scalar type converters.
//!
//! Node-level rewrites of RAML-specific `type` tags into JSON Schema draft-04
//! vocabulary. Every converter is total: a node whose `type` is missing,
//! non-string, or unrecognized comes back unchanged, and non-object input
//! passes straight through.

use serde_json::{json, Map, Value};

use crate::constants::{
    DATE_ONLY_PATTERN, DATE_TIME_ONLY_PATTERN, RFC2616_DATETIME_PATTERN,
    RFC3339_DATETIME_PATTERN, TIME_ONLY_PATTERN,
};

/// Rewrite a node according to its RAML `type` tag.
///
/// This match is the single dispatch table from tag to behavior; no other
/// code branches on RAML type names.
///
/// | `type`                                            | result                    |
/// |---------------------------------------------------|---------------------------|
/// | `union`                                           | `type: "object"`          |
/// | `nil`                                             | `type: "null"`            |
/// | `file`                                            | [`convert_file_type`]     |
/// | `date-only`, `time-only`, `datetime-only`, `datetime` | [`convert_date_type`] |
/// | anything else                                     | unchanged                 |
pub fn convert_type(node: Value) -> Value {
    let tag = match node.get("type").and_then(Value::as_str) {
        Some(tag) => tag.to_owned(),
        None => return node,
    };

    match tag.as_str() {
        "union" => set_type(node, "object"),
        "nil" => set_type(node, "null"),
        "file" => convert_file_type(node),
        "date-only" | "time-only" | "datetime-only" | "datetime" => convert_date_type(node),
        _ => node,
    }
}

fn set_type(mut node: Value, to: &str) -> Value {
    if let Some(obj) = node.as_object_mut() {
        obj.insert("type".to_string(), Value::String(to.to_string()));
    }
    node
}

/// Convert a `file` node to a draft-04 binary string.
///
/// Sets `type: "string"` and `media.binaryEncoding: "binary"`. A `fileTypes`
/// sequence of MIME types moves into `media.anyOf` as `{"mediaType": …}`
/// objects, order preserved; a non-sequence `fileTypes` value is left alone.
pub fn convert_file_type(node: Value) -> Value {
    let mut obj = match node {
        Value::Object(obj) => obj,
        other => return other,
    };

    obj.insert("type".to_string(), json!("string"));

    let mut media = Map::new();
    media.insert("binaryEncoding".to_string(), json!("binary"));
    match obj.remove("fileTypes") {
        Some(Value::Array(file_types)) => {
            let any_of: Vec<Value> = file_types
                .into_iter()
                .map(|media_type| json!({ "mediaType": media_type }))
                .collect();
            media.insert("anyOf".to_string(), Value::Array(any_of));
        }
        Some(other) => {
            // Not a sequence of MIME types; put it back untouched.
            obj.insert("fileTypes".to_string(), other);
        }
        None => {}
    }
    obj.insert("media".to_string(), Value::Object(media));

    Value::Object(obj)
}

/// Convert a date/time node to a pattern-constrained draft-04 string.
///
/// The pattern comes from the fixed constants table; `datetime` additionally
/// keys off `format` (case-insensitive, default `rfc3339`). The `format`
/// keyword is not draft-04 vocabulary for these shapes and is deleted on
/// every branch, including unrecognized `datetime` formats, which get no
/// pattern at all.
pub fn convert_date_type(node: Value) -> Value {
    let mut obj = match node {
        Value::Object(obj) => obj,
        other => return other,
    };

    let pattern = match obj.get("type").and_then(Value::as_str) {
        Some("date-only") => Some(DATE_ONLY_PATTERN),
        Some("time-only") => Some(TIME_ONLY_PATTERN),
        Some("datetime-only") => Some(DATE_TIME_ONLY_PATTERN),
        Some("datetime") => match obj.get("format").and_then(Value::as_str) {
            None => Some(RFC3339_DATETIME_PATTERN),
            Some(format) if format.eq_ignore_ascii_case("rfc3339") => {
                Some(RFC3339_DATETIME_PATTERN)
            }
            Some(format) if format.eq_ignore_ascii_case("rfc2616") => {
                Some(RFC2616_DATETIME_PATTERN)
            }
            Some(_) => None,
        },
        _ => return Value::Object(obj),
    };

    obj.insert("type".to_string(), json!("string"));
    obj.remove("format");
    if let Some(pattern) = pattern {
        obj.insert("pattern".to_string(), json!(pattern));
    }

    Value::Object(obj)
}

// ===========================================================================
// Tests
// ===========================================================================
