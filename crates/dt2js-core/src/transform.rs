//! The recursive schema transformer and its nested-processing helpers.
//!
//! [`schema_form`] is the single recursive entry for subtree transformation.
//! For an object node it runs, in order: required-hoisting, nested processing
//! (collecting a partial delta of rewritten fields), top-level type
//! conversion, and a final merge of the delta over the converted node.
//! Recursion depth equals the nesting depth of the source declaration.
//!
//! The `trace` parameter records the type names visited along the current
//! descent. It is threaded through every recursive call but never populated
//! by the current entry point: a hook for cycle detection over resolved
//! type references, which this converter does not perform.

use serde_json::{Map, Value};

use crate::constants::DRAFT4_SCHEMA_URI;
use crate::converters::convert_type;

/// Transform one subtree from RAML type vocabulary to draft-04 vocabulary.
///
/// Non-object-mapping input (scalars, sequences) is the recursion's base case
/// and comes back unchanged.
pub fn schema_form(node: Value, trace: &[String]) -> Value {
    let mut obj = match node {
        Value::Object(obj) => obj,
        leaf => return leaf,
    };

    hoist_required(&mut obj);
    let delta = process_nested(&obj, trace);

    // Converters keep object nodes object-shaped; the arm only restores the
    // match's totality.
    let mut obj = match convert_type(Value::Object(obj)) {
        Value::Object(obj) => obj,
        other => return other,
    };

    for (key, value) in delta {
        obj.insert(key, value);
    }
    Value::Object(obj)
}

/// Hoist per-property `required: true` flags into the root `required` list.
///
/// Only direct entries of `properties` are scanned; a flag nested inside an
/// array property's `items` stays where it is and the root list stays empty
/// for that branch. Hoisted names append to an existing root list, so a node
/// that has already been through a pass is a fixed point.
fn hoist_required(obj: &mut Map<String, Value>) {
    let hoisted = match obj.get_mut("properties") {
        Some(Value::Object(props)) => {
            let mut hoisted = Vec::new();
            for (name, prop) in props.iter_mut() {
                if prop.get("required") == Some(&Value::Bool(true)) {
                    if let Some(prop) = prop.as_object_mut() {
                        prop.remove("required");
                    }
                    hoisted.push(Value::String(name.clone()));
                }
            }
            hoisted
        }
        _ => return,
    };

    match obj.get_mut("required") {
        Some(Value::Array(required)) => required.extend(hoisted),
        _ => {
            obj.insert("required".to_string(), Value::Array(hoisted));
        }
    }
}

/// Run each element of a sequence through the full conversion pipeline.
pub fn process_array(seq: Vec<Value>, trace: &[String]) -> Vec<Value> {
    seq.into_iter()
        .map(|element| schema_form(convert_type(element), trace))
        .collect()
}

/// Process the sequence- and mapping-valued fields of a node.
///
/// Returns only the fields this step rewrote; scalar fields are omitted and
/// survive through the caller's merge of the delta over the original node.
pub fn process_nested(node: &Map<String, Value>, trace: &[String]) -> Map<String, Value> {
    let mut delta = Map::new();
    for (key, value) in node {
        match value {
            Value::Array(seq) => {
                delta.insert(key.clone(), Value::Array(process_array(seq.clone(), trace)));
            }
            Value::Object(_) => {
                delta.insert(key.clone(), schema_form(convert_type(value.clone()), trace));
            }
            _ => {}
        }
    }
    delta
}

/// Ensure the emitted document declares its schema dialect.
///
/// Sets `$schema` to the draft-04 URL when absent; an existing value is never
/// overwritten.
pub fn add_root_keywords(mut schema: Value) -> Value {
    if let Some(obj) = schema.as_object_mut() {
        if !obj.contains_key("$schema") {
            obj.insert(
                "$schema".to_string(),
                Value::String(DRAFT4_SCHEMA_URI.to_string()),
            );
        }
    }
    schema
}

// ===========================================================================
// Tests
// ===========================================================================
