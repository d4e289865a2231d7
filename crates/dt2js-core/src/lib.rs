//! Convert RAML 1.0 data type declarations into JSON Schema draft-04
//! documents.
//!
//! The converter walks a declared type's node tree and rewrites RAML type
//! vocabulary (`union`, `nil`, `file`, the date/time family, per-property
//! `required` flags) into draft-04 vocabulary, then stamps the root with the
//! draft-04 `$schema` URL. Instance validation, external type libraries, and
//! other schema drafts are out of scope.
//!
//! ## Usage
//!
//! ```rust
//! use dt2js_core::convert;
//!
//! let raml = "#%RAML 1.0
//! title: Cat API
//! types:
//!   Cat:
//!     type: object
//!     properties:
//!       name:
//!         type: string
//!         required: true
//! ";
//!
//! let schema = convert(raml, "Cat").unwrap();
//! assert_eq!(schema["$schema"], "http://json-schema.org/draft-04/schema#");
//! assert_eq!(schema["required"], serde_json::json!(["name"]));
//! ```

pub mod constants;
pub mod context;
pub mod converters;
pub mod error;
pub mod transform;

pub use converters::{convert_date_type, convert_file_type, convert_type};
pub use error::ConvertError;
pub use transform::{add_root_keywords, process_array, process_nested, schema_form};

use serde_json::Value;

/// Convert the named type declared in `raml` into a JSON Schema document.
///
/// Loads the document's declared-types context, looks up `type_name`, runs
/// the recursive transformer with an empty trace, and adds the root
/// `$schema` keyword. The transformation itself cannot fail; only context
/// loading and the type lookup produce errors.
pub fn convert(raml: &str, type_name: &str) -> Result<Value, ConvertError> {
    let ctx = context::load(raml)?;
    let node = ctx
        .get(type_name)
        .cloned()
        .ok_or_else(|| ConvertError::TypeNotFound(type_name.to_string()))?;

    tracing::debug!(type_name, "converting RAML type to JSON Schema");
    let schema = transform::schema_form(node, &[]);
    Ok(add_root_keywords(schema))
}

/// Callback flavor of [`convert`], mirroring the original completion
/// protocol.
///
/// `done` is invoked exactly once, synchronously, with either the schema or
/// the error. `FnOnce` plus the `Result` carrier make any other calling
/// pattern unrepresentable.
pub fn dt2js<F>(raml: &str, type_name: &str, done: F)
where
    F: FnOnce(Result<Value, ConvertError>),
{
    done(convert(raml, type_name));
}
