//! Error types for RAML → JSON Schema conversion.

use thiserror::Error;

/// Errors reported through the conversion entry point.
///
/// The transformation stage itself never fails: converters are total over any
/// object-shaped input and fall back to returning the node unchanged. Only
/// loading the RAML context and looking up the requested type can error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    /// The input text is not a usable RAML 1.0 document. The message is a
    /// fixed public contract; downstream tooling matches on it verbatim.
    #[error("Invalid RAML data")]
    InvalidRamlData,

    /// The requested type name is not declared in the document's `types`
    /// section.
    #[error("type {0} does not exist")]
    TypeNotFound(String),
}
