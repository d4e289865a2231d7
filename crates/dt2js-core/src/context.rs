//! RAML context loading.
//!
//! RAML 1.0 is a YAML dialect (the `#%RAML 1.0` header line is a YAML
//! comment), so the document is parsed as YAML straight into
//! `serde_json::Value` and the top-level `types` mapping becomes the context:
//! declared type name → type node. The context is built once per conversion
//! call and read-only afterwards.

use serde_json::{Map, Value};

use crate::error::ConvertError;

/// Parse raw RAML text into the declared-types context.
///
/// Every failure mode (text that is not valid YAML, a document whose root is
/// not a mapping, a document without a `types` mapping) collapses into
/// [`ConvertError::InvalidRamlData`].
pub fn load(raml: &str) -> Result<Map<String, Value>, ConvertError> {
    let doc: Value = serde_yaml::from_str(raml).map_err(|err| {
        tracing::debug!(%err, "RAML input failed to parse as YAML");
        ConvertError::InvalidRamlData
    })?;

    let types = doc
        .as_object()
        .and_then(|root| root.get("types"))
        .and_then(Value::as_object)
        .ok_or(ConvertError::InvalidRamlData)?;

    tracing::debug!(types = types.len(), "loaded RAML context");
    Ok(types.clone())
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const RAML: &str = "#%RAML 1.0\n\
                        title: Cat API\n\
                        types:\n\
                        \x20 Cat:\n\
                        \x20   type: object\n\
                        \x20   properties:\n\
                        \x20     name:\n\
                        \x20       type: string\n";

    #[test]
    fn test_load_returns_declared_types() {
        let ctx = load(RAML).unwrap();
        assert!(ctx.contains_key("Cat"));
        assert_eq!(ctx["Cat"]["type"], "object");
    }

    #[test]
    fn test_load_rejects_unparseable_text() {
        let err = load("{unbalanced: [").unwrap_err();
        assert_eq!(err, ConvertError::InvalidRamlData);
    }

    #[test]
    fn test_load_rejects_non_mapping_document() {
        // Parses as a plain YAML scalar: valid YAML, not usable RAML.
        let err = load("asdasdasdasd").unwrap_err();
        assert_eq!(err, ConvertError::InvalidRamlData);
        assert_eq!(err.to_string(), "Invalid RAML data");
    }

    #[test]
    fn test_load_rejects_document_without_types() {
        let err = load("#%RAML 1.0\ntitle: No Types Here\n").unwrap_err();
        assert_eq!(err, ConvertError::InvalidRamlData);
    }
}
