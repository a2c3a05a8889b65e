//! OpenAPI document model
//!
//! Only the slice of the schema the bot presents is modeled: the `paths`
//! map. Path items are kept as raw JSON objects because their keys mix HTTP
//! methods with fixed fields (`description`, `parameters`). Map ordering is
//! preserved by serde_json's `preserve_order` feature, so listings follow
//! the document's declared path order.

use apibot_core::{Error, Result};
use serde::Deserialize;
use serde_json::{Map, Value};

/// HTTP methods recognized as operations within a path item.
pub const HTTP_METHODS: &[&str] = &[
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// A parsed OpenAPI document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Document {
    /// Route path -> path item object
    #[serde(default)]
    pub paths: Map<String, Value>,
}

impl Document {
    /// Parse a document from a raw JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| Error::malformed_schema(e.to_string()))
    }

    /// Number of declared paths.
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_no_paths_key() {
        let doc = Document::from_value(json!({"openapi": "3.0.0"})).unwrap();
        assert_eq!(doc.path_count(), 0);
    }

    #[test]
    fn test_from_value_paths_wrong_type() {
        let err = Document::from_value(json!({"paths": ["not", "a", "map"]})).unwrap_err();
        assert!(matches!(err, Error::MalformedSchema(_)));
    }

    #[test]
    fn test_paths_preserve_declaration_order() {
        let doc = Document::from_value(json!({
            "paths": {
                "/zeta": {},
                "/alpha": {},
                "/mid": {}
            }
        }))
        .unwrap();

        let keys: Vec<&String> = doc.paths.keys().collect();
        assert_eq!(keys, ["/zeta", "/alpha", "/mid"]);
    }
}
