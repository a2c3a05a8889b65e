//! Schema summarization
//!
//! Flattens a document's `paths` map into one row per path, suitable for a
//! chat listing.
//!
//! Known limitation: `parameters` is read from the path-level object only,
//! so parameters declared on individual operations are not listed. This
//! matches the behavior the bot has always had; merging per-method
//! parameters would change listings for existing deployments.

use crate::document::{Document, HTTP_METHODS};
use serde_json::Value;

/// Fallback used when a path item carries no description.
pub const NO_DESCRIPTION: &str = "No description available.";

/// One row of the `list_operations` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationSummary {
    /// Route path as declared in the document
    pub path: String,
    /// Comma-joined HTTP method names, in declaration order
    pub methods: String,
    /// Comma-joined path-level parameter names (may be empty)
    pub parameters: String,
    /// Path-level description, or [`NO_DESCRIPTION`]
    pub description: String,
}

/// Summarize every path in the document, in declaration order.
pub fn summarize(document: &Document) -> Vec<OperationSummary> {
    document
        .paths
        .iter()
        .map(|(path, item)| summarize_path(path, item))
        .collect()
}

fn summarize_path(path: &str, item: &Value) -> OperationSummary {
    let methods = match item.as_object() {
        Some(obj) => obj
            .keys()
            .filter(|k| HTTP_METHODS.contains(&k.as_str()))
            .cloned()
            .collect::<Vec<_>>()
            .join(", "),
        None => String::new(),
    };

    let parameters = item
        .get("parameters")
        .and_then(|v| v.as_array())
        .map(|params| {
            params
                .iter()
                .filter_map(parameter_name)
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default();

    let description = item
        .get("description")
        .and_then(|v| v.as_str())
        .unwrap_or(NO_DESCRIPTION)
        .to_string();

    OperationSummary {
        path: path.to_string(),
        methods,
        parameters,
        description,
    }
}

/// A parameter entry is either a bare name or an object with a `name` field.
fn parameter_name(param: &Value) -> Option<String> {
    match param {
        Value::String(name) => Some(name.clone()),
        Value::Object(obj) => obj
            .get("name")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string()),
        _ => None,
    }
}
