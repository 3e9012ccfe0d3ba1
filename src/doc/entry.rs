//! Documentation attached to one (path, method) pair.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Type recorded for URL parameters nobody documented explicitly.
pub const DEFAULT_PARAM_TYPE: &str = "string";

/// Documentation for a single registered handler.
///
/// Every field is optional and omitted from the serialized form when empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocEntry {
    /// Short human title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Longer description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Request body schema or example. Opaque to the tree.
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub input: Option<Value>,

    /// Response body schema or example. Opaque to the tree.
    #[serde(rename = "out", skip_serializing_if = "Option::is_none")]
    pub output: Option<Value>,

    /// Form field name to type.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub form_value: BTreeMap<String, String>,

    /// URL parameter name to type.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub url_params: BTreeMap<String, String>,
}

impl DocEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn titled(title: impl Into<String>) -> Self {
        Self::new().title(title)
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn input(mut self, schema: Value) -> Self {
        self.input = Some(schema);
        self
    }

    #[must_use]
    pub fn output(mut self, schema: Value) -> Self {
        self.output = Some(schema);
        self
    }

    #[must_use]
    pub fn form_value(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.form_value.insert(name.into(), ty.into());
        self
    }

    #[must_use]
    pub fn url_param(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.url_params.insert(name.into(), ty.into());
        self
    }

    /// Record `name` as a URL parameter unless it is already documented.
    pub(crate) fn ensure_url_param(&mut self, name: &str) {
        if !self.url_params.contains_key(name) {
            self.url_params
                .insert(name.to_string(), DEFAULT_PARAM_TYPE.to_string());
        }
    }

    /// True when no field carries anything.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.input.is_none()
            && self.output.is_none()
            && self.form_value.is_empty()
            && self.url_params.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_entry_serializes_to_empty_object() {
        let doc = DocEntry::new();
        assert!(doc.is_empty());
        assert_eq!(serde_json::to_value(&doc).unwrap(), json!({}));
    }

    #[test]
    fn test_field_names() {
        let doc = DocEntry::titled("Create user")
            .description("Adds a user")
            .input(json!({"name": "string"}))
            .output(json!({"id": "u64"}))
            .form_value("avatar", "file")
            .url_param("id", "u64");

        assert_eq!(
            serde_json::to_value(&doc).unwrap(),
            json!({
                "title": "Create user",
                "description": "Adds a user",
                "in": {"name": "string"},
                "out": {"id": "u64"},
                "form_value": {"avatar": "file"},
                "url_params": {"id": "u64"},
            })
        );
    }

    #[test]
    fn test_ensure_url_param_keeps_explicit_type() {
        let mut doc = DocEntry::new().url_param("id", "u64");
        doc.ensure_url_param("id");
        doc.ensure_url_param("slug");
        assert_eq!(doc.url_params["id"], "u64");
        assert_eq!(doc.url_params["slug"], DEFAULT_PARAM_TYPE);
    }

    #[test]
    fn test_deserialize_partial() {
        let doc: DocEntry = serde_json::from_str(r#"{"title":"t","in":[1,2]}"#).unwrap();
        assert_eq!(doc.title.as_deref(), Some("t"));
        assert_eq!(doc.input, Some(json!([1, 2])));
        assert!(doc.url_params.is_empty());
    }
}
