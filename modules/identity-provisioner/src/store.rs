//! Consumed port: the document store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tenantguard_query::{Expr, SelectQuery};

/// Errors surfaced by the document store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Query or save failure in the backing store.
    #[error("document store error: {0}")]
    Backend(String),
}

/// A document as seen through the store port.
///
/// Addressed by repository path; content is an open field map so tenant
/// configuration documents and regular documents travel through the same
/// port.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Document {
    /// Repository path, unique within the store.
    pub path: String,
    /// Named field values.
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl Document {
    /// Document at a path with no fields.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Set a string field, builder style.
    #[must_use]
    pub fn with_string_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields
            .insert(name.into(), serde_json::Value::String(value.into()));
        self
    }

    /// Read a string field.
    #[must_use]
    pub fn string_field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(serde_json::Value::as_str)
    }

    /// Read a list-of-strings field. Non-string entries are skipped.
    #[must_use]
    pub fn string_list_field(&self, name: &str) -> Option<Vec<String>> {
        let entries = self.fields.get(name)?.as_array()?;
        Some(
            entries
                .iter()
                .filter_map(|value| value.as_str().map(str::to_owned))
                .collect(),
        )
    }

    /// Write a list-of-strings field.
    pub fn set_string_list_field(&mut self, name: impl Into<String>, values: Vec<String>) {
        self.fields.insert(
            name.into(),
            serde_json::Value::Array(values.into_iter().map(serde_json::Value::String).collect()),
        );
    }
}

/// The document store.
///
/// The store owns query execution; this port only carries the narrow
/// evaluate/search surface the provisioning and policy layers consume.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// First document matching a filter expression, if any.
    ///
    /// When several documents match, which one is first is the store's
    /// choice; callers must not depend on more than "some match".
    async fn query_one(&self, filter: &Expr) -> Result<Option<Document>, StoreError>;

    /// Persist a document.
    async fn save(&self, document: Document) -> Result<(), StoreError>;

    /// Execute a structured search.
    async fn search(&self, query: &SelectQuery) -> Result<Vec<Document>, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_field_round_trip() {
        let document = Document::new("/acme").with_string_field("tenantId", "acme");
        assert_eq!(document.string_field("tenantId"), Some("acme"));
        assert_eq!(document.string_field("missing"), None);
    }

    #[test]
    fn string_list_field_round_trip() {
        let mut document = Document::new("/acme");
        document.set_string_list_field("administrators", vec!["alice@acme.com".to_owned()]);
        assert_eq!(
            document.string_list_field("administrators"),
            Some(vec!["alice@acme.com".to_owned()])
        );
    }

    #[test]
    fn string_list_field_skips_non_string_entries() {
        let mut document = Document::new("/acme");
        document
            .fields
            .insert("administrators".to_owned(), serde_json::json!(["a", 1, "b"]));
        assert_eq!(
            document.string_list_field("administrators"),
            Some(vec!["a".to_owned(), "b".to_owned()])
        );
    }
}
