// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document-backed value source.
//!
//! This module provides the value source used whenever a feature's variables have
//! been parsed into a [`Document`]. Lookups are pure and never block.

use crate::domain::{Document, FeatureId, Result};
use crate::ports::{DocumentParser, ValueSource};
use std::sync::Arc;

/// A value source backed by an in-memory document.
///
/// `get_child` re-wraps the nested object as a new `DocumentSource`. The nested
/// entries are shared with the parent, not copied.
///
/// # Examples
///
/// ```rust
/// use feature_variables::adapters::DocumentSource;
/// use feature_variables::ports::ValueSource;
///
/// let source = DocumentSource::from_json_str(
///     r#"{ "positiveButton": { "text": "Continue" } }"#,
/// ).unwrap();
///
/// let button = source.get_child("positiveButton").unwrap();
/// assert_eq!(button.get_string("text").as_deref(), Some("Continue"));
/// assert!(source.get_child("negativeButton").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DocumentSource {
    document: Document,
    feature: Option<FeatureId>,
}

impl DocumentSource {
    /// Creates a source over an already parsed document.
    pub fn new(document: Document) -> Self {
        Self {
            document,
            feature: None,
        }
    }

    /// Tags this source with the feature it was resolved for.
    pub fn for_feature(mut self, feature: impl Into<FeatureId>) -> Self {
        self.feature = Some(feature.into());
        self
    }

    /// Parses JSON text into a document source.
    ///
    /// Fails if the text is malformed or its root is not an object.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(Self::new(Document::from_json_str(content)?))
    }

    /// Parses text with the given parser into a document source.
    pub fn parse(parser: &dyn DocumentParser, content: &str) -> Result<Self> {
        Ok(Self::new(parser.parse(content)?))
    }

    /// Returns the wrapped document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl From<Document> for DocumentSource {
    fn from(document: Document) -> Self {
        Self::new(document)
    }
}

impl ValueSource for DocumentSource {
    fn name(&self) -> &str {
        "document"
    }

    fn feature(&self) -> Option<&FeatureId> {
        self.feature.as_ref()
    }

    fn get_string(&self, key: &str) -> Option<String> {
        self.document.get_string(key).map(str::to_string)
    }

    fn get_int(&self, key: &str) -> Option<i64> {
        self.document.get_int(key)
    }

    fn get_bool(&self, key: &str) -> Option<bool> {
        self.document.get_bool(key)
    }

    fn get_child(&self, key: &str) -> Option<Arc<dyn ValueSource>> {
        self.document.get_object(key).map(|child| {
            Arc::new(DocumentSource {
                document: child.clone(),
                feature: self.feature.clone(),
            }) as Arc<dyn ValueSource>
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> DocumentSource {
        DocumentSource::from_json_str(
            r#"{
                "title": "Self Destruct",
                "countdown": 10,
                "armed": true,
                "positiveButton": { "color": "red", "text": "Continue" }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_document_source_scalars() {
        let source = source();
        assert_eq!(source.name(), "document");
        assert_eq!(source.get_string("title").as_deref(), Some("Self Destruct"));
        assert_eq!(source.get_int("countdown"), Some(10));
        assert_eq!(source.get_bool("armed"), Some(true));
    }

    #[test]
    fn test_document_source_type_mismatch() {
        let source = source();
        assert_eq!(source.get_string("countdown"), None);
        assert_eq!(source.get_int("title"), None);
        assert_eq!(source.get_bool("title"), None);
        assert!(source.get_child("title").is_none());
    }

    #[test]
    fn test_document_source_missing_key() {
        let source = source();
        assert_eq!(source.get_string("missing"), None);
        assert!(source.get_child("missing").is_none());
    }

    #[test]
    fn test_document_source_child() {
        let source = source();
        let child = source.get_child("positiveButton").unwrap();
        assert_eq!(child.name(), "document");
        assert_eq!(child.get_string("color").as_deref(), Some("red"));
        assert_eq!(child.get_string("title"), None);
    }

    #[test]
    fn test_document_source_feature_reaches_children() {
        assert_eq!(source().feature(), None);

        let source = source().for_feature("self-destruct-dialog");
        assert_eq!(
            source.feature().map(FeatureId::as_str),
            Some("self-destruct-dialog")
        );
        let child = source.get_child("positiveButton").unwrap();
        assert_eq!(
            child.feature().map(FeatureId::as_str),
            Some("self-destruct-dialog")
        );
    }

    #[test]
    fn test_document_source_malformed() {
        assert!(DocumentSource::from_json_str("{").is_err());
    }

    #[test]
    fn test_document_source_repeatable_reads() {
        let source = source();
        assert_eq!(source.get_string("title"), source.get_string("title"));
    }
}
