// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory feature client.
//!
//! Holds serialized feature documents and experiment branches in maps. Useful for
//! tests, demos and hosts that receive feature documents out of band.

use crate::domain::{Document, FeatureId, Result};
use crate::ports::FeatureClient;
use std::collections::HashMap;

/// A feature client answering from in-memory documents.
///
/// Documents are stored as text exactly as supplied, so a malformed document is
/// reported as a parse error when it is read, the same way a real boundary would
/// hand over bad JSON.
///
/// # Examples
///
/// ```rust
/// use feature_variables::adapters::InMemoryFeatureClient;
/// use feature_variables::domain::FeatureId;
/// use feature_variables::ports::FeatureClient;
///
/// let client = InMemoryFeatureClient::new()
///     .with_feature("example1", r#"{ "buttonColor": "red" }"#)
///     .with_branch("features-api", "json");
///
/// let feature = FeatureId::from("example1");
/// assert_eq!(
///     client.feature_variable_string(&feature, "buttonColor").unwrap().as_deref(),
///     Some("red")
/// );
/// assert_eq!(client.experiment_branch("features-api").unwrap().as_deref(), Some("json"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryFeatureClient {
    documents: HashMap<FeatureId, String>,
    branches: HashMap<String, String>,
}

impl InMemoryFeatureClient {
    /// Creates a client with no features and no enrollments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the serialized variables document of a feature.
    pub fn with_feature(mut self, feature: impl Into<FeatureId>, json: impl Into<String>) -> Self {
        self.documents.insert(feature.into(), json.into());
        self
    }

    /// Enrolls the client in `branch` of `experiment_slug`.
    pub fn with_branch(mut self, experiment_slug: impl Into<String>, branch: impl Into<String>) -> Self {
        self.branches.insert(experiment_slug.into(), branch.into());
        self
    }

    fn document(&self, feature: &FeatureId) -> Result<Option<Document>> {
        self.documents
            .get(feature)
            .map(|json| Document::from_json_str(json))
            .transpose()
    }
}

impl FeatureClient for InMemoryFeatureClient {
    fn name(&self) -> &str {
        "in-memory"
    }

    fn feature_variables_json(&self, feature: &FeatureId) -> Result<Option<String>> {
        Ok(self.documents.get(feature).cloned())
    }

    fn feature_variable_string(&self, feature: &FeatureId, key: &str) -> Result<Option<String>> {
        Ok(self
            .document(feature)?
            .and_then(|doc| doc.get_string(key).map(str::to_string)))
    }

    fn feature_variable_int(&self, feature: &FeatureId, key: &str) -> Result<Option<i64>> {
        Ok(self.document(feature)?.and_then(|doc| doc.get_int(key)))
    }

    fn feature_variable_bool(&self, feature: &FeatureId, key: &str) -> Result<Option<bool>> {
        Ok(self.document(feature)?.and_then(|doc| doc.get_bool(key)))
    }

    fn feature_variable_json(&self, feature: &FeatureId, key: &str) -> Result<Option<String>> {
        Ok(self
            .document(feature)?
            .and_then(|doc| doc.get_object(key).map(Document::to_json_string)))
    }

    fn experiment_branch(&self, experiment_slug: &str) -> Result<Option<String>> {
        Ok(self.branches.get(experiment_slug).cloned())
    }
}
