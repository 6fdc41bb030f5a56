// SPDX-License-Identifier: MIT OR Apache-2.0

//! Remote-backed value source.
//!
//! Every accessor of a `RemoteSource` becomes one call across the
//! [`FeatureClient`] boundary, scoped by the feature it was created for. Nested
//! objects are fetched once as JSON and continue life as document-backed sources.

use crate::adapters::DocumentSource;
use crate::domain::{Document, FeatureId, Result};
use crate::ports::{FeatureClient, ValueSource};
use std::fmt;
use std::sync::Arc;

/// A value source that delegates every lookup to a feature client.
///
/// Calls block for as long as the client does. Client errors are logged at debug
/// level and resolve to `None`, exactly as if the key were missing.
///
/// # Examples
///
/// ```rust
/// use feature_variables::adapters::{InMemoryFeatureClient, RemoteSource};
/// use feature_variables::ports::ValueSource;
/// use std::sync::Arc;
///
/// let client = InMemoryFeatureClient::new()
///     .with_feature("example1", r#"{ "buttonColor": "red" }"#);
/// let source = RemoteSource::new(Arc::new(client), "example1");
///
/// assert_eq!(source.get_string("buttonColor").as_deref(), Some("red"));
/// ```
#[derive(Clone)]
pub struct RemoteSource {
    client: Arc<dyn FeatureClient>,
    feature: FeatureId,
}

impl RemoteSource {
    /// Creates a source that reads `feature` through `client`.
    pub fn new(client: Arc<dyn FeatureClient>, feature: impl Into<FeatureId>) -> Self {
        Self {
            client,
            feature: feature.into(),
        }
    }

    /// Unwraps a client answer, logging and discarding errors.
    fn settle<T>(&self, key: &str, result: Result<Option<T>>) -> Option<T> {
        match result {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(
                    "Client '{}' failed to read '{}' of feature '{}': {}",
                    self.client.name(),
                    key,
                    self.feature,
                    e
                );
                None
            }
        }
    }
}

impl fmt::Debug for RemoteSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteSource")
            .field("client", &self.client.name())
            .field("feature", &self.feature)
            .finish()
    }
}

impl ValueSource for RemoteSource {
    fn name(&self) -> &str {
        "remote"
    }

    fn feature(&self) -> Option<&FeatureId> {
        Some(&self.feature)
    }

    fn get_string(&self, key: &str) -> Option<String> {
        self.settle(key, self.client.feature_variable_string(&self.feature, key))
    }

    fn get_int(&self, key: &str) -> Option<i64> {
        self.settle(key, self.client.feature_variable_int(&self.feature, key))
    }

    fn get_bool(&self, key: &str) -> Option<bool> {
        self.settle(key, self.client.feature_variable_bool(&self.feature, key))
    }

    fn get_child(&self, key: &str) -> Option<Arc<dyn ValueSource>> {
        let json = self.settle(key, self.client.feature_variable_json(&self.feature, key))?;
        match Document::from_json_str(&json) {
            Ok(document) => Some(Arc::new(
                DocumentSource::new(document).for_feature(self.feature.clone()),
            )),
            Err(e) => {
                tracing::debug!(
                    "Discarding malformed child '{}' of feature '{}': {}",
                    key,
                    self.feature,
                    e
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VariablesError;

    /// A client whose every call fails.
    struct Unreachable;

    impl FeatureClient for Unreachable {
        fn name(&self) -> &str {
            "unreachable"
        }

        fn feature_variables_json(&self, _: &FeatureId) -> Result<Option<String>> {
            Err(VariablesError::source_error("unreachable", "down"))
        }

        fn feature_variable_string(&self, _: &FeatureId, _: &str) -> Result<Option<String>> {
            Err(VariablesError::source_error("unreachable", "down"))
        }

        fn feature_variable_int(&self, _: &FeatureId, _: &str) -> Result<Option<i64>> {
            Err(VariablesError::source_error("unreachable", "down"))
        }

        fn feature_variable_bool(&self, _: &FeatureId, _: &str) -> Result<Option<bool>> {
            Err(VariablesError::source_error("unreachable", "down"))
        }

        fn feature_variable_json(&self, _: &FeatureId, _: &str) -> Result<Option<String>> {
            Err(VariablesError::source_error("unreachable", "down"))
        }
    }

    /// A client answering fixed values for every feature, with a malformed child.
    struct Fixed;

    impl FeatureClient for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        fn feature_variables_json(&self, _: &FeatureId) -> Result<Option<String>> {
            Ok(None)
        }

        fn feature_variable_string(&self, feature: &FeatureId, key: &str) -> Result<Option<String>> {
            Ok(Some(format!("{}/{}", feature, key)))
        }

        fn feature_variable_int(&self, _: &FeatureId, _: &str) -> Result<Option<i64>> {
            Ok(Some(7))
        }

        fn feature_variable_bool(&self, _: &FeatureId, _: &str) -> Result<Option<bool>> {
            Ok(Some(true))
        }

        fn feature_variable_json(&self, _: &FeatureId, key: &str) -> Result<Option<String>> {
            match key {
                "button" => Ok(Some(r#"{ "text": "Continue" }"#.to_string())),
                "broken" => Ok(Some("{ not json".to_string())),
                _ => Ok(None),
            }
        }
    }

    #[test]
    fn test_remote_source_scopes_calls_by_feature() {
        let source = RemoteSource::new(Arc::new(Fixed), "dialog");
        assert_eq!(source.name(), "remote");
        assert_eq!(source.feature().map(FeatureId::as_str), Some("dialog"));
        assert_eq!(source.get_string("title").as_deref(), Some("dialog/title"));
        assert_eq!(source.get_int("count"), Some(7));
        assert_eq!(source.get_bool("armed"), Some(true));
    }

    #[test]
    fn test_remote_source_child_becomes_document() {
        let source = RemoteSource::new(Arc::new(Fixed), "dialog");
        let child = source.get_child("button").unwrap();
        assert_eq!(child.name(), "document");
        assert_eq!(child.feature().map(FeatureId::as_str), Some("dialog"));
        assert_eq!(child.get_string("text").as_deref(), Some("Continue"));
    }

    #[test]
    fn test_remote_source_malformed_child_is_absent() {
        let source = RemoteSource::new(Arc::new(Fixed), "dialog");
        assert!(source.get_child("broken").is_none());
        assert!(source.get_child("missing").is_none());
    }

    #[test]
    fn test_remote_source_errors_are_absent() {
        let source = RemoteSource::new(Arc::new(Unreachable), "dialog");
        assert_eq!(source.get_string("title"), None);
        assert_eq!(source.get_int("count"), None);
        assert_eq!(source.get_bool("armed"), None);
        assert!(source.get_child("button").is_none());
    }
}
