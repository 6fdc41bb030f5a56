// SPDX-License-Identifier: MIT OR Apache-2.0

//! The always-empty value source.

use crate::domain::FeatureId;
use crate::ports::ValueSource;
use std::sync::Arc;

/// A value source that holds nothing.
///
/// Stands in whenever no configuration is available for a feature: the feature is
/// disabled, the client is unreachable, or the document was malformed. Callers never
/// need to check for a missing source; every field simply resolves to its default.
#[derive(Debug, Clone, Default)]
pub struct NullSource {
    feature: Option<FeatureId>,
}

impl NullSource {
    /// Creates a new null source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a null source standing in for `feature`.
    pub fn for_feature(feature: impl Into<FeatureId>) -> Self {
        Self {
            feature: Some(feature.into()),
        }
    }
}

impl ValueSource for NullSource {
    fn name(&self) -> &str {
        "null"
    }

    fn feature(&self) -> Option<&FeatureId> {
        self.feature.as_ref()
    }

    fn get_string(&self, _key: &str) -> Option<String> {
        None
    }

    fn get_int(&self, _key: &str) -> Option<i64> {
        None
    }

    fn get_bool(&self, _key: &str) -> Option<bool> {
        None
    }

    fn get_child(&self, _key: &str) -> Option<Arc<dyn ValueSource>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_source_is_empty() {
        let source = NullSource::new();
        for key in ["", "title", "positiveButton", "buttonColor"] {
            assert_eq!(source.get_string(key), None);
            assert_eq!(source.get_int(key), None);
            assert_eq!(source.get_bool(key), None);
            assert!(source.get_child(key).is_none());
        }
    }

    #[test]
    fn test_null_source_name() {
        assert_eq!(NullSource::new().name(), "null");
    }

    #[test]
    fn test_null_source_keeps_feature() {
        assert_eq!(NullSource::new().feature(), None);
        let source = NullSource::for_feature("button-feature");
        assert_eq!(source.feature().map(FeatureId::as_str), Some("button-feature"));
        assert!(source.get_child("anything").is_none());
    }
}
