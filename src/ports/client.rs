// SPDX-License-Identifier: MIT OR Apache-2.0

//! Feature client trait definition.
//!
//! The `FeatureClient` trait is the boundary to whatever owns experiment state: an
//! FFI binding to the experimentation library, a test double, or a directory of
//! documents. The crate only consumes this interface and never assumes a transport.

use crate::domain::{FeatureId, Result};

/// The experiment slug whose branch selects how feature documents are read.
///
/// A client reporting the branch [`JSON_BRANCH`] for this experiment asks for whole
/// documents to be fetched and parsed locally. Any other answer keeps per-field
/// calls across the boundary.
pub const FEATURES_API_EXPERIMENT: &str = "features-api";

/// The `features-api` branch that selects local JSON parsing.
pub const JSON_BRANCH: &str = "json";

/// The accessor boundary for feature variables.
///
/// Every method may block on the underlying call. Errors are opaque to the crate: a
/// failing call is treated as "value unavailable".
///
/// # Examples
///
/// ```rust
/// use feature_variables::domain::{FeatureId, Result};
/// use feature_variables::ports::FeatureClient;
///
/// struct Disabled;
///
/// impl FeatureClient for Disabled {
///     fn name(&self) -> &str { "disabled" }
///     fn feature_variables_json(&self, _: &FeatureId) -> Result<Option<String>> { Ok(None) }
///     fn feature_variable_string(&self, _: &FeatureId, _: &str) -> Result<Option<String>> { Ok(None) }
///     fn feature_variable_int(&self, _: &FeatureId, _: &str) -> Result<Option<i64>> { Ok(None) }
///     fn feature_variable_bool(&self, _: &FeatureId, _: &str) -> Result<Option<bool>> { Ok(None) }
///     fn feature_variable_json(&self, _: &FeatureId, _: &str) -> Result<Option<String>> { Ok(None) }
/// }
///
/// let client = Disabled;
/// assert!(client.experiment_branch("features-api").unwrap().is_none());
/// ```
pub trait FeatureClient: Send + Sync {
    /// Returns the name of this client, used in logs.
    fn name(&self) -> &str;

    /// Returns the whole variables document for `feature` as serialized JSON.
    ///
    /// `Ok(None)` means no configuration was ever supplied for the feature.
    fn feature_variables_json(&self, feature: &FeatureId) -> Result<Option<String>>;

    /// Returns the string stored at `key` in the feature's variables.
    fn feature_variable_string(&self, feature: &FeatureId, key: &str) -> Result<Option<String>>;

    /// Returns the integer stored at `key` in the feature's variables.
    fn feature_variable_int(&self, feature: &FeatureId, key: &str) -> Result<Option<i64>>;

    /// Returns the boolean stored at `key` in the feature's variables.
    fn feature_variable_bool(&self, feature: &FeatureId, key: &str) -> Result<Option<bool>>;

    /// Returns the object stored at `key` in the feature's variables, serialized as JSON.
    fn feature_variable_json(&self, feature: &FeatureId, key: &str) -> Result<Option<String>>;

    /// Returns the branch the client is enrolled in for `experiment_slug`.
    ///
    /// The default implementation reports no enrollment.
    fn experiment_branch(&self, experiment_slug: &str) -> Result<Option<String>> {
        let _ = experiment_slug;
        Ok(None)
    }
}
