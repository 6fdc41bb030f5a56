// SPDX-License-Identifier: MIT OR Apache-2.0

//! Feature identifier newtype.
//!
//! A `FeatureId` names the unit of application behavior whose variables are being
//! looked up. It scopes every call a remote source makes across the client boundary.

use std::fmt;

/// A type-safe wrapper for feature identifiers.
///
/// # Examples
///
/// ```
/// use feature_variables::domain::FeatureId;
///
/// let feature = FeatureId::from("self-destruct-dialog");
/// assert_eq!(feature.as_str(), "self-destruct-dialog");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeatureId(String);

impl FeatureId {
    /// Creates a new `FeatureId` from a `String`.
    pub fn new(id: String) -> Self {
        FeatureId(id)
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `FeatureId` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for FeatureId {
    fn from(s: String) -> Self {
        FeatureId(s)
    }
}

impl From<&str> for FeatureId {
    fn from(s: &str) -> Self {
        FeatureId(s.to_string())
    }
}

impl From<&FeatureId> for FeatureId {
    fn from(id: &FeatureId) -> Self {
        id.clone()
    }
}

impl From<FeatureId> for String {
    fn from(id: FeatureId) -> Self {
        id.0
    }
}

impl AsRef<str> for FeatureId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
