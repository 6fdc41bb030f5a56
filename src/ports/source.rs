// SPDX-License-Identifier: MIT OR Apache-2.0

//! Value source trait definition.
//!
//! This module defines the `ValueSource` trait, the lowest-level port of the crate.
//! A value source hands out raw scalar values and nested objects for one feature (or
//! one sub-object of a feature) keyed by a single path segment.

use crate::domain::FeatureId;
use std::sync::Arc;

/// A provider of raw configuration values for one feature or sub-object.
///
/// Every accessor returns the stored value if `key` is present **and** its stored
/// type matches the accessor. Otherwise it returns `None`. A missing key and a key
/// holding a value of another type are indistinguishable, and no accessor ever
/// fails or panics.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`. Sources are immutable once built and are
/// shared freely between readers.
///
/// # Variants
///
/// The crate ships three implementations:
///
/// - [`DocumentSource`](crate::adapters::DocumentSource): backed by a parsed document
/// - [`RemoteSource`](crate::adapters::RemoteSource): every call crosses a
///   [`FeatureClient`](crate::ports::FeatureClient) boundary
/// - [`NullSource`](crate::adapters::NullSource): always empty
///
/// # Examples
///
/// ```rust
/// use feature_variables::ports::ValueSource;
/// use std::sync::Arc;
///
/// struct AlwaysEnabled;
///
/// impl ValueSource for AlwaysEnabled {
///     fn name(&self) -> &str {
///         "always-enabled"
///     }
///
///     fn get_string(&self, _key: &str) -> Option<String> {
///         None
///     }
///
///     fn get_int(&self, _key: &str) -> Option<i64> {
///         None
///     }
///
///     fn get_bool(&self, key: &str) -> Option<bool> {
///         (key == "enabled").then_some(true)
///     }
///
///     fn get_child(&self, _key: &str) -> Option<Arc<dyn ValueSource>> {
///         None
///     }
/// }
///
/// let source = AlwaysEnabled;
/// assert_eq!(source.get_bool("enabled"), Some(true));
/// assert_eq!(source.get_bool("other"), None);
/// ```
pub trait ValueSource: Send + Sync {
    /// Returns the name of this source.
    ///
    /// This name is used for logging and debugging. It should be a short
    /// identifier like "document", "remote" or "null".
    fn name(&self) -> &str;

    /// Returns the feature this source was resolved for.
    ///
    /// Sources built straight from a document, outside any feature lookup, have none.
    /// Children report the feature of the source they came from.
    fn feature(&self) -> Option<&FeatureId> {
        None
    }

    /// Returns the string stored at `key`.
    ///
    /// # Returns
    ///
    /// * `Some(String)` - The key exists and holds a string
    /// * `None` - The key is missing or holds another type
    fn get_string(&self, key: &str) -> Option<String>;

    /// Returns the integer stored at `key`.
    ///
    /// # Returns
    ///
    /// * `Some(i64)` - The key exists and holds an integer
    /// * `None` - The key is missing or holds another type
    fn get_int(&self, key: &str) -> Option<i64>;

    /// Returns the boolean stored at `key`.
    ///
    /// # Returns
    ///
    /// * `Some(bool)` - The key exists and holds a boolean
    /// * `None` - The key is missing or holds another type
    fn get_bool(&self, key: &str) -> Option<bool>;

    /// Returns the nested object stored at `key`, wrapped as its own source.
    ///
    /// # Returns
    ///
    /// * `Some(source)` - The key exists and holds an object
    /// * `None` - The key is missing or holds another type
    fn get_child(&self, key: &str) -> Option<Arc<dyn ValueSource>>;
}
