// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document parser trait definition.
//!
//! This module defines the `DocumentParser` trait, which turns the serialized text of
//! a feature's variables (JSON, YAML, ...) into a [`Document`] tree.

use crate::domain::{Document, Result};

/// A trait for parsing serialized feature documents.
///
/// Unlike a flat key-value parser, the result keeps the object tree intact: nested
/// objects stay nested so they can be re-wrapped as child value sources.
///
/// # Examples
///
/// ```rust
/// use feature_variables::domain::{Document, Result};
/// use feature_variables::ports::DocumentParser;
///
/// struct EmptyParser;
///
/// impl DocumentParser for EmptyParser {
///     fn parse(&self, _content: &str) -> Result<Document> {
///         Ok(Document::new())
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["empty"]
///     }
/// }
///
/// let parser = EmptyParser;
/// assert!(parser.parse("anything").unwrap().is_empty());
/// ```
pub trait DocumentParser: Send + Sync {
    /// Parses serialized content into a document.
    ///
    /// # Returns
    ///
    /// * `Ok(Document)` - The parsed object tree
    /// * `Err(VariablesError::ParseError)` - The content is malformed or its root is
    ///   not an object
    fn parse(&self, content: &str) -> Result<Document>;

    /// Returns the file extensions this parser supports, without the leading dot.
    fn supported_extensions(&self) -> &[&str];

    /// Returns true if this parser can handle a file with the given extension.
    ///
    /// The comparison is case-insensitive.
    fn supports_extension(&self, extension: &str) -> bool {
        let extension = extension.to_lowercase();
        self.supported_extensions()
            .iter()
            .any(|ext| ext.to_lowercase() == extension)
    }
}
