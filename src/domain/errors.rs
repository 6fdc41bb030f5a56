// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the feature variables crate.
//!
//! Errors only surface from the lower layers (parsers, feature clients, color
//! parsing). The typed resolver and the feature lookup entry point swallow them
//! and fall back to absent values, so application code never sees these unless it
//! talks to a port directly.

use thiserror::Error;

/// The main error type for feature variable operations.
///
/// This enum is marked as `#[non_exhaustive]` to allow for future additions
/// without breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use feature_variables::domain::errors::VariablesError;
///
/// fn parse_document() -> Result<(), VariablesError> {
///     Err(VariablesError::ParseError {
///         message: "document root must be an object".to_string(),
///         source: None,
///     })
/// }
///
/// assert!(parse_document().is_err());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VariablesError {
    /// A configuration document could not be parsed.
    #[error("Failed to parse feature document: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A feature client or file source failed.
    #[error("Feature source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A string could not be parsed as a color.
    #[error("Unknown color: '{input}'")]
    ColorParseError {
        /// The text that failed to parse
        input: String,
    },

    /// An I/O error occurred while reading a feature document.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl VariablesError {
    /// Creates a `ParseError` from a JSON parsing failure.
    pub fn from_json_error(err: serde_json::Error) -> Self {
        VariablesError::ParseError {
            message: format!("Failed to parse JSON: {}", err),
            source: Some(Box::new(err)),
        }
    }

    /// Creates a `SourceError` without an underlying cause.
    pub fn source_error(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        VariablesError::SourceError {
            source_name: source_name.into(),
            message: message.into(),
            source: None,
        }
    }
}

/// A specialized Result type for feature variable operations.
pub type Result<T> = std::result::Result<T, VariablesError>;
