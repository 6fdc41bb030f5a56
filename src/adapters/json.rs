// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON document parser.

use crate::domain::{Document, Result};
use crate::ports::DocumentParser;

/// JSON parser implementation.
///
/// JSON is the wire format feature clients speak, so this is the parser the
/// service uses unless told otherwise.
///
/// # Examples
///
/// ```rust
/// use feature_variables::adapters::JsonParser;
/// use feature_variables::ports::DocumentParser;
///
/// let parser = JsonParser::new();
/// let doc = parser.parse(r#"{ "buttonColor": "red" }"#).unwrap();
/// assert_eq!(doc.get_string("buttonColor"), Some("red"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct JsonParser;

impl JsonParser {
    /// Creates a new JSON parser.
    pub fn new() -> Self {
        JsonParser
    }
}

impl Default for JsonParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentParser for JsonParser {
    fn parse(&self, content: &str) -> Result<Document> {
        Document::from_json_str(content)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_parser_simple() {
        let parser = JsonParser::new();
        let doc = parser
            .parse(r#"{ "buttonColor": "red", "buttonText": "treatment_button_label" }"#)
            .unwrap();

        assert_eq!(doc.get_string("buttonColor"), Some("red"));
        assert_eq!(doc.get_string("buttonText"), Some("treatment_button_label"));
    }

    #[test]
    fn test_json_parser_invalid() {
        let parser = JsonParser::new();
        assert!(parser.parse("not json at all").is_err());
    }

    #[test]
    fn test_json_parser_supported_extensions() {
        let parser = JsonParser::default();
        assert_eq!(parser.supported_extensions(), &["json"]);
        assert!(parser.supports_extension("JSON"));
        assert!(!parser.supports_extension("yaml"));
    }
}
