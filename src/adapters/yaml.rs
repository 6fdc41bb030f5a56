// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML document parser.
//!
//! Lets feature documents be authored as YAML. The resulting tree follows the same
//! rules as JSON documents: only strings, integers, booleans and string-keyed
//! mappings are kept.

use crate::domain::{Document, Result, Value, VariablesError};
use crate::ports::DocumentParser;

/// YAML parser implementation.
///
/// # Examples
///
/// ```rust
/// use feature_variables::adapters::YamlParser;
/// use feature_variables::ports::DocumentParser;
///
/// let parser = YamlParser::new();
/// let doc = parser.parse("positiveButton:\n  text: Continue\n").unwrap();
/// let button = doc.get_object("positiveButton").unwrap();
/// assert_eq!(button.get_string("text"), Some("Continue"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }

    /// Converts a YAML node into a document node, dropping unsupported kinds.
    fn convert(value: serde_yaml::Value) -> Option<Value> {
        match value {
            serde_yaml::Value::String(s) => Some(Value::String(s)),
            serde_yaml::Value::Bool(b) => Some(Value::Bool(b)),
            serde_yaml::Value::Number(n) => n.as_i64().map(Value::Int),
            serde_yaml::Value::Mapping(map) => Some(Value::Object(Self::convert_mapping(map))),
            serde_yaml::Value::Tagged(tagged) => Self::convert(tagged.value),
            serde_yaml::Value::Null | serde_yaml::Value::Sequence(_) => None,
        }
    }

    fn convert_mapping(map: serde_yaml::Mapping) -> Document {
        map.into_iter()
            .filter_map(|(key, value)| {
                let key = match key {
                    serde_yaml::Value::String(s) => s,
                    other => {
                        tracing::trace!("Dropping YAML entry with non-string key {:?}", other);
                        return None;
                    }
                };
                let kind = yaml_kind(&value);
                match Self::convert(value) {
                    Some(v) => Some((key, v)),
                    None => {
                        tracing::trace!("Dropping unsupported {} value at key '{}'", kind, key);
                        None
                    }
                }
            })
            .collect()
    }
}

fn yaml_kind(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "boolean",
        serde_yaml::Value::Number(n) if n.is_f64() => "float",
        serde_yaml::Value::Number(_) => "integer",
        serde_yaml::Value::String(_) => "string",
        serde_yaml::Value::Sequence(_) => "sequence",
        serde_yaml::Value::Mapping(_) => "mapping",
        serde_yaml::Value::Tagged(tagged) => yaml_kind(&tagged.value),
    }
}

impl Default for YamlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentParser for YamlParser {
    fn parse(&self, content: &str) -> Result<Document> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| VariablesError::ParseError {
                message: format!("Failed to parse YAML: {}", e),
                source: Some(Box::new(e)),
            })?;

        match value {
            serde_yaml::Value::Mapping(map) => Ok(Self::convert_mapping(map)),
            _ => Err(VariablesError::ParseError {
                message: "document root must be a mapping".to_string(),
                source: None,
            }),
        }
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}
