// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration document tree.
//!
//! A `Document` is an immutable object node: a mapping from string keys to
//! [`Value`]s, where each value is either a scalar (string, integer, boolean) or a
//! nested object. Only those four kinds are modelled. Anything else a wire format
//! can express (floats, arrays, nulls) is left out of the tree while it is built,
//! which makes such keys resolve as absent, the same as a type mismatch.

use crate::domain::errors::{Result, VariablesError};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::sync::Arc;

/// A single node in a configuration document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// A string scalar.
    String(String),
    /// An integer scalar.
    Int(i64),
    /// A boolean scalar.
    Bool(bool),
    /// A nested object.
    Object(Document),
}

impl Value {
    /// Returns the string if this is a string scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer if this is an integer scalar.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean if this is a boolean scalar.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the nested object if this is an object node.
    pub fn as_object(&self) -> Option<&Document> {
        match self {
            Value::Object(doc) => Some(doc),
            _ => None,
        }
    }

    /// Converts a JSON value into a document node.
    ///
    /// Returns `None` for JSON kinds that have no counterpart here (null, floats,
    /// arrays, integers outside the `i64` range).
    pub fn from_json(value: serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(s) => Some(Value::String(s)),
            serde_json::Value::Bool(b) => Some(Value::Bool(b)),
            serde_json::Value::Number(n) => n.as_i64().map(Value::Int),
            serde_json::Value::Object(map) => Some(Value::Object(Document::from_json_map(map))),
            serde_json::Value::Null | serde_json::Value::Array(_) => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        Value::Object(doc)
    }
}

/// An immutable object node of a configuration document.
///
/// Cloning is cheap: the entries are shared, so re-wrapping a nested object as its
/// own value source never copies the subtree.
///
/// # Examples
///
/// ```
/// use feature_variables::domain::Document;
///
/// let doc = Document::from_json_str(r#"{ "title": "Self Destruct", "retries": 3 }"#).unwrap();
/// assert_eq!(doc.get_string("title"), Some("Self Destruct"));
/// assert_eq!(doc.get_int("retries"), Some(3));
/// assert_eq!(doc.get_string("retries"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document(Arc<BTreeMap<String, Value>>);

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON object into a document.
    ///
    /// Fails if the text is not valid JSON or its root is not an object.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(content).map_err(VariablesError::from_json_error)?;
        Self::from_json(value)
    }

    /// Converts a parsed JSON value into a document.
    ///
    /// Fails if the root is not an object.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Object(map) => Ok(Self::from_json_map(map)),
            other => Err(VariablesError::ParseError {
                message: format!("document root must be an object, found {}", json_kind(&other)),
                source: None,
            }),
        }
    }

    fn from_json_map(map: serde_json::Map<String, serde_json::Value>) -> Self {
        map.into_iter()
            .filter_map(|(key, value)| {
                let kind = json_kind(&value);
                match Value::from_json(value) {
                    Some(v) => Some((key, v)),
                    None => {
                        tracing::trace!("Dropping unsupported {} value at key '{}'", kind, key);
                        None
                    }
                }
            })
            .collect()
    }

    /// Returns the node stored at `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the string stored at `key`, if it is a string.
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Returns the integer stored at `key`, if it is an integer.
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_int)
    }

    /// Returns the boolean stored at `key`, if it is a boolean.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    /// Returns the nested object stored at `key`, if it is an object.
    pub fn get_object(&self, key: &str) -> Option<&Document> {
        self.get(key).and_then(Value::as_object)
    }

    /// Returns true if `key` is present, whatever its kind.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterates over the keys of this object, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the object has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serializes the document back to JSON text.
    pub fn to_json_string(&self) -> String {
        // A tree of strings, i64s, bools and string-keyed maps always serializes.
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Document {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Document(Arc::new(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        ))
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.0.as_ref().serialize(serializer)
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
