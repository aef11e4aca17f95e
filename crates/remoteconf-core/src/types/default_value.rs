//! Application-supplied default values and their canonical string form

use serde::{Deserialize, Serialize};

/// A default value as supplied by the application or a resource file
///
/// Remote config stores everything as strings; defaults supplied as numbers
/// or booleans are canonicalized with [`DefaultValue::canonical_string`]
/// before they enter the store. The untagged serde representation matches
/// the JSON resource format (an object of plain primitives).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Bool(bool),
    Number(serde_json::Number),
    String(String),
}

impl DefaultValue {
    /// The exact string form the store keeps
    ///
    /// Numbers print as their JSON literal does (`1337`, `123.456`), never
    /// with a trailing `.0` for integral values.
    pub fn canonical_string(&self) -> String {
        match self {
            DefaultValue::Bool(b) => b.to_string(),
            DefaultValue::Number(n) => n.to_string(),
            DefaultValue::String(s) => s.clone(),
        }
    }
}

impl From<&str> for DefaultValue {
    fn from(v: &str) -> Self {
        DefaultValue::String(v.to_string())
    }
}

impl From<String> for DefaultValue {
    fn from(v: String) -> Self {
        DefaultValue::String(v)
    }
}

impl From<bool> for DefaultValue {
    fn from(v: bool) -> Self {
        DefaultValue::Bool(v)
    }
}

impl From<i64> for DefaultValue {
    fn from(v: i64) -> Self {
        DefaultValue::Number(v.into())
    }
}

impl From<f64> for DefaultValue {
    fn from(v: f64) -> Self {
        // NaN and infinities have no JSON representation; store them as 0
        match serde_json::Number::from_f64(v) {
            Some(n) => DefaultValue::Number(n),
            None => DefaultValue::Number(serde_json::Number::from(0u64)),
        }
    }
}
