use std::fmt;

use serde::{Deserialize, Serialize};

/// A single scalar cell inside a column.
///
/// Tabular sources carry loosely-typed data, so every column is a sequence of
/// `Value`s rather than a homogeneous native type. Missing cells are `Null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Borrow the string payload when this value is textual.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Render the value as code text for value-set membership checks.
    ///
    /// Returns `None` for `Null`, which coded-field validation skips.
    pub fn as_code(&self) -> Option<String> {
        if self.is_null() {
            return None;
        }
        Some(self.to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            // f64 Display is already the shortest round-trip form
            // (100.0 renders as "100", 1.5 as "1.5").
            Value::Float(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::Value;

    #[test]
    fn display_formats_floats_canonically() {
        assert_eq!(Value::Float(1.0).to_string(), "1");
        assert_eq!(Value::Float(1.50).to_string(), "1.5");
        assert_eq!(Value::Float(0.0).to_string(), "0");
        // Integral multiples of ten keep all their digits.
        assert_eq!(Value::Float(10.0).to_string(), "10");
        assert_eq!(Value::Float(100.0).to_string(), "100");
        assert_eq!(Value::Float(1050.0).to_string(), "1050");
    }

    #[test]
    fn null_has_no_code_text() {
        assert_eq!(Value::Null.as_code(), None);
        assert_eq!(Value::from("female").as_code().as_deref(), Some("female"));
        assert_eq!(Value::Int(3).as_code().as_deref(), Some("3"));
        assert_eq!(Value::Float(10.0).as_code().as_deref(), Some("10"));
    }

    #[test]
    fn untagged_serde_round_trip() {
        let json = serde_json::to_string(&Value::from("male")).expect("serialize");
        let round: Value = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(round, Value::from("male"));
    }
}
