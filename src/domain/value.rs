use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Current value of the bound field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl FieldValue {
    /// Text made only of whitespace counts as blank; numbers are always present.
    pub fn is_present(&self) -> bool {
        match self {
            FieldValue::Text(text) => is_present(text),
            FieldValue::Integer(_) | FieldValue::Float(_) => true,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Text(text) => Value::String(text.clone()),
            FieldValue::Integer(number) => Value::from(*number),
            FieldValue::Float(number) => Value::from(*number),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Integer(number) => write!(f, "{number}"),
            FieldValue::Float(number) => write!(f, "{number}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(value.into())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

pub(crate) fn is_present(text: &str) -> bool {
    !text.trim().is_empty()
}

pub(crate) fn is_present_opt(text: Option<&str>) -> bool {
    text.is_some_and(is_present)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_text_is_blank() {
        assert!(!FieldValue::from("   ").is_present());
        assert!(!FieldValue::from("").is_present());
        assert!(FieldValue::from(" 5 ").is_present());
    }

    #[test]
    fn numbers_are_always_present() {
        assert!(FieldValue::from(0).is_present());
        assert!(FieldValue::from(0.0).is_present());
    }

    #[test]
    fn deserializes_untagged_documents() {
        let text: FieldValue = serde_json::from_str("\"5\"").unwrap();
        let integer: FieldValue = serde_json::from_str("5").unwrap();
        let float: FieldValue = serde_json::from_str("2.5").unwrap();
        assert_eq!(text, FieldValue::Text("5".into()));
        assert_eq!(integer, FieldValue::Integer(5));
        assert_eq!(float, FieldValue::Float(2.5));
    }
}
