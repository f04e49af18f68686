use anyhow::{Context, Result, anyhow};
use jsonschema::Validator;
use serde_json::Value;

use crate::domain::TextFieldOptions;
use crate::error::ConfigurationTypeError;

/// JSON Schema (draft-07) describing a text field options document.
pub fn options_schema() -> Result<Value> {
    let schema = schemars::schema_for!(TextFieldOptions);
    serde_json::to_value(schema).context("failed to serialize options schema")
}

fn options_validator() -> Result<Validator> {
    let schema = options_schema()?;
    jsonschema::validator_for(&schema).map_err(|err| anyhow!("invalid options schema: {err}"))
}

/// Checks a raw options document against [`options_schema`].
///
/// The first violation is returned as a [`ConfigurationTypeError`] wrapped in the
/// `anyhow::Error`; every violation is logged.
pub fn validate_document(document: &Value) -> Result<()> {
    let validator = options_validator()?;
    let mut first: Option<ConfigurationTypeError> = None;
    for error in validator.iter_errors(document) {
        let pointer = error.instance_path.to_string();
        let message = error.to_string();
        tracing::debug!(pointer = %pointer, message = %message, "options document violation");
        if first.is_none() {
            first = Some(ConfigurationTypeError::new(pointer, message));
        }
    }
    match first {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn violation(document: Value) -> ConfigurationTypeError {
        validate_document(&document)
            .expect_err("document should be rejected")
            .downcast::<ConfigurationTypeError>()
            .expect("configuration type error")
    }

    #[test]
    fn schema_describes_every_option() {
        let schema = options_schema().unwrap();
        let properties = schema["properties"].as_object().unwrap();
        for key in [
            "form",
            "attribute",
            "placeholder",
            "type",
            "align",
            "error",
            "label",
            "label_action",
            "label_hidden",
            "multiline",
            "help_text",
            "disabled",
            "index",
            "step",
            "prefix",
            "suffix",
            "max",
            "min",
            "value",
            "monospaced",
            "connected_left",
            "connected_right",
        ] {
            assert!(properties.contains_key(key), "missing {key}");
        }
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert!(required.contains(&"form"));
        assert!(required.contains(&"attribute"));
    }

    #[test]
    fn accepts_a_complete_document() {
        let document = json!({
            "form": "user",
            "attribute": "age",
            "type": "number",
            "step": 2,
            "min": 0,
            "max": 120,
            "value": "30",
            "index": 0,
            "multiline": false,
            "label": "Age",
            "label_action": {"content": "Why?", "url": "/help/age"}
        });
        validate_document(&document).unwrap();
    }

    #[test]
    fn string_index_points_at_index() {
        let err = violation(json!({"form": "user", "attribute": "age", "index": "3"}));
        assert_eq!(err.pointer, "/index");
    }

    #[test]
    fn malformed_label_action_points_at_label_action() {
        let err = violation(json!({
            "form": "user",
            "attribute": "age",
            "label_action": "Why?"
        }));
        assert_eq!(err.pointer, "/label_action");
    }

    #[test]
    fn multiline_accepts_flags_and_counts_only() {
        validate_document(&json!({"form": "f", "attribute": "a", "multiline": 4})).unwrap();
        let err = violation(json!({"form": "f", "attribute": "a", "multiline": "tall"}));
        assert_eq!(err.pointer, "/multiline");
    }

    #[test]
    fn missing_attribute_is_reported_at_the_root() {
        let err = violation(json!({"form": "user"}));
        assert_eq!(err.pointer, "");
        assert!(err.to_string().starts_with("<root>:"));
    }
}
