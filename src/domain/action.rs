use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Clickable action attached to a field label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Action {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility_label: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub external: bool,
}

impl Action {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            url: None,
            accessibility_label: None,
            external: false,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_accessibility_label(mut self, label: impl Into<String>) -> Self {
        self.accessibility_label = Some(label.into());
        self
    }

    pub fn with_external(mut self, external: bool) -> Self {
        self.external = external;
        self
    }

    /// Reads an action out of a loosely typed value; `None` if the shape does not match.
    pub(crate) fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }
}

impl From<Action> for Value {
    fn from(action: Action) -> Self {
        let mut map = Map::new();
        map.insert("content".to_string(), Value::String(action.content));
        if let Some(url) = action.url {
            map.insert("url".to_string(), Value::String(url));
        }
        if let Some(label) = action.accessibility_label {
            map.insert("accessibilityLabel".to_string(), Value::String(label));
        }
        if action.external {
            map.insert("external".to_string(), Value::Bool(true));
        }
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_action_objects() {
        let action = Action::from_value(&json!({
            "content": "Forgot password?",
            "url": "/reset",
            "external": true
        }))
        .expect("valid action");
        assert_eq!(action.content, "Forgot password?");
        assert_eq!(action.url.as_deref(), Some("/reset"));
        assert!(action.external);
    }

    #[test]
    fn rejects_values_that_are_not_actions() {
        assert!(Action::from_value(&json!("Forgot password?")).is_none());
        assert!(Action::from_value(&json!({"url": "/reset"})).is_none());
        assert!(Action::from_value(&json!({"content": "x", "onClick": "y"})).is_none());
    }

    #[test]
    fn value_conversion_reads_back() {
        let action = Action::new("Edit")
            .with_url("/edit")
            .with_accessibility_label("Edit email");
        let value = Value::from(action.clone());
        assert_eq!(Action::from_value(&value), Some(action));
    }
}
