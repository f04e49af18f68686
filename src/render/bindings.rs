use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use super::kind::InputKind;
use super::options::RenderOptions;
use crate::domain::TextField;

/// Ordered `data-*` bindings consumed by the client-side stepper behaviour.
///
/// Null bindings are kept in the map but dropped when serialized or projected to
/// attributes, the same way a tag helper drops nil data attributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataBindingSet(IndexMap<String, Value>);

impl DataBindingSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Attribute names and string values as they appear on the element, e.g.
    /// `data-controller="polaris--text-field"`.
    pub fn to_data_attributes(&self) -> IndexMap<String, String> {
        self.iter()
            .filter(|(_, value)| !value.is_null())
            .map(|(key, value)| (format!("data-{key}"), attribute_text(value)))
            .collect()
    }

    pub(crate) fn to_json(&self) -> Value {
        Value::Object(
            self.iter()
                .filter(|(_, value)| !value.is_null())
                .map(|(key, value)| (key.to_string(), value.clone()))
                .collect(),
        )
    }
}

impl Serialize for DataBindingSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let present = self.0.values().filter(|value| !value.is_null()).count();
        let mut map = serializer.serialize_map(Some(present))?;
        for (key, value) in self.iter().filter(|(_, value)| !value.is_null()) {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

fn attribute_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Widget-level bindings: the stepper controller plus its min, max and value.
pub fn build_data_bindings(
    field: &TextField,
    kind: InputKind,
    options: &RenderOptions,
) -> DataBindingSet {
    let mut bindings = DataBindingSet::new();
    if !kind.is_numeric() {
        return bindings;
    }
    let controller = options.controller();
    bindings.insert("controller", controller);
    bindings.insert(format!("{controller}-min-value"), field.min());
    bindings.insert(format!("{controller}-max-value"), field.max());
    bindings.insert(
        format!("{controller}-value-value"),
        field.value().map(|value| value.to_json()).unwrap_or(Value::Null),
    );
    bindings
}

/// Bindings carried by the input element itself in numeric mode.
pub fn build_input_bindings(options: &RenderOptions) -> DataBindingSet {
    let controller = options.controller();
    let mut bindings = DataBindingSet::new();
    bindings.insert(format!("{controller}-target"), "input");
    bindings.insert("action", format!("input->{controller}#handleInput"));
    bindings
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn numeric() -> TextField {
        TextField::builder("item", "quantity")
            .with_type("number")
            .with_min(1)
            .with_max(99)
            .with_value("5")
            .build()
            .unwrap()
    }

    #[test]
    fn plain_fields_have_no_bindings() {
        let field = TextField::builder("item", "name").build().unwrap();
        let bindings = build_data_bindings(&field, field.resolve(), &RenderOptions::default());
        assert!(bindings.is_empty());
    }

    #[test]
    fn numeric_fields_bind_the_stepper() {
        let field = numeric();
        let bindings = build_data_bindings(&field, field.resolve(), &RenderOptions::default());
        let keys: Vec<&str> = bindings.keys().collect();
        assert_eq!(
            keys,
            vec![
                "controller",
                "polaris--text-field-min-value",
                "polaris--text-field-max-value",
                "polaris--text-field-value-value",
            ]
        );
        assert_eq!(bindings.get("controller"), Some(&json!("polaris--text-field")));
        assert_eq!(bindings.get("polaris--text-field-min-value"), Some(&json!(1)));
        assert_eq!(bindings.get("polaris--text-field-max-value"), Some(&json!(99)));
        assert_eq!(bindings.get("polaris--text-field-value-value"), Some(&json!("5")));
    }

    #[test]
    fn missing_value_is_dropped_on_output() {
        let field = TextField::builder("item", "quantity")
            .with_type("number")
            .build()
            .unwrap();
        let bindings = build_data_bindings(&field, field.resolve(), &RenderOptions::default());
        assert_eq!(bindings.len(), 4);
        assert_eq!(bindings.get("polaris--text-field-value-value"), Some(&Value::Null));
        let serialized = serde_json::to_value(&bindings).unwrap();
        assert!(serialized.get("polaris--text-field-value-value").is_none());
        assert!(
            !bindings
                .to_data_attributes()
                .contains_key("data-polaris--text-field-value-value")
        );
    }

    #[test]
    fn data_attributes_are_prefixed_and_stringified() {
        let field = numeric();
        let attributes = build_data_bindings(&field, field.resolve(), &RenderOptions::default())
            .to_data_attributes();
        assert_eq!(
            attributes.get("data-controller").map(String::as_str),
            Some("polaris--text-field")
        );
        assert_eq!(
            attributes
                .get("data-polaris--text-field-max-value")
                .map(String::as_str),
            Some("99")
        );
    }

    #[test]
    fn input_bindings_follow_the_controller() {
        let options = RenderOptions::default().with_controller("qty");
        let bindings = build_input_bindings(&options);
        assert_eq!(bindings.get("qty-target"), Some(&json!("input")));
        assert_eq!(bindings.get("action"), Some(&json!("input->qty#handleInput")));
    }
}
