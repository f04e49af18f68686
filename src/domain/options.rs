use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::action::Action;
use super::input::{InputType, Multiline};
use super::text_field::TextField;
use super::value::FieldValue;
use crate::error::ConfigurationTypeError;

pub const DEFAULT_STEP: i64 = 1;
pub const DEFAULT_MAX: i64 = 1_000_000;
pub const DEFAULT_MIN: i64 = 0;

/// Opaque handle on the host form the field belongs to, e.g. the form object name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct FormRef(String);

impl FormRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FormRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for FormRef {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Options accepted by a text field, before validation.
///
/// `index` and `label_action` are kept loosely typed so that values coming from documents
/// or dynamic callers are checked once, in [`TextFieldOptions::build`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct TextFieldOptions {
    pub form: FormRef,
    pub attribute: String,
    #[serde(default)]
    pub placeholder: String,
    #[serde(default, rename = "type")]
    #[schemars(with = "String")]
    pub input_type: InputType,
    #[serde(default)]
    pub align: String,
    #[serde(default)]
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<Action>")]
    pub label_action: Option<Value>,
    #[serde(default)]
    pub label_hidden: bool,
    #[serde(default)]
    #[schemars(with = "super::input::MultilineSetting")]
    pub multiline: Multiline,
    #[serde(default)]
    pub help_text: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<i64>")]
    pub index: Option<Value>,
    #[serde(default = "default_step")]
    pub step: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(default = "default_max")]
    pub max: i64,
    #[serde(default = "default_min")]
    pub min: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<FieldValue>,
    #[serde(default)]
    pub monospaced: bool,
    #[serde(default)]
    pub connected_left: bool,
    #[serde(default)]
    pub connected_right: bool,
}

fn default_step() -> i64 {
    DEFAULT_STEP
}

fn default_max() -> i64 {
    DEFAULT_MAX
}

fn default_min() -> i64 {
    DEFAULT_MIN
}

impl TextFieldOptions {
    pub fn new(form: impl Into<FormRef>, attribute: impl Into<String>) -> Self {
        Self {
            form: form.into(),
            attribute: attribute.into(),
            placeholder: String::new(),
            input_type: InputType::Text,
            align: String::new(),
            error: String::new(),
            label: None,
            label_action: None,
            label_hidden: false,
            multiline: Multiline::Off,
            help_text: String::new(),
            disabled: false,
            index: None,
            step: DEFAULT_STEP,
            prefix: None,
            suffix: None,
            max: DEFAULT_MAX,
            min: DEFAULT_MIN,
            value: None,
            monospaced: false,
            connected_left: false,
            connected_right: false,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_type(mut self, input_type: impl Into<InputType>) -> Self {
        self.input_type = input_type.into();
        self
    }

    pub fn with_align(mut self, align: impl Into<String>) -> Self {
        self.align = align.into();
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = error.into();
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_label_action(mut self, action: Action) -> Self {
        self.label_action = Some(action.into());
        self
    }

    /// Sets the label action from an arbitrary value; it is checked by [`Self::build`].
    pub fn with_raw_label_action(mut self, action: Value) -> Self {
        self.label_action = Some(action);
        self
    }

    pub fn with_label_hidden(mut self, hidden: bool) -> Self {
        self.label_hidden = hidden;
        self
    }

    pub fn with_multiline(mut self, multiline: impl Into<Multiline>) -> Self {
        self.multiline = multiline.into();
        self
    }

    pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = help_text.into();
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Accepts any value; non-integers are rejected by [`Self::build`].
    pub fn with_index(mut self, index: impl Into<Value>) -> Self {
        self.index = Some(index.into());
        self
    }

    pub fn with_step(mut self, step: i64) -> Self {
        self.step = step;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn with_max(mut self, max: i64) -> Self {
        self.max = max;
        self
    }

    pub fn with_min(mut self, min: i64) -> Self {
        self.min = min;
        self
    }

    pub fn with_value(mut self, value: impl Into<FieldValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_monospaced(mut self, monospaced: bool) -> Self {
        self.monospaced = monospaced;
        self
    }

    pub fn with_connected_left(mut self, populated: bool) -> Self {
        self.connected_left = populated;
        self
    }

    pub fn with_connected_right(mut self, populated: bool) -> Self {
        self.connected_right = populated;
        self
    }

    /// Decodes options from a document value.
    ///
    /// Decode failures are reported against the first option that cannot be read on its own,
    /// or against the document root when no single option is at fault.
    pub fn from_document(document: &Value) -> Result<Self, ConfigurationTypeError> {
        serde_json::from_value(document.clone()).map_err(|err| {
            let pointer = document
                .as_object()
                .and_then(|map| {
                    map.iter()
                        .find(|(key, value)| !decodes_alone(key, value))
                        .map(|(key, _)| format!("/{key}"))
                })
                .unwrap_or_default();
            ConfigurationTypeError::new(pointer, err.to_string())
        })
    }

    /// Validates the options and freezes them into a [`TextField`].
    pub fn build(self) -> Result<TextField, ConfigurationTypeError> {
        match self.validate() {
            Ok(field) => {
                tracing::debug!(
                    form = field.form().as_str(),
                    attribute = field.attribute(),
                    "text field options validated"
                );
                Ok(field)
            }
            Err(err) => {
                tracing::debug!(
                    pointer = %err.pointer,
                    message = %err.message,
                    "text field options rejected"
                );
                Err(err)
            }
        }
    }

    fn validate(self) -> Result<TextField, ConfigurationTypeError> {
        let index = match self.index {
            None | Some(Value::Null) => None,
            Some(raw) => Some(raw.as_i64().ok_or_else(|| {
                ConfigurationTypeError::new(
                    "/index",
                    format!("expected integer, found {}", describe(&raw)),
                )
            })?),
        };

        let label_action = match self.label_action {
            None | Some(Value::Null) => None,
            Some(raw) => Some(Action::from_value(&raw).ok_or_else(|| {
                ConfigurationTypeError::new(
                    "/label_action",
                    format!("expected Action, found {}", describe(&raw)),
                )
            })?),
        };

        if self.multiline == Multiline::Rows(0) {
            return Err(ConfigurationTypeError::new(
                "/multiline",
                "row count must be positive",
            ));
        }

        Ok(TextField {
            form: self.form,
            attribute: self.attribute,
            placeholder: self.placeholder,
            input_type: self.input_type,
            align: self.align,
            error: self.error,
            label: self.label,
            label_action,
            label_hidden: self.label_hidden,
            multiline: self.multiline,
            help_text: self.help_text,
            disabled: self.disabled,
            index,
            step: self.step,
            prefix: self.prefix,
            suffix: self.suffix,
            max: self.max,
            min: self.min,
            value: self.value,
            monospaced: self.monospaced,
            connected_left: self.connected_left,
            connected_right: self.connected_right,
        })
    }
}

fn decodes_alone(key: &str, value: &Value) -> bool {
    let mut single = serde_json::Map::new();
    single.insert("form".to_string(), Value::String(String::new()));
    single.insert("attribute".to_string(), Value::String(String::new()));
    single.insert(key.to_string(), value.clone());
    serde_json::from_value::<TextFieldOptions>(Value::Object(single)).is_ok()
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => format!("boolean {flag}"),
        Value::Number(number) => format!("number {number}"),
        Value::String(text) => format!("string {text:?}"),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    }
}
