use super::action::Action;
use super::input::{InputType, Multiline};
use super::options::{FormRef, TextFieldOptions};
use super::value::FieldValue;

/// A validated, immutable text field configuration.
///
/// Built through [`TextFieldOptions::build`]. Rendering reads from this type and never fails.
#[derive(Debug, Clone, PartialEq)]
pub struct TextField {
    pub(crate) form: FormRef,
    pub(crate) attribute: String,
    pub(crate) placeholder: String,
    pub(crate) input_type: InputType,
    pub(crate) align: String,
    pub(crate) error: String,
    pub(crate) label: Option<String>,
    pub(crate) label_action: Option<Action>,
    pub(crate) label_hidden: bool,
    pub(crate) multiline: Multiline,
    pub(crate) help_text: String,
    pub(crate) disabled: bool,
    pub(crate) index: Option<i64>,
    pub(crate) step: i64,
    pub(crate) prefix: Option<String>,
    pub(crate) suffix: Option<String>,
    pub(crate) max: i64,
    pub(crate) min: i64,
    pub(crate) value: Option<FieldValue>,
    pub(crate) monospaced: bool,
    pub(crate) connected_left: bool,
    pub(crate) connected_right: bool,
}

impl TextField {
    pub fn builder(form: impl Into<FormRef>, attribute: impl Into<String>) -> TextFieldOptions {
        TextFieldOptions::new(form, attribute)
    }

    /// Numeric mode needs the `number` type and a non-zero step.
    pub fn is_numeric(&self) -> bool {
        self.input_type.is_number() && self.step != 0
    }

    pub fn form(&self) -> &FormRef {
        &self.form
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn input_type(&self) -> &InputType {
        &self.input_type
    }

    pub fn align(&self) -> &str {
        &self.align
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn label_action(&self) -> Option<&Action> {
        self.label_action.as_ref()
    }

    pub fn label_hidden(&self) -> bool {
        self.label_hidden
    }

    pub fn multiline(&self) -> Multiline {
        self.multiline
    }

    pub fn help_text(&self) -> &str {
        &self.help_text
    }

    pub fn disabled(&self) -> bool {
        self.disabled
    }

    pub fn index(&self) -> Option<i64> {
        self.index
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn value(&self) -> Option<&FieldValue> {
        self.value.as_ref()
    }

    pub fn monospaced(&self) -> bool {
        self.monospaced
    }

    pub fn connected_left(&self) -> bool {
        self.connected_left
    }

    pub fn connected_right(&self) -> bool {
        self.connected_right
    }
}
