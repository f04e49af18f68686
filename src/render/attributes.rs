use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

use super::bindings::{DataBindingSet, build_input_bindings};
use super::kind::InputKind;
use super::options::{ClassScheme, RenderOptions};
use crate::domain::{FieldValue, Multiline, TextField, is_present, is_present_opt};

/// `rows` attribute of a text area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowCount {
    /// Let the text area pick its own height. Written as `true`.
    Default,
    Count(u32),
}

impl RowCount {
    pub fn from_multiline(multiline: Multiline) -> Option<Self> {
        match multiline {
            Multiline::Off => None,
            Multiline::On => Some(RowCount::Default),
            Multiline::Rows(rows) => Some(RowCount::Count(rows)),
        }
    }

    fn to_json(self) -> Value {
        match self {
            RowCount::Default => Value::Bool(true),
            RowCount::Count(rows) => Value::from(rows),
        }
    }
}

impl Serialize for RowCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RowCount::Default => serializer.serialize_bool(true),
            RowCount::Count(rows) => serializer.serialize_u32(*rows),
        }
    }
}

/// Attributes of the rendered input element. Fields serialize in declaration order and
/// absent optional attributes are omitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeSet {
    pub placeholder: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<RowCount>,
    pub disabled: bool,
    pub class: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<DataBindingSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<FieldValue>,
}

impl AttributeSet {
    /// The attributes as an ordered map, skipping the absent ones.
    pub fn entries(&self) -> IndexMap<&'static str, Value> {
        let mut entries = IndexMap::new();
        entries.insert("placeholder", Value::String(self.placeholder.clone()));
        if let Some(rows) = self.rows {
            entries.insert("rows", rows.to_json());
        }
        entries.insert("disabled", Value::Bool(self.disabled));
        entries.insert("class", Value::String(self.class.clone()));
        let numbers = [
            ("index", self.index),
            ("step", self.step),
            ("min", self.min),
            ("max", self.max),
        ];
        for (key, number) in numbers {
            if let Some(number) = number {
                entries.insert(key, Value::from(number));
            }
        }
        if let Some(data) = &self.data {
            entries.insert("data", data.to_json());
        }
        if let Some(value) = &self.value {
            entries.insert("value", value.to_json());
        }
        entries
    }

    pub fn keys(&self) -> Vec<&'static str> {
        self.entries().into_keys().collect()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries().contains_key(key)
    }
}

pub fn build_attributes(
    field: &TextField,
    kind: InputKind,
    options: &RenderOptions,
) -> AttributeSet {
    let numeric = kind.is_numeric();
    AttributeSet {
        placeholder: field.placeholder().to_string(),
        rows: RowCount::from_multiline(field.multiline()),
        disabled: field.disabled(),
        class: input_class(field, &options.classes),
        index: field.index(),
        step: numeric.then(|| field.step()),
        min: numeric.then(|| field.min()),
        max: numeric.then(|| field.max()),
        data: numeric.then(|| build_input_bindings(options)),
        value: field.value().filter(|value| value.is_present()).cloned(),
    }
}

/// Class string of the input element.
///
/// `prefix` is accepted by the options but never contributes a class; only `suffix` does.
pub fn input_class(field: &TextField, scheme: &ClassScheme) -> String {
    let mut classes = vec![scheme.input()];
    if is_present(field.align()) {
        classes.push(scheme.input_modifier(&format!("align{}", capitalize(field.align()))));
    }
    if is_present_opt(field.suffix()) {
        classes.push(scheme.input_modifier("suffixed"));
    }
    if field.monospaced() {
        classes.push(scheme.block_modifier("monospaced"));
    }
    classes.join(" ")
}

fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => {
            let mut capitalized = String::with_capacity(raw.len());
            capitalized.push(first.to_ascii_uppercase());
            capitalized.push_str(chars.as_str());
            capitalized
        }
        None => String::new(),
    }
}
