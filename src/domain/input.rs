use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The `type` option of a text field. Only [`InputType::Number`] changes rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InputType {
    #[default]
    Text,
    Number,
    Email,
    Password,
    Search,
    Tel,
    Url,
    Other(String),
}

impl InputType {
    pub fn as_str(&self) -> &str {
        match self {
            InputType::Text => "text",
            InputType::Number => "number",
            InputType::Email => "email",
            InputType::Password => "password",
            InputType::Search => "search",
            InputType::Tel => "tel",
            InputType::Url => "url",
            InputType::Other(raw) => raw,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, InputType::Number)
    }
}

impl From<&str> for InputType {
    fn from(raw: &str) -> Self {
        match raw {
            "text" => InputType::Text,
            "number" => InputType::Number,
            "email" => InputType::Email,
            "password" => InputType::Password,
            "search" => InputType::Search,
            "tel" => InputType::Tel,
            "url" => InputType::Url,
            other => InputType::Other(other.to_string()),
        }
    }
}

impl From<String> for InputType {
    fn from(raw: String) -> Self {
        InputType::from(raw.as_str())
    }
}

impl From<InputType> for String {
    fn from(kind: InputType) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the field renders as a text area, and with how many rows.
///
/// Documents spell this as `false`, `true` or a row count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "MultilineSetting", into = "MultilineSetting")]
pub enum Multiline {
    #[default]
    Off,
    On,
    Rows(u32),
}

impl Multiline {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Multiline::Off)
    }
}

impl From<bool> for Multiline {
    fn from(flag: bool) -> Self {
        if flag { Multiline::On } else { Multiline::Off }
    }
}

impl From<u32> for Multiline {
    fn from(rows: u32) -> Self {
        Multiline::Rows(rows)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub(crate) enum MultilineSetting {
    Flag(bool),
    Rows(u32),
}

impl Default for MultilineSetting {
    fn default() -> Self {
        MultilineSetting::Flag(false)
    }
}

impl From<MultilineSetting> for Multiline {
    fn from(setting: MultilineSetting) -> Self {
        match setting {
            MultilineSetting::Flag(flag) => Multiline::from(flag),
            MultilineSetting::Rows(rows) => Multiline::Rows(rows),
        }
    }
}

impl From<Multiline> for MultilineSetting {
    fn from(multiline: Multiline) -> Self {
        match multiline {
            Multiline::Off => MultilineSetting::Flag(false),
            Multiline::On => MultilineSetting::Flag(true),
            Multiline::Rows(rows) => MultilineSetting::Rows(rows),
        }
    }
}
