use serde::Serialize;

use crate::domain::TextField;

/// Concrete input element a text field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Numeric,
    Multiline,
    PlainText,
}

impl InputKind {
    /// Form-builder helper the template calls for this kind.
    pub fn helper(self) -> &'static str {
        match self {
            InputKind::Numeric => "number_field",
            InputKind::Multiline => "text_area",
            InputKind::PlainText => "text_field",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, InputKind::Numeric)
    }
}

/// Numeric wins over multiline; everything else is plain text.
pub fn resolve(field: &TextField) -> InputKind {
    let kind = if field.is_numeric() {
        InputKind::Numeric
    } else if field.multiline().is_enabled() {
        InputKind::Multiline
    } else {
        InputKind::PlainText
    };
    tracing::trace!(attribute = field.attribute(), ?kind, "resolved input kind");
    kind
}

impl TextField {
    pub fn resolve(&self) -> InputKind {
        resolve(self)
    }
}
