use serde::Serialize;

use super::attributes::{AttributeSet, build_attributes};
use super::bindings::{DataBindingSet, build_data_bindings};
use super::classes::{ClassList, build_classes};
use super::kind::{InputKind, resolve};
use super::labelled::{LabelledProps, build_labelled_props};
use super::options::RenderOptions;
use crate::domain::TextField;

/// Prefix/suffix text and connected-slot flags, forwarded to the template as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Adornment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    pub connected_left: bool,
    pub connected_right: bool,
}

impl Adornment {
    fn of(field: &TextField) -> Self {
        Self {
            prefix: field.prefix().map(str::to_string),
            suffix: field.suffix().map(str::to_string),
            connected_left: field.connected_left(),
            connected_right: field.connected_right(),
        }
    }

    /// Whether either content slot is populated.
    pub fn connected(&self) -> bool {
        self.connected_left || self.connected_right
    }
}

/// All derived outputs of a single render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPlan {
    pub kind: InputKind,
    pub helper: &'static str,
    pub classes: ClassList,
    pub attributes: AttributeSet,
    pub data: DataBindingSet,
    pub labelled: LabelledProps,
    pub adornment: Adornment,
}

impl RenderPlan {
    pub fn build(field: &TextField, options: &RenderOptions) -> Self {
        let kind = resolve(field);
        Self {
            kind,
            helper: kind.helper(),
            classes: build_classes(field, &options.classes),
            attributes: build_attributes(field, kind, options),
            data: build_data_bindings(field, kind, options),
            labelled: build_labelled_props(field),
            adornment: Adornment::of(field),
        }
    }
}

impl TextField {
    pub fn render(&self, options: &RenderOptions) -> RenderPlan {
        RenderPlan::build(self, options)
    }
}
