mod attributes;
mod bindings;
mod classes;
mod kind;
mod labelled;
mod options;
mod plan;

pub use attributes::{AttributeSet, RowCount, build_attributes, input_class};
pub use bindings::{DataBindingSet, build_data_bindings, build_input_bindings};
pub use classes::{ClassList, build_classes};
pub use kind::{InputKind, resolve};
pub use labelled::{LabelledProps, build_labelled_props};
pub use options::{ClassScheme, DEFAULT_CONTROLLER, RenderOptions};
pub use plan::{Adornment, RenderPlan};
