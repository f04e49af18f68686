#![deny(rust_2018_idioms)]

mod domain;
mod error;
mod io;
mod render;
mod schema;

pub use domain::{
    Action, DEFAULT_MAX, DEFAULT_MIN, DEFAULT_STEP, FieldValue, FormRef, InputType, Multiline,
    TextField, TextFieldOptions,
};
pub use error::ConfigurationTypeError;
pub use io::{
    DocumentFormat, OutputDestination, OutputOptions, emit, load_text_field, parse_document_str,
    text_field_from_value, to_document_string,
};
pub use render::{
    Adornment, AttributeSet, ClassList, ClassScheme, DEFAULT_CONTROLLER, DataBindingSet,
    InputKind, LabelledProps, RenderOptions, RenderPlan, RowCount, build_attributes,
    build_classes, build_data_bindings, build_input_bindings, build_labelled_props, input_class,
    resolve,
};
pub use schema::{options_schema, validate_document};

pub mod prelude {
    pub use super::{
        Action, ConfigurationTypeError, InputKind, Multiline, RenderOptions, RenderPlan,
        TextField, TextFieldOptions,
    };
}
