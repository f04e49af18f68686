mod action;
mod input;
mod options;
mod text_field;
mod value;

pub use action::Action;
pub use input::{InputType, Multiline};
pub use options::{DEFAULT_MAX, DEFAULT_MIN, DEFAULT_STEP, FormRef, TextFieldOptions};
pub use text_field::TextField;
pub use value::FieldValue;

pub(crate) use value::{is_present, is_present_opt};
