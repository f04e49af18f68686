mod format;
mod input;
mod output;

pub use format::DocumentFormat;
pub use input::{load_text_field, parse_document_str, text_field_from_value};
pub use output::{OutputDestination, OutputOptions, emit, to_document_string};
