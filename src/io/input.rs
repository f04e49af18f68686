use anyhow::{Context, Result};
use serde_json::Value;

use super::DocumentFormat;
use crate::domain::{TextField, TextFieldOptions};
use crate::schema::validate_document;

/// Parse structured data in any supported format into a `serde_json::Value`.
pub fn parse_document_str(contents: &str, format: DocumentFormat) -> Result<Value> {
    match format {
        DocumentFormat::Json => {
            serde_json::from_str::<Value>(contents).with_context(|| "failed to parse JSON document")
        }
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => {
            serde_yaml::from_str::<Value>(contents).with_context(|| "failed to parse YAML document")
        }
        #[cfg(feature = "toml")]
        DocumentFormat::Toml => toml::from_str::<toml::Table>(contents)
            .with_context(|| "failed to parse TOML document")
            .and_then(|table| {
                serde_json::to_value(table).context("failed to convert TOML to JSON")
            }),
    }
}

/// Validate an options document and build the text field it describes.
///
/// Type problems surface as a [`crate::ConfigurationTypeError`] inside the returned error.
pub fn text_field_from_value(document: &Value) -> Result<TextField> {
    validate_document(document)?;
    let options = TextFieldOptions::from_document(document)?;
    Ok(options.build()?)
}

/// Parse, validate and build a text field from a document string.
pub fn load_text_field(contents: &str, format: DocumentFormat) -> Result<TextField> {
    let document = parse_document_str(contents, format)?;
    text_field_from_value(&document)
}
