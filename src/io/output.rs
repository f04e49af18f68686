use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use super::DocumentFormat;

/// Where a rendered document is written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputDestination {
    #[default]
    Stdout,
    File(PathBuf),
}

impl OutputDestination {
    pub fn file(path: impl AsRef<Path>) -> Self {
        OutputDestination::File(path.as_ref().to_path_buf())
    }
}

/// Format and destination for render plans and schemas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputOptions {
    pub format: DocumentFormat,
    pub pretty: bool,
    pub destination: OutputDestination,
}

impl OutputOptions {
    pub fn new(format: DocumentFormat) -> Self {
        Self {
            format,
            pretty: true,
            destination: OutputDestination::Stdout,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_destination(mut self, destination: OutputDestination) -> Self {
        self.destination = destination;
        self
    }
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self::new(DocumentFormat::default())
    }
}

/// Serializes `value` as a single document in `format`.
pub fn to_document_string<T: Serialize + ?Sized>(
    value: &T,
    format: DocumentFormat,
    pretty: bool,
) -> Result<String> {
    serialize(value, format, pretty)
        .with_context(|| format!("failed to serialize {format} document"))
}

fn serialize<T: Serialize + ?Sized>(
    value: &T,
    format: DocumentFormat,
    pretty: bool,
) -> Result<String> {
    Ok(match format {
        DocumentFormat::Json if pretty => serde_json::to_string_pretty(value)?,
        DocumentFormat::Json => serde_json::to_string(value)?,
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => serde_yaml::to_string(value)?,
        #[cfg(feature = "toml")]
        DocumentFormat::Toml if pretty => toml::to_string_pretty(value)?,
        #[cfg(feature = "toml")]
        DocumentFormat::Toml => toml::to_string(value)?,
    })
}

/// Serializes `value` and writes it, newline-terminated, to the configured destination.
pub fn emit<T: Serialize + ?Sized>(value: &T, options: &OutputOptions) -> Result<()> {
    let mut document = to_document_string(value, options.format, options.pretty)?;
    if !document.ends_with('\n') {
        document.push('\n');
    }
    match &options.destination {
        OutputDestination::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(document.as_bytes())
                .and_then(|()| stdout.flush())
                .context("failed to write to stdout")?;
        }
        OutputDestination::File(path) => fs::write(path, &document)
            .with_context(|| format!("failed to write {}", path.display()))?,
    }
    tracing::debug!(
        format = %options.format,
        destination = ?options.destination,
        bytes = document.len(),
        "emitted document"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TextField;
    use crate::render::RenderOptions;
    use serde_json::json;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_path() -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("textfield-plan-{nanos}.json"))
    }

    #[test]
    fn compact_json_has_no_whitespace() {
        let document =
            to_document_string(&json!({"rows": 3}), DocumentFormat::Json, false).unwrap();
        assert_eq!(document, r#"{"rows":3}"#);
    }

    #[test]
    fn writes_render_plans_to_files() {
        let path = temp_path();
        let field = TextField::builder("user", "age")
            .with_type("number")
            .build()
            .unwrap();
        let plan = field.render(&RenderOptions::default());
        let options = OutputOptions::default()
            .with_pretty(false)
            .with_destination(OutputDestination::file(&path));
        emit(&plan, &options).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with(r#"{"kind":"numeric","helper":"number_field""#));
        assert!(contents.ends_with("}\n"));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn missing_directories_are_reported() {
        let options = OutputOptions::default().with_destination(OutputDestination::file(
            std::env::temp_dir().join("textfield-missing-dir/plan.json"),
        ));
        let err = emit(&json!({"ok": true}), &options).unwrap_err();
        assert!(err.to_string().contains("failed to write"));
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn serializes_yaml() {
        let document =
            to_document_string(&json!({"rows": 3}), DocumentFormat::Yaml, true).unwrap();
        assert_eq!(document.trim(), "rows: 3");
    }
}
