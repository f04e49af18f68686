use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, bail, eyre};
use serde_json::Value;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

use textfield::{
    DocumentFormat, OutputDestination, OutputOptions, RenderOptions, emit, options_schema,
    parse_document_str, text_field_from_value,
};

#[derive(Debug, Parser)]
#[command(
    name = "textfield",
    version,
    about = "Derive text field render plans from option documents"
)]
struct Cli {
    /// Options document: a file path, an inline JSON object, or "-" for stdin
    #[arg(
        short = 'c',
        long = "config",
        value_name = "SOURCE",
        required_unless_present = "print_schema"
    )]
    config: Option<String>,

    /// Format of the options document (defaults to the file extension, then JSON)
    #[arg(long = "from", value_name = "FORMAT")]
    from: Option<DocumentFormat>,

    /// Format of the output (defaults to the output file extension, then JSON)
    #[arg(long = "to", value_name = "FORMAT")]
    to: Option<DocumentFormat>,

    /// Write to this file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Emit compact JSON/TOML rather than pretty formatting
    #[arg(long = "no-pretty")]
    no_pretty: bool,

    /// Overwrite the output file if it already exists
    #[arg(short = 'f', long = "force")]
    force: bool,

    /// Namespace for BEM class names (e.g. "Polaris" gives "Polaris-TextField")
    #[arg(long = "namespace", value_name = "NAME")]
    namespace: Option<String>,

    /// Controller identifier used by the numeric stepper data bindings
    #[arg(long = "controller", value_name = "NAME")]
    controller: Option<String>,

    /// Print the JSON Schema of the options document instead of rendering
    #[arg(long = "print-schema")]
    print_schema: bool,
}

impl Cli {
    fn render_options(&self) -> RenderOptions {
        let mut options = RenderOptions::default();
        if let Some(namespace) = &self.namespace {
            options = options.with_namespace(namespace.clone());
        }
        if let Some(controller) = &self.controller {
            options = options.with_controller(controller.clone());
        }
        options
    }

    fn output_options(&self) -> Result<OutputOptions> {
        let format = match (self.to, &self.output) {
            (Some(format), _) => format,
            (None, Some(path)) => DocumentFormat::from_path(path).ok_or_else(|| {
                eyre!(
                    "cannot infer output format from {}; pass --to",
                    path.display()
                )
            })?,
            (None, None) => DocumentFormat::default(),
        };
        let mut options = OutputOptions::new(format).with_pretty(!self.no_pretty);
        if let Some(path) = &self.output {
            if path.exists() && !self.force {
                bail!(
                    "file {} already exists (pass --force to overwrite)",
                    path.display()
                );
            }
            options = options.with_destination(OutputDestination::file(path));
        }
        Ok(options)
    }
}

/// Where the options document comes from.
#[derive(Debug, PartialEq, Eq)]
enum ConfigSource {
    Stdin,
    Inline(String),
    File(PathBuf),
}

impl ConfigSource {
    fn parse(raw: &str) -> Self {
        if raw == "-" {
            ConfigSource::Stdin
        } else if raw.trim_start().starts_with('{') {
            ConfigSource::Inline(raw.to_string())
        } else {
            ConfigSource::File(PathBuf::from(raw))
        }
    }

    fn format(&self, explicit: Option<DocumentFormat>) -> DocumentFormat {
        match (explicit, self) {
            (Some(format), _) => format,
            (None, ConfigSource::File(path)) => DocumentFormat::from_path(path).unwrap_or_default(),
            (None, _) => DocumentFormat::Json,
        }
    }

    fn read(&self) -> Result<String> {
        match self {
            ConfigSource::Stdin => {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .wrap_err("failed to read options from stdin")?;
                Ok(buffer)
            }
            ConfigSource::Inline(payload) => Ok(payload.clone()),
            ConfigSource::File(path) => fs::read_to_string(path)
                .wrap_err_with(|| format!("failed to read options file {}", path.display())),
        }
    }

    fn load(&self, explicit: Option<DocumentFormat>) -> Result<Value> {
        let format = self.format(explicit);
        let contents = self.read()?;
        tracing::debug!(source = ?self, %format, "loading options document");
        parse_document_str(&contents, format).map_err(|err| eyre!("{err:#}"))
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();
    let cli = Cli::parse();
    let output = cli.output_options()?;

    if cli.print_schema {
        let schema = options_schema().map_err(|err| eyre!("{err:#}"))?;
        return emit(&schema, &output).map_err(|err| eyre!("{err:#}"));
    }

    let Some(raw) = cli.config.as_deref() else {
        bail!("provide --config or --print-schema");
    };
    let document = ConfigSource::parse(raw).load(cli.from)?;
    let field = text_field_from_value(&document)
        .map_err(|err| eyre!("{err:#}"))
        .wrap_err("invalid text field options")?;
    let plan = field.render(&cli.render_options());
    tracing::info!(attribute = field.attribute(), kind = ?plan.kind, "rendered text field");
    emit(&plan, &output).map_err(|err| eyre!("{err:#}"))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}
