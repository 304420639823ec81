//! Print the OpenAPI document as JSON or YAML.

use std::io::Write;

use clap::{Parser, ValueEnum};
use users_api::doc::ApiDoc;
use utoipa::OpenApi;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum Format {
    #[default]
    Json,
    Yaml,
}

/// Dump the users API OpenAPI document to stdout.
#[derive(Debug, Parser)]
#[command(name = "openapi-dump")]
struct Args {
    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let doc = ApiDoc::openapi();
    let rendered = match args.format {
        Format::Json => doc.to_pretty_json()?,
        Format::Yaml => doc.to_yaml()?,
    };
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    Ok(())
}
