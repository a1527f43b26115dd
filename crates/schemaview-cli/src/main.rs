mod logging;
mod tui;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use schemaview_core::{Config, Outline, SchemaLoader};

#[derive(Parser)]
#[command(name = "schemaview")]
#[command(about = "Browse a JSON Schema document as an expandable tree", long_about = None)]
struct Cli {
    /// Path to the root JSON Schema document
    schema: PathBuf,

    /// Configuration file (defaults to ./schemaview.toml, then the user config)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the tree to stdout instead of opening the viewer
    #[arg(long)]
    dump: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path),
        None => Config::load(),
    }
    .wrap_err("Failed to load configuration")?;

    logging::init(&config.logging, cli.dump)?;

    let loader = SchemaLoader::with_config(&config.model);
    let root = loader
        .load_file(&cli.schema)
        .wrap_err_with(|| format!("Failed to load schema {}", cli.schema.display()))?;
    tracing::info!(schema = %cli.schema.display(), "schema loaded");

    let outline = Outline::build(&root, &config.view);

    if cli.dump {
        print!("{}", outline.to_text());
        return Ok(());
    }

    let title = cli.schema.display().to_string();
    tui::run(&config.view, outline, title).await
}
