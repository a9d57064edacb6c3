//! docsum - summarize a document from the command line.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, warn};

use docsum::ai::GeminiClient;
use docsum::core::config::AppConfig;
use docsum::core::models::{Language, Style};

/// Summarize a PDF, text or Markdown document with Gemini.
#[derive(Parser, Debug)]
#[command(name = "docsum", version, about)]
struct Cli {
    /// Document to summarize.
    file: std::path::PathBuf,

    /// Summary style: short, general or detailed.
    #[arg(long, default_value = "general")]
    style: Style,

    /// Summary language: indonesian or english.
    #[arg(long, default_value = "english")]
    language: Language,
}

#[tokio::main]
async fn main() -> Result<()> {
    docsum::setup_logging();
    let cli = Cli::parse();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        anyhow::anyhow!(e)
    })?;
    let client = GeminiClient::from_config(&config)?;

    let bytes = std::fs::read(&cli.file)
        .with_context(|| format!("Failed to read {}", cli.file.display()))?;
    let filename = cli
        .file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let result = docsum::worker::summarize_document(
        &client,
        &config,
        &bytes,
        &filename,
        cli.style,
        cli.language,
    )
    .await?;

    if docsum::worker::is_degraded(&result.summary.main_summary) {
        warn!("Summary for {} contains fallback text from a failed model call", filename);
    }

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
