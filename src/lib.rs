/// docsum - summarizes uploaded documents with a generative language model.
///
/// Documents longer than one model context are split into overlapping,
/// boundary-aware chunks. Each chunk is summarized on its own and the partial
/// summaries are merged into one final summary. Word statistics and a reading
/// time estimate are computed from the original text alongside.
///
/// # Architecture
///
/// - `utils::chunker` and `utils::text_stats` are pure text functions
/// - `ai` holds the `SummarizationClient` trait and the Gemini implementation
/// - `worker` runs the two-stage pipeline and builds the `SummaryResult`
/// - `document` extracts text from PDF and plain-text uploads
///
/// # Example
///
/// ```no_run
/// use docsum::ai::GeminiClient;
/// use docsum::core::config::AppConfig;
/// use docsum::core::models::{Language, Style};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     docsum::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let client = GeminiClient::from_config(&config)?;
///
///     let bytes = std::fs::read("report.pdf")?;
///     let result = docsum::worker::summarize_document(
///         &client,
///         &config,
///         &bytes,
///         "report.pdf",
///         Style::General,
///         Language::English,
///     )
///     .await?;
///
///     println!("{}", result.summary.main_summary);
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod core;
pub mod document;
pub mod errors;
pub mod utils;
pub mod worker;

/// Configure structured JSON logging.
///
/// Installs a tracing-subscriber registry with a JSON formatter and a
/// `RUST_LOG` filter defaulting to `info`. Safe to call more than once; later
/// calls leave the first subscriber in place.
///
/// # Example
///
/// ```
/// docsum::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
