use std::time::Instant;
use tracing::{info, instrument};

use super::summarize;
use crate::ai::SummarizationClient;
use crate::core::config::AppConfig;
use crate::core::models::{
    FileInfo, Language, ProcessingInfo, STATUS_COMPLETED, Style, SummaryBody, SummaryResult,
    round2,
};
use crate::document;
use crate::errors::SummarizerError;
use crate::utils::chunker::{ChunkerConfig, chunk_text_with};
use crate::utils::text_stats::{count_words, estimate_reading_time_at};

/// Summarizes raw text. Model failures degrade the summary text and never fail the call.
pub async fn summarize_text(
    client: &dyn SummarizationClient,
    config: &AppConfig,
    text: &str,
    style: Style,
    language: Language,
) -> SummaryResult {
    let started = Instant::now();
    build_result(client, config, text, style, language, started).await
}

/// Extracts the document's text, then summarizes it.
///
/// # Errors
///
/// Returns the extraction error (a client error) if the document cannot be
/// read. Nothing is sent to the model in that case.
#[instrument(level = "info", skip(client, config, bytes), fields(correlation_id = %uuid::Uuid::new_v4(), size = bytes.len()))]
pub async fn summarize_document(
    client: &dyn SummarizationClient,
    config: &AppConfig,
    bytes: &[u8],
    filename: &str,
    style: Style,
    language: Language,
) -> Result<SummaryResult, SummarizerError> {
    let started = Instant::now();

    let doc = document::extract_text(bytes, filename)?;

    let mut result = build_result(client, config, &doc.text, style, language, started).await;
    result.title = Some(doc.title());
    result.file_info = Some(FileInfo::new(filename, bytes.len()));
    Ok(result)
}

async fn build_result(
    client: &dyn SummarizationClient,
    config: &AppConfig,
    text: &str,
    style: Style,
    language: Language,
    started: Instant,
) -> SummaryResult {
    let text_statistics = count_words(text);
    let reading_time =
        estimate_reading_time_at(text_statistics.total_words, config.words_per_minute);

    // Whitespace-only documents have nothing to send to the model.
    let chunks = if text.trim().is_empty() {
        Vec::new()
    } else {
        chunk_text_with(text, &ChunkerConfig::from(config))
    };
    info!("Processing {} chunks for summarization", chunks.len());

    let main_summary =
        summarize::summarize_chunks(client, &chunks, style, language, config.chunk_concurrency)
            .await;

    let processing_time_seconds = round2(started.elapsed().as_secs_f64());
    info!(
        chunks = chunks.len(),
        words = text_statistics.total_words,
        "Summary completed in {:.2}s",
        processing_time_seconds
    );

    SummaryResult {
        title: None,
        summary: SummaryBody {
            main_summary,
            word_count: text_statistics.total_words,
            reading_time,
        },
        language,
        style,
        file_info: None,
        text_statistics,
        processing_info: ProcessingInfo {
            chunks_processed: chunks.len(),
            chunking_used: chunks.len() > 1,
            processing_time_seconds,
        },
        status: STATUS_COMPLETED.to_string(),
    }
}
