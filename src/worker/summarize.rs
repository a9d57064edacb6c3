//! Two-stage summarization: one call per chunk, then a merge call.
//!
//! Model failures never escape this module. A failed section becomes a
//! placeholder and a failed merge falls back to the raw section summaries.

use futures::stream::{self, StreamExt};
use tracing::{info, warn};

use crate::ai::prompt::{build_combine_prompt, build_section_prompt, build_single_prompt};
use crate::ai::{GenerationConfig, SummarizationClient};
use crate::core::models::{Language, Style};

pub const NO_CONTENT_MESSAGE: &str = "No content to summarize.";

/// Summarizes `text` in a single call honoring `style` and `language`.
pub async fn summarize_single_chunk(
    client: &dyn SummarizationClient,
    text: &str,
    style: Style,
    language: Language,
) -> String {
    let prompt = build_single_prompt(text, style, language);
    match client.generate(&prompt, &GenerationConfig::for_summary()).await {
        Ok(summary) => summary,
        Err(e) => {
            warn!("Single-shot summarization failed: {}", e);
            format!("Error generating summary: {e}")
        }
    }
}

async fn summarize_section(
    client: &dyn SummarizationClient,
    chunk: &str,
    index: usize,
    total: usize,
    language: Language,
) -> String {
    let prompt = build_section_prompt(chunk, index, total, language);
    match client.generate(&prompt, &GenerationConfig::for_section()).await {
        Ok(summary) => summary,
        Err(e) => {
            warn!(section = index + 1, total, "Section summarization failed: {}", e);
            format!("Error summarizing section {}: {e}", index + 1)
        }
    }
}

/// Summarizes every chunk, with at most `concurrency` calls in flight.
///
/// The returned summaries are in chunk order whatever order the calls finish in.
pub async fn summarize_sections(
    client: &dyn SummarizationClient,
    chunks: &[String],
    language: Language,
    concurrency: usize,
) -> Vec<String> {
    let total = chunks.len();
    stream::iter(chunks.iter().enumerate())
        .map(|(index, chunk)| summarize_section(client, chunk, index, total, language))
        .buffered(concurrency.max(1))
        .collect()
        .await
}

/// Produces the final summary for an already chunked document.
///
/// Zero chunks yield [`NO_CONTENT_MESSAGE`], one chunk takes the single-shot
/// path, and more chunks are summarized per section and then merged.
pub async fn summarize_chunks(
    client: &dyn SummarizationClient,
    chunks: &[String],
    style: Style,
    language: Language,
    concurrency: usize,
) -> String {
    match chunks {
        [] => NO_CONTENT_MESSAGE.to_string(),
        [only] => summarize_single_chunk(client, only, style, language).await,
        _ => {
            info!("Summarizing {} sections", chunks.len());
            let section_summaries =
                summarize_sections(client, chunks, language, concurrency).await;
            let combined = section_summaries.join("\n\n");

            let prompt = build_combine_prompt(&combined, style, language);
            match client.generate(&prompt, &GenerationConfig::for_summary()).await {
                Ok(summary) => summary,
                Err(e) => {
                    warn!("Final summary merge failed: {}", e);
                    format!("Error creating final summary: {e}\n\nSection summaries:\n{combined}")
                }
            }
        }
    }
}
