#![allow(dead_code)]

use async_trait::async_trait;
use docsum::ai::{GenerationConfig, SummarizationClient};
use docsum::errors::SummarizerError;
use regex::Regex;
use std::sync::Mutex;
use std::time::Duration;

pub const MERGE_MARKER: &str = "Section summaries to combine:";
pub const SINGLE_REPLY: &str = "SINGLE SUMMARY";
pub const MERGE_REPLY: &str = "FINAL SUMMARY";

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub prompt: String,
    pub config: GenerationConfig,
}

/// In-memory stand-in for Gemini.
///
/// Section prompts ("part N of M") answer `summary of part N`, merge prompts
/// answer `FINAL SUMMARY` and anything else answers `SINGLE SUMMARY`.
#[derive(Default)]
pub struct ScriptedClient {
    pub calls: Mutex<Vec<RecordedCall>>,
    pub failing_parts: Vec<usize>,
    pub fail_merge: bool,
    pub fail_single: bool,
    /// Earlier parts sleep longer so they finish last.
    pub reverse_latency: bool,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_prompt(&self) -> String {
        self.calls
            .lock()
            .unwrap()
            .last()
            .map(|c| c.prompt.clone())
            .unwrap_or_default()
    }
}

fn section_part(prompt: &str) -> Option<(usize, usize)> {
    let re = Regex::new(r"part (\d+) of (\d+) from a document").unwrap();
    re.captures(prompt).map(|caps| {
        (
            caps[1].parse().unwrap(),
            caps[2].parse().unwrap(),
        )
    })
}

#[async_trait]
impl SummarizationClient for ScriptedClient {
    async fn generate(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String, SummarizerError> {
        if prompt.contains(MERGE_MARKER) {
            self.record(prompt, config);
            return if self.fail_merge {
                Err(SummarizerError::ApiError {
                    status: 503,
                    body: "model overloaded".to_string(),
                })
            } else {
                Ok(MERGE_REPLY.to_string())
            };
        }

        if let Some((part, total)) = section_part(prompt) {
            if self.reverse_latency {
                let millis = u64::try_from((total - part) * 20).unwrap();
                tokio::time::sleep(Duration::from_millis(millis)).await;
            }
            self.record(prompt, config);
            return if self.failing_parts.contains(&part) {
                Err(SummarizerError::GeminiError("quota exceeded".to_string()))
            } else {
                Ok(format!("summary of part {part}"))
            };
        }

        self.record(prompt, config);
        if self.fail_single {
            Err(SummarizerError::HttpError("connection reset".to_string()))
        } else {
            Ok(SINGLE_REPLY.to_string())
        }
    }
}

impl ScriptedClient {
    fn record(&self, prompt: &str, config: &GenerationConfig) {
        self.calls.lock().unwrap().push(RecordedCall {
            prompt: prompt.to_string(),
            config: *config,
        });
    }
}
