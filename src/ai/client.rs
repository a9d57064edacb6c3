//! Summarization client module
//!
//! Encapsulates the text-in/text-out generative model used for summaries.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, info, warn};

use crate::core::config::AppConfig;
use crate::errors::SummarizerError;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const REQUEST_TIMEOUT_SECS: u64 = 120;
const MAX_ATTEMPTS: usize = 3;

pub const SECTION_MAX_OUTPUT_TOKENS: u32 = 1024;
pub const SUMMARY_MAX_OUTPUT_TOKENS: u32 = 2048;

/// Sampling and length knobs passed with every generation request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl GenerationConfig {
    /// Deterministic-leaning settings for one section of a longer document.
    #[must_use]
    pub fn for_section() -> Self {
        Self {
            temperature: 0.5,
            top_k: 1,
            top_p: 1.0,
            max_output_tokens: SECTION_MAX_OUTPUT_TOKENS,
        }
    }

    /// Settings for a whole-document summary, either single-shot or merged.
    #[must_use]
    pub fn for_summary() -> Self {
        Self {
            max_output_tokens: SUMMARY_MAX_OUTPUT_TOKENS,
            ..Self::for_section()
        }
    }
}

/// A generative model that turns a prompt into text.
///
/// Implementations are shared read-only across requests.
#[async_trait]
pub trait SummarizationClient: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the model could not be reached or produced no text.
    async fn generate(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String, SummarizerError>;
}

/// Google Gemini `generateContent` client.
pub struct GeminiClient {
    http: Client,
    api_key: String,
    model_name: String,
    base_url: String,
}

impl GeminiClient {
    /// # Errors
    ///
    /// Returns `ConfigError` if the API key is empty or the HTTP client cannot be built.
    pub fn new(api_key: String, model_name: String) -> Result<Self, SummarizerError> {
        Self::with_base_url(api_key, model_name, GEMINI_BASE_URL.to_string())
    }

    /// # Errors
    ///
    /// Same as [`GeminiClient::new`].
    pub fn with_base_url(
        api_key: String,
        model_name: String,
        base_url: String,
    ) -> Result<Self, SummarizerError> {
        if api_key.trim().is_empty() {
            return Err(SummarizerError::ConfigError(
                "GEMINI_API_KEY is empty".to_string(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| {
                SummarizerError::ConfigError(format!("Failed to build Gemini HTTP client: {e}"))
            })?;

        Ok(Self {
            http,
            api_key,
            model_name,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// # Errors
    ///
    /// Same as [`GeminiClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, SummarizerError> {
        Self::new(config.gemini_api_key.clone(), config.model_name().to_string())
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model_name
        )
    }

    async fn with_retry<F, Fut, T>(&self, operation: F) -> Result<T, SummarizerError>
    where
        F: FnMut() -> Fut + Send,
        Fut: std::future::Future<Output = Result<T, SummarizerError>> + Send,
        T: Send,
    {
        let strategy = ExponentialBackoff::from_millis(100)
            .map(jitter)
            .take(MAX_ATTEMPTS - 1);

        RetryIf::spawn(strategy, operation, |e: &SummarizerError| {
            let retry = e.is_transient();
            if retry {
                warn!("Transient Gemini failure, retrying: {}", e);
            }
            retry
        })
        .await
    }

    async fn send_once(&self, body: &Value) -> Result<String, SummarizerError> {
        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| SummarizerError::HttpError(format!("Gemini API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(SummarizerError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let response_json: Value = response.json().await.map_err(|e| {
            SummarizerError::GeminiError(format!("Failed to parse Gemini response: {e}"))
        })?;

        extract_response_text(&response_json)
    }
}

#[async_trait]
impl SummarizationClient for GeminiClient {
    async fn generate(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String, SummarizerError> {
        #[cfg(feature = "debug-logs")]
        info!("Using Gemini prompt:\n{}", prompt);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            "Generating with {} ({} prompt chars, max {} output tokens)",
            self.model_name,
            prompt.chars().count(),
            config.max_output_tokens
        );

        let body = build_request_body(prompt, config);
        let text = self.with_retry(|| self.send_once(&body)).await?;

        debug!("Gemini returned {} chars", text.len());
        Ok(text)
    }
}

/// Builds the JSON body for `generateContent`.
#[must_use]
pub fn build_request_body(prompt: &str, config: &GenerationConfig) -> Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": [{ "text": prompt }],
        }],
        "generationConfig": {
            "temperature": config.temperature,
            "topK": config.top_k,
            "topP": config.top_p,
            "maxOutputTokens": config.max_output_tokens,
        },
    })
}

/// Joins the text parts of the first candidate.
///
/// # Errors
///
/// Returns `GeminiError` if the first candidate carries no text, naming the
/// finish reason when Gemini reports one.
pub fn extract_response_text(response: &Value) -> Result<String, SummarizerError> {
    let candidate = response
        .get("candidates")
        .and_then(|c| c.as_array())
        .and_then(|c| c.first());

    let collected: Vec<&str> = candidate
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array())
        .map(|parts| {
            parts
                .iter()
                .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
                .collect()
        })
        .unwrap_or_default();

    if !collected.is_empty() {
        return Ok(collected.concat());
    }

    let reason = candidate
        .and_then(|c| c.get("finishReason"))
        .and_then(|r| r.as_str())
        .or_else(|| {
            response
                .get("promptFeedback")
                .and_then(|f| f.get("blockReason"))
                .and_then(|r| r.as_str())
        });

    Err(match reason {
        Some(reason) => {
            SummarizerError::GeminiError(format!("No text in response (finish reason: {reason})"))
        }
        None => SummarizerError::GeminiError("No text in response".to_string()),
    })
}
