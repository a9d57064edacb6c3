use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizerError {
    #[error("Failed to extract text from document: {0}")]
    ExtractionError(String),

    #[error("Unsupported document type: {0}")]
    UnsupportedDocument(String),

    #[error("Failed to access Gemini API: {0}")]
    GeminiError(String),

    #[error("Gemini API returned status {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Summarization client is not configured: {0}")]
    ConfigError(String),

    #[error("An error occurred while processing the document: {0}")]
    Internal(String),
}

impl SummarizerError {
    /// Whether the failure was caused by the submitted document rather than the service.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            SummarizerError::ExtractionError(_) | SummarizerError::UnsupportedDocument(_)
        )
    }

    #[must_use]
    pub fn status_code(&self) -> u16 {
        if self.is_client_error() { 400 } else { 500 }
    }

    /// Transport failures, rate limiting and upstream 5xx are worth another attempt.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            SummarizerError::HttpError(_) => true,
            SummarizerError::ApiError { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for SummarizerError {
    fn from(error: reqwest::Error) -> Self {
        SummarizerError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for SummarizerError {
    fn from(error: serde_json::Error) -> Self {
        SummarizerError::GeminiError(format!("Failed to parse Gemini response: {error}"))
    }
}

impl From<anyhow::Error> for SummarizerError {
    fn from(error: anyhow::Error) -> Self {
        SummarizerError::Internal(error.to_string())
    }
}
