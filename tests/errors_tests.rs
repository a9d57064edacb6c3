use std::error::Error;
use docsum::errors::SummarizerError;

#[test]
fn test_summarizer_error_implements_error_trait() {
    fn assert_error<T: Error + Send + Sync + 'static>(_: &T) {}

    let error = SummarizerError::ExtractionError("bad xref table".to_string());
    assert_error(&error);
}

#[test]
fn test_summarizer_error_display() {
    let error = SummarizerError::ExtractionError("bad xref table".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to extract text from document: bad xref table"
    );

    let error = SummarizerError::GeminiError("No text in response".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to access Gemini API: No text in response"
    );

    let error = SummarizerError::ApiError {
        status: 429,
        body: "rate limited".to_string(),
    };
    assert_eq!(
        format!("{error}"),
        "Gemini API returned status 429: rate limited"
    );
}

#[test]
fn test_client_and_server_classification() {
    assert!(SummarizerError::ExtractionError(String::new()).is_client_error());
    assert!(SummarizerError::UnsupportedDocument("zip".to_string()).is_client_error());
    assert_eq!(SummarizerError::UnsupportedDocument("zip".to_string()).status_code(), 400);

    assert!(!SummarizerError::Internal("boom".to_string()).is_client_error());
    assert_eq!(SummarizerError::Internal("boom".to_string()).status_code(), 500);
    assert_eq!(SummarizerError::ConfigError("no key".to_string()).status_code(), 500);
}

#[test]
fn test_transient_failures() {
    assert!(SummarizerError::HttpError("timeout".to_string()).is_transient());
    for status in [429, 500, 503] {
        let error = SummarizerError::ApiError { status, body: String::new() };
        assert!(error.is_transient(), "status {status} should be retried");
    }
    for status in [400, 403, 404] {
        let error = SummarizerError::ApiError { status, body: String::new() };
        assert!(!error.is_transient(), "status {status} should not be retried");
    }
    assert!(!SummarizerError::GeminiError("blocked".to_string()).is_transient());
}

#[test]
fn test_summarizer_error_from_conversions() {
    let err = anyhow::anyhow!("test error");
    let converted: SummarizerError = err.into();
    match converted {
        SummarizerError::Internal(msg) => assert!(msg.contains("test error")),
        _ => panic!("Unexpected error type"),
    }

    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let converted: SummarizerError = json_err.into();
    assert!(matches!(converted, SummarizerError::GeminiError(_)));

    #[allow(unused)]
    #[allow(clippy::items_after_statements)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> SummarizerError {
        SummarizerError::from(err)
    }
}
