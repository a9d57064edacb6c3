//! Text extraction from uploaded documents.

use std::path::Path;
use tracing::debug;

use crate::errors::SummarizerError;

/// Plain text pulled out of an uploaded file.
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    /// Original filename.
    pub filename: String,
    /// Lowercased extension: "pdf", "txt", "md", ...
    pub file_type: String,
    pub text: String,
}

impl ExtractedDocument {
    /// Filename without its extension, used as the summary title.
    #[must_use]
    pub fn title(&self) -> String {
        Path::new(&self.filename)
            .file_stem()
            .map_or_else(|| self.filename.clone(), |s| s.to_string_lossy().into_owned())
    }
}

/// Extracts text according to the extension of `filename`.
///
/// # Errors
///
/// Returns `UnsupportedDocument` for unknown extensions and `ExtractionError`
/// when a PDF cannot be parsed.
pub fn extract_text(bytes: &[u8], filename: &str) -> Result<ExtractedDocument, SummarizerError> {
    let file_type = Path::new(filename)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let text = match file_type.as_str() {
        "pdf" => extract_pdf(bytes)?,
        "txt" | "text" | "md" | "markdown" => extract_plain(bytes),
        "" => {
            return Err(SummarizerError::UnsupportedDocument(format!(
                "{filename} has no file extension"
            )));
        }
        other => return Err(SummarizerError::UnsupportedDocument(other.to_string())),
    };

    debug!(filename, file_type = %file_type, chars = text.len(), "Extracted document text");

    Ok(ExtractedDocument {
        filename: filename.to_string(),
        file_type,
        text,
    })
}

fn extract_pdf(bytes: &[u8]) -> Result<String, SummarizerError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| SummarizerError::ExtractionError(e.to_string()))?;

    // pdf-extract separates pages with form feeds.
    let joined = text
        .split('\u{c}')
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n");

    Ok(joined.trim().to_string())
}

fn extract_plain(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).trim().to_string()
}
