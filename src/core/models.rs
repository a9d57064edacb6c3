use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Requested verbosity tier of the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Short,
    General,
    Detailed,
}

impl Style {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Style::Short => "short",
            Style::General => "general",
            Style::Detailed => "detailed",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "short" => Ok(Style::Short),
            "general" => Ok(Style::General),
            "detailed" => Ok(Style::Detailed),
            other => Err(format!(
                "Unknown summary style '{other}' (expected short, general or detailed)"
            )),
        }
    }
}

/// Output language of the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Indonesian,
    English,
}

impl Language {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Indonesian => "indonesian",
            Language::English => "english",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "indonesian" => Ok(Language::Indonesian),
            "english" => Ok(Language::English),
            other => Err(format!(
                "Unknown summary language '{other}' (expected indonesian or english)"
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TextStatistics {
    pub total_words: usize,
    pub unique_words: usize,
    pub characters: usize,
    pub characters_no_spaces: usize,
    pub sentences: usize,
    pub paragraphs: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryBody {
    pub main_summary: String,
    pub word_count: usize,
    pub reading_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessingInfo {
    pub chunks_processed: usize,
    pub chunking_used: bool,
    pub processing_time_seconds: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileInfo {
    pub original_filename: String,
    pub file_size: usize,
    pub file_size_mb: f64,
}

impl FileInfo {
    #[must_use]
    pub fn new(original_filename: &str, file_size: usize) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let mb = file_size as f64 / (1024.0 * 1024.0);
        Self {
            original_filename: original_filename.to_string(),
            file_size,
            file_size_mb: round2(mb),
        }
    }
}

/// Everything returned for one summarization request. Built once, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub summary: SummaryBody,
    pub language: Language,
    pub style: Style,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_info: Option<FileInfo>,
    pub text_statistics: TextStatistics,
    pub processing_info: ProcessingInfo,
    pub status: String,
}

pub const STATUS_COMPLETED: &str = "completed";

/// Rounds to two decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
