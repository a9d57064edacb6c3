//! Request pipeline and two-stage summarization

pub mod handler;
pub mod summarize;

// Re-export the main entry points for convenience
pub use handler::{summarize_document, summarize_text};

/// Marker embedded in summary text whenever a model call degraded.
pub const ERROR_MARKERS: [&str; 3] = [
    "Error generating summary:",
    "Error summarizing section",
    "Error creating final summary:",
];

/// Whether `summary` contains fallback text from a failed model call.
#[must_use]
pub fn is_degraded(summary: &str) -> bool {
    ERROR_MARKERS.iter().any(|marker| summary.contains(marker))
}
