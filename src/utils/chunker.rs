//! Boundary-aware splitting of long text into overlapping chunks.
//!
//! Offsets are counted in characters, not bytes, so multi-byte text never
//! gets cut inside a code point.

use crate::core::config::{AppConfig, DEFAULT_CHUNK_OVERLAP, DEFAULT_MAX_CHUNK_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkerConfig {
    /// Maximum characters per chunk.
    pub max_chunk_size: usize,
    /// Characters shared between neighbouring chunks.
    pub overlap: usize,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            max_chunk_size: DEFAULT_MAX_CHUNK_SIZE,
            overlap: DEFAULT_CHUNK_OVERLAP,
        }
    }
}

impl ChunkerConfig {
    #[must_use]
    pub fn new(max_chunk_size: usize, overlap: usize) -> Self {
        Self {
            max_chunk_size,
            overlap,
        }
    }

    /// Window searched for a sentence end or paragraph break.
    fn boundary_window(&self) -> usize {
        self.overlap
    }

    /// Narrower window searched for a plain line break.
    fn line_window(&self) -> usize {
        self.overlap / 2
    }
}

impl From<&AppConfig> for ChunkerConfig {
    fn from(config: &AppConfig) -> Self {
        Self::new(config.max_chunk_size, config.chunk_overlap)
    }
}

/// Splits `text` using the default 8000/200 configuration.
#[must_use]
pub fn chunk_text(text: &str) -> Vec<String> {
    chunk_text_with(text, &ChunkerConfig::default())
}

/// Splits `text` into trimmed, non-empty chunks in document order.
///
/// Text that fits in one chunk comes back untouched as a single element.
/// Otherwise each cut prefers, near the end of the window: a `.`, then a
/// blank line, then a newline, and finally the raw window end.
#[must_use]
pub fn chunk_text_with(text: &str, config: &ChunkerConfig) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let max = config.max_chunk_size.max(1);

    if len <= max {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut start = 0;

    while start < len {
        let mut end = start + max;

        if end < len {
            end = find_boundary(&chars, start, end, config);
        }
        let end = end.min(len);

        let chunk: String = chars[start..end].iter().collect();
        let trimmed = chunk.trim();
        if !trimmed.is_empty() {
            chunks.push(trimmed.to_string());
        }

        if end >= len {
            break;
        }

        // Step back by the overlap, but never to or behind the current start.
        let next = end.saturating_sub(config.overlap);
        start = if next > start { next } else { end };
    }

    chunks
}

/// Picks the cut position for the window `[start, end)` where `end < chars.len()`.
fn find_boundary(chars: &[char], start: usize, end: usize, config: &ChunkerConfig) -> usize {
    let wide_from = end.saturating_sub(config.boundary_window()).max(start);

    if let Some(pos) = rfind(chars, &['.'], wide_from, end).filter(|&p| p > start) {
        return pos + 1;
    }

    if let Some(pos) = rfind(chars, &['\n', '\n'], wide_from, end).filter(|&p| p > start) {
        return pos + 2;
    }

    let narrow_from = end.saturating_sub(config.line_window()).max(start);
    if let Some(pos) = rfind(chars, &['\n'], narrow_from, end).filter(|&p| p > start) {
        return pos + 1;
    }

    end
}

/// Last index `i` in `[from, to)` where `needle` occurs entirely inside `[from, to)`.
fn rfind(chars: &[char], needle: &[char], from: usize, to: usize) -> Option<usize> {
    if to < from + needle.len() {
        return None;
    }
    (from..=to - needle.len())
        .rev()
        .find(|&i| chars[i..i + needle.len()] == *needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_rfind_respects_window() {
        let c = chars("a.b.c.d");
        assert_eq!(rfind(&c, &['.'], 0, 7), Some(5));
        assert_eq!(rfind(&c, &['.'], 0, 5), Some(3));
        assert_eq!(rfind(&c, &['.'], 4, 5), None);
    }

    #[test]
    fn test_rfind_needle_must_fit() {
        let c = chars("ab\n\ncd");
        assert_eq!(rfind(&c, &['\n', '\n'], 0, 6), Some(2));
        // Second newline sits outside the window.
        assert_eq!(rfind(&c, &['\n', '\n'], 0, 3), None);
    }

    #[test]
    fn test_find_boundary_falls_back_to_raw_end() {
        let c = chars(&"x".repeat(30));
        let config = ChunkerConfig::new(10, 4);
        assert_eq!(find_boundary(&c, 0, 10, &config), 10);
    }

    #[test]
    fn test_tiny_max_chunk_size_still_progresses() {
        let config = ChunkerConfig::new(0, 0);
        let chunks = chunk_text_with("abc", &config);
        assert_eq!(chunks, vec!["a", "b", "c"]);
    }
}
