use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

use crate::core::config::DEFAULT_WORDS_PER_MINUTE;
use crate::core::models::TextStatistics;

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\w+\b").unwrap_or_else(|_| Regex::new(r"$^").expect("fallback regex compiles"))
});

static SENTENCE_END_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[.!?]+").unwrap_or_else(|_| Regex::new(r"$^").expect("fallback regex compiles"))
});

static PARAGRAPH_BREAK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n\s*\n").unwrap_or_else(|_| Regex::new(r"$^").expect("fallback regex compiles"))
});

/// Word, character, sentence and paragraph counts for `text`.
///
/// Words are maximal `\w` runs compared case-insensitively. A run of `.`, `!`
/// or `?` counts as one sentence end. Paragraphs are separated by blank lines.
#[must_use]
pub fn count_words(text: &str) -> TextStatistics {
    if text.is_empty() {
        return TextStatistics::default();
    }

    let lowered = text.to_lowercase();
    let words: Vec<&str> = WORD_RE.find_iter(&lowered).map(|m| m.as_str()).collect();
    let unique: HashSet<&str> = words.iter().copied().collect();

    let trimmed = text.trim();
    let paragraphs = if trimmed.is_empty() {
        0
    } else {
        PARAGRAPH_BREAK_RE.split(trimmed).count()
    };

    TextStatistics {
        total_words: words.len(),
        unique_words: unique.len(),
        characters: text.chars().count(),
        characters_no_spaces: text.chars().filter(|c| *c != ' ').count(),
        sentences: SENTENCE_END_RE.find_iter(text).count(),
        paragraphs,
    }
}

/// Reading time at the default pace of 200 words per minute.
#[must_use]
pub fn estimate_reading_time(word_count: usize) -> String {
    estimate_reading_time_at(word_count, DEFAULT_WORDS_PER_MINUTE)
}

/// Formats the time needed to read `word_count` words at `wpm` words per minute.
///
/// Under an hour the minutes are truncated. From one hour on, the total is
/// rounded to the nearest minute and split into hours and minutes.
#[must_use]
pub fn estimate_reading_time_at(word_count: usize, wpm: usize) -> String {
    if word_count == 0 {
        return "0 minutes".to_string();
    }

    #[allow(clippy::cast_precision_loss)]
    let minutes = word_count as f64 / wpm.max(1) as f64;

    if minutes < 1.0 {
        return "Less than 1 minute".to_string();
    }

    if minutes < 60.0 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let whole = minutes as u64;
        return plural(whole, "minute");
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total = minutes.round() as u64;
    let hours = total / 60;
    let remaining = total % 60;

    if remaining == 0 {
        plural(hours, "hour")
    } else {
        format!("{} {}", plural(hours, "hour"), plural(remaining, "minute"))
    }
}

fn plural(count: u64, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
