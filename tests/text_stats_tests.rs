use docsum::core::models::TextStatistics;
use docsum::utils::text_stats::{count_words, estimate_reading_time, estimate_reading_time_at};

#[test]
fn test_empty_text_is_all_zero() {
    assert_eq!(count_words(""), TextStatistics::default());
}

#[test]
fn test_basic_counts() {
    let stats = count_words("Hello world. Hello!");
    assert_eq!(stats.total_words, 3);
    assert_eq!(stats.unique_words, 2);
    assert_eq!(stats.sentences, 2);
    assert_eq!(stats.characters, 19);
    assert_eq!(stats.characters_no_spaces, 17);
    assert_eq!(stats.paragraphs, 1);
}

#[test]
fn test_words_are_case_folded() {
    let stats = count_words("Rust rust RUST");
    assert_eq!(stats.total_words, 3);
    assert_eq!(stats.unique_words, 1);
}

#[test]
fn test_punctuation_runs_count_once() {
    let stats = count_words("Wait... what?! Really?");
    assert_eq!(stats.sentences, 3);
}

#[test]
fn test_paragraphs_split_on_blank_lines() {
    let text = "\n\nFirst paragraph.\nStill first.\n\nSecond.\n   \n\nThird.\n\n";
    assert_eq!(count_words(text).paragraphs, 3);
}

#[test]
fn test_whitespace_only_text() {
    let stats = count_words("   \n\t ");
    assert_eq!(stats.total_words, 0);
    assert_eq!(stats.paragraphs, 0);
    assert_eq!(stats.characters, 6);
    assert_eq!(stats.characters_no_spaces, 2);
}

#[test]
fn test_unicode_words() {
    let stats = count_words("Ringkasan dokumen ini sangat berguna. Ünïcode wörds.");
    assert_eq!(stats.total_words, 7);
    assert_eq!(stats.sentences, 2);
}

#[test]
fn test_reading_time_thresholds() {
    assert_eq!(estimate_reading_time(0), "0 minutes");
    assert_eq!(estimate_reading_time(150), "Less than 1 minute");
    assert_eq!(estimate_reading_time(200), "1 minute");
    assert_eq!(estimate_reading_time(350), "1 minute");
    assert_eq!(estimate_reading_time(400), "2 minutes");
    assert_eq!(estimate_reading_time(11_999), "59 minutes");
}

#[test]
fn test_reading_time_hours() {
    assert_eq!(estimate_reading_time(12_000), "1 hour");
    assert_eq!(estimate_reading_time(12_100), "1 hour 1 minute");
    assert_eq!(estimate_reading_time(12_400), "1 hour 2 minutes");
    assert_eq!(estimate_reading_time(24_000), "2 hours");
    assert_eq!(estimate_reading_time(26_000), "2 hours 10 minutes");
}

#[test]
fn test_reading_time_custom_pace() {
    assert_eq!(estimate_reading_time_at(300, 300), "1 minute");
    assert_eq!(estimate_reading_time_at(600, 250), "2 minutes");
}
