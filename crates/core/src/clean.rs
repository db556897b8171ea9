//! Text cleaning and measurement.
//!
//! Every string the pipeline measures, compares, or emits goes through
//! [`clean_text`] first. Lengths are counted in characters, not bytes.

use std::sync::LazyLock;

use regex::Regex;

// U+FEFF counts as whitespace too; stray byte-order marks show up in scraped text.
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s\x{FEFF}]+").unwrap());

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[\w'-]+\b").unwrap());

/// Words per minute used for reading-time estimates.
pub const WORDS_PER_MINUTE: f64 = 200.0;

/// Collapses every run of whitespace (newlines included) to a single space
/// and trims both ends.
///
/// Idempotent: cleaning an already clean string returns it unchanged.
///
/// # Example
///
/// ```rust
/// use clearread_core::clean_text;
///
/// assert_eq!(clean_text("  Hello,\n\n   world\t"), "Hello, world");
/// ```
pub fn clean_text(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Length of a string in characters.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Counts words using a simple word-boundary pattern.
pub fn word_count(text: &str) -> usize {
    WORD.find_iter(text).count()
}

/// Estimated reading time in minutes for `words` words.
pub fn reading_time(words: usize) -> f64 {
    words as f64 / WORDS_PER_MINUTE
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "")]
    #[case("   ", "")]
    #[case("plain", "plain")]
    #[case("  padded  ", "padded")]
    #[case("line\nbreak", "line break")]
    #[case("many\n\n\n  blank\t\tlines", "many blank lines")]
    #[case("\u{a0}nbsp\u{a0}\u{a0}run\u{a0}", "nbsp run")]
    #[case("\u{feff} ", "")]
    #[case("\u{feff}marked\u{feff}text", "marked text")]
    fn test_clean_text(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(clean_text(input), expected);
    }

    #[rstest]
    #[case("")]
    #[case(" a  b ")]
    #[case("\r\n mixed \t whitespace \u{2003} here\n")]
    #[case("already clean")]
    fn test_clean_text_idempotent(#[case] input: &str) {
        let once = clean_text(input);
        assert_eq!(clean_text(&once), once);
    }

    #[test]
    fn test_char_len_counts_characters() {
        assert_eq!(char_len("héllo"), 5);
        assert_eq!(char_len("日本語"), 3);
        assert_eq!(char_len(""), 0);
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("hello world"), 2);
        assert_eq!(word_count("one"), 1);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("it's a well-known fact"), 4);
    }

    #[test]
    fn test_reading_time() {
        assert!((reading_time(200) - 1.0).abs() < f64::EPSILON);
        assert!((reading_time(0)).abs() < f64::EPSILON);
    }
}
