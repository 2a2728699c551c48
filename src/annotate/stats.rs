//! Descriptive text statistics.

use serde::{Deserialize, Serialize};

/// Counts and ratios describing a block of text.
///
/// These figures annotate pages and sections; no detection decision
/// depends on them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TextStatistics {
    /// Whitespace-delimited tokens
    pub word_count: usize,
    /// Characters
    pub char_count: usize,
    /// Physical lines
    pub line_count: usize,
    /// Non-empty `.`-delimited segments
    pub sentence_count: usize,
    /// Non-empty blocks separated by a blank line
    pub paragraph_count: usize,
    /// Mean characters per word
    pub avg_word_length: f64,
    /// Mean words per sentence
    pub avg_sentence_length: f64,
    /// Fraction of characters that are uppercase
    pub uppercase_ratio: f64,
}

impl TextStatistics {
    /// Compute statistics for `text`.
    pub fn compute(text: &str) -> Self {
        let words: Vec<&str> = text.split_whitespace().collect();
        let sentences: Vec<&str> = sentences(text).collect();
        let char_count = text.chars().count();

        let avg_word_length = if words.is_empty() {
            0.0
        } else {
            words.iter().map(|w| w.chars().count()).sum::<usize>() as f64 / words.len() as f64
        };

        let avg_sentence_length = if sentences.is_empty() {
            0.0
        } else {
            sentences
                .iter()
                .map(|s| s.split_whitespace().count())
                .sum::<usize>() as f64
                / sentences.len() as f64
        };

        let uppercase_ratio = if char_count == 0 {
            0.0
        } else {
            text.chars().filter(|c| c.is_uppercase()).count() as f64 / char_count as f64
        };

        Self {
            word_count: words.len(),
            char_count,
            line_count: text.split('\n').count(),
            sentence_count: sentences.len(),
            paragraph_count: text.split("\n\n").filter(|p| !p.trim().is_empty()).count(),
            avg_word_length,
            avg_sentence_length,
            uppercase_ratio,
        }
    }
}

/// Non-empty, trimmed `.`-delimited segments of `text`.
pub(crate) fn sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split('.').map(str::trim).filter(|s| !s.is_empty())
}
