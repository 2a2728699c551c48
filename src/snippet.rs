//! Query-relevant extractive snippets.
//!
//! Sentences of a section body are scored by lexical overlap with the
//! query, a bonus for appearing early and a penalty for unusual length.
//! The best sentences are concatenated greedily until the length cap.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Tunable terms of the sentence score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Bonus for the first sentence, decreasing linearly with position
    pub position_weight: f64,
    /// Subtracted from sentences outside the preferred length range
    pub length_penalty: f64,
    /// Sentences must be longer than this (in characters) to be candidates
    pub min_sentence_chars: usize,
    /// Sentences shorter than this are penalized
    pub preferred_min_chars: usize,
    /// Sentences longer than this are penalized
    pub preferred_max_chars: usize,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            position_weight: 0.1,
            length_penalty: 0.1,
            min_sentence_chars: 20,
            preferred_min_chars: 50,
            preferred_max_chars: 200,
        }
    }
}

impl ScoringWeights {
    /// Check that the weights are usable.
    pub fn validate(&self) -> Result<()> {
        if self.position_weight < 0.0 || self.length_penalty < 0.0 {
            return Err(Error::InvalidConfig(
                "scoring weights must not be negative".to_string(),
            ));
        }
        if self.preferred_min_chars > self.preferred_max_chars {
            return Err(Error::InvalidConfig(format!(
                "preferred_min_chars ({}) exceeds preferred_max_chars ({})",
                self.preferred_min_chars, self.preferred_max_chars
            )));
        }
        Ok(())
    }
}

/// A candidate sentence with its relevance score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSentence<'a> {
    /// Trimmed sentence text, without the trailing period
    pub text: &'a str,
    /// Position among the candidate sentences
    pub index: usize,
    /// Combined score
    pub score: f64,
}

/// Ranks body sentences against a query and assembles snippets.
#[derive(Debug, Clone)]
pub struct SnippetScorer {
    max_length: usize,
    weights: ScoringWeights,
}

impl SnippetScorer {
    /// Create a scorer with the given length cap and default weights.
    pub fn new(max_length: usize) -> Self {
        Self {
            max_length,
            weights: ScoringWeights::default(),
        }
    }

    /// Replace the scoring weights.
    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Snippet length cap in characters.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Score candidate sentences, best first.
    ///
    /// Equal scores keep their original order.
    pub fn rank<'a>(&self, body: &'a str, query: &str) -> Vec<ScoredSentence<'a>> {
        let candidates: Vec<&str> = body
            .split('.')
            .map(str::trim)
            .filter(|s| s.chars().count() > self.weights.min_sentence_chars)
            .collect();

        let query_terms: HashSet<String> = query
            .split_whitespace()
            .map(|t| t.to_lowercase())
            .collect();
        let n = candidates.len() as f64;

        let mut scored: Vec<ScoredSentence<'a>> = candidates
            .into_iter()
            .enumerate()
            .map(|(index, text)| {
                let position_bonus = (n - index as f64) / n * self.weights.position_weight;
                let score = overlap_score(&query_terms, text)
                    + position_bonus
                    + self.length_adjustment(text);
                ScoredSentence { text, index, score }
            })
            .collect();

        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored
    }

    /// Extract a snippet of at most `max_length` characters.
    pub fn extract(&self, body: &str, query: &str) -> String {
        let ranked = self.rank(body, query);
        let Some(best) = ranked.first() else {
            return truncate_chars(body, self.max_length).to_string();
        };

        let mut result = String::new();
        let mut len = 0;
        for sentence in &ranked {
            let added = sentence.text.chars().count() + 2;
            if len + added > self.max_length {
                break;
            }
            result.push_str(sentence.text);
            result.push_str(". ");
            len += added;
        }

        if result.is_empty() {
            truncate_chars(best.text, self.max_length).to_string()
        } else {
            result.trim().to_string()
        }
    }

    fn length_adjustment(&self, sentence: &str) -> f64 {
        let len = sentence.chars().count();
        if len < self.weights.preferred_min_chars || len > self.weights.preferred_max_chars {
            -self.weights.length_penalty
        } else {
            0.0
        }
    }
}

impl Default for SnippetScorer {
    fn default() -> Self {
        Self::new(250)
    }
}

/// Shared query terms divided by the sentence's distinct terms plus one.
fn overlap_score(query_terms: &HashSet<String>, sentence: &str) -> f64 {
    let sentence_terms: HashSet<String> = sentence
        .split_whitespace()
        .map(|t| t.to_lowercase())
        .collect();
    let shared = sentence_terms
        .iter()
        .filter(|t| query_terms.contains(*t))
        .count();
    shared as f64 / (sentence_terms.len() + 1) as f64
}

/// The first `max_chars` characters of `text`.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
