//! Linguistic normalization for matching text.
//!
//! A full tokenizer/lemmatizer is an optional external capability. Callers
//! pick it through [`select_normalizer`], which falls back to the
//! rule-based [`FallbackNormalizer`] whenever the capability reports that
//! it is unavailable.

use std::sync::Arc;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// A text normalizer producing matching tokens.
pub trait Normalizer: Send + Sync {
    /// Short identifier for logs.
    fn name(&self) -> &str;

    /// Whether the normalizer can be used in this process.
    fn is_available(&self) -> bool {
        true
    }

    /// Split `text` into normalized tokens.
    fn normalize(&self, text: &str) -> Vec<String>;
}

/// Rule-based tokenizer used when no linguistic normalizer is available.
///
/// Lowercases, strips ASCII punctuation, collapses whitespace, then keeps
/// tokens longer than two characters that are not purely numeric.
pub struct FallbackNormalizer {
    whitespace_regex: Regex,
}

impl FallbackNormalizer {
    /// Create a fallback normalizer.
    pub fn new() -> Self {
        Self {
            whitespace_regex: Regex::new(r"\s+").unwrap(),
        }
    }

    /// Lowercase, strip punctuation and collapse whitespace.
    pub fn clean_text(&self, text: &str) -> String {
        let text: String = text
            .nfc()
            .flat_map(char::to_lowercase)
            .filter(|c| !c.is_ascii_punctuation())
            .collect();
        self.whitespace_regex
            .replace_all(&text, " ")
            .trim()
            .to_string()
    }
}

impl Default for FallbackNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer for FallbackNormalizer {
    fn name(&self) -> &str {
        "fallback"
    }

    fn normalize(&self, text: &str) -> Vec<String> {
        self.clean_text(text)
            .split(' ')
            .filter(|w| w.chars().count() > 2 && !w.chars().all(|c| c.is_numeric()))
            .map(str::to_string)
            .collect()
    }
}

/// Choose `primary` when it is available, otherwise the fallback.
pub fn select_normalizer(primary: Option<Arc<dyn Normalizer>>) -> Arc<dyn Normalizer> {
    match primary {
        Some(normalizer) if normalizer.is_available() => normalizer,
        Some(normalizer) => {
            log::warn!(
                "normalizer '{}' is unavailable; using fallback tokenization",
                normalizer.name()
            );
            Arc::new(FallbackNormalizer::new())
        }
        None => Arc::new(FallbackNormalizer::new()),
    }
}

/// Normalize `text` and join the tokens with single spaces.
pub fn preprocess_for_matching(text: &str, normalizer: &dyn Normalizer) -> String {
    normalizer.normalize(text).join(" ")
}
