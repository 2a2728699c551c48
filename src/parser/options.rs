//! Sectioning options and configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::snippet::ScoringWeights;

/// Options for sectioning documents and extracting snippets.
///
/// Loadable from JSON; keys that are absent take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionOptions {
    /// Minimum trimmed body length (in characters) for a section to be kept
    pub min_section_length: usize,

    /// Maximum snippet length in characters
    pub snippet_max_length: usize,

    /// Whether to process documents in parallel
    pub parallel: bool,

    /// Snippet scoring terms
    pub weights: ScoringWeights,
}

impl SectionOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum section body length.
    pub fn with_min_section_length(mut self, len: usize) -> Self {
        self.min_section_length = len;
        self
    }

    /// Set the snippet length cap.
    pub fn with_snippet_max_length(mut self, len: usize) -> Self {
        self.snippet_max_length = len;
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Set snippet scoring weights.
    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Parse options from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check that the options are usable.
    pub fn validate(&self) -> Result<()> {
        if self.snippet_max_length == 0 {
            return Err(Error::InvalidConfig(
                "snippet_max_length must be greater than 0".to_string(),
            ));
        }
        self.weights.validate()
    }
}

impl Default for SectionOptions {
    fn default() -> Self {
        Self {
            min_section_length: 30,
            snippet_max_length: 250,
            parallel: true,
            weights: ScoringWeights::default(),
        }
    }
}
