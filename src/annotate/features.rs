//! Feature annotation and admission filtering for segments.

use regex::Regex;

use crate::model::SectionRecord;
use crate::parser::Segment;

use super::{stats::sentences, SectionTypeClassifier};

/// Attaches derived features to segments and drops short ones.
pub struct FeatureAnnotator {
    min_section_length: usize,
    classifier: SectionTypeClassifier,
    digit_regex: Regex,
    reference_regex: Regex,
}

impl FeatureAnnotator {
    /// Create an annotator that drops bodies shorter than `min_section_length` characters.
    pub fn new(min_section_length: usize) -> Self {
        Self {
            min_section_length,
            classifier: SectionTypeClassifier::new(),
            digit_regex: Regex::new(r"\d").unwrap(),
            reference_regex: Regex::new(r"\[(.*?)\]|\b\d{4}\b").unwrap(),
        }
    }

    /// Minimum trimmed body length a section needs to be kept.
    pub fn min_section_length(&self) -> usize {
        self.min_section_length
    }

    /// Check the admission filter for a body.
    pub fn admits(&self, body: &str) -> bool {
        body.trim().chars().count() >= self.min_section_length
    }

    /// Build a record for `title`/`body`, or `None` if the body is too short.
    pub fn annotate(
        &self,
        document: &str,
        page_number: u32,
        title: &str,
        body: &str,
    ) -> Option<SectionRecord> {
        if !self.admits(body) {
            log::debug!(
                "{} p.{}: dropping section {:?} ({} chars < {})",
                document,
                page_number,
                title,
                body.trim().chars().count(),
                self.min_section_length
            );
            return None;
        }

        let body = body.trim();
        Some(SectionRecord {
            document: document.to_string(),
            page_number,
            title: title.to_string(),
            body: body.to_string(),
            word_count: body.split_whitespace().count(),
            char_count: body.chars().count(),
            sentence_count: sentences(body).count(),
            has_numbers: self.digit_regex.is_match(body),
            has_references: self.reference_regex.is_match(body),
            section_type: self.classifier.classify(title, body),
        })
    }

    /// Annotate a segment produced by the segmenter.
    pub fn annotate_segment(
        &self,
        document: &str,
        page_number: u32,
        segment: &Segment,
    ) -> Option<SectionRecord> {
        self.annotate(document, page_number, &segment.title, &segment.body)
    }
}

impl Default for FeatureAnnotator {
    fn default() -> Self {
        Self::new(30)
    }
}
