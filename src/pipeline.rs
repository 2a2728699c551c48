//! Page records in, annotated section records out.

use rayon::prelude::*;

use crate::annotate::FeatureAnnotator;
use crate::ingest::ExtractedDocument;
use crate::model::{PageRecord, SectionRecord};
use crate::parser::{HeaderClassifier, SectionOptions, SectionSegmenter};
use crate::snippet::SnippetScorer;

/// Segments and annotates pages.
///
/// Holds no mutable state; one pipeline can serve many threads.
pub struct SectionPipeline {
    options: SectionOptions,
    classifier: HeaderClassifier,
    annotator: FeatureAnnotator,
}

impl SectionPipeline {
    /// Create a pipeline with the built-in header classifier.
    pub fn new(options: SectionOptions) -> Self {
        Self::with_classifier(options, HeaderClassifier::new())
    }

    /// Create a pipeline with a custom header classifier.
    pub fn with_classifier(options: SectionOptions, classifier: HeaderClassifier) -> Self {
        let annotator = FeatureAnnotator::new(options.min_section_length);
        Self {
            options,
            classifier,
            annotator,
        }
    }

    /// Options in use.
    pub fn options(&self) -> &SectionOptions {
        &self.options
    }

    /// Header classifier in use.
    pub fn classifier(&self) -> &HeaderClassifier {
        &self.classifier
    }

    /// Snippet scorer configured from the options.
    pub fn snippet_scorer(&self) -> SnippetScorer {
        SnippetScorer::new(self.options.snippet_max_length)
            .with_weights(self.options.weights.clone())
    }

    /// Sections of one page, in detection order.
    pub fn process_page(&self, document: &str, page: &PageRecord) -> Vec<SectionRecord> {
        SectionSegmenter::new(&self.classifier)
            .segment(page)
            .iter()
            .filter_map(|segment| {
                self.annotator
                    .annotate_segment(document, page.page_number, segment)
            })
            .collect()
    }

    /// Sections of one document, in page order.
    pub fn process_document(&self, document: &str, pages: &[PageRecord]) -> Vec<SectionRecord> {
        let sections: Vec<SectionRecord> = pages
            .iter()
            .flat_map(|page| self.process_page(document, page))
            .collect();
        log::debug!(
            "{}: {} sections from {} pages",
            document,
            sections.len(),
            pages.len()
        );
        sections
    }

    /// Sections of many documents, in document order.
    pub fn process_documents(&self, documents: &[ExtractedDocument]) -> Vec<SectionRecord> {
        if self.options.parallel {
            documents
                .par_iter()
                .map(|doc| self.process_document(&doc.name, &doc.pages))
                .collect::<Vec<_>>()
                .into_iter()
                .flatten()
                .collect()
        } else {
            documents
                .iter()
                .flat_map(|doc| self.process_document(&doc.name, &doc.pages))
                .collect()
        }
    }
}

impl Default for SectionPipeline {
    fn default() -> Self {
        Self::new(SectionOptions::default())
    }
}
