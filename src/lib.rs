//! # docsect
//!
//! Section detection and query-relevant snippet extraction for
//! page-structured document text.
//!
//! Pages of text (optionally with per-line font data) are split at
//! detected headers into titled sections, each classified into a fixed
//! section type and annotated with simple features. Any section body can
//! then be condensed into a short extract relevant to a query.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docsect::DocSect;
//!
//! fn main() -> docsect::Result<()> {
//!     let result = DocSect::new()
//!         .with_min_section_length(40)
//!         .process(&["report.txt", "paper.json"])?;
//!
//!     for section in &result.sections {
//!         println!("{} [{}]", section.title, section.section_type);
//!     }
//!     println!("{}", result.snippet(0, "loyal dogs").unwrap_or_default());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Multi-signal header detection**: shapes, typography, vocabulary
//! - **Section typing**: introduction, methodology, results and more
//! - **Extractive snippets**: sentence ranking with tunable weights
//! - **Bounded batch reading**: worker limit and per-document timeout
//! - **Parallel processing**: Uses Rayon across documents

pub mod annotate;
pub mod detect;
pub mod error;
pub mod ingest;
pub mod model;
pub mod normalize;
pub mod parser;
pub mod pipeline;
pub mod render;
pub mod snippet;

// Re-export commonly used types
pub use annotate::{FeatureAnnotator, SectionTypeClassifier, TextStatistics};
pub use detect::{detect_format_from_bytes, detect_format_from_path, InputFormat};
pub use error::{Error, Result};
pub use ingest::{
    AutoReader, BatchExtractor, BatchFailure, BatchOptions, BatchResult, DocumentReader,
    ExtractedDocument, JsonPageReader, PlainTextReader,
};
pub use model::{FontSpan, PageRecord, SectionRecord, SectionType, SpanAlignment};
pub use normalize::{
    preprocess_for_matching, select_normalizer, FallbackNormalizer, Normalizer,
};
pub use parser::{
    FontStatistics, HeaderClassifier, HeaderPattern, SectionOptions, SectionSegmenter,
};
pub use pipeline::SectionPipeline;
pub use render::JsonFormat;
pub use snippet::{ScoringWeights, SnippetScorer};

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Read a single document with format auto-detection.
///
/// # Example
///
/// ```no_run
/// let pages = docsect::read_file("report.txt").unwrap();
/// println!("Pages: {}", pages.len());
/// ```
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Vec<PageRecord>> {
    AutoReader::new().read(path.as_ref())
}

/// Read a document and split it into sections with default options.
///
/// The document name in each record is the file name.
pub fn sections_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<SectionRecord>> {
    let path = path.as_ref();
    let pages = read_file(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(SectionPipeline::default().process_document(&name, &pages))
}

/// Split already-read documents into sections with default options.
pub fn split_into_sections(documents: &[ExtractedDocument]) -> Vec<SectionRecord> {
    SectionPipeline::default().process_documents(documents)
}

/// Extract a snippet of at most `max_length` characters relevant to `query`.
///
/// # Example
///
/// ```
/// let body = "Cats are mammals. Dogs are great pets and very loyal companions \
///             to humans everywhere. Birds can fly.";
/// let snippet = docsect::extract_snippet(body, "dogs loyal", 250);
/// assert!(snippet.starts_with("Dogs are great pets"));
/// ```
pub fn extract_snippet(body: &str, query: &str, max_length: usize) -> String {
    SnippetScorer::new(max_length).extract(body, query)
}

/// Builder for reading and sectioning documents.
///
/// # Example
///
/// ```no_run
/// use docsect::DocSect;
/// use std::time::Duration;
///
/// let json = DocSect::new()
///     .with_max_workers(8)
///     .with_timeout(Duration::from_secs(10))
///     .sequential()
///     .process(&["a.txt", "b.txt"])?
///     .to_json(docsect::JsonFormat::Pretty)?;
/// # Ok::<(), docsect::Error>(())
/// ```
pub struct DocSect {
    options: SectionOptions,
    batch_options: BatchOptions,
    reader: Arc<dyn DocumentReader>,
    classifier: HeaderClassifier,
}

impl DocSect {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            options: SectionOptions::default(),
            batch_options: BatchOptions::default(),
            reader: Arc::new(AutoReader::new()),
            classifier: HeaderClassifier::new(),
        }
    }

    /// Replace all section options.
    pub fn with_options(mut self, options: SectionOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the minimum section body length.
    pub fn with_min_section_length(mut self, len: usize) -> Self {
        self.options = self.options.with_min_section_length(len);
        self
    }

    /// Set the snippet length cap.
    pub fn with_snippet_max_length(mut self, len: usize) -> Self {
        self.options = self.options.with_snippet_max_length(len);
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Set the number of documents read concurrently.
    pub fn with_max_workers(mut self, workers: usize) -> Self {
        self.batch_options = self.batch_options.with_max_workers(workers);
        self
    }

    /// Set the per-document read timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.batch_options = self.batch_options.with_timeout(timeout);
        self
    }

    /// Use a custom document reader.
    pub fn with_reader(mut self, reader: Arc<dyn DocumentReader>) -> Self {
        self.reader = reader;
        self
    }

    /// Use a custom header classifier.
    pub fn with_classifier(mut self, classifier: HeaderClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Read `paths` and split every readable document into sections.
    pub fn process<P: AsRef<Path>>(self, paths: &[P]) -> Result<DocSectResult> {
        self.options.validate()?;

        let batch = BatchExtractor::new(self.reader)
            .with_options(self.batch_options)
            .extract(paths)?;

        let pipeline = SectionPipeline::with_classifier(self.options, self.classifier);
        let sections = pipeline.process_documents(&batch.documents);

        Ok(DocSectResult {
            sections,
            failures: batch.failures,
            scorer: pipeline.snippet_scorer(),
        })
    }
}

impl Default for DocSect {
    fn default() -> Self {
        Self::new()
    }
}

/// Sections produced by [`DocSect::process`].
pub struct DocSectResult {
    /// Sections in document, page and detection order
    pub sections: Vec<SectionRecord>,
    /// Documents that could not be read
    pub failures: Vec<BatchFailure>,
    scorer: SnippetScorer,
}

impl DocSectResult {
    /// Snippet of section `index` relevant to `query`.
    pub fn snippet(&self, index: usize, query: &str) -> Option<String> {
        self.sections
            .get(index)
            .map(|s| self.scorer.extract(&s.body, query))
    }

    /// Sections of one type.
    pub fn of_type(&self, section_type: SectionType) -> impl Iterator<Item = &SectionRecord> {
        self.sections
            .iter()
            .filter(move |s| s.section_type == section_type)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.sections, format)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> String {
        render::to_text(&self.sections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let builder = DocSect::new()
            .with_min_section_length(12)
            .with_snippet_max_length(80)
            .with_max_workers(2)
            .sequential();

        assert_eq!(builder.options.min_section_length, 12);
        assert_eq!(builder.options.snippet_max_length, 80);
        assert_eq!(builder.batch_options.max_workers, 2);
        assert!(!builder.options.parallel);
    }

    #[test]
    fn test_builder_default() {
        let builder = DocSect::default();
        assert_eq!(builder.options, SectionOptions::default());
        assert_eq!(builder.reader.name(), "auto");
    }

    #[test]
    fn test_process_rejects_invalid_options() {
        let result = DocSect::new()
            .with_snippet_max_length(0)
            .process(&["missing.txt"]);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_extract_snippet_free_function() {
        let body = "Cats are mammals. Dogs are great pets and very loyal companions to humans everywhere. Birds can fly.";
        assert_eq!(
            extract_snippet(body, "dogs loyal", 250),
            "Dogs are great pets and very loyal companions to humans everywhere."
        );
    }
}
