//! Section type classification from titles.

use crate::model::SectionType;

/// Keyword groups in priority order; the first group with a keyword
/// contained in the lowercased title wins.
const KEYWORD_GROUPS: [(SectionType, &[&str]); 6] = [
    (
        SectionType::Introduction,
        &["introduction", "intro", "overview", "background"],
    ),
    (
        SectionType::Conclusion,
        &["conclusion", "summary", "final", "end"],
    ),
    (
        SectionType::Methodology,
        &["method", "approach", "technique", "process"],
    ),
    (
        SectionType::Results,
        &["result", "finding", "outcome", "data"],
    ),
    (
        SectionType::Discussion,
        &["discussion", "analysis", "interpretation"],
    ),
    (SectionType::References, &["reference", "bibliograph"]),
];

/// Maps section titles to a fixed set of semantic categories.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionTypeClassifier;

impl SectionTypeClassifier {
    /// Create a classifier.
    pub fn new() -> Self {
        Self
    }

    /// Classify a section by its title.
    ///
    /// Matching is by substring, so "Appendix" contains "end" and reads as
    /// a conclusion. The body is accepted but does not influence the result.
    pub fn classify(&self, title: &str, _body: &str) -> SectionType {
        let title = title.to_lowercase();
        KEYWORD_GROUPS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| title.contains(k)))
            .map(|(section_type, _)| *section_type)
            .unwrap_or(SectionType::Content)
    }
}
