//! Section-level types produced by the pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Title used when a section has no detected header.
pub const UNTITLED_SECTION: &str = "Untitled Section";

/// Semantic category of a section, derived from its title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    /// Introduction, overview, background
    Introduction,
    /// Conclusion, summary
    Conclusion,
    /// Methods, approach, process
    Methodology,
    /// Results, findings, data
    Results,
    /// Discussion, analysis
    Discussion,
    /// References, bibliography
    References,
    /// Anything else
    #[default]
    Content,
}

impl SectionType {
    /// All section types in classification priority order.
    pub const ALL: [SectionType; 7] = [
        SectionType::Introduction,
        SectionType::Conclusion,
        SectionType::Methodology,
        SectionType::Results,
        SectionType::Discussion,
        SectionType::References,
        SectionType::Content,
    ];

    /// Lowercase label, as serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Introduction => "introduction",
            SectionType::Conclusion => "conclusion",
            SectionType::Methodology => "methodology",
            SectionType::Results => "results",
            SectionType::Discussion => "discussion",
            SectionType::References => "references",
            SectionType::Content => "content",
        }
    }

    /// Parse a lowercase label.
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim().to_lowercase();
        Self::ALL.into_iter().find(|t| t.as_str() == label)
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A titled, annotated section of one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionRecord {
    /// Source document name
    pub document: String,

    /// Page number (1-indexed)
    pub page_number: u32,

    /// Section title (the detected header line)
    #[serde(rename = "section_title")]
    pub title: String,

    /// Trimmed section body
    #[serde(rename = "section_text")]
    pub body: String,

    /// Whitespace-delimited tokens in the body
    pub word_count: usize,

    /// Characters in the body
    pub char_count: usize,

    /// Non-empty `.`-delimited segments in the body
    pub sentence_count: usize,

    /// Body contains a digit
    pub has_numbers: bool,

    /// Body contains a bracketed citation or a four-digit year
    pub has_references: bool,

    /// Category derived from the title
    pub section_type: SectionType,
}

impl SectionRecord {
    /// Short human-readable location, e.g. `report.txt p.3`.
    pub fn location(&self) -> String {
        format!("{} p.{}", self.document, self.page_number)
    }

    /// Check if the section has no detected header.
    pub fn is_untitled(&self) -> bool {
        self.title == UNTITLED_SECTION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_type_labels() {
        assert_eq!(SectionType::Methodology.to_string(), "methodology");
        assert_eq!(SectionType::parse("Results"), Some(SectionType::Results));
        assert_eq!(SectionType::parse("abstract"), None);
        assert_eq!(SectionType::default(), SectionType::Content);
    }

    #[test]
    fn test_section_type_serde() {
        let json = serde_json::to_string(&SectionType::References).unwrap();
        assert_eq!(json, "\"references\"");
    }
}
