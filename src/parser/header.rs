//! Multi-signal header detection.
//!
//! A line is a header when any one of four independent signals fires:
//! a structural shape, a typographic signal from the page's font data,
//! a structural vocabulary term, or a generic short-title shape.

use std::fmt;

use regex::Regex;

use crate::model::FontSpan;

use super::FontStatistics;

/// Terms that mark a line as structural wherever they occur in it.
pub const STRUCTURE_INDICATORS: [&str; 16] = [
    "introduction",
    "conclusion",
    "summary",
    "overview",
    "background",
    "methodology",
    "methods",
    "results",
    "discussion",
    "references",
    "appendix",
    "chapter",
    "section",
    "part",
    "table",
    "figure",
];

/// A single header shape test.
pub trait HeaderPattern: Send + Sync {
    /// Short identifier used in logs and [`HeaderSignal::Pattern`].
    fn name(&self) -> &str;

    /// Check whether a trimmed, non-empty line has this shape.
    fn matches(&self, line: &str) -> bool;
}

/// A header shape expressed as an anchored regular expression.
pub struct RegexPattern {
    name: String,
    regex: Regex,
}

impl RegexPattern {
    /// Compile a pattern. The expression should be anchored with `^...$`.
    pub fn new(name: impl Into<String>, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            name: name.into(),
            regex: Regex::new(pattern)?,
        })
    }
}

impl HeaderPattern for RegexPattern {
    fn name(&self) -> &str {
        &self.name
    }

    fn matches(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }
}

/// The six built-in structural shapes.
const BUILTIN_PATTERNS: [(&str, &str); 6] = [
    ("title_case", r"^[A-Z][A-Za-z\s&:\-]{3,50}$"),
    ("all_caps", r"^[A-Z0-9\s]{4,50}$"),
    ("numbered", r"^\d+\.?\s+[A-Za-z].{3,50}$"),
    ("colon", r"^[A-Za-z\s]+:$"),
    ("roman", r"^[IVX]+\.?\s+[A-Za-z].{3,50}$"),
    ("lettered", r"^[A-Za-z]\.\s+[A-Za-z].{3,50}$"),
];

/// Which signal classified a line as a header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderSignal {
    /// A structural shape matched
    Pattern(String),
    /// The line's span is larger than the page norm, bold or italic
    Typography,
    /// The line contains a structural vocabulary term
    Vocabulary,
    /// Generic short-title shape
    Shape,
}

impl fmt::Display for HeaderSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderSignal::Pattern(name) => write!(f, "pattern:{}", name),
            HeaderSignal::Typography => f.write_str("typography"),
            HeaderSignal::Vocabulary => f.write_str("vocabulary"),
            HeaderSignal::Shape => f.write_str("shape"),
        }
    }
}

/// Classifies lines as section headers.
pub struct HeaderClassifier {
    patterns: Vec<Box<dyn HeaderPattern>>,
    vocabulary: Vec<String>,
}

impl HeaderClassifier {
    /// Create a classifier with the built-in shapes and vocabulary.
    pub fn new() -> Self {
        let patterns = BUILTIN_PATTERNS
            .iter()
            .map(|(name, pattern)| {
                Box::new(RegexPattern::new(*name, pattern).expect("built-in header pattern"))
                    as Box<dyn HeaderPattern>
            })
            .collect();

        Self {
            patterns,
            vocabulary: STRUCTURE_INDICATORS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Register an additional shape test, checked after the existing ones.
    pub fn with_pattern(mut self, pattern: impl HeaderPattern + 'static) -> Self {
        self.patterns.push(Box::new(pattern));
        self
    }

    /// Add a structural vocabulary term (matched case-insensitively).
    pub fn with_indicator(mut self, term: impl Into<String>) -> Self {
        self.vocabulary.push(term.into().to_lowercase());
        self
    }

    /// Names of the registered shape tests, in check order.
    pub fn pattern_names(&self) -> Vec<&str> {
        self.patterns.iter().map(|p| p.name()).collect()
    }

    /// Decide whether `line` is a header.
    ///
    /// `line` must already be trimmed and non-empty. `span` is the font span
    /// aligned with this line, if the reader provided one.
    pub fn is_header(
        &self,
        line: &str,
        font_stats: Option<&FontStatistics>,
        span: Option<&FontSpan>,
        line_index: usize,
    ) -> bool {
        self.classify(line, font_stats, span, line_index).is_some()
    }

    /// Like [`is_header`](Self::is_header), reporting the first signal that fired.
    pub fn classify(
        &self,
        line: &str,
        font_stats: Option<&FontStatistics>,
        span: Option<&FontSpan>,
        line_index: usize,
    ) -> Option<HeaderSignal> {
        let signal = self.detect(line, font_stats, span);
        if let Some(ref signal) = signal {
            log::trace!("line {} is a header ({}): {:?}", line_index, signal, line);
        }
        signal
    }

    fn detect(
        &self,
        line: &str,
        font_stats: Option<&FontStatistics>,
        span: Option<&FontSpan>,
    ) -> Option<HeaderSignal> {
        if let Some(pattern) = self.patterns.iter().find(|p| p.matches(line)) {
            return Some(HeaderSignal::Pattern(pattern.name().to_string()));
        }

        if let (Some(stats), Some(span)) = (font_stats, span) {
            if stats.is_prominent(span) {
                return Some(HeaderSignal::Typography);
            }
        }

        let lower = line.to_lowercase();
        if self.vocabulary.iter().any(|term| lower.contains(term.as_str())) {
            return Some(HeaderSignal::Vocabulary);
        }

        if looks_like_title(line) {
            return Some(HeaderSignal::Shape);
        }

        None
    }
}

impl Default for HeaderClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Short, capitalized, unpunctuated lines read as titles.
fn looks_like_title(line: &str) -> bool {
    line.chars().count() < 100
        && line.split_whitespace().count() <= 10
        && !line.ends_with('.')
        && line.chars().next().is_some_and(char::is_uppercase)
        && !line.contains(':')
}
