//! Page-level types supplied by document readers.

use serde::{Deserialize, Serialize};

use crate::annotate::TextStatistics;

/// A typographic run of text as reported by the document reader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpan {
    /// Font size in points
    #[serde(default)]
    pub size: f32,

    /// Style bitmask (only bold and italic bits are interpreted)
    #[serde(default)]
    pub flags: u32,

    /// Font name (e.g., "Helvetica-Bold")
    #[serde(default)]
    pub font: String,

    /// Text covered by this span
    #[serde(default)]
    pub text: String,

    /// Bounding box as [x0, y0, x1, y1]
    #[serde(default)]
    pub bbox: [f32; 4],
}

impl FontSpan {
    /// Style flag bit for bold text.
    pub const BOLD: u32 = 16;

    /// Style flag bit for italic text.
    pub const ITALIC: u32 = 4;

    /// Create a span with the given size and style flags.
    pub fn new(size: f32, flags: u32) -> Self {
        Self {
            size,
            flags,
            font: String::new(),
            text: String::new(),
            bbox: [0.0; 4],
        }
    }

    /// Set the span text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the font name.
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }

    /// Check the bold bit.
    pub fn is_bold(&self) -> bool {
        self.flags & Self::BOLD != 0
    }

    /// Check the italic bit.
    pub fn is_italic(&self) -> bool {
        self.flags & Self::ITALIC != 0
    }
}

/// How a page's font spans relate to the lines of its text.
///
/// Per-line typographic signals are only read when the reader guarantees
/// an alignment. A flat span list in extraction order is `Unaligned` and
/// contributes to page statistics only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanAlignment {
    /// Spans are not addressable by line index
    #[default]
    Unaligned,
    /// `font_spans[i]` describes text line `i`; the empty line after a
    /// trailing newline may go without a span
    PerLine,
    /// Explicit `(line_index, span_index)` pairs
    Indexed(Vec<(usize, usize)>),
}

/// A single page of document text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRecord {
    /// Page number (1-indexed)
    pub page_number: u32,

    /// Raw page text, lines separated by `\n`
    pub text: String,

    /// Font spans reported for this page
    #[serde(default)]
    pub font_spans: Vec<FontSpan>,

    /// Relation between `font_spans` and text lines
    #[serde(default)]
    pub alignment: SpanAlignment,
}

impl PageRecord {
    /// Create a page without typographic data.
    pub fn new(page_number: u32, text: impl Into<String>) -> Self {
        Self {
            page_number,
            text: text.into(),
            font_spans: Vec::new(),
            alignment: SpanAlignment::Unaligned,
        }
    }

    /// Attach font spans and their line alignment.
    pub fn with_spans(mut self, spans: Vec<FontSpan>, alignment: SpanAlignment) -> Self {
        self.font_spans = spans;
        self.alignment = alignment;
        self
    }

    /// Number of physical lines in the page text.
    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    /// Check if the page has no visible text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Resolve one optional span per text line.
    ///
    /// Returns `None` when the page carries no usable alignment: either the
    /// spans are `Unaligned` or the declared alignment does not fit the text.
    pub fn line_spans(&self) -> Option<Vec<Option<&FontSpan>>> {
        let line_count = self.line_count();
        match &self.alignment {
            SpanAlignment::Unaligned => None,
            SpanAlignment::PerLine => {
                let spans = self.font_spans.len();
                let trailing_blank = self.text.ends_with('\n') && spans + 1 == line_count;
                if spans != line_count && !trailing_blank {
                    return None;
                }
                let mut lines: Vec<Option<&FontSpan>> =
                    self.font_spans.iter().map(Some).collect();
                lines.resize(line_count, None);
                Some(lines)
            }
            SpanAlignment::Indexed(pairs) => {
                let mut lines = vec![None; line_count];
                for &(line, span) in pairs {
                    let slot = lines.get_mut(line)?;
                    *slot = Some(self.font_spans.get(span)?);
                }
                Some(lines)
            }
        }
    }

    /// Check whether a non-`Unaligned` alignment fails to fit the text.
    pub fn is_misaligned(&self) -> bool {
        self.alignment != SpanAlignment::Unaligned && self.line_spans().is_none()
    }

    /// Descriptive statistics for the page text.
    pub fn statistics(&self) -> TextStatistics {
        TextStatistics::compute(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_bits() {
        let span = FontSpan::new(12.0, FontSpan::BOLD);
        assert!(span.is_bold());
        assert!(!span.is_italic());

        let span = FontSpan::new(12.0, FontSpan::ITALIC | 2);
        assert!(span.is_italic());
        assert!(!span.is_bold());
    }

    #[test]
    fn test_unaligned_has_no_line_spans() {
        let page = PageRecord::new(1, "A\nB")
            .with_spans(vec![FontSpan::new(20.0, 0)], SpanAlignment::Unaligned);
        assert!(page.line_spans().is_none());
        assert!(!page.is_misaligned());
    }

    #[test]
    fn test_per_line_alignment() {
        let spans = vec![FontSpan::new(20.0, 0), FontSpan::new(10.0, 0)];
        let page = PageRecord::new(1, "Title\nbody").with_spans(spans, SpanAlignment::PerLine);
        let lines = page.line_spans().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].map(|s| s.size), Some(20.0));
    }

    #[test]
    fn test_per_line_count_mismatch() {
        let page = PageRecord::new(1, "one\ntwo\nthree")
            .with_spans(vec![FontSpan::new(20.0, 0)], SpanAlignment::PerLine);
        assert!(page.line_spans().is_none());
        assert!(page.is_misaligned());
    }

    #[test]
    fn test_per_line_trailing_newline() {
        let spans = vec![FontSpan::new(20.0, 0), FontSpan::new(10.0, 0)];
        let page =
            PageRecord::new(1, "Title\nbody\n").with_spans(spans, SpanAlignment::PerLine);
        let lines = page.line_spans().unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].map(|s| s.size), Some(10.0));
        assert!(lines[2].is_none());
        assert!(!page.is_misaligned());

        // one span short without a trailing newline is still misaligned
        let short = PageRecord::new(1, "Title\nbody\nmore").with_spans(
            vec![FontSpan::new(20.0, 0), FontSpan::new(10.0, 0)],
            SpanAlignment::PerLine,
        );
        assert!(short.is_misaligned());
    }

    #[test]
    fn test_indexed_alignment() {
        let spans = vec![FontSpan::new(10.0, 0), FontSpan::new(18.0, 0)];
        let page = PageRecord::new(1, "body\nHeading\nbody")
            .with_spans(spans, SpanAlignment::Indexed(vec![(1, 1)]));
        let lines = page.line_spans().unwrap();
        assert!(lines[0].is_none());
        assert_eq!(lines[1].map(|s| s.size), Some(18.0));

        let bad = page.clone().with_spans(
            vec![FontSpan::new(10.0, 0)],
            SpanAlignment::Indexed(vec![(7, 0)]),
        );
        assert!(bad.is_misaligned());
    }

    #[test]
    fn test_page_record_from_json_defaults() {
        let page: PageRecord =
            serde_json::from_str(r#"{"page_number": 3, "text": "Hello"}"#).unwrap();
        assert_eq!(page.page_number, 3);
        assert!(page.font_spans.is_empty());
        assert_eq!(page.alignment, SpanAlignment::Unaligned);
    }
}
