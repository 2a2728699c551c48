//! Single-pass page segmentation into (title, body) pairs.

use crate::model::{FontSpan, PageRecord, UNTITLED_SECTION};

use super::{FontStatistics, HeaderClassifier};

/// A raw section cut from one page, before annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Header line, or the untitled label
    pub title: String,
    /// Trimmed body text (never empty)
    pub body: String,
    /// Index of the header line within the page text
    pub header_line: Option<usize>,
}

/// Pending segment state while walking a page.
#[derive(Default)]
struct Accumulator<'t> {
    title: Option<&'t str>,
    header_line: Option<usize>,
    lines: Vec<&'t str>,
}

impl<'t> Accumulator<'t> {
    fn flush(&mut self, out: &mut Vec<Segment>) {
        if self.title.is_some() || !self.lines.is_empty() {
            let body = self.lines.join("\n");
            let body = body.trim();
            if !body.is_empty() {
                out.push(Segment {
                    title: self.title.unwrap_or(UNTITLED_SECTION).to_string(),
                    body: body.to_string(),
                    header_line: self.header_line,
                });
            }
        }
        self.lines.clear();
    }

    fn start(&mut self, title: &'t str, line_index: usize) {
        self.title = Some(title);
        self.header_line = Some(line_index);
    }
}

/// Splits page text at detected header lines.
pub struct SectionSegmenter<'a> {
    classifier: &'a HeaderClassifier,
}

impl<'a> SectionSegmenter<'a> {
    /// Create a segmenter backed by `classifier`.
    pub fn new(classifier: &'a HeaderClassifier) -> Self {
        Self { classifier }
    }

    /// Segment a page, using its font data when it is line-aligned.
    pub fn segment(&self, page: &PageRecord) -> Vec<Segment> {
        let font_stats = FontStatistics::from_spans(&page.font_spans);
        let line_spans = page.line_spans();

        if line_spans.is_none() && page.is_misaligned() {
            log::warn!(
                "page {}: font spans do not align with {} text lines; ignoring typography",
                page.page_number,
                page.line_count()
            );
        }

        let stats = line_spans.as_ref().and(font_stats.as_ref());
        self.segment_lines(&page.text, stats, |i| {
            line_spans.as_ref().and_then(|spans| spans.get(i).copied().flatten())
        })
    }

    /// Segment plain text with no typographic signal.
    pub fn segment_text(&self, text: &str) -> Vec<Segment> {
        self.segment_lines(text, None, |_| None)
    }

    fn segment_lines<'s>(
        &self,
        text: &str,
        font_stats: Option<&FontStatistics>,
        span_for: impl Fn(usize) -> Option<&'s FontSpan>,
    ) -> Vec<Segment> {
        let mut segments = Vec::new();
        let mut acc = Accumulator::default();

        for (i, line) in text.split('\n').enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                acc.lines.push(line);
                continue;
            }

            if self
                .classifier
                .is_header(trimmed, font_stats, span_for(i), i)
            {
                acc.flush(&mut segments);
                acc.start(trimmed, i);
            } else {
                acc.lines.push(line);
            }
        }
        acc.flush(&mut segments);

        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SpanAlignment;

    fn segment(text: &str) -> Vec<Segment> {
        let classifier = HeaderClassifier::new();
        SectionSegmenter::new(&classifier).segment_text(text)
    }

    #[test]
    fn test_headers_split_sections() {
        let text = "INTRODUCTION\nthis paper studies segmentation.\nit has two halves.\n\
                    2. Method Details\nwe walk every line once.";
        let segments = segment(text);

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].title, "INTRODUCTION");
        assert_eq!(
            segments[0].body,
            "this paper studies segmentation.\nit has two halves."
        );
        assert_eq!(segments[0].header_line, Some(0));
        assert_eq!(segments[1].title, "2. Method Details");
        assert_eq!(segments[1].body, "we walk every line once.");
        assert_eq!(segments[1].header_line, Some(3));
    }

    #[test]
    fn test_no_headers_yields_untitled() {
        let text = "  plain text without any header lines.\nstill plain text here.  ";
        let segments = segment(text);

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].title, UNTITLED_SECTION);
        assert_eq!(segments[0].body, text.trim());
        assert_eq!(segments[0].header_line, None);
    }

    #[test]
    fn test_empty_and_blank_pages() {
        assert!(segment("").is_empty());
        assert!(segment("\n   \n\t\n").is_empty());
    }

    #[test]
    fn test_header_without_body_is_dropped() {
        let segments = segment("Overview\n\nSummary\nthe closing body text.");
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].title, "Summary");
    }

    #[test]
    fn test_leading_body_before_first_header() {
        let segments = segment("preface text comes first.\nCONCLUSION\nit ends here.");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].title, UNTITLED_SECTION);
        assert_eq!(segments[0].body, "preface text comes first.");
        assert_eq!(segments[1].title, "CONCLUSION");
    }

    #[test]
    fn test_blank_lines_kept_inside_body() {
        let segments = segment("Results\nfirst paragraph here.\n\nsecond paragraph here.\n\n");
        assert_eq!(segments.len(), 1);
        assert_eq!(
            segments[0].body,
            "first paragraph here.\n\nsecond paragraph here."
        );
    }

    #[test]
    fn test_aligned_typography_marks_header() {
        let text = "this body line is ordinary prose.\nthis emphasized line opens a new thread of it.\nmore ordinary prose follows here.";
        let spans = vec![
            FontSpan::new(10.0, 0),
            FontSpan::new(10.0, FontSpan::BOLD),
            FontSpan::new(10.0, 0),
        ];
        let classifier = HeaderClassifier::new();
        let segmenter = SectionSegmenter::new(&classifier);

        let aligned = PageRecord::new(1, text).with_spans(spans.clone(), SpanAlignment::PerLine);
        let segments = segmenter.segment(&aligned);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[1].title, "this emphasized line opens a new thread of it.");

        // same data without alignment: typography is ignored
        let unaligned = PageRecord::new(1, text).with_spans(spans, SpanAlignment::Unaligned);
        assert_eq!(segmenter.segment(&unaligned).len(), 1);
    }

    #[test]
    fn test_misaligned_typography_is_ignored() {
        let text = "ordinary prose on the first line.\nordinary prose on the second line.";
        let spans = vec![FontSpan::new(30.0, FontSpan::BOLD)];
        let page = PageRecord::new(1, text).with_spans(spans, SpanAlignment::PerLine);

        let classifier = HeaderClassifier::new();
        let segments = SectionSegmenter::new(&classifier).segment(&page);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].title, UNTITLED_SECTION);
    }
}
