//! Page-level font statistics for header detection.

use crate::model::FontSpan;

/// Size assumed when a page reports no positive font sizes.
const DEFAULT_FONT_SIZE: f32 = 12.0;

/// Distribution of typographic signals on one page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontStatistics {
    /// Mean font size
    pub avg_size: f32,
    /// Population standard deviation of font sizes
    pub std_size: f32,
    /// Largest font size
    pub max_size: f32,
    /// Fraction of spans with the bold bit set
    pub bold_ratio: f32,
}

impl Default for FontStatistics {
    fn default() -> Self {
        Self {
            avg_size: DEFAULT_FONT_SIZE,
            std_size: 0.0,
            max_size: DEFAULT_FONT_SIZE,
            bold_ratio: 0.0,
        }
    }
}

impl FontStatistics {
    /// Aggregate statistics from a page's spans.
    ///
    /// Returns `None` for an empty span list. Non-positive sizes are
    /// ignored for the size figures but still count toward the bold ratio.
    pub fn from_spans(spans: &[FontSpan]) -> Option<Self> {
        if spans.is_empty() {
            return None;
        }

        let sizes: Vec<f32> = spans.iter().map(|s| s.size).filter(|s| *s > 0.0).collect();
        let bold = spans.iter().filter(|s| s.is_bold()).count();

        let mut stats = Self {
            bold_ratio: bold as f32 / spans.len() as f32,
            ..Self::default()
        };

        if !sizes.is_empty() {
            let n = sizes.len() as f32;
            let mean = sizes.iter().sum::<f32>() / n;
            stats.avg_size = mean;
            stats.max_size = sizes.iter().copied().fold(f32::MIN, f32::max);
            if sizes.len() > 1 {
                let variance = sizes.iter().map(|s| (s - mean).powi(2)).sum::<f32>() / n;
                stats.std_size = variance.sqrt();
            }
        }

        Some(stats)
    }

    /// Font size above which a line reads as a header.
    pub fn size_threshold(&self) -> f32 {
        self.avg_size + 0.5 * self.std_size
    }

    /// Check whether a span stands out typographically from the page.
    pub fn is_prominent(&self, span: &FontSpan) -> bool {
        span.size > self.size_threshold() || span.is_bold() || span.is_italic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_statistics() {
        let spans = vec![
            FontSpan::new(10.0, 0),
            FontSpan::new(10.0, 0),
            FontSpan::new(16.0, FontSpan::BOLD),
            FontSpan::new(12.0, 0),
        ];
        let stats = FontStatistics::from_spans(&spans).unwrap();

        assert!((stats.avg_size - 12.0).abs() < 1e-4);
        // population std of [10, 10, 16, 12]
        assert!((stats.std_size - 6.0f32.sqrt()).abs() < 1e-4);
        assert_eq!(stats.max_size, 16.0);
        assert!((stats.bold_ratio - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_empty_spans() {
        assert!(FontStatistics::from_spans(&[]).is_none());
    }

    #[test]
    fn test_single_size_has_zero_std() {
        let stats = FontStatistics::from_spans(&[FontSpan::new(11.0, 0)]).unwrap();
        assert_eq!(stats.std_size, 0.0);
        assert_eq!(stats.size_threshold(), 11.0);
    }

    #[test]
    fn test_non_positive_sizes_fall_back() {
        let spans = vec![FontSpan::new(0.0, FontSpan::BOLD), FontSpan::new(-1.0, 0)];
        let stats = FontStatistics::from_spans(&spans).unwrap();
        assert_eq!(stats.avg_size, 12.0);
        assert_eq!(stats.max_size, 12.0);
        assert!((stats.bold_ratio - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_is_prominent() {
        let stats = FontStatistics::from_spans(&[
            FontSpan::new(10.0, 0),
            FontSpan::new(10.0, 0),
            FontSpan::new(14.0, 0),
        ])
        .unwrap();

        assert!(stats.is_prominent(&FontSpan::new(14.0, 0)));
        assert!(!stats.is_prominent(&FontSpan::new(10.0, 0)));
        assert!(stats.is_prominent(&FontSpan::new(10.0, FontSpan::ITALIC)));
        assert!(stats.is_prominent(&FontSpan::new(10.0, FontSpan::BOLD)));
    }
}
