//! Header detection and page segmentation.

mod font_stats;
mod header;
mod options;
mod segmenter;

pub use font_stats::FontStatistics;
pub use header::{
    HeaderClassifier, HeaderPattern, HeaderSignal, RegexPattern, STRUCTURE_INDICATORS,
};
pub use options::SectionOptions;
pub use segmenter::{SectionSegmenter, Segment};
