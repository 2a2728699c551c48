//! Section annotation: type classification, derived features and text statistics.

mod features;
mod section_type;
mod stats;

pub use features::FeatureAnnotator;
pub use section_type::SectionTypeClassifier;
pub use stats::TextStatistics;
