//! Data types shared by readers, the section pipeline and renderers.
//!
//! Readers produce [`PageRecord`] values; the pipeline turns them into
//! immutable [`SectionRecord`] values.

mod page;
mod section;

pub use page::{FontSpan, PageRecord, SpanAlignment};
pub use section::{SectionRecord, SectionType, UNTITLED_SECTION};
