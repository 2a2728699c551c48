//! Document ingestion: readers and bounded batch reading.

#[cfg(feature = "async")]
mod async_batch;
mod batch;
mod reader;

#[cfg(feature = "async")]
pub use async_batch::extract_documents_async;
pub use batch::{BatchExtractor, BatchFailure, BatchOptions, BatchResult, ExtractedDocument};
pub use reader::{AutoReader, DocumentReader, JsonPageReader, PlainTextReader, PAGE_BREAK};
