//! Bounded, timeout-guarded batch reading of many documents.
//!
//! At most `max_workers` documents are read at once. Each read has its own
//! time budget; a read that fails or runs out of time is logged and
//! reported in [`BatchResult::failures`] while the other documents carry
//! on. A timed-out read is abandoned: its thread finishes in the
//! background and its result is discarded, but it keeps its worker slot
//! until it returns.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::model::PageRecord;

use super::DocumentReader;

/// Options for batch reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    /// Maximum number of documents read concurrently
    pub max_workers: usize,

    /// Time budget for reading one document
    pub timeout: Duration,
}

impl BatchOptions {
    /// Create new batch options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the worker limit (at least 1).
    pub fn with_max_workers(mut self, workers: usize) -> Self {
        self.max_workers = workers.max(1);
        self
    }

    /// Set the per-document time budget.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            max_workers: 4,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Pages read from one document.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedDocument {
    /// Document name (file name)
    pub name: String,
    /// Pages in document order
    pub pages: Vec<PageRecord>,
}

/// A document that could not be read.
#[derive(Debug)]
pub struct BatchFailure {
    /// Document name (file name)
    pub document: String,
    /// Why the read failed
    pub error: Error,
}

/// Outcome of a batch read.
#[derive(Debug, Default)]
pub struct BatchResult {
    /// Successfully read documents, in submission order
    pub documents: Vec<ExtractedDocument>,
    /// Documents that failed or timed out, in submission order
    pub failures: Vec<BatchFailure>,
}

impl BatchResult {
    /// Check if every submitted document was read.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Total pages across the read documents.
    pub fn page_count(&self) -> usize {
        self.documents.iter().map(|d| d.pages.len()).sum()
    }

    /// Fold per-document outcomes into a result, logging what is dropped.
    pub(crate) fn from_outcomes(
        outcomes: impl IntoIterator<Item = (String, Result<Vec<PageRecord>>)>,
    ) -> Self {
        let mut result = Self::default();
        for (name, outcome) in outcomes {
            match outcome {
                Ok(pages) if pages.is_empty() => {
                    log::warn!("No content extracted from {}", name);
                }
                Ok(pages) => result.documents.push(ExtractedDocument { name, pages }),
                Err(error) => {
                    log::error!("Failed to process {}: {}", name, error);
                    result.failures.push(BatchFailure {
                        document: name,
                        error,
                    });
                }
            }
        }
        result
    }
}

/// Reads many documents through one [`DocumentReader`].
pub struct BatchExtractor {
    reader: Arc<dyn DocumentReader>,
    options: BatchOptions,
}

impl BatchExtractor {
    /// Create an extractor with default options.
    pub fn new(reader: Arc<dyn DocumentReader>) -> Self {
        Self {
            reader,
            options: BatchOptions::default(),
        }
    }

    /// Set batch options.
    pub fn with_options(mut self, options: BatchOptions) -> Self {
        self.options = options;
        self
    }

    /// Batch options in use.
    pub fn options(&self) -> &BatchOptions {
        &self.options
    }

    /// Read every existing file in `paths`.
    ///
    /// Paths that are not files are skipped with a warning. Only failing to
    /// set up the worker pool is an error; per-document failures end up in
    /// [`BatchResult::failures`].
    pub fn extract<P: AsRef<Path>>(&self, paths: &[P]) -> Result<BatchResult> {
        let jobs = existing_files(paths.iter().map(|p| p.as_ref()));

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.options.max_workers.max(1))
            .thread_name(|i| format!("docsect-batch-{}", i))
            .build()
            .map_err(|e| Error::Other(format!("failed to start worker pool: {}", e)))?;

        let slots = WorkerSlots::new(self.options.max_workers.max(1));

        let outcomes: Vec<(String, Result<Vec<PageRecord>>)> = pool.install(|| {
            jobs.into_par_iter()
                .map(|(name, path)| {
                    let outcome = self.read_with_timeout(&name, path, &slots);
                    (name, outcome)
                })
                .collect()
        });

        Ok(BatchResult::from_outcomes(outcomes))
    }

    fn read_with_timeout(
        &self,
        name: &str,
        path: PathBuf,
        slots: &WorkerSlots,
    ) -> Result<Vec<PageRecord>> {
        let (tx, rx) = crossbeam_channel::bounded(1);
        let reader = Arc::clone(&self.reader);
        let slot = slots.acquire()?;

        thread::Builder::new()
            .name(format!("docsect-read-{}", name))
            .spawn(move || {
                let outcome = reader.read(&path);
                drop(slot);
                // receiver is gone once the read has timed out
                let _ = tx.send(outcome);
            })?;

        match rx.recv_timeout(self.options.timeout) {
            Ok(outcome) => outcome,
            Err(RecvTimeoutError::Timeout) => Err(Error::Timeout {
                document: name.to_string(),
                secs: self.options.timeout.as_secs_f64(),
            }),
            Err(RecvTimeoutError::Disconnected) => Err(Error::Reader(format!(
                "{} reader stopped without a result",
                self.reader.name()
            ))),
        }
    }
}

/// Counting semaphore over a channel pre-filled with one token per worker.
struct WorkerSlots {
    tx: Sender<()>,
    rx: Receiver<()>,
}

impl WorkerSlots {
    fn new(count: usize) -> Self {
        let (tx, rx) = crossbeam_channel::bounded(count);
        for _ in 0..count {
            // capacity is exactly `count`
            let _ = tx.send(());
        }
        Self { tx, rx }
    }

    /// Block until a slot is free.
    fn acquire(&self) -> Result<WorkerSlot> {
        self.rx
            .recv()
            .map_err(|e| Error::Other(format!("worker slots closed: {}", e)))?;
        Ok(WorkerSlot {
            tx: self.tx.clone(),
        })
    }
}

/// A held worker slot, returned on drop.
struct WorkerSlot {
    tx: Sender<()>,
}

impl Drop for WorkerSlot {
    fn drop(&mut self) {
        let _ = self.tx.send(());
    }
}

/// Display name of a document path.
pub(crate) fn document_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Pair each existing file with its name, warning about the rest.
pub(crate) fn existing_files<'p>(
    paths: impl Iterator<Item = &'p Path>,
) -> Vec<(String, PathBuf)> {
    paths
        .filter_map(|path| {
            if path.is_file() {
                Some((document_name(path), path.to_path_buf()))
            } else {
                log::warn!("Skipping {}: not a file", path.display());
                None
            }
        })
        .collect()
}
