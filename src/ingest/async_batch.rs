//! Batch reading on a tokio runtime.
//!
//! Same contract as [`BatchExtractor`](super::BatchExtractor): a semaphore
//! bounds the reads in flight, each read runs on the blocking pool under
//! its own timeout, and failures are collected rather than propagated.
//! A timed-out read keeps its permit until it returns.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::error::{Error, Result};
use crate::model::PageRecord;

use super::batch::existing_files;
use super::{BatchOptions, BatchResult, DocumentReader};

/// Read every existing file in `paths` concurrently.
///
/// Must be called from within a tokio runtime.
pub async fn extract_documents_async(
    reader: Arc<dyn DocumentReader>,
    paths: Vec<PathBuf>,
    options: BatchOptions,
) -> BatchResult {
    let semaphore = Arc::new(Semaphore::new(options.max_workers.max(1)));
    let jobs = existing_files(paths.iter().map(|p| p.as_path()));

    let handles: Vec<_> = jobs
        .into_iter()
        .map(|(name, path)| {
            let semaphore = Arc::clone(&semaphore);
            let reader = Arc::clone(&reader);
            let timeout = options.timeout;
            let document = name.clone();

            let handle = tokio::spawn(async move {
                let permit = semaphore
                    .acquire_owned()
                    .await
                    .map_err(|e| Error::Other(e.to_string()))?;

                // the permit is held until the read returns, even after a timeout
                let task = tokio::task::spawn_blocking(move || {
                    let outcome = reader.read(&path);
                    drop(permit);
                    outcome
                });
                match tokio::time::timeout(timeout, task).await {
                    Ok(Ok(outcome)) => outcome,
                    Ok(Err(join_err)) => Err(Error::Reader(format!(
                        "reader task for {} failed: {}",
                        document, join_err
                    ))),
                    Err(_) => Err(Error::Timeout {
                        document,
                        secs: timeout.as_secs_f64(),
                    }),
                }
            });
            (name, handle)
        })
        .collect();

    let mut outcomes: Vec<(String, Result<Vec<PageRecord>>)> = Vec::with_capacity(handles.len());
    for (name, handle) in handles {
        let outcome = match handle.await {
            Ok(outcome) => outcome,
            Err(join_err) => Err(Error::Reader(join_err.to_string())),
        };
        outcomes.push((name, outcome));
    }

    BatchResult::from_outcomes(outcomes)
}
