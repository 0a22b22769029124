//! High-level pipeline: fetch -> convert -> persist -> upload for one date.
//!
//! Each step runs to completion before the next starts, and the first failure
//! ends the run. Nothing is retried. The only side effect that can survive a
//! failure is the written ipuz file when the upload step fails.
//!
//! # Entrypoints
//! - [`import_puzzle`]: the full pipeline, returning an [`ImportReport`].
//! - [`fetch_and_persist`] then [`publish`]: the same pipeline split at the
//!   file write, so callers can report the path before uploading or skip the
//!   upload entirely.

use std::path::PathBuf;

use tracing::{error, info};

use crate::config::ImportConfig;
use crate::contract::{PuzzleSource, Uploader};
use crate::date::PuzzleDate;
use crate::error::ImportError;
use crate::persist::{write_document, PersistedDocument};
use crate::transform::convert;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub path: PathBuf,
    pub pid: String,
    pub view_url: String,
}

pub async fn fetch_and_persist<S>(
    config: &ImportConfig,
    date: &PuzzleDate,
    source: &S,
) -> Result<PersistedDocument, ImportError>
where
    S: PuzzleSource + ?Sized,
{
    info!(date = %date, "[IMPORT] Fetching puzzle");
    let response = source.fetch(date).await.map_err(|e| {
        error!(date = %date, error = %e, "[IMPORT][ERROR] Fetch failed");
        e
    })?;

    let document = convert(&response, &config.title).map_err(|e| {
        error!(date = %date, error = %e, "[IMPORT][ERROR] Conversion failed");
        e
    })?;

    write_document(&config.output_dir, date, &document)
}

/// Uploads an already written document and builds the view link.
pub async fn publish<U>(
    config: &ImportConfig,
    persisted: PersistedDocument,
    uploader: &U,
) -> Result<ImportReport, ImportError>
where
    U: Uploader + ?Sized,
{
    info!(path = %persisted.path.display(), "[IMPORT][UPLOAD] Uploading written document");
    let receipt = uploader.upload(&persisted.contents).await.map_err(|e| {
        error!(error = %e, "[IMPORT][ERROR][UPLOAD] Upload failed");
        e
    })?;

    let view_url = config.view_url(&receipt.pid);
    info!(pid = %receipt.pid, view_url = %view_url, "[IMPORT] Import complete");
    Ok(ImportReport {
        path: persisted.path,
        pid: receipt.pid,
        view_url,
    })
}

pub async fn import_puzzle<S, U>(
    config: &ImportConfig,
    date: &PuzzleDate,
    source: &S,
    uploader: &U,
) -> Result<ImportReport, ImportError>
where
    S: PuzzleSource + ?Sized,
    U: Uploader + ?Sized,
{
    let persisted = fetch_and_persist(config, date, source).await?;
    publish(config, persisted, uploader).await
}
