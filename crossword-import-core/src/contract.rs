//! # contract: seams between the import pipeline and the network
//!
//! The pipeline in [`crate::import`] only talks to the outside world through
//! the two traits defined here:
//! - [`PuzzleSource`] fetches the puzzle definition for a date.
//! - [`Uploader`] publishes a serialized ipuz document and returns its id.
//!
//! Real implementations live in [`crate::fetch`] and [`crate::upload`]. The
//! traits are annotated for `mockall` so tests can drive the pipeline without
//! network access.

use async_trait::async_trait;
use mockall::automock;

use crate::date::PuzzleDate;
use crate::error::ImportError;
use crate::source::PuzzleResponse;

/// What the hosting service handed back for an uploaded puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    /// Puzzle id assigned by the hosting service.
    pub pid: String,
}

#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait PuzzleSource: Send + Sync {
    /// Fetch and decode the puzzle published on `date`.
    async fn fetch(&self, date: &PuzzleDate) -> Result<PuzzleResponse, ImportError>;
}

#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait Uploader: Send + Sync {
    /// Upload one serialized ipuz document. Makes exactly one request.
    async fn upload(&self, ipuz_json: &str) -> Result<UploadReceipt, ImportError>;
}
