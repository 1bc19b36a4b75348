//! Error types for the storage layer.

use thiserror::Error;
use waymark_types::{ExhibitId, RecordId};

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in storage operations.
///
/// The core never interprets `Backend` errors; they pass through to the
/// caller verbatim.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record with the given id.
    #[error("record not found: {0}")]
    RecordNotFound(RecordId),

    /// No exhibit with the given id.
    #[error("exhibit not found: {0}")]
    ExhibitNotFound(ExhibitId),

    /// Opaque error from the backing store.
    #[error("storage backend error: {0}")]
    Backend(String),
}
