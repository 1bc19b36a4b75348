//! Error types for the save pipeline.

use thiserror::Error;
use waymark_store::StoreError;
use waymark_style::ParseError;

/// Result type for save operations.
pub type SaveResult<T> = Result<T, SaveError>;

/// Errors that can abort a save.
///
/// Shortcode compilation contributes no variant: display content degrades
/// instead of failing, while structural data (styles) must not silently
/// corrupt.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The exhibit stylesheet could not be parsed. The save is aborted
    /// before any write, so the unreadable sheet is left intact.
    #[error("stylesheet parse error: {0}")]
    Stylesheet(#[from] ParseError),

    /// The caller supplied a style key outside the closed enumeration.
    /// Rejected before reconciliation begins.
    #[error("invalid style: {0}")]
    InvalidStyle(#[from] waymark_types::Error),

    /// Opaque passthrough from the storage collaborators.
    #[error(transparent)]
    Store(#[from] StoreError),
}
