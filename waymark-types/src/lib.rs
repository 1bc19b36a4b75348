//! Core type definitions for Waymark.
//!
//! This crate defines the fundamental types shared by every layer of the
//! exhibit engine:
//! - Exhibit, record, and item identifiers (UUID v7)
//! - The closed [`StyleProperty`] enumeration of stylable attributes
//! - The validated [`StyleMap`] property bag
//! - The insertion-ordered [`TagSet`]
//!
//! Domain structs (exhibits, records) belong in `waymark-model`, not here.

mod ids;
mod style;
mod tags;

pub use ids::{ExhibitId, ItemId, RecordId};
pub use style::{StyleMap, StyleProperty};
pub use tags::TagSet;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown style property: {0}")]
    UnknownStyleProperty(String),

    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
