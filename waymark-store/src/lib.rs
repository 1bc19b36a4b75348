//! Storage and item-lookup interfaces for the Waymark core.
//!
//! The save pipeline is written against these traits; the host application
//! supplies concrete implementations bound to its own persistence layer.
//! The [`memory`] module provides a reference backend used by the engine
//! test suites.
//!
//! Concurrency contract: the core runs one save at a time and performs a
//! read-modify-write cycle over an exhibit's stylesheet and sibling records.
//! Implementations are responsible for serializing concurrent saves within
//! the same exhibit (a transaction or a per-exhibit lock).

mod error;
pub mod memory;

pub use error::{StoreError, StoreResult};

use waymark_model::{Exhibit, Record};
use waymark_types::{ExhibitId, ItemId, RecordId};

/// Access to persisted records.
pub trait RecordStore {
    /// Loads a record by id.
    fn load(&self, id: RecordId) -> StoreResult<Record>;

    /// Inserts or updates a record.
    fn persist(&mut self, record: &Record) -> StoreResult<()>;

    /// All records owned by an exhibit, including the one being saved.
    fn records_in_exhibit(&self, exhibit_id: ExhibitId) -> StoreResult<Vec<Record>>;

    /// All records linked to an archival item, across exhibits.
    fn records_for_item(&self, item_id: ItemId) -> StoreResult<Vec<Record>>;
}

/// Access to persisted exhibits.
pub trait ExhibitStore {
    /// Loads an exhibit by id.
    fn load(&self, id: ExhibitId) -> StoreResult<Exhibit>;

    /// Inserts or updates an exhibit.
    fn persist(&mut self, exhibit: &Exhibit) -> StoreResult<()>;
}

/// Metadata lookup against the host archive.
///
/// Every method degrades rather than fails: a missing item or field is an
/// `Option`, never an error, because shortcode content must not block a save.
pub trait ItemLookup {
    /// Opaque handle to a resolved item.
    type Item;

    /// Resolves an item by id, or `None` when it does not exist.
    fn resolve(&self, id: ItemId) -> Option<Self::Item>;

    /// The concatenated text of all of the item's descriptive fields.
    fn all_text(&self, item: &Self::Item) -> String;

    /// The text of one named descriptive field, matched literally.
    fn field(&self, item: &Self::Item, name: &str) -> Option<String>;

    /// The rendered file listing for the item.
    fn file_list(&self, item: &Self::Item) -> String;
}
