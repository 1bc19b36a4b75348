//! In-memory reference backend.
//!
//! Backs the engine test suites and serves as the model implementation for
//! host bindings. Collections preserve insertion order so sibling
//! propagation and listings are deterministic.

use crate::{ExhibitStore, ItemLookup, RecordStore, StoreError, StoreResult};
use waymark_model::{Exhibit, Record};
use waymark_types::{ExhibitId, ItemId, RecordId};

/// In-memory record and exhibit storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<Record>,
    exhibits: Vec<Exhibit>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an exhibit, returning its id.
    pub fn add_exhibit(&mut self, exhibit: Exhibit) -> ExhibitId {
        let id = exhibit.id;
        self.upsert_exhibit(exhibit);
        id
    }

    /// Seeds a record, returning its id.
    pub fn add_record(&mut self, record: Record) -> RecordId {
        let id = record.id;
        self.upsert_record(record);
        id
    }

    /// Direct lookup of a stored record (unambiguous alternative to the
    /// trait method when both store traits are in scope).
    #[must_use]
    pub fn record(&self, id: RecordId) -> Option<Record> {
        self.records.iter().find(|r| r.id == id).cloned()
    }

    /// Direct lookup of a stored exhibit.
    #[must_use]
    pub fn exhibit(&self, id: ExhibitId) -> Option<Exhibit> {
        self.exhibits.iter().find(|e| e.id == id).cloned()
    }

    fn upsert_record(&mut self, record: Record) {
        match self.records.iter_mut().find(|r| r.id == record.id) {
            Some(slot) => *slot = record,
            None => self.records.push(record),
        }
    }

    fn upsert_exhibit(&mut self, exhibit: Exhibit) {
        match self.exhibits.iter_mut().find(|e| e.id == exhibit.id) {
            Some(slot) => *slot = exhibit,
            None => self.exhibits.push(exhibit),
        }
    }
}

impl RecordStore for MemoryStore {
    fn load(&self, id: RecordId) -> StoreResult<Record> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(StoreError::RecordNotFound(id))
    }

    fn persist(&mut self, record: &Record) -> StoreResult<()> {
        self.upsert_record(record.clone());
        Ok(())
    }

    fn records_in_exhibit(&self, exhibit_id: ExhibitId) -> StoreResult<Vec<Record>> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.exhibit_id == exhibit_id)
            .cloned()
            .collect())
    }

    fn records_for_item(&self, item_id: ItemId) -> StoreResult<Vec<Record>> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.item_id == Some(item_id))
            .cloned()
            .collect())
    }
}

impl ExhibitStore for MemoryStore {
    fn load(&self, id: ExhibitId) -> StoreResult<Exhibit> {
        self.exhibits
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(StoreError::ExhibitNotFound(id))
    }

    fn persist(&mut self, exhibit: &Exhibit) -> StoreResult<()> {
        self.upsert_exhibit(exhibit.clone());
        Ok(())
    }
}

/// One archival item held by [`MemoryItems`].
#[derive(Debug, Clone, Default)]
pub struct MemoryItem {
    /// Descriptive fields as `(name, text)` pairs, in display order.
    pub fields: Vec<(String, String)>,
    /// File names attached to the item.
    pub files: Vec<String>,
}

impl MemoryItem {
    /// Creates an item with no fields or files.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a descriptive field.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.fields.push((name.into(), text.into()));
        self
    }

    /// Adds a file name.
    #[must_use]
    pub fn file(mut self, name: impl Into<String>) -> Self {
        self.files.push(name.into());
        self
    }
}

/// In-memory item archive.
#[derive(Debug, Default)]
pub struct MemoryItems {
    items: Vec<(ItemId, MemoryItem)>,
}

impl MemoryItems {
    /// Creates an empty archive.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an item, returning its id.
    pub fn add(&mut self, item: MemoryItem) -> ItemId {
        let id = ItemId::new();
        self.items.push((id, item));
        id
    }
}

impl ItemLookup for MemoryItems {
    type Item = MemoryItem;

    fn resolve(&self, id: ItemId) -> Option<MemoryItem> {
        self.items
            .iter()
            .find(|(item_id, _)| *item_id == id)
            .map(|(_, item)| item.clone())
    }

    fn all_text(&self, item: &MemoryItem) -> String {
        item.fields
            .iter()
            .map(|(_, text)| text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn field(&self, item: &MemoryItem, name: &str) -> Option<String> {
        item.fields
            .iter()
            .find(|(field_name, _)| field_name == name)
            .map(|(_, text)| text.clone())
    }

    fn file_list(&self, item: &MemoryItem) -> String {
        item.files.join("\n")
    }
}
