use crate::SaveResult;
use tracing::debug;
use waymark_compile::compile;
use waymark_model::{Record, SaveForm};
use waymark_store::{ExhibitStore, ItemLookup, RecordStore};
use waymark_style::{sync, StyleSheet};
use waymark_types::{ItemId, RecordId};

/// Runs record saves against a set of storage collaborators.
pub struct SaveEngine<R, E, I> {
    records: R,
    exhibits: E,
    items: I,
}

impl<R, E, I> SaveEngine<R, E, I>
where
    R: RecordStore,
    E: ExhibitStore,
    I: ItemLookup,
{
    /// Creates an engine over the given collaborators.
    pub fn new(records: R, exhibits: E, items: I) -> Self {
        Self {
            records,
            exhibits,
            items,
        }
    }

    /// The record store.
    pub fn records(&self) -> &R {
        &self.records
    }

    /// The exhibit store.
    pub fn exhibits(&self) -> &E {
        &self.exhibits
    }

    /// Saves a record: reconciles tag styles, compiles shortcodes, persists
    /// the record, the exhibit stylesheet, and every affected sibling.
    ///
    /// Fails before any write when the form carries an unknown style
    /// property or the exhibit stylesheet does not parse.
    pub fn save_record(&mut self, id: RecordId, form: &SaveForm) -> SaveResult<Record> {
        // Validate up front; nothing is touched on failure.
        let form_styles = form.style_map()?;
        let mut record = self.records.load(id)?;
        let old_tags = record.tags.clone();
        let mut exhibit = self.exhibits.load(record.exhibit_id)?;
        let mut sheet = StyleSheet::parse(exhibit.stylesheet_text())?;

        form.apply_fields(&mut record);
        record.styles.merge_from(&form_styles);

        // A newly added tag makes the record conform to the tag's
        // established appearance before the record rewrites anything.
        let new_tags = record.tags.clone();
        let added = new_tags.difference(&old_tags);
        if !added.is_empty() {
            debug!(record = %record.id, ?added, "pulling styles for added tags");
            sync::pull_styles(&mut record, &added, &sheet);
        }

        compile(&mut record, &self.items);
        record.touch();
        self.records.persist(&record)?;

        // Now the saved record's values become the rule-sets for its tags.
        sync::push_styles(&record, &mut sheet);
        let text = sheet.serialize();
        if exhibit.stylesheet.as_deref() != Some(text.as_str()) {
            exhibit.stylesheet = Some(text);
            exhibit.touch();
            self.exhibits.persist(&exhibit)?;
        }

        // Fan the updated sheet out to the rest of the exhibit.
        let siblings: Vec<Record> = self
            .records
            .records_in_exhibit(record.exhibit_id)?
            .into_iter()
            .filter(|r| r.id != record.id)
            .collect();
        for mut sibling in sync::propagate(&sheet, siblings) {
            sibling.touch();
            self.records.persist(&sibling)?;
        }

        Ok(record)
    }

    /// Recompiles every record linked to an archival item, after the item
    /// itself changed. Returns the number of records touched.
    pub fn sync_item(&mut self, item_id: ItemId) -> SaveResult<usize> {
        let linked = self.records.records_for_item(item_id)?;
        let count = linked.len();
        for mut record in linked {
            compile(&mut record, &self.items);
            record.touch();
            self.records.persist(&record)?;
        }
        debug!(item = %item_id, count, "recompiled records for item");
        Ok(count)
    }
}
