use serde::{Deserialize, Serialize};
use waymark_types::{ExhibitId, ItemId, RecordId, StyleMap, TagSet};

/// The WKT value standing in for "no geometry".
/// Queries treat it as null, so it never renders on the map.
pub const NULL_COVERAGE: &str = "POINT(0 0)";

/// One geocoded/temporal annotation in an exhibit.
///
/// `compiled_title` and `compiled_body` are derived from the raw fields by
/// the shortcode compiler on every save and are never hand-edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub exhibit_id: ExhibitId,

    /// Weak reference to an archival item; resolution happens through the
    /// `ItemLookup` collaborator and may fail without blocking a save.
    pub item_id: Option<ItemId>,

    pub title: Option<String>,
    pub body: Option<String>,
    pub compiled_title: Option<String>,
    pub compiled_body: Option<String>,

    /// Geometry as WKT text.
    pub coverage: Option<String>,

    pub tags: TagSet,
    pub styles: StyleMap,

    pub created_at: i64,
    pub modified_at: i64,
}

impl Record {
    /// Creates an empty record owned by the given exhibit.
    #[must_use]
    pub fn new(exhibit_id: ExhibitId) -> Self {
        let now = crate::now_millis();
        Self {
            id: RecordId::new(),
            exhibit_id,
            item_id: None,
            title: None,
            body: None,
            compiled_title: None,
            compiled_body: None,
            coverage: None,
            tags: TagSet::new(),
            styles: StyleMap::new(),
            created_at: now,
            modified_at: now,
        }
    }

    /// Creates a record linked to an archival item.
    #[must_use]
    pub fn for_item(exhibit_id: ExhibitId, item_id: ItemId) -> Self {
        let mut record = Self::new(exhibit_id);
        record.item_id = Some(item_id);
        record
    }

    /// The geometry to store, substituting the null sentinel when unset.
    #[must_use]
    pub fn coverage_or_default(&self) -> &str {
        self.coverage.as_deref().unwrap_or(NULL_COVERAGE)
    }

    /// Updates the modification timestamp.
    pub fn touch(&mut self) {
        self.modified_at = crate::now_millis();
    }

    /// Assembles the JSON object consumed by the front-end map application:
    /// the record fields with the style map flattened alongside them.
    pub fn frontend_payload(&self) -> Result<serde_json::Value, serde_json::Error> {
        let mut value = serde_json::to_value(self)?;
        if let serde_json::Value::Object(ref mut fields) = value {
            let styles = fields
                .remove("styles")
                .unwrap_or(serde_json::Value::Object(Default::default()));
            if let serde_json::Value::Object(styles) = styles {
                fields.extend(styles);
            }
        }
        Ok(value)
    }
}
