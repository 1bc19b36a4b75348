use serde::{Deserialize, Serialize};
use waymark_types::{ItemId, StyleMap, TagSet};

use crate::Record;

/// Allow-listed field values for a record save.
///
/// A save request is expressed as this structured value object rather than a
/// loose key/value bag, so only the fields named here can reach a record.
/// Style values arrive as raw `(name, value)` pairs and are validated against
/// the closed property enumeration before the save pipeline touches anything.
///
/// Field semantics follow the editor form: `None` leaves the stored value
/// unchanged, while a supplied whitespace-only string clears it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaveForm {
    pub title: Option<String>,
    pub body: Option<String>,
    pub coverage: Option<String>,
    pub item_id: Option<ItemId>,

    /// Comma-separated tag string, as typed by the curator.
    pub tags: Option<String>,

    /// Raw style pairs, validated by [`SaveForm::style_map`].
    pub styles: Vec<(String, String)>,
}

impl SaveForm {
    /// Creates an empty form that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the raw title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the raw body.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the coverage geometry (WKT).
    #[must_use]
    pub fn coverage(mut self, coverage: impl Into<String>) -> Self {
        self.coverage = Some(coverage.into());
        self
    }

    /// Links the record to an archival item.
    #[must_use]
    pub fn item(mut self, item_id: ItemId) -> Self {
        self.item_id = Some(item_id);
        self
    }

    /// Sets the comma-separated tag string.
    #[must_use]
    pub fn tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = Some(tags.into());
        self
    }

    /// Adds a style pair.
    #[must_use]
    pub fn style(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.push((name.into(), value.into()));
        self
    }

    /// Validates the raw style pairs into a [`StyleMap`].
    ///
    /// Fails with `UnknownStyleProperty` on any name outside the closed
    /// enumeration; callers reject the save before reconciliation begins.
    pub fn style_map(&self) -> waymark_types::Result<StyleMap> {
        StyleMap::from_pairs(self.styles.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Applies the scalar fields and tags to a record. Styles are not
    /// applied here; the caller merges the validated [`StyleMap`] itself.
    pub fn apply_fields(&self, record: &mut Record) {
        if let Some(title) = &self.title {
            record.title = not_empty(title);
        }
        if let Some(body) = &self.body {
            record.body = not_empty(body);
        }
        if let Some(coverage) = &self.coverage {
            record.coverage = not_empty(coverage);
        }
        if let Some(item_id) = self.item_id {
            record.item_id = Some(item_id);
        }
        if let Some(tags) = &self.tags {
            record.tags = TagSet::parse(tags);
        }
    }
}

/// A supplied value that is all whitespace clears the field.
fn not_empty(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
