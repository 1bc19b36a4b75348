use serde::{Deserialize, Serialize};
use waymark_types::ExhibitId;

/// A curator-authored collection of geocoded records.
///
/// The exhibit owns the tag stylesheet (`stylesheet` holds its serialized
/// text) and the default map viewport. It is mutated whenever an owned
/// record's style set changes and is never deleted by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exhibit {
    pub id: ExhibitId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub slug: String,
    pub public: bool,

    /// Serialized stylesheet text, parsed on demand by the style codec.
    pub stylesheet: Option<String>,

    /// Default map focus (e.g. a lon/lat pair) for the exhibit viewport.
    pub map_focus: Option<String>,
    /// Default map zoom level for the exhibit viewport.
    pub map_zoom: Option<u32>,

    pub created_at: i64,
    pub modified_at: i64,
}

impl Exhibit {
    /// Creates a new private exhibit with the given slug.
    #[must_use]
    pub fn new(slug: impl Into<String>) -> Self {
        let now = crate::now_millis();
        Self {
            id: ExhibitId::new(),
            title: None,
            description: None,
            slug: slug.into(),
            public: false,
            stylesheet: None,
            map_focus: None,
            map_zoom: None,
            created_at: now,
            modified_at: now,
        }
    }

    /// The stylesheet text, or the empty string when none has been set.
    #[must_use]
    pub fn stylesheet_text(&self) -> &str {
        self.stylesheet.as_deref().unwrap_or("")
    }

    /// Updates the modification timestamp.
    pub fn touch(&mut self) {
        self.modified_at = crate::now_millis();
    }
}
