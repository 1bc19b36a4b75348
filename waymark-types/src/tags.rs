//! Insertion-ordered tag sets.
//!
//! A tag is a free-text label on a record that doubles as a selector name in
//! the exhibit stylesheet. Membership is set-like; insertion order is kept so
//! the comma-separated form round-trips the way the curator wrote it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered set of tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(Vec<String>);

impl TagSet {
    /// Creates an empty tag set.
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Parses a comma-separated tag string, trimming whitespace and
    /// dropping empty segments and duplicates.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut set = Self::new();
        for tag in text.split(',') {
            set.insert(tag.trim());
        }
        set
    }

    /// Adds a tag unless it is empty or already present.
    /// Returns true if the tag was added.
    pub fn insert(&mut self, tag: &str) -> bool {
        if tag.is_empty() || self.contains(tag) {
            return false;
        }
        self.0.push(tag.to_string());
        true
    }

    /// Removes a tag. Returns true if it was present.
    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|t| t != tag);
        self.0.len() != before
    }

    /// True if the tag is a member.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    /// Tags present in `self` but not in `other`, in `self`'s order.
    #[must_use]
    pub fn difference<'a>(&'a self, other: &TagSet) -> Vec<&'a str> {
        self.0
            .iter()
            .filter(|t| !other.contains(t))
            .map(String::as_str)
            .collect()
    }

    /// Iterates tags in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no tag is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(","))
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for tag in iter {
            let tag: String = tag.into();
            set.insert(&tag);
        }
        set
    }
}
