//! The closed set of stylable attributes and the validated style bag.
//!
//! The original plugin stored styles in a catch-all property bag keyed by
//! column name, silently discarding anything it did not recognize. Here the
//! key space is a closed enumeration, so unknown properties are rejected at
//! the boundary instead of vanishing.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A stylable attribute of a record.
///
/// Declaration order is the canonical serialization order used when writing
/// stylesheet text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleProperty {
    Presenter,
    VectorColor,
    StrokeColor,
    SelectColor,
    PointImage,
    VectorOpacity,
    SelectOpacity,
    StrokeOpacity,
    ImageOpacity,
    StrokeWidth,
    PointRadius,
    MaxZoom,
    MinZoom,
    MapZoom,
    MapFocus,
}

impl StyleProperty {
    /// All properties in canonical order.
    pub const ALL: [StyleProperty; 15] = [
        StyleProperty::Presenter,
        StyleProperty::VectorColor,
        StyleProperty::StrokeColor,
        StyleProperty::SelectColor,
        StyleProperty::PointImage,
        StyleProperty::VectorOpacity,
        StyleProperty::SelectOpacity,
        StyleProperty::StrokeOpacity,
        StyleProperty::ImageOpacity,
        StyleProperty::StrokeWidth,
        StyleProperty::PointRadius,
        StyleProperty::MaxZoom,
        StyleProperty::MinZoom,
        StyleProperty::MapZoom,
        StyleProperty::MapFocus,
    ];

    /// The snake_case name used in stylesheet text and JSON payloads.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            StyleProperty::Presenter => "presenter",
            StyleProperty::VectorColor => "vector_color",
            StyleProperty::StrokeColor => "stroke_color",
            StyleProperty::SelectColor => "select_color",
            StyleProperty::PointImage => "point_image",
            StyleProperty::VectorOpacity => "vector_opacity",
            StyleProperty::SelectOpacity => "select_opacity",
            StyleProperty::StrokeOpacity => "stroke_opacity",
            StyleProperty::ImageOpacity => "image_opacity",
            StyleProperty::StrokeWidth => "stroke_width",
            StyleProperty::PointRadius => "point_radius",
            StyleProperty::MaxZoom => "max_zoom",
            StyleProperty::MinZoom => "min_zoom",
            StyleProperty::MapZoom => "map_zoom",
            StyleProperty::MapFocus => "map_focus",
        }
    }

    /// The human-readable label shown in the editor UI.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            StyleProperty::Presenter => "Presenter",
            StyleProperty::VectorColor => "Shape Color",
            StyleProperty::StrokeColor => "Line Color",
            StyleProperty::SelectColor => "Selected Color",
            StyleProperty::PointImage => "Point Image",
            StyleProperty::VectorOpacity => "Shape Opacity",
            StyleProperty::SelectOpacity => "Selected Opacity",
            StyleProperty::StrokeOpacity => "Line Opacity",
            StyleProperty::ImageOpacity => "Image Opacity",
            StyleProperty::StrokeWidth => "Line Width",
            StyleProperty::PointRadius => "Point Radius",
            StyleProperty::MaxZoom => "Max Zoom",
            StyleProperty::MinZoom => "Min Zoom",
            StyleProperty::MapZoom => "Default Zoom",
            StyleProperty::MapFocus => "Default Focus",
        }
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleProperty {
    type Err = Error;

    /// Parses a property name. Hand-edited stylesheets sometimes use the
    /// hyphenated CSS spelling, so `vector-color` is accepted as
    /// `vector_color`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.replace('-', "_");
        StyleProperty::ALL
            .into_iter()
            .find(|p| p.as_str() == normalized)
            .ok_or_else(|| Error::UnknownStyleProperty(s.to_string()))
    }
}

/// A validated mapping from [`StyleProperty`] to value.
///
/// Because keys are typed, an unknown property is unrepresentable.
/// Iteration yields entries in canonical property order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap(BTreeMap<StyleProperty, String>);

impl StyleMap {
    /// Creates an empty style map.
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builds a style map from raw `(name, value)` pairs, rejecting any
    /// name outside the [`StyleProperty`] enumeration.
    pub fn from_pairs<I, K, V>(pairs: I) -> crate::Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut map = Self::new();
        for (name, value) in pairs {
            map.set(name.as_ref().parse()?, value);
        }
        Ok(map)
    }

    /// Sets a property value, overwriting any previous value.
    pub fn set(&mut self, property: StyleProperty, value: impl Into<String>) {
        self.0.insert(property, value.into());
    }

    /// Returns the value for a property, if set.
    #[must_use]
    pub fn get(&self, property: StyleProperty) -> Option<&str> {
        self.0.get(&property).map(String::as_str)
    }

    /// Removes a property value.
    pub fn remove(&mut self, property: StyleProperty) -> Option<String> {
        self.0.remove(&property)
    }

    /// Copies every entry of `other` into this map, overwriting on conflict.
    pub fn merge_from(&mut self, other: &StyleMap) {
        for (property, value) in other.iter() {
            self.set(property, value);
        }
    }

    /// Iterates entries in canonical property order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleProperty, &str)> {
        self.0.iter().map(|(p, v)| (*p, v.as_str()))
    }

    /// Number of set properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no property is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(StyleProperty, String)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (StyleProperty, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
