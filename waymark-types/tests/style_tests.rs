use pretty_assertions::assert_eq;
use waymark_types::{Error, StyleMap, StyleProperty};

// ── StyleProperty parsing ─────────────────────────────────────────

#[test]
fn property_parses_snake_case_name() {
    let p: StyleProperty = "stroke_color".parse().unwrap();
    assert_eq!(p, StyleProperty::StrokeColor);
}

#[test]
fn property_parses_hyphenated_spelling() {
    let p: StyleProperty = "vector-color".parse().unwrap();
    assert_eq!(p, StyleProperty::VectorColor);
}

#[test]
fn property_rejects_unknown_name() {
    let err = "background_color".parse::<StyleProperty>().unwrap_err();
    match err {
        Error::UnknownStyleProperty(name) => assert_eq!(name, "background_color"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn property_display_roundtrip() {
    for p in StyleProperty::ALL {
        let parsed: StyleProperty = p.as_str().parse().unwrap();
        assert_eq!(parsed, p);
    }
}

#[test]
fn property_all_has_no_duplicates() {
    let mut seen = std::collections::HashSet::new();
    for p in StyleProperty::ALL {
        assert!(seen.insert(p.as_str()));
    }
}

#[test]
fn property_labels_are_nonempty() {
    for p in StyleProperty::ALL {
        assert!(!p.label().is_empty());
    }
}

#[test]
fn property_serde_uses_snake_case() {
    let json = serde_json::to_string(&StyleProperty::PointRadius).unwrap();
    assert_eq!(json, "\"point_radius\"");
}

// ── StyleMap ──────────────────────────────────────────────────────

#[test]
fn map_set_and_get() {
    let mut map = StyleMap::new();
    map.set(StyleProperty::VectorColor, "#ff0000");
    assert_eq!(map.get(StyleProperty::VectorColor), Some("#ff0000"));
    assert_eq!(map.get(StyleProperty::StrokeColor), None);
}

#[test]
fn map_set_overwrites() {
    let mut map = StyleMap::new();
    map.set(StyleProperty::StrokeWidth, "2");
    map.set(StyleProperty::StrokeWidth, "5");
    assert_eq!(map.get(StyleProperty::StrokeWidth), Some("5"));
    assert_eq!(map.len(), 1);
}

#[test]
fn map_from_pairs_accepts_known_names() {
    let map = StyleMap::from_pairs([("vector_color", "#111"), ("stroke_width", "3")]).unwrap();
    assert_eq!(map.get(StyleProperty::VectorColor), Some("#111"));
    assert_eq!(map.get(StyleProperty::StrokeWidth), Some("3"));
}

#[test]
fn map_from_pairs_rejects_unknown_name() {
    let result = StyleMap::from_pairs([("vector_color", "#111"), ("font_size", "12")]);
    assert!(matches!(result, Err(Error::UnknownStyleProperty(_))));
}

#[test]
fn map_iterates_in_canonical_order() {
    let mut map = StyleMap::new();
    map.set(StyleProperty::MapFocus, "a");
    map.set(StyleProperty::Presenter, "b");
    map.set(StyleProperty::StrokeWidth, "c");

    let keys: Vec<_> = map.iter().map(|(p, _)| p).collect();
    assert_eq!(
        keys,
        vec![
            StyleProperty::Presenter,
            StyleProperty::StrokeWidth,
            StyleProperty::MapFocus,
        ]
    );
}

#[test]
fn map_merge_from_overwrites_on_conflict() {
    let mut base = StyleMap::new();
    base.set(StyleProperty::VectorColor, "#old");
    base.set(StyleProperty::PointRadius, "8");

    let mut incoming = StyleMap::new();
    incoming.set(StyleProperty::VectorColor, "#new");
    incoming.set(StyleProperty::StrokeColor, "#333");

    base.merge_from(&incoming);
    assert_eq!(base.get(StyleProperty::VectorColor), Some("#new"));
    assert_eq!(base.get(StyleProperty::StrokeColor), Some("#333"));
    assert_eq!(base.get(StyleProperty::PointRadius), Some("8"));
}

#[test]
fn map_serde_roundtrip() {
    let mut map = StyleMap::new();
    map.set(StyleProperty::SelectColor, "#00ff00");
    map.set(StyleProperty::MinZoom, "4");

    let json = serde_json::to_string(&map).unwrap();
    let parsed: StyleMap = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, map);
}

#[test]
fn map_serializes_as_flat_object() {
    let mut map = StyleMap::new();
    map.set(StyleProperty::MaxZoom, "12");
    let json = serde_json::to_value(&map).unwrap();
    assert_eq!(json["max_zoom"], "12");
}

#[test]
fn empty_map_is_empty() {
    let map = StyleMap::new();
    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
}
