use pretty_assertions::assert_eq;
use waymark_engine::{SaveEngine, SaveError};
use waymark_model::{Exhibit, Record, SaveForm};
use waymark_store::memory::{MemoryItem, MemoryItems, MemoryStore};
use waymark_store::StoreError;
use waymark_types::{ExhibitId, RecordId, StyleProperty, TagSet};

type Engine = SaveEngine<MemoryStore, MemoryStore, MemoryItems>;

/// An exhibit with the given stylesheet text and a set of records, each
/// described by `(tags, presets)`.
fn engine_with(
    stylesheet: Option<&str>,
    records: &[(&str, &[(StyleProperty, &str)])],
    items: MemoryItems,
) -> (Engine, ExhibitId, Vec<RecordId>) {
    let mut record_store = MemoryStore::new();
    let mut exhibit_store = MemoryStore::new();

    let mut exhibit = Exhibit::new("fixture");
    exhibit.stylesheet = stylesheet.map(String::from);
    let exhibit_id = exhibit_store.add_exhibit(exhibit);

    let mut ids = Vec::new();
    for (tags, presets) in records {
        let mut record = Record::new(exhibit_id);
        record.tags = TagSet::parse(tags);
        for (property, value) in *presets {
            record.styles.set(*property, *value);
        }
        ids.push(record_store.add_record(record));
    }

    (
        SaveEngine::new(record_store, exhibit_store, items),
        exhibit_id,
        ids,
    )
}

// ── Pull precedence ──────────────────────────────────────────────

#[test]
fn newly_added_tag_pulls_existing_style_onto_record() {
    let (mut engine, _, ids) = engine_with(
        Some(".conference { stroke_color: #111; }"),
        &[("", &[(StyleProperty::StrokeColor, "#999")])],
        MemoryItems::new(),
    );

    let saved = engine
        .save_record(ids[0], &SaveForm::new().tags("conference"))
        .unwrap();

    // Existing shared style wins over the record's old value.
    assert_eq!(saved.styles.get(StyleProperty::StrokeColor), Some("#111"));
}

#[test]
fn unchanged_tag_does_not_pull() {
    let (mut engine, _, ids) = engine_with(
        Some(".conference { stroke_color: #111; }"),
        &[("conference", &[(StyleProperty::StrokeColor, "#999")])],
        MemoryItems::new(),
    );

    let saved = engine
        .save_record(ids[0], &SaveForm::new().tags("conference"))
        .unwrap();

    // Tag was already present, so the record's value stands (and pushes).
    assert_eq!(saved.styles.get(StyleProperty::StrokeColor), Some("#999"));
}

// ── Push precedence ──────────────────────────────────────────────

#[test]
fn explicit_style_pushes_into_exhibit_stylesheet() {
    let (mut engine, exhibit, ids) = engine_with(
        Some(".conference { stroke_color: #111; }"),
        &[("conference", &[])],
        MemoryItems::new(),
    );

    engine
        .save_record(
            ids[0],
            &SaveForm::new().tags("conference").style("stroke_color", "#222"),
        )
        .unwrap();

    let stored = engine.exhibits().exhibit(exhibit).unwrap();
    let sheet = waymark_style::StyleSheet::parse(stored.stylesheet_text()).unwrap();
    assert_eq!(
        sheet.rule("conference").unwrap().get(StyleProperty::StrokeColor),
        Some("#222")
    );
}

#[test]
fn push_creates_rule_for_brand_new_tag() {
    let (mut engine, exhibit, ids) =
        engine_with(None, &[("", &[])], MemoryItems::new());

    engine
        .save_record(
            ids[0],
            &SaveForm::new().tags("fresh").style("vector_color", "#abc"),
        )
        .unwrap();

    let stored = engine.exhibits().exhibit(exhibit).unwrap();
    let sheet = waymark_style::StyleSheet::parse(stored.stylesheet_text()).unwrap();
    assert_eq!(
        sheet.rule("fresh").unwrap().get(StyleProperty::VectorColor),
        Some("#abc")
    );
}

// ── Propagation ──────────────────────────────────────────────────

#[test]
fn save_propagates_pushed_style_to_tagged_siblings() {
    let (mut engine, _, ids) = engine_with(
        Some(".conference { stroke_color: #111; }"),
        &[
            ("conference", &[]),
            ("conference", &[(StyleProperty::StrokeColor, "#111")]),
            ("unrelated", &[]),
        ],
        MemoryItems::new(),
    );

    engine
        .save_record(
            ids[0],
            &SaveForm::new().tags("conference").style("stroke_color", "#222"),
        )
        .unwrap();

    let tagged_sibling = engine.records().record(ids[1]).unwrap();
    assert_eq!(
        tagged_sibling.styles.get(StyleProperty::StrokeColor),
        Some("#222")
    );

    let unrelated = engine.records().record(ids[2]).unwrap();
    assert!(unrelated.styles.get(StyleProperty::StrokeColor).is_none());
}

// ── Idempotence ──────────────────────────────────────────────────

#[test]
fn second_identical_save_changes_nothing() {
    let (mut engine, exhibit, ids) = engine_with(
        Some(".conference { stroke_color: #111; point_radius: 9; }"),
        &[("conference", &[]), ("conference", &[])],
        MemoryItems::new(),
    );

    let form = SaveForm::new().tags("conference").style("stroke_color", "#222");
    engine.save_record(ids[0], &form).unwrap();

    let sheet_after_first = engine.exhibits().exhibit(exhibit).unwrap().stylesheet;
    let sibling_after_first = engine.records().record(ids[1]).unwrap().styles;

    engine.save_record(ids[0], &form).unwrap();

    assert_eq!(
        engine.exhibits().exhibit(exhibit).unwrap().stylesheet,
        sheet_after_first
    );
    assert_eq!(
        engine.records().record(ids[1]).unwrap().styles,
        sibling_after_first
    );
}

// ── Shortcode compilation in the pipeline ────────────────────────

#[test]
fn save_compiles_shortcodes() {
    let mut items = MemoryItems::new();
    let item = items.add(MemoryItem::new().field("Title", "Battle of Fredericksburg"));
    let (mut engine, _, ids) = engine_with(None, &[("", &[])], items);

    let saved = engine
        .save_record(
            ids[0],
            &SaveForm::new()
                .item(item)
                .body("See [item:\"Title\"] for details."),
        )
        .unwrap();

    assert_eq!(
        saved.compiled_body.as_deref(),
        Some("See Battle of Fredericksburg for details.")
    );
    // Raw text is untouched.
    assert_eq!(saved.body.as_deref(), Some("See [item:\"Title\"] for details."));
}

#[test]
fn save_without_item_compiles_verbatim() {
    let (mut engine, _, ids) = engine_with(None, &[("", &[])], MemoryItems::new());

    let saved = engine
        .save_record(ids[0], &SaveForm::new().title("[item]"))
        .unwrap();
    assert_eq!(saved.compiled_title.as_deref(), Some("[item]"));
}

// ── Validation failures abort before any write ───────────────────

#[test]
fn unknown_style_property_rejects_the_save() {
    let (mut engine, _, ids) = engine_with(None, &[("", &[])], MemoryItems::new());

    let err = engine
        .save_record(
            ids[0],
            &SaveForm::new().title("changed").style("sparkle", "yes"),
        )
        .unwrap_err();
    assert!(matches!(err, SaveError::InvalidStyle(_)));

    // Nothing was persisted.
    let stored = engine.records().record(ids[0]).unwrap();
    assert!(stored.title.is_none());
}

#[test]
fn malformed_stylesheet_aborts_the_save() {
    let (mut engine, exhibit, ids) = engine_with(
        Some(".broken { stroke_color: #111;"),
        &[("", &[])],
        MemoryItems::new(),
    );

    let err = engine
        .save_record(ids[0], &SaveForm::new().title("changed"))
        .unwrap_err();
    assert!(matches!(err, SaveError::Stylesheet(_)));

    // The unreadable sheet and the record are both left intact.
    let stored_exhibit = engine.exhibits().exhibit(exhibit).unwrap();
    assert_eq!(
        stored_exhibit.stylesheet.as_deref(),
        Some(".broken { stroke_color: #111;")
    );
    assert!(engine.records().record(ids[0]).unwrap().title.is_none());
}

#[test]
fn missing_record_surfaces_store_error() {
    let (mut engine, _, _) = engine_with(None, &[], MemoryItems::new());

    let err = engine
        .save_record(RecordId::new(), &SaveForm::new())
        .unwrap_err();
    assert!(matches!(
        err,
        SaveError::Store(StoreError::RecordNotFound(_))
    ));
}

// ── Persistence ──────────────────────────────────────────────────

#[test]
fn saved_record_is_persisted_as_returned() {
    let (mut engine, _, ids) = engine_with(None, &[("", &[])], MemoryItems::new());

    let saved = engine
        .save_record(
            ids[0],
            &SaveForm::new().title("Fort Sumter").tags("battle"),
        )
        .unwrap();

    let stored = engine.records().record(ids[0]).unwrap();
    assert_eq!(stored, saved);
    assert!(stored.tags.contains("battle"));
}

#[test]
fn whitespace_title_clears_stored_value() {
    let (mut engine, _, ids) = engine_with(None, &[("", &[])], MemoryItems::new());
    engine
        .save_record(ids[0], &SaveForm::new().title("keep"))
        .unwrap();
    engine
        .save_record(ids[0], &SaveForm::new().title("   "))
        .unwrap();
    assert!(engine.records().record(ids[0]).unwrap().title.is_none());
}

// ── Item sync ────────────────────────────────────────────────────

#[test]
fn sync_item_recompiles_linked_records() {
    let mut items = MemoryItems::new();
    let item = items.add(MemoryItem::new().field("Title", "Updated Title"));

    let mut record_store = MemoryStore::new();
    let mut exhibit_store = MemoryStore::new();
    let exhibit = exhibit_store.add_exhibit(Exhibit::new("e"));

    let mut linked = Record::for_item(exhibit, item);
    linked.title = Some("[item:\"Title\"]".to_string());
    // Stale compile output from before the item changed.
    linked.compiled_title = Some("Old Title".to_string());
    let linked_id = record_store.add_record(linked);

    let unlinked_id = record_store.add_record(Record::new(exhibit));

    let mut engine = SaveEngine::new(record_store, exhibit_store, items);
    let count = engine.sync_item(item).unwrap();
    assert_eq!(count, 1);

    let recompiled = engine.records().record(linked_id).unwrap();
    assert_eq!(recompiled.compiled_title.as_deref(), Some("Updated Title"));

    let untouched = engine.records().record(unlinked_id).unwrap();
    assert!(untouched.compiled_title.is_none());
}

#[test]
fn sync_item_with_no_linked_records_is_a_noop() {
    let (mut engine, _, _) = engine_with(None, &[("", &[])], MemoryItems::new());
    let count = engine.sync_item(waymark_types::ItemId::new()).unwrap();
    assert_eq!(count, 0);
}
