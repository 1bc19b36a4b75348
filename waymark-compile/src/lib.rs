//! Shortcode compilation for record text.
//!
//! Raw `title`/`body` text may embed inline references to the record's
//! linked archival item:
//!
//! - `[item]` — the full concatenated text of the item's descriptive fields
//! - `[item:"<Field>"]` — one named field (letters and spaces, matched
//!   literally)
//! - `[item:files]` — the rendered file listing
//!
//! [`compile`] expands these into `compiled_title`/`compiled_body`. It never
//! fails: shortcode text is curator-authored display content, so a missing
//! item degrades to a verbatim copy and a missing field to the empty string.
//! Expansion is a single left-to-right pass; text inserted by one
//! substitution is never re-scanned.

use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::debug;
use waymark_model::Record;
use waymark_store::ItemLookup;

static SHORTCODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\[item\]|\[item:files\]|\[item:"(?P<el>[A-Za-z\s]+)"\]"#).unwrap()
});

/// Recomputes `compiled_title` and `compiled_body` from the raw fields.
pub fn compile<I: ItemLookup>(record: &mut Record, items: &I) {
    // Compiled fields are copies, so later edits to the raw text never
    // retroactively change what was compiled.
    record.compiled_title = record.title.clone();
    record.compiled_body = record.body.clone();

    let Some(item_id) = record.item_id else {
        return;
    };
    let Some(item) = items.resolve(item_id) else {
        debug!(record = %record.id, item = %item_id, "linked item missing, compiling verbatim");
        return;
    };

    record.compiled_title = record.title.as_deref().map(|t| expand(t, items, &item));
    record.compiled_body = record.body.as_deref().map(|t| expand(t, items, &item));
}

/// Expands every shortcode in one pass over `text`.
fn expand<I: ItemLookup>(text: &str, items: &I, item: &I::Item) -> String {
    SHORTCODE
        .replace_all(text, |caps: &Captures| {
            if let Some(name) = caps.name("el") {
                // Missing field: empty text, not the literal shortcode.
                items.field(item, name.as_str()).unwrap_or_default()
            } else if &caps[0] == "[item]" {
                items.all_text(item)
            } else {
                items.file_list(item)
            }
        })
        .into_owned()
}
