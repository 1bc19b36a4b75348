//! Tag-style synchronization.
//!
//! Three operations with three deliberate precedences:
//!
//! - [`pull_styles`] (on tag add) favors the *existing shared* style: a
//!   record that newly acquires a tag conforms to the tag's established
//!   appearance instead of rewriting it.
//! - [`push_styles`] (on save) favors the *saved record*: its explicit
//!   values become the rule-set for the tags it carries.
//! - [`propagate`] (after push) favors the *newly pushed* style: every
//!   sibling carrying a tag picks up the tag's current rule-set, keeping the
//!   exhibit visually consistent without the curator re-touching each record.

use crate::StyleSheet;
use tracing::debug;
use waymark_model::Record;

/// Copies each listed tag's existing rule-set onto the record, overwriting
/// the record's values. Tags with no rule-set leave the record untouched.
pub fn pull_styles(record: &mut Record, tags: &[&str], sheet: &StyleSheet) {
    for (selector, rule) in sheet.iter() {
        if tags.contains(&selector) {
            record.styles.merge_from(rule);
        }
    }
}

/// Writes the record's style values into the rule-set of every tag the
/// record carries, creating missing rule-sets. A record with no style
/// overrides leaves the sheet unchanged.
pub fn push_styles(record: &Record, sheet: &mut StyleSheet) {
    if record.styles.is_empty() {
        return;
    }
    for tag in record.tags.iter() {
        sheet.ensure_rule(tag).merge_from(&record.styles);
    }
}

/// Re-applies the sheet to every sibling record: each sibling pulls the
/// current rule-set of every tag it carries. Returns only the siblings whose
/// styles actually changed, so the caller persists nothing else.
pub fn propagate(sheet: &StyleSheet, siblings: Vec<Record>) -> Vec<Record> {
    let mut changed = Vec::new();
    for mut sibling in siblings {
        let before = sibling.styles.clone();
        let tags: Vec<&str> = sibling.tags.iter().collect();
        for (selector, rule) in sheet.iter() {
            if tags.contains(&selector) {
                sibling.styles.merge_from(rule);
            }
        }
        if sibling.styles != before {
            debug!(record = %sibling.id, "propagated stylesheet onto sibling");
            changed.push(sibling);
        }
    }
    changed
}
