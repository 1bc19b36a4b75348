//! Domain model types for Waymark.
//!
//! An [`Exhibit`] is a curator-authored collection of geocoded records
//! sharing a stylesheet and map viewport defaults. A [`Record`] is one
//! geocoded/temporal annotation, optionally linked to an archival item,
//! owned by exactly one exhibit. [`SaveForm`] is the allow-listed value
//! object a save request is expressed as.
//!
//! Storage interfaces live in `waymark-store`; the save pipeline itself
//! lives in `waymark-engine`.

mod exhibit;
mod form;
mod record;

pub use exhibit::Exhibit;
pub use form::SaveForm;
pub use record::{Record, NULL_COVERAGE};

/// Current wall-clock time as epoch milliseconds.
pub(crate) fn now_millis() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
