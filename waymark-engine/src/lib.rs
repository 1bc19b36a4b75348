//! The record save pipeline.
//!
//! A save runs tag-style reconciliation, shortcode compilation, and
//! persistence end to end:
//!
//! 1. validate the form's style pairs against the closed property set;
//! 2. pull existing rule-sets for newly added tags onto the record;
//! 3. compile shortcodes and persist the record;
//! 4. push the record's styles into the exhibit stylesheet and persist it;
//! 5. propagate the updated sheet to every sibling record.
//!
//! Execution is single-threaded and request-scoped: one save runs to
//! completion before the next for the same exhibit. The storage layer owns
//! serialization of concurrent saves (see `waymark-store`).

mod engine;
mod error;

pub use engine::SaveEngine;
pub use error::{SaveError, SaveResult};
