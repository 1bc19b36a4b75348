//! Stylesheet codec and tag-style synchronization.
//!
//! An exhibit's stylesheet is a CSS-subset text blob mapping tag selectors
//! to style rule-sets. [`StyleSheet`] parses and serializes that text; the
//! [`sync`] module keeps per-record style overrides and the exhibit
//! stylesheet consistent in both directions when a record is saved.

mod stylesheet;
pub mod sync;

pub use stylesheet::{ParseError, StyleSheet};
