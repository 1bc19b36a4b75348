//! Parsing and serialization of exhibit stylesheet text.
//!
//! The persisted format is a CSS subset: `.selector { property: value; ... }`
//! blocks, one rule-set per tag. Stylesheets are hand-edited by curators, so
//! the reader is tolerant: unknown properties and malformed declarations are
//! dropped, hyphenated property spellings are accepted, and the leading `.`
//! on a selector is optional. Structural damage — a selector with no block,
//! or a block that never closes — is an error, because saving against a
//! half-read sheet would silently discard the rules that follow.

use std::str::FromStr;
use thiserror::Error;
use waymark_types::{StyleMap, StyleProperty};

/// Errors raised while parsing stylesheet text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A selector was not followed by a `{ ... }` block.
    #[error("selector `{selector}` has no rule block")]
    MissingBlock { selector: String },

    /// A rule block was opened but never closed.
    #[error("unterminated rule block for selector `{selector}`")]
    UnterminatedBlock { selector: String },
}

/// An in-memory stylesheet: tag selectors mapped to style rule-sets,
/// in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSheet {
    rules: Vec<(String, StyleMap)>,
}

impl StyleSheet {
    /// Creates an empty stylesheet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses stylesheet text.
    ///
    /// Empty or whitespace-only input yields an empty sheet. A repeated
    /// selector merges property-wise into its first occurrence.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut sheet = Self::new();
        let mut rest = text;

        loop {
            rest = rest.trim_start();
            if rest.is_empty() {
                break;
            }

            let Some(open) = rest.find('{') else {
                return Err(ParseError::MissingBlock {
                    selector: rest.trim().to_string(),
                });
            };
            let selector = normalize_selector(&rest[..open]);

            let body_start = open + 1;
            let Some(close) = rest[body_start..].find('}') else {
                return Err(ParseError::UnterminatedBlock { selector });
            };
            let body = &rest[body_start..body_start + close];

            if !selector.is_empty() {
                let styles = sheet.ensure_rule(&selector);
                parse_declarations(body, styles);
            }

            rest = &rest[body_start + close + 1..];
        }

        Ok(sheet)
    }

    /// Serializes the sheet: selectors in insertion order, properties in
    /// canonical order, one `;`-terminated declaration per line.
    #[must_use]
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for (selector, styles) in &self.rules {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push('.');
            out.push_str(selector);
            out.push_str(" {\n");
            for (property, value) in styles.iter() {
                out.push_str("  ");
                out.push_str(property.as_str());
                out.push_str(": ");
                out.push_str(value);
                out.push_str(";\n");
            }
            out.push_str("}\n");
        }
        out
    }

    /// The rule-set for a selector, if present.
    #[must_use]
    pub fn rule(&self, selector: &str) -> Option<&StyleMap> {
        self.rules
            .iter()
            .find(|(s, _)| s == selector)
            .map(|(_, styles)| styles)
    }

    /// Mutable access to the rule-set for a selector, if present.
    pub fn rule_mut(&mut self, selector: &str) -> Option<&mut StyleMap> {
        self.rules
            .iter_mut()
            .find(|(s, _)| s == selector)
            .map(|(_, styles)| styles)
    }

    /// The rule-set for a selector, created empty at the end of the sheet
    /// when absent.
    pub fn ensure_rule(&mut self, selector: &str) -> &mut StyleMap {
        let index = match self.rules.iter().position(|(s, _)| s == selector) {
            Some(index) => index,
            None => {
                self.rules.push((selector.to_string(), StyleMap::new()));
                self.rules.len() - 1
            }
        };
        &mut self.rules[index].1
    }

    /// Iterates `(selector, rule-set)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleMap)> {
        self.rules.iter().map(|(s, styles)| (s.as_str(), styles))
    }

    /// Number of rule-sets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when the sheet has no rule-sets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Strips whitespace and the optional leading `.` from a selector.
fn normalize_selector(raw: &str) -> String {
    raw.trim().trim_start_matches('.').trim().to_string()
}

/// Parses `property: value;` declarations into a rule-set.
/// Declarations without a colon and unknown properties are dropped.
fn parse_declarations(body: &str, styles: &mut StyleMap) {
    for declaration in body.split(';') {
        let declaration = declaration.trim();
        if declaration.is_empty() {
            continue;
        }
        let Some((name, value)) = declaration.split_once(':') else {
            continue;
        };
        if let Ok(property) = StyleProperty::from_str(name.trim()) {
            styles.set(property, value.trim());
        }
    }
}
