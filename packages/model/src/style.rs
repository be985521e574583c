//! # Style Store
//!
//! Styles live outside the instance tree. A node only references style
//! sources by id; the declarations themselves are kept in one flat table
//! keyed by `"<styleSourceId>:<property>"`.
//!
//! ```text
//! styleSources:  { "s1": { type: local }, "s2": { type: token, name: "Brand" } }
//! styles:        { "s1:color": "red", "s1:padding": "8px", "s2:background": "blue" }
//! ```
//!
//! The flat layout lets "every entry of one source" be answered with a
//! prefix scan, and the whole table serializes as a single map.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Separator between the style source id and the property in a compound key
pub const STYLE_KEY_SEPARATOR: char = ':';

/// Build the compound key for a style declaration
pub fn style_key(style_source_id: &str, property: &str) -> String {
    format!("{}{}{}", style_source_id, STYLE_KEY_SEPARATOR, property)
}

/// Split a compound key at the first separator into `(style_source_id, property)`
pub fn split_style_key(key: &str) -> Option<(&str, &str)> {
    key.split_once(STYLE_KEY_SEPARATOR)
}

/// Prefix shared by every compound key belonging to `style_source_id`
pub fn style_key_prefix(style_source_id: &str) -> String {
    format!("{}{}", style_source_id, STYLE_KEY_SEPARATOR)
}

/// Kind of style source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleSourceKind {
    /// Styles that belong to exactly one instance
    Local,
    /// Shared, named style that many instances can reference
    Token,
}

/// Descriptor of a reusable style definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSource {
    #[serde(rename = "type")]
    pub kind: StyleSourceKind,

    /// Display name (tokens only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Pseudo state such as `hover` or `focus`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Breakpoint the source applies to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakpoint_id: Option<String>,
}

impl StyleSource {
    pub fn local() -> Self {
        Self {
            kind: StyleSourceKind::Local,
            name: None,
            state: None,
            breakpoint_id: None,
        }
    }

    pub fn token(name: impl Into<String>) -> Self {
        Self {
            kind: StyleSourceKind::Token,
            name: Some(name.into()),
            state: None,
            breakpoint_id: None,
        }
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn with_breakpoint(mut self, breakpoint_id: impl Into<String>) -> Self {
        self.breakpoint_id = Some(breakpoint_id.into());
        self
    }
}

/// Read access to the style data owned by the editor.
///
/// Both methods hand out owned values; callers may keep them without
/// borrowing the store.
pub trait StyleStore {
    /// Look up the descriptor for a style source
    fn style_source(&self, id: &str) -> Option<StyleSource>;

    /// Every `(compound key, value)` pair in the flat style table
    fn style_entries(&self) -> Vec<(String, String)>;
}

/// In-memory style store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryStyleStore {
    #[serde(default)]
    style_sources: BTreeMap<String, StyleSource>,

    #[serde(default)]
    styles: BTreeMap<String, String>,
}

impl MemoryStyleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a style source
    pub fn insert_source(&mut self, id: impl Into<String>, source: StyleSource) {
        self.style_sources.insert(id.into(), source);
    }

    /// Set one declaration of a style source
    pub fn set_style(&mut self, style_source_id: &str, property: &str, value: impl Into<String>) {
        self.styles
            .insert(style_key(style_source_id, property), value.into());
    }

    /// Set a raw compound key, bypassing key construction
    pub fn set_raw(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.styles.insert(key.into(), value.into());
    }

    /// Remove a style source together with all of its declarations
    pub fn remove_source(&mut self, id: &str) -> Option<StyleSource> {
        let prefix = style_key_prefix(id);
        self.styles.retain(|key, _| !key.starts_with(&prefix));
        self.style_sources.remove(id)
    }

    /// Value of one declaration
    pub fn style(&self, style_source_id: &str, property: &str) -> Option<&str> {
        self.styles
            .get(&style_key(style_source_id, property))
            .map(String::as_str)
    }

    pub fn source_count(&self) -> usize {
        self.style_sources.len()
    }

    pub fn entry_count(&self) -> usize {
        self.styles.len()
    }
}

impl StyleStore for MemoryStyleStore {
    fn style_source(&self, id: &str) -> Option<StyleSource> {
        self.style_sources.get(id).cloned()
    }

    fn style_entries(&self) -> Vec<(String, String)> {
        self.styles
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}
