use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use pagekit_model::{ComponentInstance, StyleSource};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A style source captured together with its declarations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapturedStyle {
    pub source: StyleSource,

    /// Entries of the flat style table, keyed by their original compound key
    #[serde(default)]
    pub style_values: BTreeMap<String, String>,
}

/// Snapshot of an instance subtree plus every style it depends on.
///
/// Only the name can change after capture; everything else is fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrebuiltRecord {
    id: String,
    name: String,
    instance: ComponentInstance,
    #[serde(default)]
    styles: IndexMap<String, CapturedStyle>,
    created_at: DateTime<Utc>,
}

impl PrebuiltRecord {
    pub(crate) fn new(
        id: String,
        name: String,
        instance: ComponentInstance,
        styles: IndexMap<String, CapturedStyle>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            instance,
            styles,
            created_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The captured subtree
    pub fn instance(&self) -> &ComponentInstance {
        &self.instance
    }

    /// Id of the live instance this record was captured from
    pub fn instance_id(&self) -> &str {
        &self.instance.id
    }

    /// Captured styles, in the order their ids were first referenced
    pub fn styles(&self) -> &IndexMap<String, CapturedStyle> {
        &self.styles
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }
}
