//! # Page Document
//!
//! A page is one instance tree plus the style store it references:
//!
//! ```json
//! {
//!   "root": { "id": "body", "component": "Body", "children": [] },
//!   "styleSources": { "s1": { "type": "local" } },
//!   "styles": { "s1:color": "red" }
//! }
//! ```

use crate::{ComponentInstance, MemoryStyleStore};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Instance tree with its style store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub root: ComponentInstance,

    #[serde(flatten)]
    pub styles: MemoryStyleStore,
}

impl Document {
    pub fn new(root: ComponentInstance) -> Self {
        Self {
            root,
            styles: MemoryStyleStore::new(),
        }
    }

    pub fn from_json(source: &str) -> Result<Self, DocumentError> {
        Ok(crate::json::from_str_unbounded(source)?)
    }

    /// Load a document from a JSON file
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_json(&source)
    }

    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
