//! # Prebuilt Capture
//!
//! Turns a live instance into a self-contained [`PrebuiltRecord`].
//!
//! ## Steps
//!
//! 1. Collect the style ids of the subtree, deduplicated in first-seen order
//! 2. Resolve each id against the style store; unknown ids are skipped
//! 3. Copy every flat-table entry whose key starts with `"<id>:"`
//! 4. Copy the subtree
//! 5. Stamp a fresh id and timestamp
//!
//! The record owns all of its data, so later edits to the live tree or the
//! style store never reach it.

use crate::collector::collect_unique_style_ids;
use crate::record::{CapturedStyle, PrebuiltRecord};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use pagekit_model::{style_key_prefix, ComponentInstance, StyleStore};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Capture `instance` and its styles, stamped with the current time
pub fn capture<S: StyleStore + ?Sized>(
    name: &str,
    instance: &ComponentInstance,
    store: &S,
) -> PrebuiltRecord {
    capture_at(name, instance, store, Utc::now())
}

/// Capture `instance` and its styles with an explicit timestamp
pub fn capture_at<S: StyleStore + ?Sized>(
    name: &str,
    instance: &ComponentInstance,
    store: &S,
    created_at: DateTime<Utc>,
) -> PrebuiltRecord {
    let styles = capture_styles(instance, store);
    let id = Uuid::new_v4().to_string();

    tracing::debug!(
        "Captured prebuilt {} from instance {} with {} style sources",
        id,
        instance.id,
        styles.len()
    );

    PrebuiltRecord::new(id, name.to_string(), instance.clone(), styles, created_at)
}

fn capture_styles<S: StyleStore + ?Sized>(
    instance: &ComponentInstance,
    store: &S,
) -> IndexMap<String, CapturedStyle> {
    let style_ids = collect_unique_style_ids(instance);
    let mut styles = IndexMap::with_capacity(style_ids.len());

    if style_ids.is_empty() {
        return styles;
    }

    let entries = store.style_entries();

    for style_id in style_ids {
        let Some(source) = store.style_source(&style_id) else {
            tracing::debug!("Style source {} is not registered, skipping", style_id);
            continue;
        };

        let prefix = style_key_prefix(&style_id);
        let style_values: BTreeMap<String, String> = entries
            .iter()
            .filter(|(key, _)| key.starts_with(&prefix))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        styles.insert(
            style_id,
            CapturedStyle {
                source,
                style_values,
            },
        );
    }

    styles
}
