//! Style-id collection over an instance subtree.

use pagekit_common::{walk_instance, Walk};
use pagekit_model::ComponentInstance;
use std::collections::HashSet;

/// Every style source id referenced in the subtree, duplicates included.
///
/// Order is pre-order: a node's own ids first, then each child's ids in
/// child order.
pub fn collect_style_ids(instance: &ComponentInstance) -> Vec<String> {
    let mut ids = Vec::new();

    walk_instance(
        &mut |node: &ComponentInstance| {
            ids.extend(node.style_source_ids.iter().cloned());
            Walk::Continue
        },
        instance,
    );

    ids
}

/// Like [`collect_style_ids`], keeping only the first occurrence of each id
pub fn collect_unique_style_ids(instance: &ComponentInstance) -> Vec<String> {
    let mut seen = HashSet::new();

    collect_style_ids(instance)
        .into_iter()
        .filter(|id| seen.insert(id.clone()))
        .collect()
}
