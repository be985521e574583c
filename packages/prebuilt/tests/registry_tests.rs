//! Linked-instance bookkeeping and storage failure handling

use chrono::{DateTime, Utc};
use pagekit_common::{KeyValueStorage, MemoryStorage, StorageError, StorageResult};
use pagekit_model::{ComponentInstance, MemoryStyleStore, StyleSource};
use pagekit_prebuilt::{PrebuiltRegistry, STORAGE_KEY};

/// Storage whose writes can be switched off
#[derive(Debug, Default)]
struct FlakyStorage {
    inner: MemoryStorage,
    failing: bool,
}

impl KeyValueStorage for FlakyStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner.read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> StorageResult<()> {
        if self.failing {
            return Err(StorageError::Unavailable("disk full".to_string()));
        }
        self.inner.write(key, value)
    }
}

fn store() -> MemoryStyleStore {
    let mut store = MemoryStyleStore::new();
    store.insert_source("s1", StyleSource::local());
    store.set_style("s1", "color", "red");
    store
}

fn button() -> ComponentInstance {
    ComponentInstance::new("btn", "Button").with_style_source("s1")
}

#[test]
fn test_remove_keeps_link_while_another_record_shares_instance() {
    let mut registry = PrebuiltRegistry::load(MemoryStorage::new()).unwrap();
    let first = registry.add("Button", &button(), &store()).id().to_string();
    let second = registry.add("Button v2", &button(), &store()).id().to_string();

    assert_eq!(registry.records_for_instance("btn").count(), 2);
    assert_eq!(registry.linked_instance_ids().len(), 1);

    registry.remove(&first);
    assert!(registry.is_linked("btn"));

    registry.remove(&second);
    assert!(!registry.is_linked("btn"));
}

#[test]
fn test_manual_links_are_independent_of_records() {
    let mut registry = PrebuiltRegistry::load(MemoryStorage::new()).unwrap();

    registry.mark_linked("copy-of-btn");
    assert!(registry.is_linked("copy-of-btn"));
    assert!(registry.is_empty());

    let record_id = registry.add("Button", &button(), &store()).id().to_string();
    registry.remove(&record_id);

    assert!(registry.is_linked("copy-of-btn"));
    assert!(!registry.is_linked("btn"));
}

#[test]
fn test_unmark_does_not_touch_records() {
    let mut registry = PrebuiltRegistry::load(MemoryStorage::new()).unwrap();
    registry.add("Button", &button(), &store());

    registry.unmark_linked("btn");

    assert!(!registry.is_linked("btn"));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_duplicate_ids_in_persisted_state_are_treated_as_one() {
    let mut storage = MemoryStorage::new();
    storage.entries.insert(
        STORAGE_KEY.to_string(),
        r#"{ "prebuiltComponents": [], "prebuiltInstanceIds": ["a", "a", "b"] }"#.to_string(),
    );

    let mut registry = PrebuiltRegistry::load(storage).unwrap();
    assert!(registry.is_linked("a"));
    assert!(!registry.mark_linked("a"));

    assert!(registry.unmark_linked("a"));
    assert!(!registry.is_linked("a"));
    assert_eq!(registry.linked_instance_ids(), ["b".to_string()]);
}

#[test]
fn test_missing_fields_load_as_empty() {
    let mut storage = MemoryStorage::new();
    storage
        .entries
        .insert(STORAGE_KEY.to_string(), "{}".to_string());

    let registry = PrebuiltRegistry::load(storage).unwrap();
    assert!(registry.is_empty());
    assert!(registry.linked_instance_ids().is_empty());
}

#[test]
fn test_failed_write_keeps_changes_in_memory() {
    let mut registry = PrebuiltRegistry::load(FlakyStorage::default()).unwrap();
    registry.storage_mut().failing = true;

    let record_id = registry.add("Button", &button(), &store()).id().to_string();

    assert!(registry.is_dirty());
    assert!(registry.get(&record_id).is_some());
    assert!(registry.is_linked("btn"));
    assert!(registry.storage().inner.entries.is_empty());

    assert!(registry.flush().is_err());
    assert!(registry.is_dirty());
}

#[test]
fn test_flush_retries_pending_write() {
    let mut registry = PrebuiltRegistry::load(FlakyStorage::default()).unwrap();
    registry.storage_mut().failing = true;
    registry.add("Button", &button(), &store());

    registry.storage_mut().failing = false;
    registry.flush().unwrap();

    assert!(!registry.is_dirty());
    let saved = std::mem::take(&mut registry.storage_mut().inner);
    let reloaded = PrebuiltRegistry::load(saved).unwrap();
    assert_eq!(reloaded.state(), registry.state());
}

#[test]
fn test_next_mutation_catches_up_after_failure() {
    let mut registry = PrebuiltRegistry::load(FlakyStorage::default()).unwrap();
    registry.storage_mut().failing = true;
    registry.add("Button", &button(), &store());

    registry.storage_mut().failing = false;
    registry.mark_linked("other");

    assert!(!registry.is_dirty());
    let saved = registry.storage().inner.read(STORAGE_KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(json["prebuiltComponents"].as_array().unwrap().len(), 1);
    assert_eq!(json["prebuiltInstanceIds"], serde_json::json!(["btn", "other"]));
}

#[test]
fn test_flush_without_pending_changes_is_noop() {
    let mut registry = PrebuiltRegistry::load(FlakyStorage::default()).unwrap();
    registry.storage_mut().failing = true;

    assert!(registry.flush().is_ok());
}

fn chain(depth: usize) -> ComponentInstance {
    let mut node =
        ComponentInstance::new(format!("n{}", depth), "Text").with_style_source("s1");
    for i in (0..depth).rev() {
        node = ComponentInstance::new(format!("n{}", i), "Box").with_child(node);
    }
    node
}

#[test]
fn test_deep_capture_survives_reload() {
    let mut registry = PrebuiltRegistry::load(MemoryStorage::new()).unwrap();
    let deep = chain(200);

    let record_id = registry.add("Deep", &deep, &store()).id().to_string();
    assert!(!registry.is_dirty());

    let saved = std::mem::take(registry.storage_mut());
    let reloaded = PrebuiltRegistry::load(saved).unwrap();

    let record = reloaded.get(&record_id).unwrap();
    assert_eq!(record.instance(), &deep);
    assert!(record.styles().contains_key("s1"));
    assert!(reloaded.is_linked("n0"));
}

fn storage_with_future_record() -> (MemoryStorage, DateTime<Utc>) {
    let future: DateTime<Utc> = "2999-01-01T00:00:00Z".parse().unwrap();
    let state = serde_json::json!({
        "prebuiltComponents": [{
            "id": "later",
            "name": "Later",
            "instance": { "id": "f", "component": "Box" },
            "styles": {},
            "createdAt": future,
        }],
        "prebuiltInstanceIds": ["f"],
    });

    let mut storage = MemoryStorage::new();
    storage
        .entries
        .insert(STORAGE_KEY.to_string(), state.to_string());
    (storage, future)
}

#[test]
fn test_created_at_never_precedes_loaded_records() {
    let (storage, future) = storage_with_future_record();
    let mut registry = PrebuiltRegistry::load(storage).unwrap();

    let record = registry.add("Button", &button(), &store());

    assert!(record.created_at() >= future);
}

#[test]
fn test_created_at_never_precedes_removed_records() {
    let (storage, future) = storage_with_future_record();
    let mut registry = PrebuiltRegistry::load(storage).unwrap();

    assert!(registry.remove("later").is_some());
    let first = registry.add("Button", &button(), &store()).created_at();
    let newest = registry.records()[0].id().to_string();
    registry.remove(&newest);
    let second = registry.add("Button v2", &button(), &store()).created_at();

    assert!(first >= future);
    assert!(second >= first);
}
