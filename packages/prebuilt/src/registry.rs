//! # Prebuilt Registry
//!
//! Persisted collection of prebuilt records plus the set of live instance
//! ids that are flagged as derived from a prebuilt.
//!
//! ## Persistence
//!
//! The whole state is written through to storage after every mutation,
//! under a single key:
//!
//! ```json
//! { "prebuiltComponents": [ ... ], "prebuiltInstanceIds": [ "n1" ] }
//! ```
//!
//! A failed write never undoes the mutation. The registry stays dirty,
//! logs a warning, and writes the full state again on the next mutation
//! or on [`PrebuiltRegistry::flush`].
//!
//! ## Linked instances
//!
//! Membership is a set: marking twice has the same effect as marking once.
//! Removing a record unlinks its instance id only when no remaining record
//! was captured from the same instance.

use crate::capture::capture_at;
use crate::errors::PrebuiltError;
use crate::record::PrebuiltRecord;
use chrono::{DateTime, Utc};
use pagekit_common::KeyValueStorage;
use pagekit_model::json::from_str_unbounded;
use pagekit_model::{ComponentInstance, StyleStore};
use serde::{Deserialize, Serialize};

/// Storage key the registry state is persisted under
pub const STORAGE_KEY: &str = "prebuilt-components";

/// Serialized registry state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrebuiltState {
    #[serde(default)]
    pub prebuilt_components: Vec<PrebuiltRecord>,

    #[serde(default)]
    pub prebuilt_instance_ids: Vec<String>,
}

/// Registry of prebuilt components backed by a key-value storage
#[derive(Debug)]
pub struct PrebuiltRegistry<S: KeyValueStorage> {
    storage: S,
    state: PrebuiltState,

    /// In-memory state has changes the storage has not accepted yet
    dirty: bool,

    /// Newest timestamp handed out or loaded, including removed records
    last_created_at: Option<DateTime<Utc>>,
}

impl<S: KeyValueStorage> PrebuiltRegistry<S> {
    /// Load the registry from storage, starting empty if nothing was saved
    pub fn load(storage: S) -> Result<Self, PrebuiltError> {
        let state = match storage.read(STORAGE_KEY)? {
            Some(json) => from_str_unbounded(&json).map_err(|source| {
                PrebuiltError::CorruptState {
                    key: STORAGE_KEY,
                    source,
                }
            })?,
            None => PrebuiltState::default(),
        };

        tracing::info!(
            "Loaded {} prebuilt components and {} linked instances",
            state.prebuilt_components.len(),
            state.prebuilt_instance_ids.len()
        );

        let last_created_at = state
            .prebuilt_components
            .iter()
            .map(PrebuiltRecord::created_at)
            .max();

        Ok(Self {
            storage,
            state,
            dirty: false,
            last_created_at,
        })
    }

    /// All records, oldest first
    pub fn records(&self) -> &[PrebuiltRecord] {
        &self.state.prebuilt_components
    }

    pub fn get(&self, record_id: &str) -> Option<&PrebuiltRecord> {
        self.state
            .prebuilt_components
            .iter()
            .find(|record| record.id() == record_id)
    }

    /// Records captured from the live instance `instance_id`
    pub fn records_for_instance<'a>(
        &'a self,
        instance_id: &'a str,
    ) -> impl Iterator<Item = &'a PrebuiltRecord> + 'a {
        self.state
            .prebuilt_components
            .iter()
            .filter(move |record| record.instance_id() == instance_id)
    }

    /// Linked instance ids, in the order they were marked
    pub fn linked_instance_ids(&self) -> &[String] {
        &self.state.prebuilt_instance_ids
    }

    pub fn state(&self) -> &PrebuiltState {
        &self.state
    }

    pub fn len(&self) -> usize {
        self.state.prebuilt_components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.prebuilt_components.is_empty()
    }

    /// Capture `instance` as a new prebuilt and link its id
    pub fn add<T: StyleStore + ?Sized>(
        &mut self,
        name: &str,
        instance: &ComponentInstance,
        store: &T,
    ) -> &PrebuiltRecord {
        // Clamp so records created in sequence never go back in time
        let now = Utc::now();
        let created_at = match self.last_created_at {
            Some(last) if last > now => last,
            _ => now,
        };
        self.last_created_at = Some(created_at);

        let record = capture_at(name, instance, store, created_at);
        let index = self.state.prebuilt_components.len();
        self.state.prebuilt_components.push(record);
        self.insert_linked(&instance.id);
        self.persist();

        &self.state.prebuilt_components[index]
    }

    /// Remove a record, returning it if it existed
    pub fn remove(&mut self, record_id: &str) -> Option<PrebuiltRecord> {
        let index = self
            .state
            .prebuilt_components
            .iter()
            .position(|record| record.id() == record_id)?;

        let record = self.state.prebuilt_components.remove(index);

        let still_referenced = self
            .state
            .prebuilt_components
            .iter()
            .any(|other| other.instance_id() == record.instance_id());

        if !still_referenced {
            self.remove_linked(record.instance_id());
        }

        tracing::debug!(
            "Removed prebuilt {} (instance {} still linked: {})",
            record.id(),
            record.instance_id(),
            self.is_linked(record.instance_id())
        );

        self.persist();
        Some(record)
    }

    /// Rename a record. Returns false if no record has `record_id`.
    pub fn rename(&mut self, record_id: &str, new_name: impl Into<String>) -> bool {
        let Some(record) = self
            .state
            .prebuilt_components
            .iter_mut()
            .find(|record| record.id() == record_id)
        else {
            return false;
        };

        record.set_name(new_name.into());
        tracing::debug!("Renamed prebuilt {} to {:?}", record_id, record.name());

        self.persist();
        true
    }

    pub fn is_linked(&self, instance_id: &str) -> bool {
        self.state
            .prebuilt_instance_ids
            .iter()
            .any(|id| id == instance_id)
    }

    /// Flag a live instance as prebuilt-derived. Returns false if it already was.
    pub fn mark_linked(&mut self, instance_id: &str) -> bool {
        let changed = self.insert_linked(instance_id);
        if changed {
            self.persist();
        }
        changed
    }

    /// Clear the prebuilt flag of a live instance. Returns false if it was not set.
    pub fn unmark_linked(&mut self, instance_id: &str) -> bool {
        let changed = self.remove_linked(instance_id);
        if changed {
            self.persist();
        }
        changed
    }

    /// True when the last write to storage failed
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Retry a write that failed earlier. No-op when nothing is pending.
    pub fn flush(&mut self) -> Result<(), PrebuiltError> {
        if !self.dirty {
            return Ok(());
        }

        self.write_state()?;
        self.dirty = false;
        Ok(())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    fn insert_linked(&mut self, instance_id: &str) -> bool {
        if self.is_linked(instance_id) {
            return false;
        }
        self.state.prebuilt_instance_ids.push(instance_id.to_string());
        true
    }

    fn remove_linked(&mut self, instance_id: &str) -> bool {
        let before = self.state.prebuilt_instance_ids.len();
        self.state
            .prebuilt_instance_ids
            .retain(|id| id != instance_id);
        self.state.prebuilt_instance_ids.len() != before
    }

    fn persist(&mut self) {
        match self.write_state() {
            Ok(()) => self.dirty = false,
            Err(e) => {
                self.dirty = true;
                tracing::warn!("Keeping prebuilt changes in memory, write failed: {}", e);
            }
        }
    }

    fn write_state(&mut self) -> Result<(), PrebuiltError> {
        let json = serde_json::to_string(&self.state).map_err(PrebuiltError::Serialization)?;
        self.storage.write(STORAGE_KEY, &json)?;
        Ok(())
    }
}
