//! Error types for the prebuilt registry

use pagekit_common::StorageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrebuiltError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Persisted prebuilt state under {key:?} is corrupt: {source}")]
    CorruptState {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize prebuilt state: {0}")]
    Serialization(#[source] serde_json::Error),
}
