use crate::error::StorageError;

/// Result of a storage backend operation
pub type StorageResult<T> = Result<T, StorageError>;
