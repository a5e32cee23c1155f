//! Shared key validation for storage backends.

use crate::traits::{StorageError, StorageResult};

/// Reject keys that could escape the bucket or base directory.
pub fn validate_key(storage_key: &str) -> StorageResult<()> {
    if storage_key.is_empty() {
        return Err(StorageError::InvalidKey("Storage key is empty".to_string()));
    }
    if storage_key.starts_with('/') {
        return Err(StorageError::InvalidKey(
            "Storage key must be relative".to_string(),
        ));
    }
    if storage_key.split(['/', '\\']).any(|segment| segment == "..") {
        return Err(StorageError::InvalidKey(
            "Storage key contains a parent directory segment".to_string(),
        ));
    }
    Ok(())
}
