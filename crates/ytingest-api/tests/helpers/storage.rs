use async_trait::async_trait;
use std::sync::Mutex;
use ytingest_storage::{Storage, StorageBackend, StorageError, StorageResult};

/// One recorded write.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredObject {
    pub key: String,
    pub data: Vec<u8>,
    pub content_type: String,
}

/// In-memory storage that keeps every write, in order.
#[derive(Default)]
pub struct RecordingStorage {
    writes: Mutex<Vec<StoredObject>>,
    fail_uploads: bool,
}

impl RecordingStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage whose uploads always fail.
    pub fn failing() -> Self {
        Self {
            writes: Mutex::new(Vec::new()),
            fail_uploads: true,
        }
    }

    pub fn writes(&self) -> Vec<StoredObject> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl Storage for RecordingStorage {
    async fn upload_with_key(
        &self,
        storage_key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> StorageResult<String> {
        if self.fail_uploads {
            return Err(StorageError::UploadFailed("bucket unreachable".to_string()));
        }
        self.writes.lock().unwrap().push(StoredObject {
            key: storage_key.to_string(),
            data,
            content_type: content_type.to_string(),
        });
        Ok(format!("memory://transcripts/{}", storage_key))
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}
