//! File-based Snapshot Store Adapter
//!
//! Stores each key as a JSON file under a base directory. This is the
//! durable stand-in for the browser storage the original demo used.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::{SnapshotStore, SnapshotStoreError};

/// File-based key-value store for snapshot blobs.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    base_path: PathBuf,
}

impl FileSnapshotStore {
    /// Create a new file store rooted at `base_path`.
    ///
    /// The directory is created lazily on first write.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// File path for a key. Keys are sanitized so a key can never
    /// escape the base directory.
    fn key_path(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.base_path.join(format!("{}.json", safe))
    }

    async fn ensure_base_dir(&self) -> Result<(), SnapshotStoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| SnapshotStoreError::Io(e.to_string()))
    }
}

#[async_trait]
impl SnapshotStore for FileSnapshotStore {
    async fn get(&self, key: &str) -> Result<Option<String>, SnapshotStoreError> {
        let path = self.key_path(key);

        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SnapshotStoreError::Io(e.to_string())),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), SnapshotStoreError> {
        self.ensure_base_dir().await?;

        let path = self.key_path(key);
        fs::write(&path, value)
            .await
            .map_err(|e| SnapshotStoreError::Io(e.to_string()))
    }
}
