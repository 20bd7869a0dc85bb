//! Snapshot storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the checkup snapshot lives.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Base directory for the file-backed snapshot store.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// The fixed key the whole wizard snapshot is stored under.
    #[serde(default = "default_snapshot_key")]
    pub snapshot_key: String,
}

impl StorageConfig {
    /// Validate storage configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.snapshot_key.trim().is_empty() {
            return Err(ValidationError::EmptySnapshotKey);
        }
        if self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::EmptyDataDir);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            snapshot_key: default_snapshot_key(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data/checkup")
}

fn default_snapshot_key() -> String {
    "earth-story-checkup".to_string()
}
