//! Snapshot Store Port - Interface for persisting the checkup snapshot.
//!
//! A minimal key-value contract: the whole wizard snapshot lives under a
//! single fixed key as an opaque string, mirroring the browser storage
//! the original demo persisted into.

use async_trait::async_trait;

/// Errors that can occur during snapshot store operations.
///
/// Callers in this crate treat every variant as non-fatal: reads fall
/// back to defaults, writes are fire-and-forget.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotStoreError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Port for persisting and loading snapshot blobs by key.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Read the blob stored under `key`, if any.
    ///
    /// # Errors
    /// Returns `SnapshotStoreError` if the backend cannot be read.
    async fn get(&self, key: &str) -> Result<Option<String>, SnapshotStoreError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// Last write wins; there is exactly one writer per session, so no
    /// ordering guarantee is needed.
    ///
    /// # Errors
    /// Returns `SnapshotStoreError` if the backend cannot be written.
    async fn set(&self, key: &str, value: &str) -> Result<(), SnapshotStoreError>;
}
