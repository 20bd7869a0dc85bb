//! Storage Adapters
//!
//! Implementations of the SnapshotStore port.
//!
//! - **FileSnapshotStore** - one JSON file per key on disk
//! - **InMemorySnapshotStore** - in-memory map (testing/development)

mod file_snapshot_store;
mod in_memory_snapshot_store;

pub use file_snapshot_store::FileSnapshotStore;
pub use in_memory_snapshot_store::InMemorySnapshotStore;
