//! Snapshot persistence: the codec for the durable record, the storage
//! backends behind it, and the write-behind sink that keeps storage in
//! step with the state tree.
//!
//! # Invariants
//! - The persisted record is exactly the root tree plus a `persistVersion`
//!   tag, written whole under the fixed key. Never partially written.
//! - No failure in this crate crosses into the dispatch path; writes are
//!   best-effort and unreadable snapshots read back as absent.

pub mod error;
pub mod sink;
pub mod snapshot;
pub mod storage;

pub use error::PersistError;
pub use sink::PersistenceSink;
pub use snapshot::{PersistedSnapshot, decode, encode, load_persisted};
pub use storage::{FileStorage, MemoryStorage, StorageBackend};

/// Storage key the snapshot record lives under.
pub const PERSIST_KEY: &str = "sea-word";
