use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::PersistError;

/// A durable key-value slot for snapshot records.
///
/// One store reads and writes a single fixed key; the trait keeps the sink
/// and the hydration path identical across file-backed and in-memory
/// backends.
pub trait StorageBackend {
    /// Read the record under `key`. A slot that was never written reads as
    /// `None`; only genuine storage faults are errors.
    fn read(&self, key: &str) -> Result<Option<String>, PersistError>;

    /// Replace the record under `key` whole.
    fn write(&self, key: &str, value: &str) -> Result<(), PersistError>;
}

/// File-backed storage: one `<key>.json` file per slot under a root
/// directory, created on open.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Open or create the storage directory at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PersistError> {
        let root = path.as_ref().to_path_buf();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, PersistError> {
        match std::fs::read_to_string(self.slot_path(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PersistError> {
        std::fs::write(self.slot_path(key), value)?;
        Ok(())
    }
}

/// In-memory storage with shared slots.
///
/// Clones share the same map, so a test can hold a handle onto the slots a
/// sink writes through.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the record under `key`, for inspection.
    pub fn get(&self, key: &str) -> Option<String> {
        self.slots.lock().ok()?.get(key).cloned()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.lock().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, PersistError> {
        let slots = self
            .slots
            .lock()
            .map_err(|_| PersistError::Unavailable("storage mutex poisoned".into()))?;
        Ok(slots.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PersistError> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| PersistError::Unavailable("storage mutex poisoned".into()))?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_storage_missing_slot_reads_none() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(tmp.path().join("store")).unwrap();
        assert!(storage.read("sea-word").unwrap().is_none());
    }

    #[test]
    fn file_storage_write_read_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(tmp.path().join("store")).unwrap();
        storage.write("sea-word", r#"{"x":1}"#).unwrap();
        assert_eq!(storage.read("sea-word").unwrap().unwrap(), r#"{"x":1}"#);
        assert!(storage.root().join("sea-word.json").is_file());
    }

    #[test]
    fn file_storage_survives_reopen() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("store");
        {
            let storage = FileStorage::open(&path).unwrap();
            storage.write("sea-word", "record").unwrap();
        }
        let storage = FileStorage::open(&path).unwrap();
        assert_eq!(storage.read("sea-word").unwrap().unwrap(), "record");
    }

    #[test]
    fn memory_storage_clones_share_slots() {
        let storage = MemoryStorage::new();
        let handle = storage.clone();
        storage.write("sea-word", "record").unwrap();
        assert_eq!(handle.get("sea-word").unwrap(), "record");
        assert_eq!(handle.len(), 1);
    }

    #[test]
    fn memory_storage_starts_empty() {
        let storage = MemoryStorage::new();
        assert!(storage.is_empty());
        assert!(storage.read("sea-word").unwrap().is_none());
    }
}
