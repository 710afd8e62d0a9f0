use std::sync::Arc;

use seaword_state::RootState;

use crate::PERSIST_KEY;
use crate::snapshot;
use crate::storage::StorageBackend;

/// Write-behind sink: mirrors every committed state to durable storage.
///
/// Registered as a store subscriber in interactive context only. Writes
/// are best-effort: an encode or storage failure is logged and the
/// dispatch that triggered it proceeds untouched.
pub struct PersistenceSink {
    storage: Arc<dyn StorageBackend>,
    version: String,
}

impl PersistenceSink {
    pub fn new(storage: Arc<dyn StorageBackend>, version: impl Into<String>) -> Self {
        Self {
            storage,
            version: version.into(),
        }
    }

    /// Persist the settled state under the fixed key.
    pub fn persist(&self, state: &RootState) {
        let record = match snapshot::encode(state, &self.version) {
            Ok(record) => record,
            Err(error) => {
                tracing::warn!(%error, "state tree did not encode, skipping persistence");
                return;
            }
        };
        if let Err(error) = self.storage.write(PERSIST_KEY, &record) {
            tracing::warn!(%error, "persistence write failed, continuing without");
        }
    }
}
