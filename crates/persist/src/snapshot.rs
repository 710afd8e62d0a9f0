use serde::{Deserialize, Serialize};
use seaword_state::RootState;

use crate::error::PersistError;
use crate::storage::StorageBackend;

/// The durable record: the full state tree tagged with the version of the
/// code that wrote it.
///
/// Serializes flat: the tree's slices and `persistVersion` are siblings
/// in one JSON object, so the record reads as a RootState with one extra
/// field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSnapshot {
    #[serde(flatten)]
    pub state: RootState,
    pub persist_version: String,
}

/// Encode the state tree plus version tag as the canonical JSON record.
///
/// Well-formed domain state always encodes; `Encode` is reachable only for
/// trees this crate never produces.
pub fn encode(state: &RootState, version: &str) -> Result<String, PersistError> {
    let snapshot = PersistedSnapshot {
        state: state.clone(),
        persist_version: version.to_string(),
    };
    serde_json::to_string(&snapshot).map_err(|e| PersistError::Encode(e.to_string()))
}

/// Decode a stored record. Malformed input comes back as a typed `Decode`
/// failure; a raw parse fault never crosses this boundary.
pub fn decode(text: &str) -> Result<PersistedSnapshot, PersistError> {
    serde_json::from_str(text).map_err(|e| PersistError::Decode(e.to_string()))
}

/// Read and decode the snapshot under `key`, degrading every failure to
/// `None` with a warning. This is the only place unreadable storage is
/// converted into "no snapshot".
pub fn load_persisted(storage: &dyn StorageBackend, key: &str) -> Option<PersistedSnapshot> {
    let text = match storage.read(key) {
        Ok(Some(text)) => text,
        Ok(None) => return None,
        Err(error) => {
            tracing::warn!(%error, key, "stored snapshot unreadable, treating as absent");
            return None;
        }
    };
    match decode(&text) {
        Ok(snapshot) => Some(snapshot),
        Err(error) => {
            tracing::warn!(%error, key, "stored snapshot corrupt, discarding");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use seaword_state::{GameStatus, SeaWordState, StatsState};

    fn sample_state() -> RootState {
        RootState {
            sea_word: SeaWordState {
                puzzle: "coral".into(),
                guesses: vec!["kelps".into(), "coral".into()],
                status: GameStatus::Won,
            },
            stats: StatsState {
                played: 3,
                wins: 2,
                current_streak: 2,
                max_streak: 2,
            },
        }
    }

    #[test]
    fn encode_decode_roundtrip() {
        let state = sample_state();
        let text = encode(&state, "1.2.0").unwrap();
        let snapshot = decode(&text).unwrap();
        assert_eq!(snapshot.state, state);
        assert_eq!(snapshot.persist_version, "1.2.0");
    }

    #[test]
    fn record_is_flat() {
        let text = encode(&sample_state(), "1.2.0").unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(value.get("seaWord").is_some());
        assert!(value.get("stats").is_some());
        assert_eq!(value["persistVersion"], "1.2.0");
        // No nesting under a "state" wrapper.
        assert!(value.get("state").is_none());
    }

    #[test]
    fn decode_rejects_malformed_text() {
        let err = decode("not json at all").unwrap_err();
        assert!(matches!(err, PersistError::Decode(_)));
    }

    #[test]
    fn decode_rejects_wrong_shape() {
        let err = decode(r#"{"persistVersion": 7}"#).unwrap_err();
        assert!(matches!(err, PersistError::Decode(_)));
    }

    #[test]
    fn load_persisted_absent_slot() {
        let storage = MemoryStorage::new();
        assert!(load_persisted(&storage, "sea-word").is_none());
    }

    #[test]
    fn load_persisted_corrupt_slot_degrades_to_none() {
        let storage = MemoryStorage::new();
        storage.write("sea-word", "{{{corrupt").unwrap();
        assert!(load_persisted(&storage, "sea-word").is_none());
    }

    #[test]
    fn load_persisted_reads_back_written_record() {
        let storage = MemoryStorage::new();
        let state = sample_state();
        storage
            .write("sea-word", &encode(&state, "0.1.0").unwrap())
            .unwrap();
        let snapshot = load_persisted(&storage, "sea-word").unwrap();
        assert_eq!(snapshot.state, state);
        assert_eq!(snapshot.persist_version, "0.1.0");
    }
}
