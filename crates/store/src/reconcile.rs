use seaword_persist::PersistedSnapshot;
use seaword_state::{HydrationPayload, RootState};

/// Decide the next tree for a hydration action.
///
/// The stored snapshot becomes the base only when it provably belongs to
/// the same logical round as the incoming payload and was written by the
/// same schema version. The payload is then shallow-merged on top, so any
/// slice the execution context supplies at startup is authoritative.
pub fn reconcile(
    current: &RootState,
    payload: &HydrationPayload,
    stored: Option<PersistedSnapshot>,
    current_version: &str,
) -> RootState {
    let base = match stored {
        Some(snapshot) if adoptable(&snapshot, payload, current_version) => {
            tracing::debug!(version = %snapshot.persist_version, "adopting stored snapshot");
            snapshot.state
        }
        _ => current.clone(),
    };
    merge_payload(base, payload)
}

/// Adoption gate: round identity plus schema compatibility.
///
/// Round identity lives in the puzzle slice alone; a payload that omits
/// that slice does not reject the snapshot, only a disagreeing one does.
/// The stats slice carries no identity and stays outside this check.
fn adoptable(
    snapshot: &PersistedSnapshot,
    payload: &HydrationPayload,
    current_version: &str,
) -> bool {
    let same_round = payload
        .sea_word
        .as_ref()
        .is_none_or(|incoming| *incoming == snapshot.state.sea_word);
    same_round && snapshot.persist_version == current_version
}

/// One-level-deep merge: each slice present in the payload overwrites the
/// corresponding slice of the base. Last write wins; never recursive.
fn merge_payload(mut base: RootState, payload: &HydrationPayload) -> RootState {
    if let Some(sea_word) = &payload.sea_word {
        base.sea_word = sea_word.clone();
    }
    if let Some(stats) = &payload.stats {
        base.stats = stats.clone();
    }
    base
}
