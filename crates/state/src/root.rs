use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::sea_word::{SeaWordReducer, SeaWordState};
use crate::stats::{StatsReducer, StatsState};

/// A pure reducer over one slice of the root tree.
///
/// Given a state and an action, produces the next state. Unknown actions
/// must come back as a state equal to the input. No I/O, no panics.
pub trait Reducer {
    type State: Clone + PartialEq;

    fn reduce(&self, state: &Self::State, action: &Action) -> Self::State;
}

/// The full application state tree.
///
/// One field per composed slice; always fully populated. Serialized field
/// names are camelCase to match the persisted record layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootState {
    pub sea_word: SeaWordState,
    pub stats: StatsState,
}

/// Startup state supplied by the execution context at hydration time.
///
/// RootState-shaped but partial: slices the context does not supply stay
/// `None` and leave the base state alone when merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HydrationPayload {
    pub sea_word: Option<SeaWordState>,
    pub stats: Option<StatsState>,
}

impl HydrationPayload {
    pub fn is_empty(&self) -> bool {
        self.sea_word.is_none() && self.stats.is_none()
    }
}

/// Field-wise composition of the slice reducers into one root reducer.
///
/// Every slice reducer sees every action; the produced tree compares equal
/// to its input iff no slice changed.
#[derive(Debug, Clone, Copy, Default)]
pub struct RootReducer {
    sea_word: SeaWordReducer,
    stats: StatsReducer,
}

impl RootReducer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reduce(&self, state: &RootState, action: &Action) -> RootState {
        RootState {
            sea_word: self.sea_word.reduce(&state.sea_word, action),
            stats: self.stats.reduce(&state.stats, action),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{SeaWordAction, StatsAction};
    use crate::sea_word::GameStatus;

    #[test]
    fn default_tree_is_fully_populated() {
        let root = RootState::default();
        assert!(root.sea_word.puzzle.is_empty());
        assert_eq!(root.stats.played, 0);
    }

    #[test]
    fn domain_action_touches_only_its_slice() {
        let reducer = RootReducer::new();
        let root = RootState::default();
        let next = reducer.reduce(
            &root,
            &Action::SeaWord(SeaWordAction::StartPuzzle {
                puzzle: "coral".into(),
            }),
        );
        assert_eq!(next.sea_word.status, GameStatus::Playing);
        assert_eq!(next.stats, root.stats);
    }

    #[test]
    fn unknown_action_yields_equal_tree() {
        let reducer = RootReducer::new();
        let mut root = RootState::default();
        root.sea_word.puzzle = "coral".into();
        let next = reducer.reduce(&root, &Action::ResetStore);
        assert_eq!(next, root);
    }

    #[test]
    fn reduction_is_value_deterministic() {
        let reducer = RootReducer::new();
        let root = RootState::default();
        let action = Action::Stats(StatsAction::GameFinished { won: true });
        assert_eq!(
            reducer.reduce(&root, &action),
            reducer.reduce(&root, &action)
        );
    }

    #[test]
    fn camel_case_record_layout() {
        let mut root = RootState::default();
        root.sea_word.puzzle = "coral".into();
        let json = serde_json::to_value(&root).unwrap();
        assert!(json.get("seaWord").is_some());
        assert!(json["stats"].get("currentStreak").is_some());
    }
}
