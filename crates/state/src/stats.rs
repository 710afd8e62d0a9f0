use serde::{Deserialize, Serialize};

use crate::action::{Action, StatsAction};
use crate::root::Reducer;

/// Play statistics across rounds.
///
/// Carries no round identity of its own; at hydration time it rides along
/// with whichever base state the reconciler picks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsState {
    pub played: u32,
    pub wins: u32,
    pub current_streak: u32,
    pub max_streak: u32,
}

/// Reducer for the statistics slice.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsReducer;

impl Reducer for StatsReducer {
    type State = StatsState;

    fn reduce(&self, state: &StatsState, action: &Action) -> StatsState {
        match action {
            Action::Stats(StatsAction::GameFinished { won }) => {
                let mut next = state.clone();
                next.played += 1;
                if *won {
                    next.wins += 1;
                    next.current_streak += 1;
                    next.max_streak = next.max_streak.max(next.current_streak);
                } else {
                    next.current_streak = 0;
                }
                next
            }
            _ => state.clone(),
        }
    }
}
