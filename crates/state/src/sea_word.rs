use serde::{Deserialize, Serialize};

use crate::action::{Action, SeaWordAction};
use crate::root::Reducer;

/// Maximum number of guesses per round.
pub const MAX_GUESSES: usize = 6;

/// Outcome of the active round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

/// The puzzle slice: one word-guessing round.
///
/// An empty `puzzle` means no round is active; guesses are rejected until
/// a round starts. All words are stored lowercased so comparisons are
/// case-insensitive at the edge and exact in here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeaWordState {
    pub puzzle: String,
    pub guesses: Vec<String>,
    pub status: GameStatus,
}

impl SeaWordState {
    /// Whether a round is active and still accepting guesses.
    pub fn in_progress(&self) -> bool {
        !self.puzzle.is_empty() && self.status == GameStatus::Playing
    }

    /// Guesses remaining in the active round.
    pub fn guesses_left(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.guesses.len())
    }
}

/// Reducer for the puzzle slice.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeaWordReducer;

impl Reducer for SeaWordReducer {
    type State = SeaWordState;

    fn reduce(&self, state: &SeaWordState, action: &Action) -> SeaWordState {
        match action {
            Action::SeaWord(SeaWordAction::StartPuzzle { puzzle }) => SeaWordState {
                puzzle: puzzle.to_lowercase(),
                guesses: Vec::new(),
                status: GameStatus::Playing,
            },
            Action::SeaWord(SeaWordAction::SubmitGuess(guess)) => submit_guess(state, guess),
            _ => state.clone(),
        }
    }
}

fn submit_guess(state: &SeaWordState, guess: &str) -> SeaWordState {
    if !state.in_progress() {
        tracing::debug!(status = ?state.status, "guess ignored: no active round");
        return state.clone();
    }
    let guess = guess.to_lowercase();
    if guess.chars().count() != state.puzzle.chars().count() {
        tracing::debug!(%guess, "guess ignored: wrong length");
        return state.clone();
    }

    let mut next = state.clone();
    next.guesses.push(guess.clone());
    if guess == next.puzzle {
        next.status = GameStatus::Won;
    } else if next.guesses.len() >= MAX_GUESSES {
        next.status = GameStatus::Lost;
    }
    next
}
