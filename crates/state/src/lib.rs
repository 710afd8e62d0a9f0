//! State tree composition: slice states, slice reducers, and the root
//! reducer that combines them.
//!
//! # Invariants
//! - Reducers are pure: no I/O, no panics, and unknown actions return the
//!   input state unchanged.
//! - The root tree is always fully populated; `Default` supplies every slice.

pub mod action;
pub mod root;
pub mod sea_word;
pub mod stats;

pub use action::{Action, SeaWordAction, StatsAction};
pub use root::{HydrationPayload, Reducer, RootReducer, RootState};
pub use sea_word::{GameStatus, MAX_GUESSES, SeaWordState};
pub use stats::StatsState;
