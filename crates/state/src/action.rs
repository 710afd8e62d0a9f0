use crate::root::HydrationPayload;

/// Every action dispatched through the store.
///
/// Two variants are reserved by the store runtime: `Hydrate` is delivered
/// once per store instance at startup and drives snapshot reconciliation;
/// `ResetStore` restores the composed defaults. Everything else is domain
/// traffic delegated to the slice reducers, each of which ignores actions
/// it does not recognize.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Reconcile the tree against incoming startup state.
    Hydrate(HydrationPayload),
    /// Replace the entire tree with the composed defaults.
    ResetStore,
    /// Puzzle-round actions.
    SeaWord(SeaWordAction),
    /// Play-statistics actions.
    Stats(StatsAction),
}

/// Actions on the puzzle slice.
#[derive(Debug, Clone, PartialEq)]
pub enum SeaWordAction {
    /// Begin a fresh round with the given target word.
    StartPuzzle { puzzle: String },
    /// Submit a guess for the active round.
    SubmitGuess(String),
}

/// Actions on the statistics slice.
#[derive(Debug, Clone, PartialEq)]
pub enum StatsAction {
    /// Record the outcome of a finished round.
    GameFinished { won: bool },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hydrate_carries_payload() {
        let a = Action::Hydrate(HydrationPayload::default());
        assert!(matches!(a, Action::Hydrate(_)));
    }

    #[test]
    fn domain_actions_constructible() {
        let a = Action::SeaWord(SeaWordAction::SubmitGuess("kelp".into()));
        assert!(matches!(a, Action::SeaWord(SeaWordAction::SubmitGuess(_))));
        let b = Action::Stats(StatsAction::GameFinished { won: true });
        assert!(matches!(b, Action::Stats(_)));
    }
}
