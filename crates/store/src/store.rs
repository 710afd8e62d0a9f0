use std::sync::Arc;

use seaword_common::StoreConfig;
use seaword_persist::{PERSIST_KEY, PersistenceSink, StorageBackend, load_persisted};
use seaword_state::{Action, RootReducer, RootState, SeaWordState, StatsState};

use crate::reconcile::reconcile;

/// Observes every committed state, in exact commit order. The state a
/// subscriber sees is always fully settled; notification happens after
/// the dispatch that produced it completes.
pub trait Subscriber {
    fn on_state_change(&mut self, state: &RootState);
}

/// Adapter so plain closures can subscribe without naming a type.
struct FnSubscriber<F>(F);

impl<F: FnMut(&RootState)> Subscriber for FnSubscriber<F> {
    fn on_state_change(&mut self, state: &RootState) {
        (self.0)(state)
    }
}

impl Subscriber for PersistenceSink {
    fn on_state_change(&mut self, state: &RootState) {
        self.persist(state);
    }
}

/// Cross-cutting observer of the dispatch path. Runs before the reducer,
/// seeing each action alongside the state it will be applied to.
pub trait Middleware {
    fn on_dispatch(&mut self, action: &Action, state: &RootState);
}

/// Debug middleware: logs every dispatched action. Wired in interactive
/// context only.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionLogger;

impl Middleware for ActionLogger {
    fn on_dispatch(&mut self, action: &Action, state: &RootState) {
        tracing::debug!(?action, guesses = state.sea_word.guesses.len(), "dispatch");
    }
}

/// An owned store handle: the state tree plus the wiring around it.
///
/// There is no process-wide store. Interactive callers build one and hold
/// it for the whole session; non-interactive callers build one per request
/// and drop it after rendering.
pub struct Store {
    state: RootState,
    reducer: RootReducer,
    config: StoreConfig,
    storage: Arc<dyn StorageBackend>,
    middleware: Vec<Box<dyn Middleware>>,
    subscribers: Vec<Box<dyn Subscriber>>,
}

/// Build a store wired for the given execution context.
///
/// The initial tree is the composed defaults. Interactive context
/// registers the persistence sink and the action logger; non-interactive
/// context registers neither, so the backend is never touched there.
pub fn make_store(config: StoreConfig, storage: Arc<dyn StorageBackend>) -> Store {
    let mut store = Store {
        state: RootState::default(),
        reducer: RootReducer::new(),
        storage: Arc::clone(&storage),
        middleware: Vec::new(),
        subscribers: Vec::new(),
        config,
    };
    if store.config.context.is_interactive() {
        store.middleware.push(Box::new(ActionLogger));
        let sink = PersistenceSink::new(storage, store.config.version.clone());
        store.subscribers.push(Box::new(sink));
    }
    store
}

impl Store {
    /// The current state tree.
    pub fn state(&self) -> &RootState {
        &self.state
    }

    /// Selector: the puzzle slice.
    pub fn sea_word(&self) -> &SeaWordState {
        &self.state.sea_word
    }

    /// Selector: the statistics slice.
    pub fn stats(&self) -> &StatsState {
        &self.state.stats
    }

    /// The schema version this store persists and accepts.
    pub fn version(&self) -> &str {
        &self.config.version
    }

    /// Register a subscriber.
    pub fn subscribe(&mut self, subscriber: impl Subscriber + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Register a closure as a subscriber.
    pub fn subscribe_fn(&mut self, f: impl FnMut(&RootState) + 'static) {
        self.subscribe(FnSubscriber(f));
    }

    /// Apply one action and notify subscribers with the settled state.
    ///
    /// `Hydrate` consults the stored snapshot (interactive context only)
    /// and reconciles; `ResetStore` restores the composed defaults,
    /// bypassing any stored snapshot; everything else goes through the
    /// root reducer.
    pub fn dispatch(&mut self, action: Action) {
        for mw in &mut self.middleware {
            mw.on_dispatch(&action, &self.state);
        }

        self.state = match &action {
            Action::Hydrate(payload) => {
                let stored = if self.config.context.is_interactive() {
                    load_persisted(self.storage.as_ref(), PERSIST_KEY)
                } else {
                    None
                };
                reconcile(&self.state, payload, stored, &self.config.version)
            }
            Action::ResetStore => RootState::default(),
            _ => self.reducer.reduce(&self.state, &action),
        };

        for sub in &mut self.subscribers {
            sub.on_state_change(&self.state);
        }
    }

    /// Deliberate start-over: restore the composed defaults.
    pub fn reset(&mut self) {
        self.dispatch(Action::ResetStore);
    }
}
