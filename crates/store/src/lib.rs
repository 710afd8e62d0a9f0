//! The store runtime: hydration-time snapshot reconciliation and the
//! store lifecycle (dispatch, subscribers, middleware, reset).
//!
//! # Invariants
//! - Reconciliation never fails outward; persistence failures degrade to
//!   hydrating from the incoming payload alone.
//! - Subscribers observe fully settled states, in exact commit order.
//! - No global store: `make_store` returns an owned handle the caller
//!   threads explicitly.

pub mod reconcile;
pub mod store;

pub use reconcile::reconcile;
pub use store::{ActionLogger, Middleware, Store, Subscriber, make_store};
