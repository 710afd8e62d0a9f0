//! Shared configuration types consumed by every sea-word crate.
//!
//! # Invariants
//! - Execution mode is an explicit value threaded into constructors; no
//!   crate in this workspace sniffs the environment at runtime.

pub mod config;

pub use config::{ExecutionContext, StoreConfig};
