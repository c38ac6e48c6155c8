//! Filtering of the activity list.
//!
//! # Responsibility
//! - Turn a status/date filter into an inclusion test over activities.
//! - Derive the ordered visible subset from the store's collection.
//!
//! # Invariants
//! - Predicates are pure and hold no state.
//! - A projection is always rebuilt from scratch, never patched.

pub mod projection;
pub mod spec;
