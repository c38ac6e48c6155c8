//! Activity store contracts and the in-memory implementation.
//!
//! # Responsibility
//! - Own the canonical ordered collection of activities.
//! - Be the only mutation surface for that collection.
//!
//! # Invariants
//! - Store APIs return `NotFound` for unknown ids instead of silently
//!   doing nothing.
//! - The store never validates drafts; that happens before commit.

pub mod activity_store;
