//! Intent-level services.
//!
//! # Responsibility
//! - Turn user intents into store mutations and filter changes.
//! - Keep the visible projection in sync with store and filter.
//! - Keep UI/FFI layers decoupled from store details.

pub mod activity_board;
pub mod notice;
