//! Core domain logic for the activity tracker.
//! This crate is the single source of truth for activity invariants.

pub mod filter;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use filter::projection::{project, Projection, EMPTY_PROJECTION_MESSAGE};
pub use filter::spec::{matches, FilterSpec};
pub use logging::{default_log_level, init_logging, logging_status, LogConfig, LoggingError};
pub use model::activity::{
    Activity, ActivityDraft, ActivityId, ActivityStatus, DraftValidationError,
};
pub use model::sample::sample_drafts;
pub use service::activity_board::{ActivityBoard, BoardError, BoardResult};
pub use service::notice::ActivityNotice;
pub use store::activity_store::{ActivityStore, InMemoryActivityStore, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
