//! Activity domain model.
//!
//! # Responsibility
//! - Define the canonical activity record and the draft shape used by forms.
//! - Provide the bundled sample activities shown on first launch.
//!
//! # Invariants
//! - Every activity is identified by a stable `ActivityId`.
//! - Records are replaced wholesale on edit; nothing mutates a stored record.

pub mod activity;
pub mod sample;
