//! Activity store trait and in-memory implementation.
//!
//! # Responsibility
//! - Issue session-unique ids and keep records newest-added first.
//! - Replace records by id on edit/toggle without moving them.
//!
//! # Invariants
//! - An issued id is never issued again in the same store, even after the
//!   record holding it has been removed.
//! - `update` and `toggle_status` preserve the record's position.
//! - A mutation is fully applied before the call returns.

use crate::model::activity::{Activity, ActivityDraft, ActivityId};
use log::{debug, warn};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type StoreResult<T> = Result<T, StoreError>;

/// Error returned by id-based store operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    NotFound(ActivityId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "activity not found: {id}"),
        }
    }
}

impl Error for StoreError {}

/// Mutation and read surface over the canonical activity collection.
pub trait ActivityStore {
    /// Inserts a new record at the head and returns it.
    fn add(&mut self, draft: ActivityDraft) -> Activity;
    /// Replaces the fields of the record with `id`, keeping its position.
    fn update(&mut self, id: ActivityId, draft: ActivityDraft) -> StoreResult<Activity>;
    /// Removes and returns the record with `id`.
    fn remove(&mut self, id: ActivityId) -> StoreResult<Activity>;
    /// Flips pending/completed on the record with `id`, keeping its position.
    fn toggle_status(&mut self, id: ActivityId) -> StoreResult<Activity>;
    fn get(&self, id: ActivityId) -> Option<&Activity>;
    /// Current collection, newest-added first.
    fn list(&self) -> &[Activity];
}

/// Process-local store backed by a `Vec`.
#[derive(Debug, Default)]
pub struct InMemoryActivityStore {
    activities: Vec<Activity>,
    issued: HashSet<ActivityId>,
}

impl InMemoryActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a store so that `list()` yields the drafts in the given order.
    pub fn from_drafts(drafts: Vec<ActivityDraft>) -> Self {
        let mut store = Self::new();
        for draft in drafts.into_iter().rev() {
            store.add(draft);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    fn issue_id(&mut self) -> ActivityId {
        loop {
            let id = Uuid::new_v4();
            if self.issued.insert(id) {
                return id;
            }
        }
    }

    fn position(&self, id: ActivityId) -> StoreResult<usize> {
        self.activities
            .iter()
            .position(|activity| activity.id == id)
            .ok_or_else(|| {
                warn!("event=activity_lookup module=store status=not_found id={id}");
                StoreError::NotFound(id)
            })
    }
}

impl ActivityStore for InMemoryActivityStore {
    fn add(&mut self, draft: ActivityDraft) -> Activity {
        let id = self.issue_id();
        let activity = Activity::from_draft(id, draft);
        self.activities.insert(0, activity.clone());
        debug!(
            "event=activity_add module=store status=ok id={id} total={}",
            self.activities.len()
        );
        activity
    }

    fn update(&mut self, id: ActivityId, draft: ActivityDraft) -> StoreResult<Activity> {
        let index = self.position(id)?;
        let replacement = Activity::from_draft(id, draft);
        self.activities[index] = replacement.clone();
        debug!("event=activity_update module=store status=ok id={id} position={index}");
        Ok(replacement)
    }

    fn remove(&mut self, id: ActivityId) -> StoreResult<Activity> {
        let index = self.position(id)?;
        let removed = self.activities.remove(index);
        debug!(
            "event=activity_remove module=store status=ok id={id} total={}",
            self.activities.len()
        );
        Ok(removed)
    }

    fn toggle_status(&mut self, id: ActivityId) -> StoreResult<Activity> {
        let index = self.position(id)?;
        let current = &self.activities[index];
        let replacement = current.with_status(current.status.toggled());
        self.activities[index] = replacement.clone();
        debug!(
            "event=activity_toggle module=store status=ok id={id} new_status={}",
            replacement.status
        );
        Ok(replacement)
    }

    fn get(&self, id: ActivityId) -> Option<&Activity> {
        self.activities.iter().find(|activity| activity.id == id)
    }

    fn list(&self) -> &[Activity] {
        &self.activities
    }
}
