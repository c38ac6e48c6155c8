//! Activity board: store + filter + visible projection.
//!
//! # Responsibility
//! - Provide the intent surface used by presentation layers.
//! - Reject invalid drafts before they reach the store.
//! - Recompute the projection after every mutation or filter change.
//!
//! # Invariants
//! - `visible()` always equals `project(store.list(), filter)`.
//! - The store is only touched through `ActivityStore` operations.
//! - A failed intent leaves store, filter and projection unchanged.

use crate::filter::projection::Projection;
use crate::filter::spec::FilterSpec;
use crate::model::activity::{Activity, ActivityDraft, ActivityId, DraftValidationError};
use crate::model::sample::sample_drafts;
use crate::service::notice::ActivityNotice;
use crate::store::activity_store::{ActivityStore, InMemoryActivityStore, StoreError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type BoardResult<T> = Result<T, BoardError>;

/// Error for board intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Draft failed form-level validation; store untouched.
    Invalid(DraftValidationError),
    /// Intent referenced an id absent from the store.
    Store(StoreError),
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BoardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<DraftValidationError> for BoardError {
    fn from(value: DraftValidationError) -> Self {
        Self::Invalid(value)
    }
}

impl From<StoreError> for BoardError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Composes a store with the current filter and its projection.
pub struct ActivityBoard<S: ActivityStore = InMemoryActivityStore> {
    store: S,
    filter: FilterSpec,
    projection: Projection,
}

impl ActivityBoard<InMemoryActivityStore> {
    /// Empty board with no filter.
    pub fn new() -> Self {
        Self::with_store(InMemoryActivityStore::new())
    }

    /// Board seeded with the bundled sample activities.
    pub fn with_samples() -> Self {
        Self::with_store(InMemoryActivityStore::from_drafts(sample_drafts()))
    }
}

impl Default for ActivityBoard<InMemoryActivityStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ActivityStore> ActivityBoard<S> {
    /// Wraps an existing store; the filter starts empty.
    pub fn with_store(store: S) -> Self {
        let projection = Projection::compute(store.list(), &FilterSpec::default());
        Self {
            store,
            filter: FilterSpec::default(),
            projection,
        }
    }

    /// Validates and adds a draft at the head of the list.
    ///
    /// # Errors
    /// - `BoardError::Invalid` when the draft fails validation.
    pub fn on_add(&mut self, draft: ActivityDraft) -> BoardResult<ActivityNotice> {
        self.reject_invalid("add", &draft)?;
        let created = self.store.add(draft);
        self.refresh();
        info!(
            "event=intent_add module=board status=ok id={} visible={}",
            created.id,
            self.projection.len()
        );
        Ok(ActivityNotice::added(&created))
    }

    /// Validates and replaces the fields of an existing activity.
    ///
    /// # Errors
    /// - `BoardError::Invalid` when the draft fails validation.
    /// - `BoardError::Store` when `id` is unknown.
    pub fn on_edit(&mut self, id: ActivityId, draft: ActivityDraft) -> BoardResult<ActivityNotice> {
        self.reject_invalid("edit", &draft)?;
        let updated = self.store.update(id, draft)?;
        self.refresh();
        info!(
            "event=intent_edit module=board status=ok id={id} visible={}",
            self.projection.len()
        );
        Ok(ActivityNotice::updated(&updated))
    }

    /// Deletes an activity.
    ///
    /// # Errors
    /// - `BoardError::Store` when `id` is unknown.
    pub fn on_delete(&mut self, id: ActivityId) -> BoardResult<ActivityNotice> {
        let removed = self.store.remove(id)?;
        self.refresh();
        info!(
            "event=intent_delete module=board status=ok id={id} visible={}",
            self.projection.len()
        );
        Ok(ActivityNotice::deleted(&removed))
    }

    /// Flips the status of an activity.
    ///
    /// # Errors
    /// - `BoardError::Store` when `id` is unknown.
    pub fn on_toggle_status(&mut self, id: ActivityId) -> BoardResult<ActivityNotice> {
        let toggled = self.store.toggle_status(id)?;
        self.refresh();
        info!(
            "event=intent_toggle module=board status=ok id={id} new_status={} visible={}",
            toggled.status,
            self.projection.len()
        );
        Ok(ActivityNotice::status_changed(&toggled))
    }

    /// Replaces the filter wholesale.
    pub fn on_filter_change(&mut self, spec: FilterSpec) {
        self.filter = spec;
        self.refresh();
        info!(
            "event=intent_filter module=board status=ok has_status={} has_date={} visible={}",
            spec.status.is_some(),
            spec.date.is_some(),
            self.projection.len()
        );
    }

    /// Resets the filter to no restriction.
    pub fn on_clear_filters(&mut self) {
        self.on_filter_change(FilterSpec::default());
    }

    /// Activities currently passing the filter, in store order.
    pub fn visible(&self) -> Vec<&Activity> {
        self.projection.resolve(self.store.list())
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Looks up one activity regardless of the filter, e.g. to open the
    /// edit form.
    pub fn get(&self, id: ActivityId) -> Option<&Activity> {
        self.store.get(id)
    }

    fn reject_invalid(&self, intent: &str, draft: &ActivityDraft) -> BoardResult<()> {
        draft.validate().map_err(|err| {
            warn!("event=intent_{intent} module=board status=rejected reason=validation");
            BoardError::from(err)
        })
    }

    fn refresh(&mut self) {
        self.projection = Projection::compute(self.store.list(), &self.filter);
    }
}
