//! Filtered projection of the store's collection.

use super::spec::FilterSpec;
use crate::model::activity::Activity;

/// Message shown when the projection has nothing to display.
pub const EMPTY_PROJECTION_MESSAGE: &str =
    "No activities found. Add a new activity to get started!";

/// Positions in the canonical collection that pass a filter.
///
/// Holds no records of its own; `resolve` reads them from the collection the
/// projection was computed from. Stale once that collection changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Projection {
    positions: Vec<usize>,
}

impl Projection {
    /// Builds the projection from scratch, preserving `activities` order.
    pub fn compute(activities: &[Activity], spec: &FilterSpec) -> Self {
        Self {
            positions: activities
                .iter()
                .enumerate()
                .filter(|(_, activity)| spec.matches(activity))
                .map(|(position, _)| position)
                .collect(),
        }
    }

    /// Looks the selected records up in `activities`.
    pub fn resolve<'a>(&self, activities: &'a [Activity]) -> Vec<&'a Activity> {
        self.positions
            .iter()
            .filter_map(|&position| activities.get(position))
            .collect()
    }

    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Returns the activities passing `spec`, in their original order.
pub fn project<'a>(activities: &'a [Activity], spec: &FilterSpec) -> Vec<&'a Activity> {
    activities
        .iter()
        .filter(|activity| spec.matches(activity))
        .collect()
}
