//! User-facing notices derived from completed mutations.

use crate::model::activity::{Activity, ActivityId, ActivityStatus};

/// Description of a successful mutation, built from the store's return value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityNotice {
    Added { id: ActivityId, title: String },
    Updated { id: ActivityId, title: String },
    Deleted { id: ActivityId, title: String },
    StatusChanged {
        id: ActivityId,
        title: String,
        status: ActivityStatus,
    },
}

impl ActivityNotice {
    pub fn added(activity: &Activity) -> Self {
        Self::Added {
            id: activity.id,
            title: activity.title.clone(),
        }
    }

    pub fn updated(activity: &Activity) -> Self {
        Self::Updated {
            id: activity.id,
            title: activity.title.clone(),
        }
    }

    pub fn deleted(activity: &Activity) -> Self {
        Self::Deleted {
            id: activity.id,
            title: activity.title.clone(),
        }
    }

    pub fn status_changed(activity: &Activity) -> Self {
        Self::StatusChanged {
            id: activity.id,
            title: activity.title.clone(),
            status: activity.status,
        }
    }

    pub fn activity_id(&self) -> ActivityId {
        match self {
            Self::Added { id, .. }
            | Self::Updated { id, .. }
            | Self::Deleted { id, .. }
            | Self::StatusChanged { id, .. } => *id,
        }
    }

    /// Short heading, e.g. `Activity added`.
    pub fn headline(&self) -> &'static str {
        match self {
            Self::Added { .. } => "Activity added",
            Self::Updated { .. } => "Activity updated",
            Self::Deleted { .. } => "Activity deleted",
            Self::StatusChanged {
                status: ActivityStatus::Completed,
                ..
            } => "Activity completed",
            Self::StatusChanged {
                status: ActivityStatus::Pending,
                ..
            } => "Activity marked as pending",
        }
    }

    /// Sentence naming the affected activity.
    pub fn detail(&self) -> String {
        match self {
            Self::Added { title, .. } => format!("\"{title}\" has been added successfully."),
            Self::Updated { title, .. } => format!("\"{title}\" has been updated successfully."),
            Self::Deleted { title, .. } => format!("\"{title}\" has been deleted."),
            Self::StatusChanged {
                title,
                status: ActivityStatus::Completed,
                ..
            } => format!("\"{title}\" has been marked as completed."),
            Self::StatusChanged {
                title,
                status: ActivityStatus::Pending,
                ..
            } => format!("\"{title}\" has been moved back to pending."),
        }
    }

    /// Deletions are rendered with destructive styling.
    pub fn is_destructive(&self) -> bool {
        matches!(self, Self::Deleted { .. })
    }
}
