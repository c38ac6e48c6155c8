//! Activity record, status and draft types.
//!
//! # Responsibility
//! - Define the canonical record held by the store.
//! - Define the draft (record minus id) exchanged with forms.
//! - Own form-level draft validation.
//!
//! # Invariants
//! - `id` is assigned by the store and never changes afterwards.
//! - `timestamp` is local wall-clock time; its calendar day is `timestamp.date()`.
//! - Title validation runs before commit, never inside the store.

use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for an activity, issued by the store.
pub type ActivityId = Uuid;

/// Completion state of an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStatus {
    Pending,
    Completed,
}

impl ActivityStatus {
    /// Returns the opposite status.
    pub fn toggled(self) -> Self {
        match self {
            Self::Pending => Self::Completed,
            Self::Completed => Self::Pending,
        }
    }

    /// Wire name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }

    /// Parses a wire name. Case-insensitive, surrounding whitespace ignored.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Badge label shown next to an activity.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
        }
    }

    /// Hint for the toggle button of an activity in this status.
    pub fn toggle_hint(self) -> &'static str {
        match self {
            Self::Pending => "Mark as completed",
            Self::Completed => "Mark as pending",
        }
    }
}

impl Display for ActivityStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Form-level validation failure for a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftValidationError {
    /// Title is the empty string.
    EmptyTitle,
}

impl Display for DraftValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Title is required"),
        }
    }
}

impl Error for DraftValidationError {}

/// Field values of an activity without its identity.
///
/// Used for both the add form and the edit form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDraft {
    pub title: String,
    pub description: String,
    pub timestamp: NaiveDateTime,
    pub status: ActivityStatus,
}

impl ActivityDraft {
    /// Creates a pending draft with an empty description.
    pub fn new(title: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            timestamp,
            status: ActivityStatus::Pending,
        }
    }

    /// Creates a pending draft stamped with the current local time.
    ///
    /// Mirrors the defaults of a freshly opened add form.
    pub fn starting_now(title: impl Into<String>) -> Self {
        Self::new(title, Local::now().naive_local())
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_status(mut self, status: ActivityStatus) -> Self {
        self.status = status;
        self
    }

    /// Moves the draft to another calendar day, keeping hour and minute.
    ///
    /// A picked day carries no seconds, so seconds reset to zero.
    pub fn reschedule_date(&mut self, date: NaiveDate) {
        let time = self.timestamp.time();
        let on_the_minute = time
            .with_second(0)
            .and_then(|time| time.with_nanosecond(0))
            .unwrap_or(time);
        self.timestamp = date.and_time(on_the_minute);
    }

    /// Sets hour and minute on the current day, keeping seconds.
    ///
    /// Returns `false` and leaves the draft untouched for an out-of-range time.
    pub fn reschedule_time(&mut self, hour: u32, minute: u32) -> bool {
        match self
            .timestamp
            .with_hour(hour)
            .and_then(|timestamp| timestamp.with_minute(minute))
        {
            Some(timestamp) => {
                self.timestamp = timestamp;
                true
            }
            None => false,
        }
    }

    /// Checks the draft before it is committed.
    ///
    /// # Errors
    /// - `EmptyTitle` when the title is the empty string. Whitespace-only
    ///   titles pass.
    pub fn validate(&self) -> Result<(), DraftValidationError> {
        if self.title.is_empty() {
            return Err(DraftValidationError::EmptyTitle);
        }
        Ok(())
    }
}

/// Canonical activity record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    pub title: String,
    pub description: String,
    pub timestamp: NaiveDateTime,
    pub status: ActivityStatus,
}

impl Activity {
    /// Builds a record from draft fields and a store-issued id.
    pub fn from_draft(id: ActivityId, draft: ActivityDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            timestamp: draft.timestamp,
            status: draft.status,
        }
    }

    /// Returns the record's fields as a draft, e.g. to pre-fill an edit form.
    pub fn to_draft(&self) -> ActivityDraft {
        ActivityDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            timestamp: self.timestamp,
            status: self.status,
        }
    }

    /// Calendar day the activity falls on.
    pub fn day(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Returns a copy with the given status and the same id.
    pub fn with_status(&self, status: ActivityStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    /// Timestamp formatted for list display, e.g. `April 25, 2025, 7:00 AM`.
    pub fn display_timestamp(&self) -> String {
        let (is_pm, hour) = self.timestamp.hour12();
        format!(
            "{}, {}:{:02} {}",
            self.timestamp.format("%B %-d, %Y"),
            hour,
            self.timestamp.minute(),
            if is_pm { "PM" } else { "AM" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Activity, ActivityDraft, ActivityStatus, DraftValidationError};
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> chrono::NaiveDateTime {
        at_seconds(y, m, d, h, min, 0)
    }

    fn at_seconds(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, min, s))
            .unwrap()
    }

    #[test]
    fn status_toggle_flips_both_ways() {
        assert_eq!(ActivityStatus::Pending.toggled(), ActivityStatus::Completed);
        assert_eq!(ActivityStatus::Completed.toggled(), ActivityStatus::Pending);
    }

    #[test]
    fn status_parse_accepts_wire_names_only() {
        assert_eq!(ActivityStatus::parse(" Completed "), Some(ActivityStatus::Completed));
        assert_eq!(ActivityStatus::parse("pending"), Some(ActivityStatus::Pending));
        assert_eq!(ActivityStatus::parse("done"), None);
        assert_eq!(ActivityStatus::parse("all"), None);
    }

    #[test]
    fn validate_rejects_only_empty_titles() {
        let draft = ActivityDraft::new("", at(2025, 4, 25, 7, 0));
        assert_eq!(draft.validate(), Err(DraftValidationError::EmptyTitle));
        assert!(ActivityDraft::new("   ", at(2025, 4, 25, 7, 0))
            .validate()
            .is_ok());
        assert_eq!(
            DraftValidationError::EmptyTitle.to_string(),
            "Title is required"
        );
        assert!(ActivityDraft::new("Jog", at(2025, 4, 25, 7, 0))
            .validate()
            .is_ok());
    }

    #[test]
    fn reschedule_date_keeps_hour_and_minute_and_drops_seconds() {
        let mut draft = ActivityDraft::new("Jog", at(2025, 4, 25, 7, 30));
        draft.reschedule_date(NaiveDate::from_ymd_opt(2025, 5, 2).unwrap());
        assert_eq!(draft.timestamp, at(2025, 5, 2, 7, 30));

        draft.timestamp = at_seconds(2025, 4, 25, 7, 0, 42);
        draft.reschedule_date(NaiveDate::from_ymd_opt(2025, 4, 26).unwrap());
        assert_eq!(draft.timestamp, at(2025, 4, 26, 7, 0));
    }

    #[test]
    fn reschedule_time_keeps_day_and_rejects_out_of_range() {
        let mut draft = ActivityDraft::new("Jog", at(2025, 4, 25, 7, 30));
        assert!(draft.reschedule_time(18, 5));
        assert_eq!(draft.timestamp, at(2025, 4, 25, 18, 5));

        assert!(!draft.reschedule_time(24, 0));
        assert_eq!(draft.timestamp, at(2025, 4, 25, 18, 5));
    }

    #[test]
    fn reschedule_time_keeps_seconds() {
        let mut draft = ActivityDraft::new("Jog", at_seconds(2025, 4, 25, 7, 0, 42));
        assert!(draft.reschedule_time(9, 15));
        assert_eq!(draft.timestamp, at_seconds(2025, 4, 25, 9, 15, 42));
    }

    #[test]
    fn draft_round_trips_through_record() {
        let draft = ActivityDraft::new("Read Book", at(2025, 4, 23, 20, 0))
            .with_description("Continue reading")
            .with_status(ActivityStatus::Completed);
        let activity = Activity::from_draft(Uuid::new_v4(), draft.clone());
        assert_eq!(activity.to_draft(), draft);
        assert_eq!(activity.day(), NaiveDate::from_ymd_opt(2025, 4, 23).unwrap());
    }

    #[test]
    fn display_timestamp_uses_twelve_hour_clock() {
        let morning = Activity::from_draft(
            Uuid::new_v4(),
            ActivityDraft::new("Jog", at(2025, 4, 25, 7, 0)),
        );
        assert_eq!(morning.display_timestamp(), "April 25, 2025, 7:00 AM");

        let evening = Activity::from_draft(
            Uuid::new_v4(),
            ActivityDraft::new("Shop", at(2025, 4, 24, 18, 5)),
        );
        assert_eq!(evening.display_timestamp(), "April 24, 2025, 6:05 PM");
    }
}
