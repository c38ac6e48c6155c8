//! Filter specification and inclusion predicate.

use crate::model::activity::{Activity, ActivityStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Optional status and calendar-day restrictions, ANDed together.
///
/// `None` on a field means no restriction on that dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub status: Option<ActivityStatus>,
    pub date: Option<NaiveDate>,
}

impl FilterSpec {
    pub fn new(status: Option<ActivityStatus>, date: Option<NaiveDate>) -> Self {
        Self { status, date }
    }

    /// Replaces the status restriction, keeping the date restriction.
    pub fn with_status(self, status: Option<ActivityStatus>) -> Self {
        Self { status, ..self }
    }

    /// Replaces the date restriction, keeping the status restriction.
    pub fn with_date(self, date: Option<NaiveDate>) -> Self {
        Self { date, ..self }
    }

    /// True when no dimension is restricted.
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.date.is_none()
    }

    pub fn matches(&self, activity: &Activity) -> bool {
        matches(self, activity)
    }
}

/// Decides whether `activity` passes `spec`.
///
/// The date check compares calendar days only; time of day is ignored.
pub fn matches(spec: &FilterSpec, activity: &Activity) -> bool {
    let status_ok = spec.status.map_or(true, |status| activity.status == status);
    let date_ok = spec.date.map_or(true, |date| activity.day() == date);
    status_ok && date_ok
}

#[cfg(test)]
mod tests {
    use super::FilterSpec;
    use crate::model::activity::{Activity, ActivityDraft, ActivityStatus};
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, d).unwrap()
    }

    fn activity(d: u32, hour: u32, status: ActivityStatus) -> Activity {
        let timestamp = day(d).and_hms_opt(hour, 59, 59).unwrap();
        Activity::from_draft(
            Uuid::new_v4(),
            ActivityDraft::new("x", timestamp).with_status(status),
        )
    }

    #[test]
    fn empty_spec_accepts_everything() {
        let spec = FilterSpec::default();
        assert!(spec.is_empty());
        assert!(spec.matches(&activity(1, 0, ActivityStatus::Pending)));
        assert!(spec.matches(&activity(30, 23, ActivityStatus::Completed)));
    }

    #[test]
    fn date_check_ignores_time_of_day() {
        let spec = FilterSpec::new(None, Some(day(24)));
        assert!(spec.matches(&activity(24, 0, ActivityStatus::Pending)));
        assert!(spec.matches(&activity(24, 23, ActivityStatus::Completed)));
        assert!(!spec.matches(&activity(25, 0, ActivityStatus::Pending)));
    }

    #[test]
    fn with_helpers_replace_one_dimension() {
        let spec = FilterSpec::default()
            .with_status(Some(ActivityStatus::Completed))
            .with_date(Some(day(24)));
        assert_eq!(spec, FilterSpec::new(Some(ActivityStatus::Completed), Some(day(24))));

        let cleared_status = spec.with_status(None);
        assert_eq!(cleared_status.date, Some(day(24)));
        assert!(!cleared_status.is_empty());
        assert!(cleared_status.with_date(None).is_empty());
    }
}
