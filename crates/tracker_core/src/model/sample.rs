//! Sample activities bundled for first launch and demos.

use super::activity::{ActivityDraft, ActivityStatus};
use chrono::{NaiveDate, NaiveDateTime};

/// Returns the sample drafts in display order (head of the list first).
pub fn sample_drafts() -> Vec<ActivityDraft> {
    [
        (
            "Morning Jog",
            "Go for a 30-minute jog in the park",
            (2025, 4, 25, 7),
            ActivityStatus::Pending,
        ),
        (
            "Team Meeting",
            "Weekly team sync to discuss project progress",
            (2025, 4, 25, 10),
            ActivityStatus::Pending,
        ),
        (
            "Grocery Shopping",
            "Buy fruits, vegetables and other essentials",
            (2025, 4, 24, 18),
            ActivityStatus::Completed,
        ),
        (
            "Read Book",
            "Continue reading \"Atomic Habits\"",
            (2025, 4, 23, 20),
            ActivityStatus::Completed,
        ),
    ]
    .into_iter()
    .filter_map(|(title, description, (y, m, d, h), status)| {
        on_the_hour(y, m, d, h).map(|timestamp| {
            ActivityDraft::new(title, timestamp)
                .with_description(description)
                .with_status(status)
        })
    })
    .collect()
}

fn on_the_hour(year: i32, month: u32, day: u32, hour: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, 0, 0)
}
