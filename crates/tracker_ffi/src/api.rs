//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the add/edit/delete/toggle/filter intents to Dart via FRB.
//! - Hold one process-wide activity board.
//! - Convert between core types and plain strings at the boundary.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every mutation response carries a notice headline and message for
//!   toast display.

use chrono::{NaiveDate, NaiveDateTime};
use log::warn;
use std::sync::{Mutex, OnceLock};
use tracker_core::{
    core_version as core_version_inner, default_log_level as default_log_level_inner,
    init_logging as init_logging_inner, ping as ping_inner, Activity, ActivityBoard,
    ActivityDraft, ActivityId, ActivityNotice, ActivityStatus, FilterSpec, StoreError,
    EMPTY_PROJECTION_MESSAGE,
};
use uuid::Uuid;

const SAMPLE_DATA_ENV: &str = "ACTIVITY_TRACKER_SAMPLE_DATA";
const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];
const DATE_FORMAT: &str = "%Y-%m-%d";
static BOARD: OnceLock<Mutex<ActivityBoard>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Level the shell should pass to `init_logging` when the user has not
/// picked one: `debug` for debug builds, `info` for release builds.
#[flutter_rust_bridge::frb(sync)]
pub fn default_log_level() -> String {
    default_log_level_inner().to_owned()
}

/// One activity row as rendered by the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityItem {
    /// Stable activity ID in string form.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Local wall-clock time, `YYYY-MM-DDTHH:MM:SS`.
    pub timestamp: String,
    /// Human-readable timestamp for the card footer.
    pub display_timestamp: String,
    /// `pending|completed`.
    pub status: String,
    pub status_label: String,
    pub toggle_hint: String,
}

/// Visible list plus the filter state that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityListResponse {
    pub items: Vec<ActivityItem>,
    /// Whether a "clear filters" affordance should be shown.
    pub filter_active: bool,
    /// Empty-state text when `items` is empty, otherwise a count summary.
    pub message: String,
}

/// Outcome of a mutating intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Affected activity ID on success.
    pub activity_id: Option<String>,
    /// Toast title; empty on failure.
    pub headline: String,
    /// Toast body on success, error text on failure.
    pub message: String,
    /// Deletions use destructive toast styling.
    pub destructive: bool,
}

impl ActivityActionResponse {
    fn from_notice(notice: &ActivityNotice) -> Self {
        Self {
            ok: true,
            activity_id: Some(notice.activity_id().to_string()),
            headline: notice.headline().to_string(),
            message: notice.detail(),
            destructive: notice.is_destructive(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            activity_id: None,
            headline: String::new(),
            message: message.into(),
            destructive: false,
        }
    }
}

/// Field values used to populate the add or edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityFormValues {
    /// Whether values were produced; `false` leaves the form closed.
    pub ok: bool,
    pub title: String,
    pub description: String,
    /// Local wall-clock time, `YYYY-MM-DDTHH:MM:SS`.
    pub timestamp: String,
    /// `pending|completed`.
    pub status: String,
    /// Error text on failure, otherwise empty.
    pub message: String,
}

impl ActivityFormValues {
    fn from_draft(draft: &ActivityDraft) -> Self {
        Self {
            ok: true,
            title: draft.title.clone(),
            description: draft.description.clone(),
            timestamp: format_timestamp(draft.timestamp),
            status: draft.status.as_str().to_string(),
            message: String::new(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            title: String::new(),
            description: String::new(),
            timestamp: String::new(),
            status: String::new(),
            message: message.into(),
        }
    }
}

/// Result of moving a form timestamp with the date or time picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormTimestampResponse {
    pub ok: bool,
    /// Updated timestamp on success, the input unchanged on failure.
    pub timestamp: String,
    /// Error text on failure, otherwise empty.
    pub message: String,
}

/// Defaults for a freshly opened add form: empty text, pending, now.
#[flutter_rust_bridge::frb(sync)]
pub fn activity_new_form() -> ActivityFormValues {
    ActivityFormValues::from_draft(&ActivityDraft::starting_now(""))
}

/// Current values of an activity to pre-fill the edit form.
///
/// Looks the record up regardless of the active filter.
#[flutter_rust_bridge::frb(sync)]
pub fn activity_edit_form(id: String) -> ActivityFormValues {
    let result = with_board(|board| {
        let id = parse_id(&id)?;
        board
            .get(id)
            .map(Activity::to_draft)
            .ok_or_else(|| StoreError::NotFound(id).to_string())
    });
    match result {
        Ok(draft) => ActivityFormValues::from_draft(&draft),
        Err(err) => {
            warn!("event=ffi_call module=ffi call=activity_edit_form status=error");
            ActivityFormValues::failure(err)
        }
    }
}

/// Applies a date picked in the form; hour and minute are kept, seconds
/// reset to zero.
#[flutter_rust_bridge::frb(sync)]
pub fn activity_form_pick_date(timestamp: String, date: String) -> FormTimestampResponse {
    reschedule_form(timestamp, |draft| {
        let date = parse_date(&date)?;
        draft.reschedule_date(date);
        Ok(())
    })
}

/// Applies an hour and minute picked in the form; day and seconds are kept.
#[flutter_rust_bridge::frb(sync)]
pub fn activity_form_pick_time(timestamp: String, hour: u32, minute: u32) -> FormTimestampResponse {
    reschedule_form(timestamp, |draft| {
        if draft.reschedule_time(hour, minute) {
            Ok(())
        } else {
            Err(format!("invalid time {hour}:{minute:02}"))
        }
    })
}

/// Returns the activities passing the current filter.
///
/// # FFI contract
/// - Sync call, in-memory.
/// - Never panics; an unavailable board yields an empty list with the reason.
#[flutter_rust_bridge::frb(sync)]
pub fn activity_list() -> ActivityListResponse {
    match with_board(|board| Ok(list_response(board))) {
        Ok(response) => response,
        Err(err) => ActivityListResponse {
            items: Vec::new(),
            filter_active: false,
            message: err,
        },
    }
}

/// Adds an activity (add form submit).
///
/// `timestamp` accepts `YYYY-MM-DDTHH:MM[:SS]`; `status` accepts
/// `pending|completed`.
#[flutter_rust_bridge::frb(sync)]
pub fn activity_add(
    title: String,
    description: String,
    timestamp: String,
    status: String,
) -> ActivityActionResponse {
    respond("activity_add", |board| {
        let draft = parse_draft(title, description, &timestamp, &status)?;
        board.on_add(draft).map_err(|err| err.to_string())
    })
}

/// Replaces the fields of an existing activity (edit form submit).
#[flutter_rust_bridge::frb(sync)]
pub fn activity_edit(
    id: String,
    title: String,
    description: String,
    timestamp: String,
    status: String,
) -> ActivityActionResponse {
    respond("activity_edit", |board| {
        let id = parse_id(&id)?;
        let draft = parse_draft(title, description, &timestamp, &status)?;
        board.on_edit(id, draft).map_err(|err| err.to_string())
    })
}

/// Deletes an activity.
#[flutter_rust_bridge::frb(sync)]
pub fn activity_delete(id: String) -> ActivityActionResponse {
    respond("activity_delete", |board| {
        let id = parse_id(&id)?;
        board.on_delete(id).map_err(|err| err.to_string())
    })
}

/// Flips an activity between pending and completed.
#[flutter_rust_bridge::frb(sync)]
pub fn activity_toggle_status(id: String) -> ActivityActionResponse {
    respond("activity_toggle_status", |board| {
        let id = parse_id(&id)?;
        board.on_toggle_status(id).map_err(|err| err.to_string())
    })
}

/// Replaces the filter and returns the refreshed list.
///
/// Input semantics:
/// - `status`: `pending|completed`; `None`, empty or `all` = no restriction.
/// - `date`: `YYYY-MM-DD`; `None` or empty = no restriction.
///
/// On invalid input the current filter is kept and `message` names the
/// problem.
#[flutter_rust_bridge::frb(sync)]
pub fn activity_set_filter(status: Option<String>, date: Option<String>) -> ActivityListResponse {
    let result = with_board(|board| {
        let spec = parse_filter(status.as_deref(), date.as_deref())?;
        board.on_filter_change(spec);
        Ok(list_response(board))
    });
    result.unwrap_or_else(|err| {
        warn!("event=ffi_call module=ffi call=activity_set_filter status=error");
        let mut response = activity_list();
        response.message = err;
        response
    })
}

/// Resets the filter and returns the full list.
#[flutter_rust_bridge::frb(sync)]
pub fn activity_clear_filters() -> ActivityListResponse {
    match with_board(|board| {
        board.on_clear_filters();
        Ok(list_response(board))
    }) {
        Ok(response) => response,
        Err(err) => ActivityListResponse {
            items: Vec::new(),
            filter_active: false,
            message: err,
        },
    }
}

fn reschedule_form(
    timestamp: String,
    f: impl FnOnce(&mut ActivityDraft) -> Result<(), String>,
) -> FormTimestampResponse {
    let result = parse_timestamp(&timestamp).and_then(|parsed| {
        let mut draft = ActivityDraft::new("", parsed);
        f(&mut draft)?;
        Ok(format_timestamp(draft.timestamp))
    });
    match result {
        Ok(updated) => FormTimestampResponse {
            ok: true,
            timestamp: updated,
            message: String::new(),
        },
        Err(err) => FormTimestampResponse {
            ok: false,
            timestamp,
            message: err,
        },
    }
}

fn respond(
    call: &str,
    f: impl FnOnce(&mut ActivityBoard) -> Result<ActivityNotice, String>,
) -> ActivityActionResponse {
    match with_board(f) {
        Ok(notice) => ActivityActionResponse::from_notice(&notice),
        Err(err) => {
            warn!("event=ffi_call module=ffi call={call} status=error");
            ActivityActionResponse::failure(format!("{call} failed: {err}"))
        }
    }
}

fn with_board<T>(f: impl FnOnce(&mut ActivityBoard) -> Result<T, String>) -> Result<T, String> {
    let board = BOARD.get_or_init(|| Mutex::new(initial_board()));
    let mut guard = board
        .lock()
        .map_err(|_| "activity board unavailable after a previous panic".to_string())?;
    f(&mut *guard)
}

fn initial_board() -> ActivityBoard {
    if sample_data_enabled(std::env::var(SAMPLE_DATA_ENV).ok().as_deref()) {
        ActivityBoard::with_samples()
    } else {
        ActivityBoard::new()
    }
}

/// Reads the sample-data switch; unset or unrecognized values mean off.
fn sample_data_enabled(raw: Option<&str>) -> bool {
    raw.map(|value| {
        matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
    .unwrap_or(false)
}

fn list_response(board: &ActivityBoard) -> ActivityListResponse {
    let items = board.visible().into_iter().map(to_item).collect::<Vec<_>>();
    let message = if items.is_empty() {
        EMPTY_PROJECTION_MESSAGE.to_string()
    } else {
        format!("Showing {} activit{}.", items.len(), if items.len() == 1 { "y" } else { "ies" })
    };
    ActivityListResponse {
        items,
        filter_active: !board.filter().is_empty(),
        message,
    }
}

fn to_item(activity: &Activity) -> ActivityItem {
    ActivityItem {
        id: activity.id.to_string(),
        title: activity.title.clone(),
        description: activity.description.clone(),
        timestamp: format_timestamp(activity.timestamp),
        display_timestamp: activity.display_timestamp(),
        status: activity.status.as_str().to_string(),
        status_label: activity.status.label().to_string(),
        toggle_hint: activity.status.toggle_hint().to_string(),
    }
}

fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMATS[0]).to_string()
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| format!("invalid date `{trimmed}`; expected YYYY-MM-DD"))
}

fn parse_id(raw: &str) -> Result<ActivityId, String> {
    Uuid::parse_str(raw.trim()).map_err(|_| format!("invalid activity id `{raw}`"))
}

fn parse_status(raw: &str) -> Result<ActivityStatus, String> {
    ActivityStatus::parse(raw)
        .ok_or_else(|| format!("invalid status `{raw}`; expected pending|completed"))
}

fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, String> {
    let trimmed = raw.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| format!("invalid timestamp `{raw}`; expected YYYY-MM-DDTHH:MM[:SS]"))
}

fn parse_draft(
    title: String,
    description: String,
    timestamp: &str,
    status: &str,
) -> Result<ActivityDraft, String> {
    Ok(ActivityDraft::new(title, parse_timestamp(timestamp)?)
        .with_description(description)
        .with_status(parse_status(status)?))
}

fn parse_filter(status: Option<&str>, date: Option<&str>) -> Result<FilterSpec, String> {
    let status = match status.map(str::trim) {
        None | Some("") => None,
        Some(value) if value.eq_ignore_ascii_case("all") => None,
        Some(value) => Some(parse_status(value)?),
    };
    let date = match date.map(str::trim) {
        None | Some("") => None,
        Some(value) => Some(parse_date(value)?),
    };
    Ok(FilterSpec::new(status, date))
}

#[cfg(test)]
mod tests {
    use super::{
        activity_add, activity_delete, activity_edit, activity_edit_form, activity_form_pick_date,
        activity_form_pick_time, activity_list, activity_new_form, activity_set_filter,
        activity_toggle_status, core_version, default_log_level, init_logging, parse_filter,
        parse_timestamp, ping, sample_data_enabled,
    };
    use std::time::{SystemTime, UNIX_EPOCH};
    use tracker_core::ActivityStatus;

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn default_log_level_is_accepted_by_init_logging() {
        let level = default_log_level();
        assert!(level == "debug" || level == "info", "{level}");
        // Fails on the directory, not on the level.
        let error = init_logging(level, "relative/logs".to_string());
        assert!(error.contains("absolute"), "{error}");
    }

    #[test]
    fn sample_data_switch_accepts_truthy_values() {
        for raw in ["1", "true", "yes", "on", " TRUE ", "Yes\n", "On"] {
            assert!(sample_data_enabled(Some(raw)), "{raw:?}");
        }
    }

    #[test]
    fn sample_data_switch_defaults_off() {
        assert!(!sample_data_enabled(None));
        for raw in ["", "   ", "0", "false", "off", "no", "enabled", "yes please", "2"] {
            assert!(!sample_data_enabled(Some(raw)), "{raw:?}");
        }
    }

    #[test]
    fn new_form_starts_pending_and_blank() {
        let form = activity_new_form();
        assert!(form.ok);
        assert!(form.title.is_empty());
        assert!(form.description.is_empty());
        assert_eq!(form.status, "pending");
        assert!(parse_timestamp(&form.timestamp).is_ok(), "{}", form.timestamp);
    }

    #[test]
    fn pick_date_keeps_clock_time_and_drops_seconds() {
        let moved = activity_form_pick_date(
            "2025-04-25T07:30:42".to_string(),
            "2025-05-02".to_string(),
        );
        assert!(moved.ok, "{}", moved.message);
        assert_eq!(moved.timestamp, "2025-05-02T07:30:00");

        let rejected =
            activity_form_pick_date("2025-04-25T07:30:42".to_string(), "May 2".to_string());
        assert!(!rejected.ok);
        assert_eq!(rejected.timestamp, "2025-04-25T07:30:42");
        assert!(rejected.message.contains("invalid date"));
    }

    #[test]
    fn pick_time_keeps_day_and_seconds() {
        let moved = activity_form_pick_time("2025-04-25T07:30:42".to_string(), 18, 5);
        assert!(moved.ok, "{}", moved.message);
        assert_eq!(moved.timestamp, "2025-04-25T18:05:42");

        let rejected = activity_form_pick_time("2025-04-25T07:30:42".to_string(), 24, 0);
        assert!(!rejected.ok);
        assert_eq!(rejected.timestamp, "2025-04-25T07:30:42");
        assert!(rejected.message.contains("invalid time"));

        let garbage = activity_form_pick_time("yesterday".to_string(), 9, 0);
        assert!(!garbage.ok);
        assert!(garbage.message.contains("invalid timestamp"));
    }

    #[test]
    fn edit_form_prefills_current_values() {
        let title = unique_token("ffi-form");
        let added = activity_add(
            title.clone(),
            "notes".to_string(),
            "2025-04-23T20:00".to_string(),
            "completed".to_string(),
        );
        assert!(added.ok, "{}", added.message);
        let id = added.activity_id.expect("add should return activity_id");

        let form = activity_edit_form(id.clone());
        assert!(form.ok, "{}", form.message);
        assert_eq!(form.title, title);
        assert_eq!(form.description, "notes");
        assert_eq!(form.timestamp, "2025-04-23T20:00:00");
        assert_eq!(form.status, "completed");

        assert!(activity_delete(id.clone()).ok);
        let gone = activity_edit_form(id);
        assert!(!gone.ok);
        assert!(gone.message.contains("not found"));
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/logs".to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn timestamp_accepts_minutes_or_seconds() {
        assert_eq!(
            parse_timestamp("2025-04-25T07:00").unwrap(),
            parse_timestamp("2025-04-25T07:00:00").unwrap()
        );
        assert!(parse_timestamp("25/04/2025").is_err());
    }

    #[test]
    fn filter_treats_all_and_empty_as_unrestricted() {
        assert!(parse_filter(Some("all"), Some("")).unwrap().is_empty());
        assert!(parse_filter(None, None).unwrap().is_empty());
        let spec = parse_filter(Some("Completed"), Some("2025-04-24")).unwrap();
        assert_eq!(spec.status, Some(ActivityStatus::Completed));
        assert!(parse_filter(Some("done"), None).is_err());
        assert!(parse_filter(None, Some("April 24")).is_err());
    }

    #[test]
    fn add_edit_toggle_delete_flow() {
        let title = unique_token("ffi-flow");
        let added = activity_add(
            title.clone(),
            "desc".to_string(),
            "2025-04-25T07:00".to_string(),
            "pending".to_string(),
        );
        assert!(added.ok, "{}", added.message);
        assert_eq!(added.headline, "Activity added");
        let id = added.activity_id.expect("add should return activity_id");

        let renamed = format!("{title}-renamed");
        let edited = activity_edit(
            id.clone(),
            renamed.clone(),
            String::new(),
            "2025-04-26T08:30:00".to_string(),
            "pending".to_string(),
        );
        assert!(edited.ok, "{}", edited.message);
        assert!(edited.message.contains(&renamed));

        let toggled = activity_toggle_status(id.clone());
        assert!(toggled.ok, "{}", toggled.message);
        assert_eq!(toggled.headline, "Activity completed");

        let deleted = activity_delete(id.clone());
        assert!(deleted.ok, "{}", deleted.message);
        assert!(deleted.destructive);

        let again = activity_delete(id);
        assert!(!again.ok);
        assert!(again.message.contains("not found"));
    }

    #[test]
    fn add_rejects_empty_title_and_bad_fields() {
        let empty = activity_add(
            String::new(),
            String::new(),
            "2025-04-25T07:00".to_string(),
            "pending".to_string(),
        );
        assert!(!empty.ok);
        assert!(empty.message.contains("Title is required"));

        let bad_status = activity_add(
            unique_token("bad-status"),
            String::new(),
            "2025-04-25T07:00".to_string(),
            "done".to_string(),
        );
        assert!(!bad_status.ok);
        assert!(bad_status.message.contains("invalid status"));
    }

    #[test]
    fn add_accepts_whitespace_only_title() {
        let spaced = activity_add(
            "   ".to_string(),
            String::new(),
            "2025-04-25T07:00".to_string(),
            "pending".to_string(),
        );
        assert!(spaced.ok, "{}", spaced.message);
        let id = spaced.activity_id.expect("add should return activity_id");
        assert!(activity_delete(id).ok);
    }

    #[test]
    fn toggle_rejects_malformed_id() {
        let response = activity_toggle_status("not-a-uuid".to_string());
        assert!(!response.ok);
        assert!(response.message.contains("invalid activity id"));
    }

    #[test]
    fn status_filter_only_shows_matching_items() {
        let added = activity_add(
            unique_token("ffi-filter"),
            String::new(),
            "2025-04-24T18:00".to_string(),
            "completed".to_string(),
        );
        assert!(added.ok, "{}", added.message);

        let filtered = activity_set_filter(Some("completed".to_string()), None);
        assert!(filtered.filter_active);
        assert!(filtered.items.iter().all(|item| item.status == "completed"));

        let rejected = activity_set_filter(Some("done".to_string()), None);
        assert!(rejected.message.contains("invalid status"));

        let cleared = super::activity_clear_filters();
        assert!(!cleared.filter_active);
        assert!(activity_list()
            .items
            .iter()
            .any(|item| Some(&item.id) == added.activity_id.as_ref()));
    }

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }
}
