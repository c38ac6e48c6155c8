use chrono::NaiveDate;
use tracker_core::{
    project, Activity, ActivityDraft, ActivityStatus, ActivityStore, FilterSpec,
    InMemoryActivityStore,
};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, d).unwrap()
}

/// Store holding `[pending on 04-25, completed on 04-24]` in that order.
fn two_activity_store() -> (InMemoryActivityStore, Activity, Activity) {
    let mut store = InMemoryActivityStore::new();
    let second = store.add(
        ActivityDraft::new("Grocery Shopping", day(24).and_hms_opt(18, 0, 0).unwrap())
            .with_status(ActivityStatus::Completed),
    );
    let first = store.add(ActivityDraft::new(
        "Morning Jog",
        day(25).and_hms_opt(7, 0, 0).unwrap(),
    ));
    (store, first, second)
}

#[test]
fn status_only_filter() {
    let (store, first, _) = two_activity_store();
    let spec = FilterSpec::new(Some(ActivityStatus::Pending), None);
    assert_eq!(project(store.list(), &spec), vec![&first]);
}

#[test]
fn date_only_filter() {
    let (store, _, second) = two_activity_store();
    let spec = FilterSpec::new(None, Some(day(24)));
    assert_eq!(project(store.list(), &spec), vec![&second]);
}

#[test]
fn status_and_date_are_anded() {
    let (store, _, second) = two_activity_store();

    let both_match = FilterSpec::new(Some(ActivityStatus::Completed), Some(day(24)));
    assert_eq!(project(store.list(), &both_match), vec![&second]);

    let no_match = FilterSpec::new(Some(ActivityStatus::Completed), Some(day(25)));
    assert!(project(store.list(), &no_match).is_empty());
}

#[test]
fn empty_filter_keeps_store_order() {
    let (store, first, second) = two_activity_store();
    assert_eq!(
        project(store.list(), &FilterSpec::default()),
        vec![&first, &second]
    );
}

#[test]
fn date_filter_matches_whole_day_boundaries() {
    let mut store = InMemoryActivityStore::new();
    let midnight = store.add(ActivityDraft::new("start", day(24).and_hms_opt(0, 0, 0).unwrap()));
    let late = store.add(ActivityDraft::new("end", day(24).and_hms_opt(23, 59, 59).unwrap()));
    store.add(ActivityDraft::new("next", day(25).and_hms_opt(0, 0, 0).unwrap()));

    let spec = FilterSpec::new(None, Some(day(24)));
    assert_eq!(project(store.list(), &spec), vec![&late, &midnight]);
}
