mod common;

use chrono::Duration;
use common::{at, memory_store, today_noon};
use rworklog::core::store::{SettingProvider, WorkStore};
use rworklog::errors::{AppError, ErrorCode};
use rworklog::models::Setting;

#[test]
fn create_sets_defaults() {
    let (store, _clock) = memory_store(today_noon());

    let e = store.create("Write report", None, None).unwrap();
    assert_eq!(e.title, "Write report");
    assert_eq!(e.total_seconds, 0);
    assert!(!e.is_tracking);
    assert!(!e.confirmed);
    assert_eq!(e.project_type_id, None);
    assert_eq!(e.start_time, None);
    assert_eq!(e.created_at, today_noon());
}

#[test]
fn duplicate_title_on_same_day_is_rejected() {
    let (store, clock) = memory_store(today_noon());

    store.create("Standup", None, None).unwrap();
    clock.advance(Duration::hours(3));
    let err = store.create("Standup", None, None).unwrap_err();
    assert!(matches!(err, AppError::DuplicateToday(ref t) if t == "Standup"));
    assert_eq!(err.code(), ErrorCode::DuplicateToday);

    assert!(store.create("Review", None, None).is_ok());
    assert_eq!(store.find_all().unwrap().len(), 2);
}

#[test]
fn same_title_on_another_day_is_allowed() {
    let (store, clock) = memory_store(at(2025, 3, 9, 12, 0, 0));
    store.create("Standup", None, None).unwrap();

    clock.set(today_noon());
    assert!(store.create("Standup", None, None).is_ok());
}

#[test]
fn find_in_range_is_newest_first() {
    let (store, clock) = memory_store(at(2025, 3, 8, 9, 0, 0));
    let old = store.create("old", None, None).unwrap();
    clock.set(at(2025, 3, 10, 9, 0, 0));
    let a = store.create("a", None, None).unwrap();
    clock.set(at(2025, 3, 10, 10, 0, 0));
    let b = store.create("b", None, None).unwrap();

    let found = store
        .find_in_range(at(2025, 3, 10, 0, 0, 0), at(2025, 3, 10, 23, 59, 59))
        .unwrap();
    let ids: Vec<i64> = found.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![b.id, a.id]);
    assert!(!ids.contains(&old.id));
}

#[test]
fn stop_adds_whole_elapsed_seconds() {
    let (store, clock) = memory_store(today_noon());
    let e = store.create("task", None, None).unwrap();

    store.start_tracking(e.id).unwrap();
    let started = store.find_by_id(e.id).unwrap();
    assert!(started.is_tracking);
    assert_eq!(started.start_time, Some(today_noon()));
    assert_eq!(started.end_time, None);

    clock.advance(Duration::milliseconds(90_900));
    store.stop_tracking(e.id).unwrap();

    let stopped = store.find_by_id(e.id).unwrap();
    assert!(!stopped.is_tracking);
    assert_eq!(stopped.total_seconds, 90);
    assert!(stopped.end_time.is_some());
}

#[test]
fn stop_accumulates_across_runs() {
    let (store, clock) = memory_store(today_noon());
    let e = store.create("task", None, None).unwrap();

    store.start_tracking(e.id).unwrap();
    clock.advance(Duration::seconds(30));
    store.stop_tracking(e.id).unwrap();

    store.start_tracking(e.id).unwrap();
    clock.advance(Duration::seconds(45));
    store.stop_tracking(e.id).unwrap();

    assert_eq!(store.find_by_id(e.id).unwrap().total_seconds, 75);
}

#[test]
fn stop_on_idle_entry_adds_nothing() {
    let (store, clock) = memory_store(today_noon());
    let e = store.create("task", None, None).unwrap();
    store.update_total_seconds(e.id, 120).unwrap();

    clock.advance(Duration::seconds(600));
    store.stop_tracking(e.id).unwrap();
    assert_eq!(store.find_by_id(e.id).unwrap().total_seconds, 120);
}

#[test]
fn missing_entries_report_not_found() {
    let (store, _clock) = memory_store(today_noon());

    assert_eq!(store.find_by_id(42).unwrap_err().code(), ErrorCode::NotFound);
    assert_eq!(store.update(42, "x", None, None).unwrap_err().code(), ErrorCode::NotFound);
    assert_eq!(store.start_tracking(42).unwrap_err().code(), ErrorCode::NotFound);
    assert_eq!(store.stop_tracking(42).unwrap_err().code(), ErrorCode::NotFound);
    assert_eq!(store.update_confirmed(42, true).unwrap_err().code(), ErrorCode::NotFound);
    assert_eq!(store.delete(42).unwrap_err().code(), ErrorCode::NotFound);
}

#[test]
fn negative_total_is_a_validation_error() {
    let (store, _clock) = memory_store(today_noon());
    let e = store.create("task", None, None).unwrap();
    let err = store.update_total_seconds(e.id, -1).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Validation);
}

#[test]
fn confirm_and_delete() {
    let (store, _clock) = memory_store(today_noon());
    let e = store.create("task", None, None).unwrap();

    store.update_confirmed(e.id, true).unwrap();
    assert!(store.find_by_id(e.id).unwrap().confirmed);

    store.delete(e.id).unwrap();
    assert!(store.find_all().unwrap().is_empty());
}

#[test]
fn settings_are_created_lazily_with_defaults() {
    let (store, _clock) = memory_store(today_noon());

    let s = store.get_setting().unwrap();
    assert_eq!(s, Setting::default());
    assert_eq!(s.person_day, 8);
    assert!(s.display_as_person_day);

    let updated = Setting {
        relative_date: 7,
        person_day: 6,
        display_as_person_day: false,
        download_path: "/tmp/exports".into(),
        ..s
    };
    store.update_setting(&updated).unwrap();
    assert_eq!(store.get_setting().unwrap(), updated);
}
