mod common;

use chrono::{DateTime, Duration, Local};
use common::{RecordingView, ViewEvent, at, memory_store, today_noon};
use rworklog::core::store::WorkStore;
use rworklog::core::projection::Projection;
use rworklog::core::ticker::TickSink;
use rworklog::core::tracking::{ToggleOutcome, TrackingEngine};
use rworklog::core::view::{FocusTarget, WorkView};
use rworklog::db::SqliteStore;
use rworklog::errors::{AppError, ErrorCode};
use rworklog::models::WorkEntry;
use rworklog::utils::clock::{FixedClock, SharedClock};
use std::sync::{Arc, Mutex};
use std::time::Duration as StdDuration;

fn tracking_ids<S: WorkStore>(store: &S) -> Vec<i64> {
    store.find_tracking().unwrap().iter().map(|e| e.id).collect()
}

fn engine_at(now: DateTime<Local>) -> (TrackingEngine<SqliteStore>, Arc<FixedClock>) {
    let (store, clock) = memory_store(now);
    let shared: SharedClock = clock.clone();
    let engine = TrackingEngine::with_tick_interval(store, shared, StdDuration::from_millis(10));
    (engine, clock)
}

#[test]
fn toggle_starts_then_stops_todays_entry() {
    let (mut engine, clock) = engine_at(today_noon());
    let mut view = RecordingView::new();
    let e = engine.store().create("task", None, None).unwrap();

    let started = engine.toggle_tracking(e.id, &mut view).unwrap();
    assert!(matches!(started, ToggleOutcome::Started(ref w) if w.id == e.id && w.is_tracking));
    assert!(engine.is_live());
    assert_eq!(view.count(&ViewEvent::StartTick(e.id)), 1);

    clock.advance(Duration::seconds(125));
    let stopped = engine.toggle_tracking(e.id, &mut view).unwrap();
    match stopped {
        ToggleOutcome::Stopped(w) => {
            assert!(!w.is_tracking);
            assert_eq!(w.total_seconds, 125);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(!engine.is_live());
    assert_eq!(view.count(&ViewEvent::Reset), 1);
    assert_eq!(view.count(&ViewEvent::StopTick), 1);
}

#[test]
fn only_one_entry_tracks_at_a_time() {
    let (mut engine, clock) = engine_at(today_noon());
    let mut view = RecordingView::new();
    let a = engine.store().create("a", None, None).unwrap();
    let b = engine.store().create("b", None, None).unwrap();
    let c = engine.store().create("c", None, None).unwrap();

    engine.toggle_tracking(a.id, &mut view).unwrap();
    clock.advance(Duration::seconds(60));
    engine.toggle_tracking(b.id, &mut view).unwrap();
    assert_eq!(tracking_ids(engine.store()), vec![b.id]);
    assert_eq!(engine.store().find_by_id(a.id).unwrap().total_seconds, 60);

    clock.advance(Duration::seconds(10));
    engine.toggle_tracking(c.id, &mut view).unwrap();
    engine.toggle_tracking(a.id, &mut view).unwrap();
    assert_eq!(tracking_ids(engine.store()), vec![a.id]);
    assert_eq!(engine.live_entry_id(), Some(a.id));
}

#[test]
fn past_entry_is_copied_to_today() {
    let (mut engine, clock) = engine_at(at(2025, 3, 7, 15, 0, 0));
    let mut view = RecordingView::new();
    let old = engine.store().create("Research", None, None).unwrap();
    engine.store().update_total_seconds(old.id, 3600).unwrap();

    clock.set(today_noon());
    let outcome = engine.toggle_tracking(old.id, &mut view).unwrap();

    let ToggleOutcome::CopiedToToday { source_id, entry } = outcome else {
        panic!("expected a copy");
    };
    assert_eq!(source_id, old.id);
    assert_ne!(entry.id, old.id);
    assert_eq!(entry.title, "Research");
    assert_eq!(entry.total_seconds, 0);
    assert!(!entry.confirmed);
    assert!(entry.is_created_today(today_noon()));
    assert_eq!(tracking_ids(engine.store()), vec![entry.id]);

    // The copy is selected after the refresh.
    let projection = view.last.clone().unwrap();
    assert_eq!(view.last_selected(), projection.index_of(entry.id));
    assert_eq!(engine.store().find_by_id(old.id).unwrap().total_seconds, 3600);
}

#[test]
fn copy_keeps_project_and_tag_ids() {
    use rworklog::core::store::{ProjectTypeStore, TagStore};

    let (mut engine, clock) = engine_at(at(2025, 3, 7, 15, 0, 0));
    let mut view = RecordingView::new();
    let tag = engine.store().create_tag("backend").unwrap();
    let project = engine.store().create_project_type("Core", &[tag.id]).unwrap();
    let old = engine
        .store()
        .create("API", Some(project.id), Some(tag.id))
        .unwrap();

    clock.set(today_noon());
    let outcome = engine.toggle_tracking(old.id, &mut view).unwrap();
    let copy = outcome.entry();
    assert_eq!(copy.project_type_id, Some(project.id));
    assert_eq!(copy.tag_id, Some(tag.id));
    assert_eq!(copy.project_name.as_deref(), Some("Core"));
}

#[test]
fn copy_with_title_taken_today_fails_and_starts_nothing() {
    let (mut engine, clock) = engine_at(at(2025, 3, 7, 15, 0, 0));
    let mut view = RecordingView::new();
    let old = engine.store().create("Standup", None, None).unwrap();

    clock.set(today_noon());
    engine.store().create("Standup", None, None).unwrap();

    let err = engine.toggle_tracking(old.id, &mut view).unwrap_err();
    assert_eq!(err.code(), ErrorCode::DuplicateToday);
    assert!(tracking_ids(engine.store()).is_empty());
    assert!(!engine.is_live());
}

#[test]
fn stale_tracking_from_a_past_day_is_stopped_and_copied() {
    let (mut engine, clock) = engine_at(at(2025, 3, 9, 18, 0, 0));
    let mut view = RecordingView::new();
    let old = engine.store().create("Late work", None, None).unwrap();
    engine.store().start_tracking(old.id).unwrap();

    clock.set(today_noon());
    let outcome = engine.toggle_tracking(old.id, &mut view).unwrap();

    let stopped = engine.store().find_by_id(old.id).unwrap();
    assert!(!stopped.is_tracking);
    assert!(stopped.total_seconds > 0);
    assert!(matches!(outcome, ToggleOutcome::CopiedToToday { .. }));
    assert_eq!(tracking_ids(engine.store()), vec![outcome.entry().id]);
}

#[test]
fn stop_start_stop_accumulates() {
    let (mut engine, clock) = engine_at(today_noon());
    let mut view = RecordingView::new();
    let e = engine.store().create("task", None, None).unwrap();

    engine.toggle_tracking(e.id, &mut view).unwrap();
    clock.advance(Duration::seconds(20));
    engine.toggle_tracking(e.id, &mut view).unwrap();
    let first = engine.store().find_by_id(e.id).unwrap().total_seconds;

    engine.toggle_tracking(e.id, &mut view).unwrap();
    clock.advance(Duration::seconds(40));
    engine.toggle_tracking(e.id, &mut view).unwrap();
    let second = engine.store().find_by_id(e.id).unwrap().total_seconds;

    assert_eq!(first, 20);
    assert_eq!(second, 60);
}

#[test]
fn unknown_entry_is_not_found() {
    let (mut engine, _clock) = engine_at(today_noon());
    let mut view = RecordingView::new();
    let err = engine.toggle_tracking(999, &mut view).unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotFound);
    assert!(view.events.is_empty());
}

#[test]
fn second_live_session_is_rejected() {
    let (mut engine, _clock) = engine_at(today_noon());
    let mut view = RecordingView::new();
    let e = engine.store().create("task", None, None).unwrap();

    engine.begin_live(&e, &mut view).unwrap();
    let err = engine.begin_live(&e, &mut view).unwrap_err();
    assert!(matches!(err, AppError::TickActive));

    engine.end_live(&mut view);
    assert!(engine.begin_live(&e, &mut view).is_ok());
    engine.end_live(&mut view);
}

#[test]
fn resume_live_picks_up_running_entry() {
    let (mut engine, _clock) = engine_at(today_noon());
    let mut view = RecordingView::new();
    let e = engine.store().create("task", None, None).unwrap();
    engine.store().start_tracking(e.id).unwrap();

    let resumed = engine.resume_live(&mut view).unwrap();
    assert_eq!(resumed.map(|r| r.id), Some(e.id));
    assert_eq!(engine.live_entry_id(), Some(e.id));
    assert_eq!(view.count(&ViewEvent::StartTick(e.id)), 1);

    // Already live: nothing new happens.
    assert!(engine.resume_live(&mut view).unwrap().is_none());
}

#[test]
fn refresh_prefers_focus_over_default_selection() {
    let (engine, _clock) = engine_at(today_noon());
    let mut view = RecordingView::new();
    let a = engine.store().create("a", None, None).unwrap();
    let _b = engine.store().create("b", None, None).unwrap();

    let projection = engine.refresh(&mut view, Some(a.id)).unwrap();
    assert_eq!(view.last_selected(), projection.index_of(a.id));

    let projection = engine.refresh(&mut view, None).unwrap();
    assert_eq!(view.last_selected(), projection.first_entry_index());
}

#[test]
fn several_running_timers_are_repaired_by_a_toggle_elsewhere() {
    let (mut engine, clock) = engine_at(today_noon());
    let mut view = RecordingView::new();
    let a = engine.store().create("a", None, None).unwrap();
    let b = engine.store().create("b", None, None).unwrap();
    let c = engine.store().create("c", None, None).unwrap();
    engine.store().start_tracking(a.id).unwrap();
    engine.store().start_tracking(b.id).unwrap();

    clock.advance(Duration::seconds(30));
    engine.toggle_tracking(c.id, &mut view).unwrap();

    assert_eq!(tracking_ids(engine.store()), vec![c.id]);
    assert_eq!(engine.store().find_by_id(a.id).unwrap().total_seconds, 30);
    assert_eq!(engine.store().find_by_id(b.id).unwrap().total_seconds, 30);
    engine.end_live(&mut view);
}

#[test]
fn several_running_timers_are_repaired_by_toggling_one_of_them() {
    let (mut engine, clock) = engine_at(today_noon());
    let mut view = RecordingView::new();
    let a = engine.store().create("a", None, None).unwrap();
    let b = engine.store().create("b", None, None).unwrap();
    engine.store().start_tracking(a.id).unwrap();
    engine.store().start_tracking(b.id).unwrap();

    clock.advance(Duration::seconds(15));
    let outcome = engine.toggle_tracking(a.id, &mut view).unwrap();

    assert!(matches!(outcome, ToggleOutcome::Stopped(_)));
    assert!(tracking_ids(engine.store()).len() <= 1);
    assert!(tracking_ids(engine.store()).is_empty());
    assert_eq!(engine.store().find_by_id(a.id).unwrap().total_seconds, 15);
    assert_eq!(engine.store().find_by_id(b.id).unwrap().total_seconds, 15);
}

#[test]
fn table_is_rendered_before_the_live_tick_starts() {
    let (mut engine, _clock) = engine_at(today_noon());
    let mut view = RecordingView::new();
    let e = engine.store().create("task", None, None).unwrap();

    engine.toggle_tracking(e.id, &mut view).unwrap();

    let render = view
        .events
        .iter()
        .position(|ev| matches!(ev, ViewEvent::Render(_)))
        .unwrap();
    let tick = view
        .events
        .iter()
        .position(|ev| *ev == ViewEvent::StartTick(e.id))
        .unwrap();
    assert!(render < tick);
    engine.end_live(&mut view);
}

/// Records live-display changes only; resetting takes a while so a running
/// tick thread would get the chance to draw over it.
struct SlowResetView {
    display: Arc<Mutex<Vec<String>>>,
}

impl WorkView for SlowResetView {
    fn render_rows(&mut self, _projection: &Projection) {}

    fn select_row(&mut self, _index: usize) {}

    fn start_live_tick(&mut self, _entry: &WorkEntry) -> TickSink {
        let display = Arc::clone(&self.display);
        Box::new(move |secs| display.lock().unwrap().push(format!("tick {secs}")))
    }

    fn stop_live_tick(&mut self) {}

    fn reset_live_display(&mut self) {
        self.display.lock().unwrap().push("reset".to_string());
        std::thread::sleep(StdDuration::from_millis(50));
    }

    fn report_error(&mut self, _err: &AppError, _focus: FocusTarget) {}
}

#[test]
fn stopping_leaves_the_reset_as_the_last_display_change() {
    let (mut engine, _clock) = engine_at(today_noon());
    let display = Arc::new(Mutex::new(Vec::new()));
    let mut view = SlowResetView {
        display: Arc::clone(&display),
    };
    let e = engine.store().create("task", None, None).unwrap();

    engine.toggle_tracking(e.id, &mut view).unwrap();
    std::thread::sleep(StdDuration::from_millis(30));
    engine.toggle_tracking(e.id, &mut view).unwrap();
    std::thread::sleep(StdDuration::from_millis(50));

    let display = display.lock().unwrap();
    assert!(display.iter().any(|d| d.starts_with("tick")));
    assert_eq!(display.last().map(String::as_str), Some("reset"));
}
