#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, NaiveDate};
use rworklog::core::projection::Projection;
use rworklog::core::ticker::TickSink;
use rworklog::core::view::{FocusTarget, WorkView};
use rworklog::db::SqliteStore;
use rworklog::errors::{AppError, ErrorCode};
use rworklog::models::WorkEntry;
use rworklog::utils::clock::{FixedClock, SharedClock};
use rworklog::utils::time::local_from_naive;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

pub fn rti() -> Command {
    cargo_bin_cmd!("rworklog")
}

/// Fresh database path inside a temp dir. Keep the `TempDir` alive for the
/// duration of the test.
pub fn setup_test_db(name: &str) -> (TempDir, String) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(format!("{name}_rworklog.sqlite"));
    (dir, path.to_string_lossy().to_string())
}

/// `rworklog --db <db> --test <args...>`
pub fn run_ok(db: &str, args: &[&str]) -> String {
    let out = rti()
        .args(["--db", db, "--test"])
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8_lossy(&out).to_string()
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Local> {
    let naive = NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, s))
        .expect("valid date");
    local_from_naive(naive)
}

/// Monday 2025-03-10, 12:00 local.
pub fn today_noon() -> DateTime<Local> {
    at(2025, 3, 10, 12, 0, 0)
}

pub fn memory_store(now: DateTime<Local>) -> (SqliteStore, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::new(now));
    let shared: SharedClock = clock.clone();
    let store = SqliteStore::in_memory(shared).expect("in-memory store");
    (store, clock)
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Render(usize),
    Select(usize),
    StartTick(i64),
    StopTick,
    Reset,
    Error(ErrorCode, FocusTarget),
}

/// `WorkView` double that records every call.
#[derive(Default)]
pub struct RecordingView {
    pub events: Vec<ViewEvent>,
    pub last: Option<Projection>,
    pub ticks: Arc<Mutex<Vec<i64>>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, wanted: &ViewEvent) -> usize {
        self.events.iter().filter(|e| *e == wanted).count()
    }

    pub fn last_selected(&self) -> Option<usize> {
        self.events.iter().rev().find_map(|e| match e {
            ViewEvent::Select(i) => Some(*i),
            _ => None,
        })
    }

    pub fn tick_count(&self) -> usize {
        self.ticks.lock().expect("ticks").len()
    }
}

impl WorkView for RecordingView {
    fn render_rows(&mut self, projection: &Projection) {
        self.events.push(ViewEvent::Render(projection.rows.len()));
        self.last = Some(projection.clone());
    }

    fn select_row(&mut self, index: usize) {
        self.events.push(ViewEvent::Select(index));
    }

    fn start_live_tick(&mut self, entry: &WorkEntry) -> TickSink {
        self.events.push(ViewEvent::StartTick(entry.id));
        let ticks = Arc::clone(&self.ticks);
        Box::new(move |secs| ticks.lock().expect("ticks").push(secs))
    }

    fn stop_live_tick(&mut self) {
        self.events.push(ViewEvent::StopTick);
    }

    fn reset_live_display(&mut self) {
        self.events.push(ViewEvent::Reset);
    }

    fn report_error(&mut self, err: &AppError, focus: FocusTarget) {
        self.events.push(ViewEvent::Error(err.code(), focus));
    }
}
