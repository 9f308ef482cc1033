//! Time utilities: clock strings, person-day fractions and day windows.
//!
//! Helpers that depend on "now" take the reference instant explicitly so the
//! caller's clock decides what "today" is.

use chrono::{DateTime, Days, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

/// Format seconds as `HH:MM:SS`. Hours are not capped at 24.
pub fn format_time(seconds: i64) -> String {
    let s = seconds.max(0);
    format!("{:02}:{:02}:{:02}", s / 3600, (s % 3600) / 60, s % 60)
}

/// `format_time`, followed by `(<person days>)` when a person-day divisor is
/// set and the user asked for it.
pub fn format_with_person_day(seconds: i64, person_day: u32, display: bool) -> String {
    let ft = format_time(seconds);
    if person_day < 1 || !display {
        return ft;
    }
    let hours = seconds as f64 / 3600.0;
    format!("{ft}({:.2})", hours / f64::from(person_day))
}

/// The `HH:MM` part of [`format_time`].
pub fn seconds_to_hour_and_minute(seconds: i64) -> String {
    let s = seconds.max(0);
    format!("{:02}:{:02}", s / 3600, (s % 3600) / 60)
}

/// Resolve a naive local timestamp, picking the earliest instant on DST overlaps.
pub fn local_from_naive(naive: NaiveDateTime) -> DateTime<Local> {
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(t) => t,
        LocalResult::Ambiguous(first, _) => first,
        // Skipped by a DST jump: the wall clock never showed this time.
        LocalResult::None => Local.from_utc_datetime(&naive),
    }
}

pub fn start_of_day(date: NaiveDate) -> DateTime<Local> {
    local_from_naive(date.and_time(NaiveTime::MIN))
}

pub fn end_of_day(date: NaiveDate) -> DateTime<Local> {
    let last = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    local_from_naive(date.and_time(last))
}

/// Local midnight `days` days before `now`'s date.
pub fn relative_start_time_with_days_at(now: DateTime<Local>, days: u32) -> DateTime<Local> {
    let today = now.date_naive();
    let date = today
        .checked_sub_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MIN);
    start_of_day(date)
}

/// 23:59:59.999 on `now`'s date.
pub fn today_end_time_at(now: DateTime<Local>) -> DateTime<Local> {
    end_of_day(now.date_naive())
}

pub fn is_today_at(t: DateTime<Local>, now: DateTime<Local>) -> bool {
    t.date_naive() == now.date_naive()
}

/// Whole seconds elapsed from `start` to `end`, never negative.
pub fn elapsed_seconds(start: DateTime<Local>, end: DateTime<Local>) -> i64 {
    (end - start).num_seconds().max(0)
}
