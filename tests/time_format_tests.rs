mod common;

use chrono::Timelike;
use common::{at, today_noon};
use rworklog::utils::time::{
    format_time, format_with_person_day, is_today_at, relative_start_time_with_days_at,
    seconds_to_hour_and_minute, today_end_time_at,
};

#[test]
fn format_time_pads_every_part() {
    assert_eq!(format_time(3661), "01:01:01");
    assert_eq!(format_time(90), "00:01:30");
    assert_eq!(format_time(0), "00:00:00");
}

#[test]
fn format_time_does_not_wrap_hours() {
    assert_eq!(format_time(100 * 3600 + 59), "100:00:59");
}

#[test]
fn format_time_clamps_negative_values() {
    assert_eq!(format_time(-5), "00:00:00");
}

#[test]
fn person_day_suffix_only_when_enabled() {
    assert_eq!(format_with_person_day(28800, 8, true), "08:00:00(1.00)");
    assert_eq!(format_with_person_day(3600, 8, false), "01:00:00");
    assert_eq!(format_with_person_day(3600, 0, true), "01:00:00");
    assert_eq!(format_with_person_day(14400, 8, true), "04:00:00(0.50)");
}

#[test]
fn hour_and_minute_drops_seconds() {
    assert_eq!(seconds_to_hour_and_minute(3661), "01:01");
    assert_eq!(seconds_to_hour_and_minute(59), "00:00");
}

#[test]
fn relative_start_is_local_midnight() {
    let now = today_noon();
    assert_eq!(relative_start_time_with_days_at(now, 0), at(2025, 3, 10, 0, 0, 0));
    assert_eq!(relative_start_time_with_days_at(now, 7), at(2025, 3, 3, 0, 0, 0));
}

#[test]
fn today_end_is_last_second_of_the_day() {
    let end = today_end_time_at(today_noon());
    assert_eq!(end.date_naive(), today_noon().date_naive());
    assert_eq!((end.hour(), end.minute(), end.second()), (23, 59, 59));
}

#[test]
fn is_today_compares_calendar_dates() {
    let now = today_noon();
    assert!(is_today_at(at(2025, 3, 10, 0, 0, 1), now));
    assert!(is_today_at(at(2025, 3, 10, 23, 59, 59), now));
    // Less than 24h ago but on the previous date.
    assert!(!is_today_at(at(2025, 3, 9, 23, 0, 0), now));
}
