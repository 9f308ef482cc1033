//! Conversions between SQLite columns and domain values.
//!
//! Timestamps are stored as INTEGER milliseconds since the Unix epoch so
//! range filters and ordering are plain integer comparisons.

use chrono::{DateTime, Local, TimeZone};
use rusqlite::types::Type;

pub fn to_millis(t: DateTime<Local>) -> i64 {
    t.timestamp_millis()
}

pub fn from_millis(idx: usize, ms: i64) -> rusqlite::Result<DateTime<Local>> {
    Local.timestamp_millis_opt(ms).single().ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            Type::Integer,
            format!("invalid timestamp: {ms}").into(),
        )
    })
}

pub fn opt_from_millis(idx: usize, ms: Option<i64>) -> rusqlite::Result<Option<DateTime<Local>>> {
    ms.map(|v| from_millis(idx, v)).transpose()
}

/// 0 in a reference column means "unset".
pub fn id_to_opt(id: i64) -> Option<i64> {
    (id > 0).then_some(id)
}

pub fn opt_to_id(id: Option<i64>) -> i64 {
    id.unwrap_or(0)
}
