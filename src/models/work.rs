use crate::utils::time::is_today_at;
use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;

/// A trackable task/time record.
///
/// `project_type_id` and `tag_id` are stored as 0 when unset; they surface
/// here as `None`. `project_name`/`tag_name` are joined in on read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkEntry {
    pub id: i64,
    pub title: String,
    pub project_type_id: Option<i64>,
    pub tag_id: Option<i64>,
    pub start_time: Option<DateTime<Local>>,
    pub end_time: Option<DateTime<Local>>,
    pub is_tracking: bool,
    pub total_seconds: i64,
    pub confirmed: bool,
    pub created_at: DateTime<Local>,
    pub updated_at: DateTime<Local>,
    pub project_name: Option<String>,
    pub tag_name: Option<String>,
}

impl WorkEntry {
    /// Calendar day the entry belongs to.
    pub fn day(&self) -> NaiveDate {
        self.created_at.date_naive()
    }

    pub fn is_created_today(&self, now: DateTime<Local>) -> bool {
        is_today_at(self.created_at, now)
    }

    pub fn project_label(&self) -> &str {
        self.project_name.as_deref().unwrap_or("")
    }

    pub fn tag_label(&self) -> &str {
        self.tag_name.as_deref().unwrap_or("")
    }
}
