//! Store interfaces consumed by the tracking engine and the projection.
//!
//! The SQLite implementation lives in `crate::db::store`.

use crate::errors::AppResult;
use crate::models::{ProjectType, Setting, Tag, WorkEntry};
use chrono::{DateTime, Local};

pub trait WorkStore {
    /// Entries with `created_at` in `[start, end]`, newest first, id desc on ties.
    fn find_in_range(&self, start: DateTime<Local>, end: DateTime<Local>) -> AppResult<Vec<WorkEntry>>;

    /// Every entry flagged as tracking. May hold more than one row if the
    /// database was edited by hand.
    fn find_tracking(&self) -> AppResult<Vec<WorkEntry>>;

    fn find_by_id(&self, id: i64) -> AppResult<WorkEntry>;

    /// All entries, id ascending.
    fn find_all(&self) -> AppResult<Vec<WorkEntry>>;

    fn find_by_project_type(&self, project_type_id: i64) -> AppResult<Vec<WorkEntry>>;

    /// Fails with `DuplicateToday` when an entry with the same title was
    /// already created today.
    fn create(&self, title: &str, project_type_id: Option<i64>, tag_id: Option<i64>) -> AppResult<WorkEntry>;

    fn update(&self, id: i64, title: &str, project_type_id: Option<i64>, tag_id: Option<i64>) -> AppResult<()>;

    /// start_time = now, end_time cleared, tracking on.
    fn start_tracking(&self, id: i64) -> AppResult<()>;

    /// end_time = now, tracking off, total_seconds += floor(now - start_time).
    fn stop_tracking(&self, id: i64) -> AppResult<()>;

    fn update_total_seconds(&self, id: i64, seconds: i64) -> AppResult<()>;

    fn update_confirmed(&self, id: i64, confirmed: bool) -> AppResult<()>;

    fn delete(&self, id: i64) -> AppResult<()>;
}

pub trait SettingProvider {
    /// The settings row, created with defaults on first access.
    fn get_setting(&self) -> AppResult<Setting>;

    fn update_setting(&self, setting: &Setting) -> AppResult<()>;
}

pub trait TagStore {
    fn create_tag(&self, name: &str) -> AppResult<Tag>;
    fn find_tag(&self, id: i64) -> AppResult<Tag>;
    fn find_tag_by_name(&self, name: &str) -> AppResult<Tag>;
    /// Newest first.
    fn find_all_tags(&self) -> AppResult<Vec<Tag>>;
    fn rename_tag(&self, id: i64, name: &str) -> AppResult<()>;
    fn delete_tag(&self, id: i64) -> AppResult<()>;
}

pub trait ProjectTypeStore {
    fn create_project_type(&self, name: &str, tag_ids: &[i64]) -> AppResult<ProjectType>;
    fn find_project_type(&self, id: i64) -> AppResult<ProjectType>;
    fn find_project_type_by_name(&self, name: &str) -> AppResult<ProjectType>;
    fn find_all_project_types(&self) -> AppResult<Vec<ProjectType>>;
    /// Replaces name and the whole tag association.
    fn update_project_type(&self, id: i64, name: &str, tag_ids: &[i64]) -> AppResult<()>;
    fn delete_project_type(&self, id: i64) -> AppResult<()>;
}

/// Append-only record of user-visible mutations. Failures never reach the
/// caller.
pub trait AuditLog {
    fn audit(&self, operation: &str, target: &str, message: &str);
}
