use crate::core::store::WorkStore;
use crate::db::db_utils::{from_millis, id_to_opt, opt_from_millis, opt_to_id, to_millis};
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::models::WorkEntry;
use crate::utils::time::{end_of_day, start_of_day};
use chrono::{DateTime, Local};
use rusqlite::{OptionalExtension, Row, params};

const WORK_SELECT: &str = "
    SELECT w.id, w.title, w.project_type_id, w.tag_id, w.start_time, w.end_time,
           w.is_tracking, w.total_seconds, w.confirmed, w.created_at, w.updated_at,
           p.name AS project_name, t.name AS tag_name
    FROM work_entries w
    LEFT JOIN project_types p ON p.id = w.project_type_id
    LEFT JOIN tags t ON t.id = w.tag_id";

pub fn map_work_row(row: &Row) -> rusqlite::Result<WorkEntry> {
    Ok(WorkEntry {
        id: row.get("id")?,
        title: row.get("title")?,
        project_type_id: id_to_opt(row.get("project_type_id")?),
        tag_id: id_to_opt(row.get("tag_id")?),
        start_time: opt_from_millis(4, row.get("start_time")?)?,
        end_time: opt_from_millis(5, row.get("end_time")?)?,
        is_tracking: row.get::<_, i64>("is_tracking")? == 1,
        total_seconds: row.get("total_seconds")?,
        confirmed: row.get::<_, i64>("confirmed")? == 1,
        created_at: from_millis(9, row.get("created_at")?)?,
        updated_at: from_millis(10, row.get("updated_at")?)?,
        project_name: row.get("project_name")?,
        tag_name: row.get("tag_name")?,
    })
}

fn not_found(id: i64) -> AppError {
    AppError::not_found("work entry", id)
}

impl SqliteStore {
    fn query_works(&self, filter: &str, params: &[&dyn rusqlite::ToSql]) -> AppResult<Vec<WorkEntry>> {
        let sql = format!("{WORK_SELECT} {filter}");
        let mut stmt = self.conn().prepare_cached(&sql)?;
        let rows = stmt.query_map(params, map_work_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn title_exists_on_day(&self, title: &str, day: DateTime<Local>) -> AppResult<bool> {
        let date = day.date_naive();
        let found = self
            .conn()
            .query_row(
                "SELECT 1 FROM work_entries
                 WHERE title = ?1 AND created_at >= ?2 AND created_at <= ?3
                 LIMIT 1",
                params![
                    title,
                    to_millis(start_of_day(date)),
                    to_millis(end_of_day(date))
                ],
                |_| Ok(()),
            )
            .optional()?;
        Ok(found.is_some())
    }

    fn expect_changed(changed: usize, id: i64) -> AppResult<()> {
        if changed == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }
}

impl WorkStore for SqliteStore {
    fn find_in_range(&self, start: DateTime<Local>, end: DateTime<Local>) -> AppResult<Vec<WorkEntry>> {
        self.query_works(
            "WHERE w.created_at >= ?1 AND w.created_at <= ?2
             ORDER BY w.created_at DESC, w.id DESC",
            &[&to_millis(start), &to_millis(end)],
        )
    }

    fn find_tracking(&self) -> AppResult<Vec<WorkEntry>> {
        self.query_works("WHERE w.is_tracking = 1 ORDER BY w.id ASC", &[])
    }

    fn find_by_id(&self, id: i64) -> AppResult<WorkEntry> {
        self.query_works("WHERE w.id = ?1", &[&id])?
            .into_iter()
            .next()
            .ok_or_else(|| not_found(id))
    }

    fn find_all(&self) -> AppResult<Vec<WorkEntry>> {
        self.query_works("ORDER BY w.id ASC", &[])
    }

    fn find_by_project_type(&self, project_type_id: i64) -> AppResult<Vec<WorkEntry>> {
        self.query_works(
            "WHERE w.project_type_id = ?1 ORDER BY w.id ASC",
            &[&project_type_id],
        )
    }

    fn create(&self, title: &str, project_type_id: Option<i64>, tag_id: Option<i64>) -> AppResult<WorkEntry> {
        let now = self.now();
        let tx = self.conn().unchecked_transaction()?;

        if self.title_exists_on_day(title, now)? {
            return Err(AppError::DuplicateToday(title.to_string()));
        }

        tx.execute(
            "INSERT INTO work_entries (title, project_type_id, tag_id, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?4)",
            params![
                title,
                opt_to_id(project_type_id),
                opt_to_id(tag_id),
                to_millis(now)
            ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        tracing::debug!(id, title, "work entry created");
        self.find_by_id(id)
    }

    fn update(&self, id: i64, title: &str, project_type_id: Option<i64>, tag_id: Option<i64>) -> AppResult<()> {
        let changed = self.conn().execute(
            "UPDATE work_entries
             SET title = ?1, project_type_id = ?2, tag_id = ?3, updated_at = ?4
             WHERE id = ?5",
            params![
                title,
                opt_to_id(project_type_id),
                opt_to_id(tag_id),
                to_millis(self.now()),
                id
            ],
        )?;
        Self::expect_changed(changed, id)
    }

    fn start_tracking(&self, id: i64) -> AppResult<()> {
        let now = to_millis(self.now());
        let changed = self.conn().execute(
            "UPDATE work_entries
             SET start_time = ?1, end_time = NULL, is_tracking = 1, updated_at = ?1
             WHERE id = ?2",
            params![now, id],
        )?;
        Self::expect_changed(changed, id)
    }

    fn stop_tracking(&self, id: i64) -> AppResult<()> {
        let now = to_millis(self.now());
        // Only a running timer contributes elapsed time; integer division
        // floors the non-negative millisecond span to whole seconds.
        let changed = self.conn().execute(
            "UPDATE work_entries
             SET end_time = ?1,
                 total_seconds = total_seconds + CASE
                     WHEN is_tracking = 1 AND start_time IS NOT NULL AND start_time <= ?1
                     THEN (?1 - start_time) / 1000
                     ELSE 0
                 END,
                 is_tracking = 0,
                 updated_at = ?1
             WHERE id = ?2",
            params![now, id],
        )?;
        Self::expect_changed(changed, id)
    }

    fn update_total_seconds(&self, id: i64, seconds: i64) -> AppResult<()> {
        if seconds < 0 {
            return Err(AppError::Validation(format!(
                "total seconds must not be negative, got {seconds}"
            )));
        }
        let changed = self.conn().execute(
            "UPDATE work_entries SET total_seconds = ?1, updated_at = ?2 WHERE id = ?3",
            params![seconds, to_millis(self.now()), id],
        )?;
        Self::expect_changed(changed, id)
    }

    fn update_confirmed(&self, id: i64, confirmed: bool) -> AppResult<()> {
        let changed = self.conn().execute(
            "UPDATE work_entries SET confirmed = ?1, updated_at = ?2 WHERE id = ?3",
            params![i64::from(confirmed), to_millis(self.now()), id],
        )?;
        Self::expect_changed(changed, id)
    }

    fn delete(&self, id: i64) -> AppResult<()> {
        let changed = self
            .conn()
            .execute("DELETE FROM work_entries WHERE id = ?1", [id])?;
        Self::expect_changed(changed, id)
    }
}
