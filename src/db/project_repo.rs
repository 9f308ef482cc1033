use crate::core::store::{ProjectTypeStore, TagStore};
use crate::db::db_utils::{from_millis, to_millis};
use crate::db::store::SqliteStore;
use crate::db::tag_repo::map_tag_row;
use crate::errors::{AppError, AppResult};
use crate::models::{ProjectType, Tag};
use rusqlite::{Connection, OptionalExtension, params};

struct ProjectRow {
    id: i64,
    name: String,
    created_at: i64,
    updated_at: i64,
}

impl SqliteStore {
    fn load_project_tags(&self, project_type_id: i64) -> AppResult<Vec<Tag>> {
        let mut stmt = self.conn().prepare_cached(
            "SELECT t.id, t.name, t.created_at, t.updated_at
             FROM tags t
             JOIN project_type_tags pt ON pt.tag_id = t.id
             WHERE pt.project_type_id = ?1
             ORDER BY t.name ASC",
        )?;
        let rows = stmt.query_map([project_type_id], map_tag_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn hydrate(&self, row: ProjectRow) -> AppResult<ProjectType> {
        Ok(ProjectType {
            tags: self.load_project_tags(row.id)?,
            id: row.id,
            name: row.name,
            created_at: from_millis(2, row.created_at)?,
            updated_at: from_millis(3, row.updated_at)?,
        })
    }

    fn find_project_row(&self, filter: &str, key: &dyn rusqlite::ToSql) -> AppResult<Option<ProjectRow>> {
        let sql = format!("SELECT id, name, created_at, updated_at FROM project_types WHERE {filter}");
        let row = self
            .conn()
            .query_row(&sql, [key], |r| {
                Ok(ProjectRow {
                    id: r.get(0)?,
                    name: r.get(1)?,
                    created_at: r.get(2)?,
                    updated_at: r.get(3)?,
                })
            })
            .optional()?;
        Ok(row)
    }

    fn project_name_taken(&self, name: &str, except: Option<i64>) -> AppResult<bool> {
        let row = self.find_project_row("name = ?1", &name)?;
        Ok(matches!(row, Some(r) if Some(r.id) != except))
    }

    /// Every id must point at an existing tag.
    fn check_tags(&self, tag_ids: &[i64]) -> AppResult<()> {
        for id in tag_ids {
            self.find_tag(*id)?;
        }
        Ok(())
    }
}

fn link_tags(conn: &Connection, project_type_id: i64, tag_ids: &[i64]) -> rusqlite::Result<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT OR IGNORE INTO project_type_tags (project_type_id, tag_id) VALUES (?1, ?2)",
    )?;
    for tag_id in tag_ids {
        stmt.execute(params![project_type_id, tag_id])?;
    }
    Ok(())
}

impl ProjectTypeStore for SqliteStore {
    fn create_project_type(&self, name: &str, tag_ids: &[i64]) -> AppResult<ProjectType> {
        if self.project_name_taken(name, None)? {
            return Err(AppError::Validation(format!("project '{name}' already exists")));
        }
        self.check_tags(tag_ids)?;

        let now = to_millis(self.now());
        let tx = self.conn().unchecked_transaction()?;
        tx.execute(
            "INSERT INTO project_types (name, created_at, updated_at) VALUES (?1, ?2, ?2)",
            params![name, now],
        )?;
        let id = tx.last_insert_rowid();
        link_tags(&tx, id, tag_ids)?;
        tx.commit()?;

        self.find_project_type(id)
    }

    fn find_project_type(&self, id: i64) -> AppResult<ProjectType> {
        let row = self
            .find_project_row("id = ?1", &id)?
            .ok_or_else(|| AppError::not_found("project", id))?;
        self.hydrate(row)
    }

    fn find_project_type_by_name(&self, name: &str) -> AppResult<ProjectType> {
        let row = self
            .find_project_row("name = ?1", &name)?
            .ok_or_else(|| AppError::not_found("project", name))?;
        self.hydrate(row)
    }

    fn find_all_project_types(&self) -> AppResult<Vec<ProjectType>> {
        let rows: Vec<ProjectRow> = {
            let mut stmt = self.conn().prepare_cached(
                "SELECT id, name, created_at, updated_at FROM project_types ORDER BY id ASC",
            )?;
            let mapped = stmt.query_map([], |r| {
                Ok(ProjectRow {
                    id: r.get(0)?,
                    name: r.get(1)?,
                    created_at: r.get(2)?,
                    updated_at: r.get(3)?,
                })
            })?;
            let mut v = Vec::new();
            for r in mapped {
                v.push(r?);
            }
            v
        };

        rows.into_iter().map(|r| self.hydrate(r)).collect()
    }

    fn update_project_type(&self, id: i64, name: &str, tag_ids: &[i64]) -> AppResult<()> {
        if self.project_name_taken(name, Some(id))? {
            return Err(AppError::Validation(format!("project '{name}' already exists")));
        }
        self.check_tags(tag_ids)?;

        let tx = self.conn().unchecked_transaction()?;
        let changed = tx.execute(
            "UPDATE project_types SET name = ?1, updated_at = ?2 WHERE id = ?3",
            params![name, to_millis(self.now()), id],
        )?;
        if changed == 0 {
            return Err(AppError::not_found("project", id));
        }
        tx.execute("DELETE FROM project_type_tags WHERE project_type_id = ?1", [id])?;
        link_tags(&tx, id, tag_ids)?;
        tx.commit()?;
        Ok(())
    }

    fn delete_project_type(&self, id: i64) -> AppResult<()> {
        let tx = self.conn().unchecked_transaction()?;
        tx.execute("DELETE FROM project_type_tags WHERE project_type_id = ?1", [id])?;
        let changed = tx.execute("DELETE FROM project_types WHERE id = ?1", [id])?;
        if changed == 0 {
            return Err(AppError::not_found("project", id));
        }
        tx.commit()?;
        Ok(())
    }
}
