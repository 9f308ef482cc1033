use crate::core::store::TagStore;
use crate::db::db_utils::{from_millis, to_millis};
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::models::Tag;
use rusqlite::{OptionalExtension, Row, params};

pub(crate) fn map_tag_row(row: &Row) -> rusqlite::Result<Tag> {
    Ok(Tag {
        id: row.get("id")?,
        name: row.get("name")?,
        created_at: from_millis(2, row.get("created_at")?)?,
        updated_at: from_millis(3, row.get("updated_at")?)?,
    })
}

impl SqliteStore {
    fn tag_name_taken(&self, name: &str, except: Option<i64>) -> AppResult<bool> {
        let id: Option<i64> = self
            .conn()
            .query_row("SELECT id FROM tags WHERE name = ?1", [name], |r| r.get(0))
            .optional()?;
        Ok(matches!(id, Some(found) if Some(found) != except))
    }
}

impl TagStore for SqliteStore {
    fn create_tag(&self, name: &str) -> AppResult<Tag> {
        if self.tag_name_taken(name, None)? {
            return Err(AppError::Validation(format!("tag '{name}' already exists")));
        }
        let now = to_millis(self.now());
        self.conn().execute(
            "INSERT INTO tags (name, created_at, updated_at) VALUES (?1, ?2, ?2)",
            params![name, now],
        )?;
        self.find_tag(self.conn().last_insert_rowid())
    }

    fn find_tag(&self, id: i64) -> AppResult<Tag> {
        self.conn()
            .query_row(
                "SELECT id, name, created_at, updated_at FROM tags WHERE id = ?1",
                [id],
                map_tag_row,
            )
            .optional()?
            .ok_or_else(|| AppError::not_found("tag", id))
    }

    fn find_tag_by_name(&self, name: &str) -> AppResult<Tag> {
        self.conn()
            .query_row(
                "SELECT id, name, created_at, updated_at FROM tags WHERE name = ?1",
                [name],
                map_tag_row,
            )
            .optional()?
            .ok_or_else(|| AppError::not_found("tag", name))
    }

    fn find_all_tags(&self) -> AppResult<Vec<Tag>> {
        let mut stmt = self
            .conn()
            .prepare_cached("SELECT id, name, created_at, updated_at FROM tags ORDER BY id DESC")?;
        let rows = stmt.query_map([], map_tag_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn rename_tag(&self, id: i64, name: &str) -> AppResult<()> {
        if self.tag_name_taken(name, Some(id))? {
            return Err(AppError::Validation(format!("tag '{name}' already exists")));
        }
        let changed = self.conn().execute(
            "UPDATE tags SET name = ?1, updated_at = ?2 WHERE id = ?3",
            params![name, to_millis(self.now()), id],
        )?;
        if changed == 0 {
            return Err(AppError::not_found("tag", id));
        }
        Ok(())
    }

    fn delete_tag(&self, id: i64) -> AppResult<()> {
        let tx = self.conn().unchecked_transaction()?;
        tx.execute("DELETE FROM project_type_tags WHERE tag_id = ?1", [id])?;
        let changed = tx.execute("DELETE FROM tags WHERE id = ?1", [id])?;
        if changed == 0 {
            return Err(AppError::not_found("tag", id));
        }
        tx.commit()?;
        Ok(())
    }
}
