use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. Applied migrations are recorded there.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20261001_0001_create_core_tables",
        description: "Created tags, project types, work entries and settings tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS tags (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL UNIQUE,
            created_at  INTEGER NOT NULL,
            updated_at  INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS project_types (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL UNIQUE,
            created_at  INTEGER NOT NULL,
            updated_at  INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS project_type_tags (
            project_type_id INTEGER NOT NULL REFERENCES project_types(id) ON DELETE CASCADE,
            tag_id          INTEGER NOT NULL REFERENCES tags(id) ON DELETE CASCADE,
            PRIMARY KEY (project_type_id, tag_id)
        );

        CREATE TABLE IF NOT EXISTS work_entries (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            title            TEXT NOT NULL,
            project_type_id  INTEGER NOT NULL DEFAULT 0,
            tag_id           INTEGER NOT NULL DEFAULT 0,
            start_time       INTEGER,
            end_time         INTEGER,
            is_tracking      INTEGER NOT NULL DEFAULT 0 CHECK(is_tracking IN (0, 1)),
            total_seconds    INTEGER NOT NULL DEFAULT 0,
            confirmed        INTEGER NOT NULL DEFAULT 0 CHECK(confirmed IN (0, 1)),
            created_at       INTEGER NOT NULL,
            updated_at       INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS settings (
            id                     INTEGER PRIMARY KEY CHECK(id = 1),
            relative_date          INTEGER NOT NULL DEFAULT 0,
            person_day             INTEGER NOT NULL DEFAULT 8,
            display_as_person_day  INTEGER NOT NULL DEFAULT 1,
            download_path          TEXT NOT NULL DEFAULT '',
            created_at             INTEGER NOT NULL,
            updated_at             INTEGER NOT NULL
        );
        "#,
    },
    Migration {
        version: "20261001_0002_work_entries_indexes",
        description: "Added created_at, tracking and project indexes on work_entries",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_work_entries_created_at ON work_entries(created_at, id);
        CREATE INDEX IF NOT EXISTS idx_work_entries_tracking ON work_entries(is_tracking);
        CREATE INDEX IF NOT EXISTS idx_work_entries_project ON work_entries(project_type_id);
        "#,
    },
];

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> Result<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(m.sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;
    tx.commit()?;

    tracing::info!(version = m.version, description = m.description, "migration applied");
    Ok(())
}

/// Public entry point: run all pending migrations, oldest first.
///
/// Invoked by db::initialize::init_db() every time a store is opened.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            apply(conn, m)?;
        }
    }

    Ok(())
}
