//! SQLite-backed implementation of every store trait, sharing one connection.

use crate::core::store::AuditLog;
use crate::db::initialize::init_db;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::clock::SharedClock;
use chrono::{DateTime, Local};
use rusqlite::Connection;

pub struct SqliteStore {
    pool: DbPool,
    clock: SharedClock,
}

impl SqliteStore {
    /// Open (or create) the database file and bring the schema up to date.
    pub fn open(path: &str, clock: SharedClock) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        tracing::debug!(path, "store opened");
        Ok(Self { pool, clock })
    }

    pub fn in_memory(clock: SharedClock) -> AppResult<Self> {
        let pool = DbPool::in_memory()?;
        init_db(&pool.conn)?;
        Ok(Self { pool, clock })
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    pub fn clock(&self) -> &SharedClock {
        &self.clock
    }

    pub(crate) fn now(&self) -> DateTime<Local> {
        self.clock.now()
    }
}

impl AuditLog for SqliteStore {
    fn audit(&self, operation: &str, target: &str, message: &str) {
        audit(&self.pool.conn, operation, target, message);
    }
}
