//! SQLite connection wrapper (lightweight for CLI usage).

use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use rusqlite::{Connection, Result};

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(expand_tilde(path))?;
        Ok(Self { conn })
    }

    /// Open the database and make sure the schema is current.
    pub fn open_initialized(path: &str) -> AppResult<Self> {
        let pool = Self::new(path)?;
        pool.migrate()?;
        Ok(pool)
    }

    /// Schema-ready in-memory database.
    pub fn in_memory() -> AppResult<Self> {
        let pool = Self {
            conn: Connection::open_in_memory()?,
        };
        pool.migrate()?;
        Ok(pool)
    }

    /// Apply pending migrations; returns how many ran.
    pub fn migrate(&self) -> AppResult<usize> {
        Ok(run_pending_migrations(&self.conn)?)
    }
}
