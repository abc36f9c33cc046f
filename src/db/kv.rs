//! `kv_store` table as a `KeyValueStore`.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::{KeyValueStore, KvOp};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

impl KeyValueStore for DbPool {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT value FROM kv_store WHERE key = ?1")?;

        let value = stmt.query_row([key], |row| row.get(0)).optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        upsert(&self.conn, key, value)
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        delete(&self.conn, key)
    }

    /// All writes share one transaction.
    fn apply(&mut self, ops: &[KvOp<'_>]) -> AppResult<()> {
        let tx = self.conn.transaction()?;

        for op in ops {
            match *op {
                KvOp::Set(key, value) => upsert(&tx, key, value)?,
                KvOp::Remove(key) => delete(&tx, key)?,
            }
        }

        tx.commit()?;
        Ok(())
    }
}

fn upsert(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    conn.execute(
        "INSERT INTO kv_store (key, value, updated_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET
            value = excluded.value,
            updated_at = excluded.updated_at",
        params![key, value, now],
    )?;

    Ok(())
}

fn delete(conn: &Connection, key: &str) -> AppResult<()> {
    conn.execute("DELETE FROM kv_store WHERE key = ?1", [key])?;
    Ok(())
}

/// Number of entries and total payload size, for `db --info`.
pub fn kv_usage(pool: &DbPool) -> rusqlite::Result<(i64, i64)> {
    pool.conn.query_row(
        "SELECT COUNT(*), IFNULL(SUM(LENGTH(value)), 0) FROM kv_store",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )
}
