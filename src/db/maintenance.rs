//! Health checks and compaction behind `db --check` / `db --vacuum`.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::codec::{decode_instant, decode_records_or_default};
use crate::store::{ACTIVE_START_KEY, KeyValueStore, MALFORMED_RECORDS_KEY, RECORDS_KEY};
use crate::utils::path::expand_tilde;
use std::fs;

#[derive(Debug, Default)]
pub struct CheckReport {
    /// Rows returned by `PRAGMA integrity_check` other than `ok`.
    pub integrity_problems: Vec<String>,
    /// Readable work records; `None` when the stored list cannot be decoded.
    pub records: Option<usize>,
    /// A rejected list is kept under `workRecords.malformed`.
    pub malformed_kept: bool,
    /// `activeStart` is present but unreadable.
    pub bad_open_session: bool,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.integrity_problems.is_empty() && self.records.is_some() && !self.bad_open_session
    }
}

/// Run SQLite's integrity check and verify the tracker keys decode.
pub fn check(pool: &DbPool) -> AppResult<CheckReport> {
    let mut stmt = pool.conn.prepare("PRAGMA integrity_check;")?;
    let integrity_problems = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .filter(|line| line != "ok")
        .collect();

    let raw = pool.get(RECORDS_KEY)?;
    let loaded = decode_records_or_default(raw.as_deref());
    let records = loaded.rejected.is_none().then_some(loaded.records.len());

    let bad_open_session = match pool.get(ACTIVE_START_KEY)? {
        Some(raw) => decode_instant(&raw).is_err(),
        None => false,
    };

    Ok(CheckReport {
        integrity_problems,
        records,
        malformed_kept: pool.get(MALFORMED_RECORDS_KEY)?.is_some(),
        bad_open_session,
    })
}

/// VACUUM the database; returns the file size in bytes before and after.
pub fn vacuum(pool: &DbPool, db_path: &str) -> AppResult<(u64, u64)> {
    let path = expand_tilde(db_path);
    let size = || fs::metadata(&path).map(|m| m.len()).unwrap_or(0);

    let before = size();
    pool.conn.execute_batch("VACUUM;")?;
    Ok((before, size()))
}
