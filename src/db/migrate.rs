use crate::ui::messages::success;
use rusqlite::{Connection, Result, params};

/// Schema steps, applied in order. `PRAGMA user_version` holds the id of
/// the last step applied.
const MIGRATIONS: &[(i32, &str, &str)] = &[
    (
        1,
        "create_kv_store",
        r#"
        CREATE TABLE IF NOT EXISTS kv_store (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    ),
    (
        2,
        "index_log_operation",
        r#"
        CREATE INDEX IF NOT EXISTS idx_log_operation ON log(operation);
        "#,
    ),
];

/// Ensure that the `log` table exists.
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
    )?;
    Ok(())
}

pub fn schema_version(conn: &Connection) -> Result<i32> {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
}

pub fn latest_version() -> i32 {
    MIGRATIONS.last().map(|(v, _, _)| *v).unwrap_or(0)
}

/// Public entry point: run all pending migrations.
///
/// Invoked by `DbPool::migrate()`. Returns the number of steps applied.
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;

    let current = schema_version(conn)?;
    let mut applied = 0;

    for (version, name, sql) in MIGRATIONS.iter().filter(|(v, _, _)| *v > current) {
        let tx = conn.unchecked_transaction()?;

        tx.execute_batch(sql)?;
        tx.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
            params![name, format!("Schema upgraded to version {}", version)],
        )?;
        tx.execute_batch(&format!("PRAGMA user_version = {};", version))?;

        tx.commit()?;
        applied += 1;
    }

    if applied > 0 && current > 0 {
        success(format!(
            "Database schema upgraded from version {} to {}.",
            current,
            latest_version()
        ));
    }

    Ok(applied)
}
