use crate::db::kv::kv_usage;
use crate::db::migrate::schema_version;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::codec::decode_records_or_default;
use crate::store::{ACTIVE_START_KEY, KeyValueStore, RECORDS_KEY};
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::path::expand_tilde;
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let path = expand_tilde(db_path);
    let file_size = fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!(
        "{}• File:{} {}{}{}",
        CYAN,
        RESET,
        YELLOW,
        path.display(),
        RESET
    );
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);
    println!(
        "{}• Schema version:{} {}",
        CYAN,
        RESET,
        schema_version(&pool.conn)?
    );

    //
    // 2) KEY-VALUE ENTRIES
    //
    let (entries, bytes) = kv_usage(pool)?;
    println!(
        "{}• Stored keys:{} {} ({} bytes)",
        CYAN, RESET, entries, bytes
    );

    //
    // 3) RECORDS
    //
    let raw = pool.get(RECORDS_KEY)?;
    let loaded = decode_records_or_default(raw.as_deref());
    println!(
        "{}• Work records:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        loaded.records.len(),
        RESET
    );
    if loaded.rejected.is_some() {
        println!("    {}(stored list is unreadable){}", GREY, RESET);
    }

    let fmt_first = loaded
        .records
        .first()
        .map(|r| r.date.clone())
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = loaded
        .records
        .last()
        .map(|r| r.date.clone())
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) OPEN SESSION
    //
    let open = pool
        .get(ACTIVE_START_KEY)?
        .unwrap_or_else(|| format!("{GREY}none{RESET}"));
    println!("{}• Open session:{} {}", CYAN, RESET, open);

    //
    // 5) LOG ROWS
    //
    let log_rows: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    println!("{}• Log rows:{} {}", CYAN, RESET, log_rows);

    println!();
    Ok(())
}
