use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::formatting::strip_ansi;
use ansi_term::Colour;
use rusqlite::params;

const MAX_OP_WIDTH: usize = 60;

/// Colour for each logged operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "start" => Colour::Green,
        "stop" => Colour::Red,
        "recover" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "backup" => Colour::Blue,
        "export" => Colour::Cyan,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogEntry {
    pub id: i32,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Which log rows to show.
#[derive(Debug, Default, Clone)]
pub struct LogFilter {
    pub operation: Option<String>,
    /// Keep only the newest rows.
    pub limit: Option<usize>,
}

pub struct LogLogic;

impl LogLogic {
    /// Matching rows, oldest first.
    pub fn load(pool: &DbPool, filter: &LogFilter) -> AppResult<Vec<LogEntry>> {
        let limit = filter
            .limit
            .map(|n| i64::try_from(n).unwrap_or(i64::MAX))
            .unwrap_or(-1);

        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM (
                 SELECT * FROM log
                 WHERE ?1 IS NULL OR operation = ?1
                 ORDER BY id DESC
                 LIMIT ?2
             ) ORDER BY id ASC",
        )?;

        let rows = stmt.query_map(params![filter.operation, limit], |row| {
            let raw_date: String = row.get(1)?;
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok(LogEntry {
                id: row.get(0)?,
                date,
                operation: row.get(2)?,
                target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                message: row.get(4)?,
            })
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }
        Ok(entries)
    }

    pub fn print_log(pool: &DbPool, filter: &LogFilter) -> AppResult<()> {
        let entries = Self::load(pool, filter)?;

        if entries.is_empty() {
            match &filter.operation {
                Some(op) => println!("📜 No log rows for operation '{}'.", op),
                None => println!("📜 Internal log is empty."),
            }
            return Ok(());
        }

        let op_target = |e: &LogEntry| {
            if e.target.is_empty() {
                e.operation.clone()
            } else {
                format!("{} ({})", e.operation, e.target)
            }
        };

        let op_w = entries
            .iter()
            .map(|e| op_target(e).chars().count())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for e in &entries {
            let color = color_for_operation(&e.operation);

            // truncate on the visible text, then colour only the operation word
            let visible = op_target(e);
            let truncated = if visible.chars().count() > MAX_OP_WIDTH {
                let mut s = visible.chars().take(MAX_OP_WIDTH - 3).collect::<String>();
                s.push_str("...");
                s
            } else {
                visible
            };

            let colored = match truncated.split_once(' ') {
                Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                None => color.paint(truncated.as_str()).to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                e.id,
                e.date,
                colored,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
