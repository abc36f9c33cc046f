use crate::cli::commands::{CliTracker, open_tracker};
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::tracker::EndOutcome;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::ui::messages::{info, notify, warning};
use crate::ui::view::print_records;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let mut tracker = open_tracker(cli, cfg)?;

    if stop_and_report(&mut tracker)? {
        println!();
        print_records(&tracker, cfg, None);
    }

    Ok(())
}

/// End the session, print the notification and log the record.
/// Returns false when no session was active.
pub(crate) fn stop_and_report(tracker: &mut CliTracker) -> AppResult<bool> {
    match tracker.end()? {
        EndOutcome::Stopped { record, clock_skew } => {
            if let Some(n) = tracker.notifications().latest() {
                notify(n);
            }

            let conn = &tracker.store().conn;
            if clock_skew {
                let msg = format!(
                    "Clock reads earlier than the session start ({} > {}); duration recorded as {}",
                    record.start_time, record.end_time, record.duration
                );
                warning(&msg);
                ttlog_quiet(conn, "recover", &record.date, &msg);
            }
            ttlog_quiet(
                conn,
                "stop",
                &record.date,
                &format!(
                    "{}-{} ({})",
                    record.start_time, record.end_time, record.duration
                ),
            );
            Ok(true)
        }
        EndOutcome::NotActive => {
            info("No session in progress. Use `rworklog start` first.");
            Ok(false)
        }
    }
}
