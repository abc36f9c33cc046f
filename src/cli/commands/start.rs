use crate::cli::commands::{CliTracker, open_tracker};
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::tracker::BeginOutcome;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::models::work_record::{format_date, format_time};
use crate::ui::messages::{info, notify, warning};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let mut tracker = open_tracker(cli, cfg)?;

    if start_and_report(&mut tracker)? && !cfg.persist_active_session {
        warning(
            "persist_active_session is disabled: this session ends with the process. \
             Use `rworklog session` to track it interactively.",
        );
    }

    Ok(())
}

/// Begin a session, print the notification and log it.
/// Returns false when a session was already in progress.
pub(crate) fn start_and_report(tracker: &mut CliTracker) -> AppResult<bool> {
    match tracker.begin()? {
        BeginOutcome::Started(at) => {
            if let Some(n) = tracker.notifications().latest() {
                notify(n);
            }
            ttlog_quiet(
                &tracker.store().conn,
                "start",
                &format_date(&at),
                &format!("Session started at {}", format_time(&at)),
            );
            Ok(true)
        }
        BeginOutcome::AlreadyActive(since) => {
            info(format!(
                "A session is already in progress since {} {}.",
                format_date(&since),
                format_time(&since)
            ));
            Ok(false)
        }
    }
}
