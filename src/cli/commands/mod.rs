pub mod backup;
pub mod config;
pub mod db;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod session;
pub mod start;
pub mod status;
pub mod stop;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::clock::{self, Clock};
use crate::core::tracker::SessionTracker;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::warning;

pub type CliTracker = SessionTracker<DbPool, Box<dyn Clock>>;

/// Open the configured database and re-hydrate the tracker from it.
/// Anything recovered while loading is reported and written to the log.
pub(crate) fn open_tracker(cli: &Cli, cfg: &Config) -> AppResult<CliTracker> {
    let pool = DbPool::open_initialized(&cfg.database)?;
    let clock = clock::from_override(cli.at.as_deref())?;

    let tracker = SessionTracker::load(pool, clock, cfg.tracker_options())?;

    for w in tracker.load_warnings() {
        warning(w);
        ttlog_quiet(&tracker.store().conn, "recover", "workRecords", w);
    }

    Ok(tracker)
}
