use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::{LogFilter, LogLogic};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Log { print, op, limit } = cmd else {
        return Ok(());
    };

    if !*print {
        info("Nothing to do: pass --print to show the internal log.");
        return Ok(());
    }

    let filter = LogFilter {
        operation: op.clone(),
        limit: *limit,
    };

    let pool = DbPool::open_initialized(&cfg.database)?;
    LogLogic::print_log(&pool, &filter)
}
