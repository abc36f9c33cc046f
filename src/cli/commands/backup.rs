use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = &cli.command
        && let Some(final_path) =
            BackupLogic::backup(&cfg.database, &expand_tilde(file), *compress, *force)?
        && let Ok(pool) = DbPool::new(&cfg.database)
    {
        ttlog_quiet(
            &pool.conn,
            "backup",
            &final_path.to_string_lossy(),
            if *compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );
    }

    Ok(())
}
