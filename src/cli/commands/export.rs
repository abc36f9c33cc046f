use crate::cli::commands::open_tracker;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = &cli.command
    {
        let tracker = open_tracker(cli, cfg)?;
        let path = expand_tilde(file);

        ExportLogic::export(tracker.records(), *format, &path, *force)?;

        ttlog_quiet(
            &tracker.store().conn,
            "export",
            &path.to_string_lossy(),
            &format!(
                "Exported {} records as {}",
                tracker.records().len(),
                format.as_str()
            ),
        );
    }
    Ok(())
}
