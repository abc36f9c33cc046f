use crate::cli::commands::open_tracker;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::view::print_records;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::List { limit } = &cli.command {
        let tracker = open_tracker(cli, cfg)?;
        print_records(&tracker, cfg, *limit);
    }
    Ok(())
}
