use crate::cli::commands::open_tracker;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::view::print_status;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let tracker = open_tracker(cli, cfg)?;
    print_status(&tracker);
    Ok(())
}
