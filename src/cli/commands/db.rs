use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::maintenance::{self, CheckReport};
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::store::MALFORMED_RECORDS_KEY;
use crate::utils::colors::{CYAN, GREEN, RED, RESET, YELLOW};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        check,
        vacuum,
        info,
    } = cmd
    else {
        return Ok(());
    };

    let pool = DbPool::open_initialized(&cfg.database)?;

    if *info {
        stats::print_db_info(&pool, &cfg.database)?;
    }

    if *check {
        println!("{}▶ Running integrity check…{}", CYAN, RESET);
        print_check(&maintenance::check(&pool)?);
    }

    if *vacuum {
        println!("{}▶ Running VACUUM…{}", CYAN, RESET);
        let (before, after) = maintenance::vacuum(&pool, &cfg.database)?;
        println!(
            "{}✔ Vacuum completed:{} {:.1} KB → {:.1} KB\n",
            GREEN,
            RESET,
            before as f64 / 1024.0,
            after as f64 / 1024.0
        );
    }

    Ok(())
}

fn print_check(report: &CheckReport) {
    if report.integrity_problems.is_empty() {
        println!("{}✔ Integrity check passed.{}", GREEN, RESET);
    } else {
        println!("{}✘ Integrity check failed:{}", RED, RESET);
        for line in &report.integrity_problems {
            println!("    {}", line);
        }
    }

    match report.records {
        Some(n) => println!("{}✔ Work records readable:{} {}", GREEN, RESET, n),
        None => println!("{}✘ Stored work records cannot be decoded{}", RED, RESET),
    }

    if report.bad_open_session {
        println!("{}✘ Open session timestamp is unreadable{}", RED, RESET);
    }

    if report.malformed_kept {
        println!(
            "{}⚠ A rejected record list is kept under '{}'{}",
            YELLOW, MALFORMED_RECORDS_KEY, RESET
        );
    }

    println!();
}
