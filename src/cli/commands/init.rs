use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and its schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing rworklog…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &db_path);

    let pool = DbPool::new(&db_path)?;
    let applied = pool.migrate()?;

    println!("✅ Database initialized at {}", &db_path);
    if applied > 0 {
        println!("🔧 Applied {} schema migration(s)", applied);
    }

    ttlog_quiet(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    );

    println!("🎉 rworklog initialization completed!");
    Ok(())
}
