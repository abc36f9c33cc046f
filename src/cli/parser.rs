use crate::core::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rworklog
/// CLI application to mark work sessions and keep their history
#[derive(Parser)]
#[command(
    name = "rworklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Mark the start and stop of work sessions and keep their history in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Pretend the current time is the given local time (YYYY-MM-DD HH:MM[:SS])
    #[arg(global = true, long = "at", hide = true)]
    pub at: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Begin a work session
    #[command(alias = "begin")]
    Start,

    /// End the current work session and record it
    #[command(alias = "end")]
    Stop,

    /// Show whether a session is in progress
    Status,

    /// List recorded sessions, newest first
    List {
        #[arg(long, short, help = "Show only the N most recent sessions")]
        limit: Option<usize>,
    },

    /// Interactive mode: read start/stop/list commands from stdin
    Session,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (integrity checks, vacuum, info)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        #[arg(long = "op", value_name = "OPERATION", help = "Only rows for this operation (e.g. stop)")]
        op: Option<String>,

        #[arg(long = "limit", value_name = "N", help = "Only the newest N rows")]
        limit: Option<usize>,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Export recorded sessions
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },
}
