//! Interactive mode: one tracker kept alive while commands are read from stdin.

use crate::cli::commands::start::start_and_report;
use crate::cli::commands::stop::stop_and_report;
use crate::cli::commands::{CliTracker, open_tracker};
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{error, header, info, notify, warning};
use crate::ui::view::{print_records, print_status};
use crate::utils::formatting::italic;
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Start,
    Stop,
    List,
    Status,
    Help,
    Quit,
}

fn parse_action(input: &str) -> Option<Action> {
    match input.trim().to_lowercase().as_str() {
        "start" | "begin" | "b" => Some(Action::Start),
        "stop" | "end" | "e" => Some(Action::Stop),
        "list" | "l" => Some(Action::List),
        "status" | "s" => Some(Action::Status),
        "help" | "?" | "h" => Some(Action::Help),
        "quit" | "exit" | "q" => Some(Action::Quit),
        _ => None,
    }
}

fn print_help() {
    println!(
        "{}",
        italic("commands: start (b) | stop (e) | list (l) | status (s) | help (?) | quit (q)")
    );
}

fn prompt(tracker: &CliTracker) {
    let label = tracker.controls().begin_label;
    print!("[{}] > ", label);
    io::stdout().flush().ok();
}

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let mut tracker = open_tracker(cli, cfg)?;

    header("rworklog session");
    print_records(&tracker, cfg, None);
    print_help();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let now = tracker.now();
        tracker.notifications_mut().prune(now);
        prompt(&tracker);

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_action(&line) {
            Some(Action::Start) => {
                start_and_report(&mut tracker)?;
            }
            Some(Action::Stop) => {
                if stop_and_report(&mut tracker)? {
                    print_records(&tracker, cfg, None);
                }
            }
            Some(Action::List) => print_records(&tracker, cfg, None),
            Some(Action::Status) => {
                print_status(&tracker);
                if let Some(n) = tracker.notifications().current(tracker.now()) {
                    notify(n);
                }
            }
            Some(Action::Help) => print_help(),
            Some(Action::Quit) => break,
            None => error(format!("Unknown command: {}", line.trim())),
        }
    }

    if tracker.state().is_active() {
        if cfg.persist_active_session {
            info("The session is still in progress; run `rworklog stop` to end it.");
        } else {
            warning("The open session was discarded (persist_active_session is disabled).");
        }
    }

    Ok(())
}
