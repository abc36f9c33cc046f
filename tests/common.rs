#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, TimeZone};
use rworklog::core::clock::Clock;
use std::cell::Cell;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rwl() -> Command {
    cargo_bin_cmd!("rworklog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworklog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB schema in test mode (no config file written)
pub fn init_db(db_path: &str) {
    rwl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Record one session through the CLI between two local times
pub fn record_session(db_path: &str, start: &str, stop: &str) {
    rwl()
        .args(["--db", db_path, "--at", start, "start"])
        .assert()
        .success();
    rwl()
        .args(["--db", db_path, "--at", stop, "stop"])
        .assert()
        .success();
}

pub fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

/// Clock the test can move forward (or backward) between calls.
pub struct StepClock(Cell<DateTime<Local>>);

impl StepClock {
    pub fn at(ts: DateTime<Local>) -> Self {
        Self(Cell::new(ts))
    }

    pub fn set(&self, ts: DateTime<Local>) {
        self.0.set(ts);
    }
}

impl Clock for StepClock {
    fn now(&self) -> DateTime<Local> {
        self.0.get()
    }
}
