//! Source of "now" for the tracker, replaceable in tests and via `--at`.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDateTime};

pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock frozen at a given instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Local> {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> DateTime<Local> {
        (**self).now()
    }
}

/// Parse a local timestamp given as `YYYY-MM-DD HH:MM[:SS]` (a `T` separator
/// is accepted too).
pub fn parse_local(s: &str) -> AppResult<DateTime<Local>> {
    let normalized = s.trim().replacen('T', " ", 1);

    let naive = NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%d %H:%M"))
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))?;

    naive
        .and_local_timezone(Local)
        .earliest()
        .ok_or_else(|| AppError::InvalidTimestamp(s.to_string()))
}

/// Clock selected from the optional `--at` override.
pub fn from_override(at: Option<&str>) -> AppResult<Box<dyn Clock>> {
    match at {
        Some(s) => Ok(Box::new(FixedClock(parse_local(s)?))),
        None => Ok(Box::new(SystemClock)),
    }
}
