//! Elapsed-time arithmetic for work sessions.

use chrono::{DateTime, Local};

const MS_PER_MINUTE: i64 = 60_000;

/// Whole minutes between two timestamps, rounded toward negative infinity.
pub fn elapsed_minutes(start: DateTime<Local>, end: DateTime<Local>) -> i64 {
    (end - start).num_milliseconds().div_euclid(MS_PER_MINUTE)
}

/// Render a minute count as `H時間M分` (one hour or more) or `M分`.
/// Negative counts render as `0分`.
pub fn format_minutes(mins: i64) -> String {
    let mins = mins.max(0);
    let hours = mins / 60;
    let minutes = mins % 60;

    if hours > 0 {
        format!("{}時間{}分", hours, minutes)
    } else {
        format!("{}分", minutes)
    }
}

/// Human-readable duration of a session.
pub fn duration(start: DateTime<Local>, end: DateTime<Local>) -> String {
    format_minutes(elapsed_minutes(start, end))
}
