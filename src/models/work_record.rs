use crate::core::duration::duration;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Persisted summary of one completed session.
///
/// Field names on the wire are camelCase (`startTime`, `endTime`) so the
/// stored JSON keeps the same shape as every previous writer of `workRecords`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkRecord {
    pub date: String,       // YYYY/MM/DD of the session start
    pub start_time: String, // HH:MM
    pub end_time: String,   // HH:MM
    pub duration: String,   // e.g. "1時間15分"
}

impl WorkRecord {
    /// Build a record from the two ends of a session.
    /// The date is always taken from the start, even when the session
    /// crosses midnight.
    pub fn from_span(start: DateTime<Local>, end: DateTime<Local>) -> Self {
        Self {
            date: format_date(&start),
            start_time: format_time(&start),
            end_time: format_time(&end),
            duration: duration(start, end),
        }
    }
}

pub fn format_date(ts: &DateTime<Local>) -> String {
    ts.format("%Y/%m/%d").to_string()
}

pub fn format_time(ts: &DateTime<Local>) -> String {
    ts.format("%H:%M").to_string()
}
