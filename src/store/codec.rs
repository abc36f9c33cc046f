//! Serialization boundary between the tracker state and the store.

use crate::errors::{AppError, AppResult};
use crate::models::work_record::WorkRecord;
use chrono::{DateTime, Local};

pub fn encode_records(records: &[WorkRecord]) -> AppResult<String> {
    Ok(serde_json::to_string(records)?)
}

/// Strict decode; fails on anything that is not an array of records.
pub fn decode_records(raw: &str) -> AppResult<Vec<WorkRecord>> {
    Ok(serde_json::from_str(raw)?)
}

/// Outcome of a lenient load of the record list.
#[derive(Debug, Default)]
pub struct LoadedRecords {
    pub records: Vec<WorkRecord>,
    /// Raw payload and the reason it was rejected, when it could not be read.
    pub rejected: Option<(String, String)>,
}

/// Lenient decode: a missing entry or malformed JSON yields an empty list.
/// A JSON `null` counts as missing.
pub fn decode_records_or_default(raw: Option<&str>) -> LoadedRecords {
    let Some(raw) = raw else {
        return LoadedRecords::default();
    };

    if raw.trim() == "null" {
        return LoadedRecords::default();
    }

    match decode_records(raw) {
        Ok(records) => LoadedRecords {
            records,
            rejected: None,
        },
        Err(e) => LoadedRecords {
            records: Vec::new(),
            rejected: Some((raw.to_string(), e.to_string())),
        },
    }
}

pub fn encode_instant(ts: &DateTime<Local>) -> String {
    ts.to_rfc3339()
}

pub fn decode_instant(raw: &str) -> AppResult<DateTime<Local>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|_| AppError::InvalidTimestamp(raw.to_string()))
}
