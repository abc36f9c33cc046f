use super::work_record::WorkRecord;
use chrono::{DateTime, Local};

/// In-memory state owned by the session tracker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackerState {
    pub records: Vec<WorkRecord>, // creation order, oldest first
    pub active_start: Option<DateTime<Local>>,
}

/// The two mutually exclusive states of the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Active,
}

impl TrackerState {
    pub fn new(records: Vec<WorkRecord>, active_start: Option<DateTime<Local>>) -> Self {
        Self {
            records,
            active_start,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.active_start.is_some() {
            Phase::Active
        } else {
            Phase::Idle
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase(), Phase::Active)
    }
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Active => "active",
        }
    }
}
