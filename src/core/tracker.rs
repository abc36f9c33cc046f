//! Session tracker: the begin/end state machine and its persistence.
//!
//! ```text
//!   Idle --begin()--> Active --end()--> Idle   (end() appends one WorkRecord)
//! ```
//!
//! `begin()` while Active and `end()` while Idle are no-ops. Completed records
//! are written to the store under `workRecords` as a whole list each time a
//! session ends, in the same batch that clears the open session. Whether the
//! open session itself is stored depends on
//! `TrackerOptions::persist_active_session`.

use crate::core::clock::Clock;
use crate::core::duration::duration;
use crate::core::notify::{DEFAULT_DISPLAY_SECS, NotificationArea};
use crate::core::render::{ListRow, render};
use crate::errors::AppResult;
use crate::models::notice::NoticeKind;
use crate::models::tracker_state::{Phase, TrackerState};
use crate::models::work_record::WorkRecord;
use crate::store::codec::{decode_instant, decode_records_or_default, encode_instant, encode_records};
use crate::store::{ACTIVE_START_KEY, KeyValueStore, KvOp, MALFORMED_RECORDS_KEY, RECORDS_KEY};
use chrono::{DateTime, Local};

pub const BEGIN_MESSAGE: &str = "作業を開始しました！";
pub const BEGIN_LABEL_IDLE: &str = "開始";
pub const BEGIN_LABEL_ACTIVE: &str = "作業中...";

#[derive(Debug, Clone, Copy)]
pub struct TrackerOptions {
    pub persist_active_session: bool,
    pub notification_secs: u64,
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self {
            persist_active_session: true,
            notification_secs: DEFAULT_DISPLAY_SECS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BeginOutcome {
    Started(DateTime<Local>),
    /// A session was already open; carries its unchanged start.
    AlreadyActive(DateTime<Local>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndOutcome {
    Stopped {
        record: WorkRecord,
        /// The clock reads earlier than the session start; duration clamped to zero.
        clock_skew: bool,
    },
    NotActive,
}

/// Enabled state of the two triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub begin_enabled: bool,
    pub end_enabled: bool,
    pub begin_label: &'static str,
}

pub struct SessionTracker<S: KeyValueStore, C: Clock> {
    store: S,
    clock: C,
    state: TrackerState,
    options: TrackerOptions,
    notifications: NotificationArea,
    load_warnings: Vec<String>,
}

impl<S: KeyValueStore, C: Clock> SessionTracker<S, C> {
    /// Re-hydrate the tracker from the store.
    ///
    /// A missing or unreadable record list loads as empty. The unreadable
    /// payload is copied to `workRecords.malformed` first so the next
    /// `end()` cannot destroy it.
    pub fn load(mut store: S, clock: C, options: TrackerOptions) -> AppResult<Self> {
        let notifications = NotificationArea::new(options.notification_secs)?;
        let mut load_warnings = Vec::new();

        let raw = store.get(RECORDS_KEY)?;
        let loaded = decode_records_or_default(raw.as_deref());

        if let Some((payload, reason)) = &loaded.rejected {
            store.set(MALFORMED_RECORDS_KEY, payload)?;
            load_warnings.push(format!(
                "Stored work records could not be read ({reason}); starting from an empty list. \
                 The original value was kept under '{MALFORMED_RECORDS_KEY}'."
            ));
        }

        let active_start = if options.persist_active_session {
            match store.get(ACTIVE_START_KEY)? {
                Some(raw) => match decode_instant(&raw) {
                    Ok(ts) => Some(ts),
                    Err(e) => {
                        store.remove(ACTIVE_START_KEY)?;
                        load_warnings.push(format!("Discarded unreadable open session: {e}"));
                        None
                    }
                },
                None => None,
            }
        } else {
            None
        };

        Ok(Self {
            store,
            clock,
            state: TrackerState::new(loaded.records, active_start),
            notifications,
            options,
            load_warnings,
        })
    }

    /// Open a session. No-op when one is already in progress.
    pub fn begin(&mut self) -> AppResult<BeginOutcome> {
        if let Some(start) = self.state.active_start {
            return Ok(BeginOutcome::AlreadyActive(start));
        }

        let now = self.clock.now();

        if self.options.persist_active_session {
            self.store.set(ACTIVE_START_KEY, &encode_instant(&now))?;
        }
        self.state.active_start = Some(now);

        self.notify(BEGIN_MESSAGE, NoticeKind::Success);
        Ok(BeginOutcome::Started(now))
    }

    /// Close the open session and append its record. No-op when idle.
    pub fn end(&mut self) -> AppResult<EndOutcome> {
        let Some(start) = self.state.active_start else {
            return Ok(EndOutcome::NotActive);
        };

        let now = self.clock.now();
        let record = WorkRecord::from_span(start, now);

        let mut records = self.state.records.clone();
        records.push(record.clone());
        let encoded = encode_records(&records)?;

        // Closing the session goes first: a store that fails half-way must
        // not leave a saved record behind a session that still looks open.
        let mut ops = Vec::with_capacity(2);
        if self.options.persist_active_session {
            ops.push(KvOp::Remove(ACTIVE_START_KEY));
        }
        ops.push(KvOp::Set(RECORDS_KEY, &encoded));
        self.store.apply(&ops)?;

        self.state.records = records;
        self.state.active_start = None;

        self.notify(
            format!("作業を停止しました！（作業時間: {}）", record.duration),
            NoticeKind::Success,
        );

        Ok(EndOutcome::Stopped {
            record,
            clock_skew: now < start,
        })
    }

    pub fn notify(&mut self, message: impl Into<String>, kind: NoticeKind) {
        let now = self.clock.now();
        self.notifications.show(message, kind, now);
    }

    pub fn render(&self) -> Vec<ListRow<'_>> {
        render(&self.state.records)
    }

    pub fn controls(&self) -> Controls {
        match self.state.phase() {
            Phase::Idle => Controls {
                begin_enabled: true,
                end_enabled: false,
                begin_label: BEGIN_LABEL_IDLE,
            },
            Phase::Active => Controls {
                begin_enabled: false,
                end_enabled: true,
                begin_label: BEGIN_LABEL_ACTIVE,
            },
        }
    }

    /// Duration of the open session so far.
    pub fn elapsed(&self) -> Option<String> {
        self.state
            .active_start
            .map(|start| duration(start, self.clock.now()))
    }

    pub fn now(&self) -> DateTime<Local> {
        self.clock.now()
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn records(&self) -> &[WorkRecord] {
        &self.state.records
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn options(&self) -> &TrackerOptions {
        &self.options
    }

    pub fn notifications(&self) -> &NotificationArea {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationArea {
        &mut self.notifications
    }

    /// Problems recovered from while loading.
    pub fn load_warnings(&self) -> &[String] {
        &self.load_warnings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
