mod common;
use common::{StepClock, local};

use rworklog::core::duration::{duration, elapsed_minutes, format_minutes};
use rworklog::core::render::ListRow;
use rworklog::core::tracker::{BeginOutcome, EndOutcome, SessionTracker, TrackerOptions};
use rworklog::errors::{AppError, AppResult};
use rworklog::models::notice::NoticeKind;
use rworklog::models::tracker_state::Phase;
use rworklog::models::work_record::WorkRecord;
use rworklog::store::codec::encode_records;
use rworklog::store::{
    ACTIVE_START_KEY, KeyValueStore, MALFORMED_RECORDS_KEY, MemoryStore, RECORDS_KEY,
};

/// Memory store whose next `remove` fails.
#[derive(Default)]
struct FailingRemoveStore {
    inner: MemoryStore,
    fail_next_remove: bool,
}

impl KeyValueStore for FailingRemoveStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        if std::mem::take(&mut self.fail_next_remove) {
            return Err(AppError::Io(std::io::Error::other("disk full")));
        }
        self.inner.remove(key)
    }
}

fn record(date: &str, start: &str, end: &str, dur: &str) -> WorkRecord {
    WorkRecord {
        date: date.into(),
        start_time: start.into(),
        end_time: end.into(),
        duration: dur.into(),
    }
}

#[test]
fn test_duration_formats() {
    let start = local(2025, 10, 16, 9, 0, 0);

    assert_eq!(duration(start, local(2025, 10, 16, 10, 30, 0)), "1時間30分");
    assert_eq!(duration(start, local(2025, 10, 16, 9, 45, 0)), "45分");
    assert_eq!(duration(start, start), "0分");
    assert_eq!(duration(start, local(2025, 10, 16, 11, 0, 0)), "2時間0分");
    assert_eq!(duration(start, local(2025, 10, 16, 9, 59, 59)), "59分");
}

#[test]
fn test_elapsed_minutes_floors() {
    let start = local(2025, 10, 16, 9, 0, 0);

    assert_eq!(elapsed_minutes(start, local(2025, 10, 16, 9, 1, 59)), 1);
    assert_eq!(elapsed_minutes(start, local(2025, 10, 16, 8, 59, 30)), -1);
    assert_eq!(format_minutes(-1), "0分");
}

#[test]
fn test_begin_then_end_scenario() {
    let clock = StepClock::at(local(2025, 10, 16, 9, 0, 0));
    let mut tracker =
        SessionTracker::load(MemoryStore::new(), &clock, TrackerOptions::default()).unwrap();

    assert_eq!(tracker.phase(), Phase::Idle);
    assert!(matches!(tracker.begin().unwrap(), BeginOutcome::Started(_)));
    assert_eq!(tracker.phase(), Phase::Active);

    clock.set(local(2025, 10, 16, 10, 15, 0));
    let outcome = tracker.end().unwrap();

    let expected = record("2025/10/16", "09:00", "10:15", "1時間15分");
    assert_eq!(
        outcome,
        EndOutcome::Stopped {
            record: expected.clone(),
            clock_skew: false
        }
    );
    assert_eq!(tracker.records().last(), Some(&expected));
    assert_eq!(tracker.phase(), Phase::Idle);
    assert!(tracker.state().active_start.is_none());
}

#[test]
fn test_second_begin_is_noop() {
    let first = local(2025, 10, 16, 9, 0, 0);
    let clock = StepClock::at(first);
    let mut tracker =
        SessionTracker::load(MemoryStore::new(), &clock, TrackerOptions::default()).unwrap();

    tracker.begin().unwrap();
    clock.set(local(2025, 10, 16, 9, 30, 0));

    assert_eq!(tracker.begin().unwrap(), BeginOutcome::AlreadyActive(first));
    assert_eq!(tracker.state().active_start, Some(first));
}

#[test]
fn test_end_when_idle_is_noop() {
    let clock = StepClock::at(local(2025, 10, 16, 9, 0, 0));
    let mut store = MemoryStore::new();
    let mut tracker =
        SessionTracker::load(&mut store, &clock, TrackerOptions::default()).unwrap();

    assert_eq!(tracker.end().unwrap(), EndOutcome::NotActive);
    assert!(tracker.records().is_empty());
    assert!(tracker.notifications().latest().is_none());
    drop(tracker);

    assert!(store.is_empty());
}

#[test]
fn test_one_record_per_matched_pair() {
    let clock = StepClock::at(local(2025, 10, 16, 8, 0, 0));
    let mut tracker =
        SessionTracker::load(MemoryStore::new(), &clock, TrackerOptions::default()).unwrap();

    // stop, start, start, stop, stop, start, stop
    tracker.end().unwrap();
    tracker.begin().unwrap();
    tracker.begin().unwrap();
    clock.set(local(2025, 10, 16, 9, 0, 0));
    tracker.end().unwrap();
    tracker.end().unwrap();
    tracker.begin().unwrap();
    clock.set(local(2025, 10, 16, 9, 20, 0));
    tracker.end().unwrap();

    let records = tracker.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0], record("2025/10/16", "08:00", "09:00", "1時間0分"));
    assert_eq!(records[1], record("2025/10/16", "09:00", "09:20", "20分"));
}

#[test]
fn test_end_persists_and_reload_round_trips() {
    let clock = StepClock::at(local(2025, 10, 16, 9, 0, 0));
    let mut store = MemoryStore::new();

    {
        let mut tracker =
            SessionTracker::load(&mut store, &clock, TrackerOptions::default()).unwrap();
        tracker.begin().unwrap();
        clock.set(local(2025, 10, 16, 12, 5, 0));
        tracker.end().unwrap();
        tracker.begin().unwrap();
        clock.set(local(2025, 10, 16, 13, 0, 0));
        tracker.end().unwrap();
    }

    let saved = store.get(RECORDS_KEY).unwrap().unwrap();
    assert!(saved.contains("\"startTime\":\"09:00\""));
    assert!(store.get(ACTIVE_START_KEY).unwrap().is_none());

    let reloaded = SessionTracker::load(&mut store, &clock, TrackerOptions::default()).unwrap();
    assert_eq!(
        reloaded.records(),
        &[
            record("2025/10/16", "09:00", "12:05", "3時間5分"),
            record("2025/10/16", "12:05", "13:00", "55分"),
        ]
    );
    assert!(reloaded.load_warnings().is_empty());
}

#[test]
fn test_begin_does_not_persist_records() {
    let clock = StepClock::at(local(2025, 10, 16, 9, 0, 0));
    let mut store = MemoryStore::new();

    let mut tracker = SessionTracker::load(&mut store, &clock, TrackerOptions::default()).unwrap();
    tracker.begin().unwrap();
    drop(tracker);

    assert!(store.get(RECORDS_KEY).unwrap().is_none());
    assert!(store.get(ACTIVE_START_KEY).unwrap().is_some());
}

#[test]
fn test_active_session_survives_reload_when_persisted() {
    let start = local(2025, 10, 16, 9, 0, 0);
    let clock = StepClock::at(start);
    let mut store = MemoryStore::new();

    SessionTracker::load(&mut store, &clock, TrackerOptions::default())
        .unwrap()
        .begin()
        .unwrap();

    clock.set(local(2025, 10, 16, 9, 40, 0));
    let mut tracker = SessionTracker::load(&mut store, &clock, TrackerOptions::default()).unwrap();
    assert_eq!(tracker.state().active_start, Some(start));
    assert_eq!(tracker.elapsed().as_deref(), Some("40分"));

    tracker.end().unwrap();
    assert_eq!(tracker.records().len(), 1);
}

#[test]
fn test_active_session_lost_on_reload_when_not_persisted() {
    let options = TrackerOptions {
        persist_active_session: false,
        ..TrackerOptions::default()
    };
    let clock = StepClock::at(local(2025, 10, 16, 9, 0, 0));
    let mut store = MemoryStore::new();

    SessionTracker::load(&mut store, &clock, options)
        .unwrap()
        .begin()
        .unwrap();
    assert!(store.is_empty());

    let mut tracker = SessionTracker::load(&mut store, &clock, options).unwrap();
    assert_eq!(tracker.phase(), Phase::Idle);
    assert_eq!(tracker.end().unwrap(), EndOutcome::NotActive);
}

#[test]
fn test_malformed_records_load_as_empty_and_are_preserved() {
    let clock = StepClock::at(local(2025, 10, 16, 9, 0, 0));
    let mut store = MemoryStore::new();
    store.set(RECORDS_KEY, "{not json").unwrap();

    let mut tracker = SessionTracker::load(&mut store, &clock, TrackerOptions::default()).unwrap();
    assert!(tracker.records().is_empty());
    assert_eq!(tracker.load_warnings().len(), 1);

    tracker.begin().unwrap();
    clock.set(local(2025, 10, 16, 9, 10, 0));
    tracker.end().unwrap();
    drop(tracker);

    assert_eq!(
        store.get(MALFORMED_RECORDS_KEY).unwrap().as_deref(),
        Some("{not json")
    );
    let reloaded = SessionTracker::load(&mut store, &clock, TrackerOptions::default()).unwrap();
    assert_eq!(reloaded.records().len(), 1);
}

#[test]
fn test_unreadable_active_start_is_discarded() {
    let clock = StepClock::at(local(2025, 10, 16, 9, 0, 0));
    let mut store = MemoryStore::new();
    store.set(ACTIVE_START_KEY, "yesterday-ish").unwrap();

    let tracker = SessionTracker::load(&mut store, &clock, TrackerOptions::default()).unwrap();
    assert_eq!(tracker.phase(), Phase::Idle);
    assert_eq!(tracker.load_warnings().len(), 1);
    drop(tracker);

    assert!(store.get(ACTIVE_START_KEY).unwrap().is_none());
}

#[test]
fn test_clock_moving_backwards_clamps_duration() {
    let clock = StepClock::at(local(2025, 10, 16, 10, 0, 0));
    let mut tracker =
        SessionTracker::load(MemoryStore::new(), &clock, TrackerOptions::default()).unwrap();

    tracker.begin().unwrap();
    clock.set(local(2025, 10, 16, 9, 30, 0));

    match tracker.end().unwrap() {
        EndOutcome::Stopped { record, clock_skew } => {
            assert!(clock_skew);
            assert_eq!(record, record_of("10:00", "09:30", "0分"));
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}

fn record_of(start: &str, end: &str, dur: &str) -> WorkRecord {
    record("2025/10/16", start, end, dur)
}

#[test]
fn test_session_across_midnight_uses_start_date() {
    let clock = StepClock::at(local(2025, 10, 16, 23, 30, 0));
    let mut tracker =
        SessionTracker::load(MemoryStore::new(), &clock, TrackerOptions::default()).unwrap();

    tracker.begin().unwrap();
    clock.set(local(2025, 10, 17, 1, 0, 0));
    tracker.end().unwrap();

    assert_eq!(
        tracker.records()[0],
        record("2025/10/16", "23:30", "01:00", "1時間30分")
    );
}

#[test]
fn test_render_placeholder_and_order() {
    let clock = StepClock::at(local(2025, 10, 16, 9, 0, 0));
    let mut store = MemoryStore::new();

    let tracker = SessionTracker::load(&mut store, &clock, TrackerOptions::default()).unwrap();
    assert_eq!(tracker.render(), vec![ListRow::Placeholder]);
    drop(tracker);

    let records = vec![
        record("2025/10/14", "09:00", "10:00", "1時間0分"),
        record("2025/10/15", "09:00", "09:30", "30分"),
        record("2025/10/16", "13:00", "13:05", "5分"),
    ];
    store
        .set(RECORDS_KEY, &encode_records(&records).unwrap())
        .unwrap();

    let tracker = SessionTracker::load(&mut store, &clock, TrackerOptions::default()).unwrap();
    let rows = tracker.render();
    assert_eq!(
        rows,
        vec![
            ListRow::Record(&records[2]),
            ListRow::Record(&records[1]),
            ListRow::Record(&records[0]),
        ]
    );
    // rendering never touches the state
    assert_eq!(tracker.records(), records.as_slice());
}

#[test]
fn test_controls_follow_state() {
    let clock = StepClock::at(local(2025, 10, 16, 9, 0, 0));
    let mut tracker =
        SessionTracker::load(MemoryStore::new(), &clock, TrackerOptions::default()).unwrap();

    let idle = tracker.controls();
    assert!(idle.begin_enabled);
    assert!(!idle.end_enabled);
    assert_eq!(idle.begin_label, "開始");

    tracker.begin().unwrap();
    let active = tracker.controls();
    assert!(!active.begin_enabled);
    assert!(active.end_enabled);
    assert_eq!(active.begin_label, "作業中...");
}

#[test]
fn test_notifications_on_begin_and_end() {
    let clock = StepClock::at(local(2025, 10, 16, 9, 0, 0));
    let mut tracker =
        SessionTracker::load(MemoryStore::new(), &clock, TrackerOptions::default()).unwrap();

    tracker.begin().unwrap();
    let n = tracker.notifications().latest().unwrap();
    assert_eq!(n.message, "作業を開始しました！");
    assert_eq!(n.kind, NoticeKind::Success);

    clock.set(local(2025, 10, 16, 9, 45, 0));
    tracker.end().unwrap();
    let n = tracker.notifications().latest().unwrap();
    assert_eq!(n.message, "作業を停止しました！（作業時間: 45分）");
    assert_eq!(n.shown_at, local(2025, 10, 16, 9, 45, 0));
}

#[test]
fn test_failed_end_keeps_session_open_and_retry_saves_once() {
    let clock = StepClock::at(local(2025, 10, 16, 9, 0, 0));
    let mut store = FailingRemoveStore {
        fail_next_remove: true,
        ..FailingRemoveStore::default()
    };

    {
        let mut tracker =
            SessionTracker::load(&mut store, &clock, TrackerOptions::default()).unwrap();
        tracker.begin().unwrap();

        clock.set(local(2025, 10, 16, 10, 0, 0));
        assert!(tracker.end().is_err());
        assert_eq!(tracker.phase(), Phase::Active);
        assert!(tracker.records().is_empty());
    }

    assert!(store.get(RECORDS_KEY).unwrap().is_none());
    assert!(store.get(ACTIVE_START_KEY).unwrap().is_some());

    // next invocation retries the stop
    let mut tracker = SessionTracker::load(&mut store, &clock, TrackerOptions::default()).unwrap();
    assert_eq!(tracker.phase(), Phase::Active);
    tracker.end().unwrap();
    drop(tracker);

    let reloaded = SessionTracker::load(&mut store, &clock, TrackerOptions::default()).unwrap();
    assert_eq!(
        reloaded.records(),
        &[record("2025/10/16", "09:00", "10:00", "1時間0分")]
    );
    assert_eq!(reloaded.phase(), Phase::Idle);
}

#[test]
fn test_oversized_notification_window_is_rejected_on_load() {
    let clock = StepClock::at(local(2025, 10, 16, 9, 0, 0));
    let options = TrackerOptions {
        notification_secs: u64::MAX,
        ..TrackerOptions::default()
    };

    let result = SessionTracker::load(MemoryStore::new(), &clock, options);
    assert!(matches!(result, Err(AppError::Config(_))));
}
