//! Single-slot transient notification area.
//!
//! At most one notification is shown at a time. Showing a new one removes
//! the previous one. A notification stays `Visible` for the display window
//! (3 seconds by default), then spends `EXIT_TRANSITION` in `Leaving` before
//! it is `Dismissed`.

use crate::errors::{AppError, AppResult};
use crate::models::notice::NoticeKind;
use chrono::{DateTime, Duration, Local};

pub const DEFAULT_DISPLAY_SECS: u64 = 3;
/// Longest accepted display window (one day).
pub const MAX_DISPLAY_SECS: u64 = 86_400;
pub const EXIT_TRANSITION_MS: i64 = 300;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NoticeKind,
    pub shown_at: DateTime<Local>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticePhase {
    Visible,
    Leaving,
    Dismissed,
}

#[derive(Debug, Clone)]
pub struct NotificationArea {
    current: Option<Notification>,
    display_for: Duration,
    exit_for: Duration,
}

impl Default for NotificationArea {
    fn default() -> Self {
        Self::with_display(Duration::seconds(DEFAULT_DISPLAY_SECS as i64))
    }
}

impl NotificationArea {
    /// Fails when `display_secs` exceeds `MAX_DISPLAY_SECS`.
    pub fn new(display_secs: u64) -> AppResult<Self> {
        let display_for = display_window(display_secs)?;
        Ok(Self::with_display(display_for))
    }

    fn with_display(display_for: Duration) -> Self {
        Self {
            current: None,
            display_for,
            exit_for: Duration::milliseconds(EXIT_TRANSITION_MS),
        }
    }

    /// Replace whatever is showing with a new notification.
    pub fn show(&mut self, message: impl Into<String>, kind: NoticeKind, at: DateTime<Local>) {
        self.current = Some(Notification {
            message: message.into(),
            kind,
            shown_at: at,
        });
    }

    /// Most recently shown notification, whatever its phase.
    pub fn latest(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn phase(&self, now: DateTime<Local>) -> NoticePhase {
        let Some(n) = &self.current else {
            return NoticePhase::Dismissed;
        };

        let age = now - n.shown_at;
        if age < self.display_for {
            NoticePhase::Visible
        } else if age < self.display_for + self.exit_for {
            NoticePhase::Leaving
        } else {
            NoticePhase::Dismissed
        }
    }

    /// Notification still on screen (visible or leaving) at `now`.
    pub fn current(&self, now: DateTime<Local>) -> Option<&Notification> {
        match self.phase(now) {
            NoticePhase::Dismissed => None,
            _ => self.current.as_ref(),
        }
    }

    /// Drop the notification once its exit transition is over.
    pub fn prune(&mut self, now: DateTime<Local>) {
        if self.phase(now) == NoticePhase::Dismissed {
            self.current = None;
        }
    }
}

/// Validated display window for `display_secs`.
pub fn display_window(display_secs: u64) -> AppResult<Duration> {
    if display_secs > MAX_DISPLAY_SECS {
        return Err(AppError::Config(format!(
            "notification_secs must be at most {MAX_DISPLAY_SECS}, got {display_secs}"
        )));
    }

    i64::try_from(display_secs)
        .ok()
        .and_then(Duration::try_seconds)
        .ok_or_else(|| AppError::Config(format!("notification_secs out of range: {display_secs}")))
}
