//src/notify.rs
use std::time::{Duration, Instant};

pub const WORKOUT_ADDED: &str = "Workout added to log";
pub const WORKOUT_DONE: &str = "Workout marked as done";
pub const WORKOUT_SKIPPED: &str = "Workout marked as skipped";
pub const WORKOUT_DELETED: &str = "Workout deleted";
pub const LOGIN_SUCCESS: &str = "Login successful";
pub const DELETE_PROMPT: &str = "Delete this workout from the training log?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Transient message shown after an action. A newer one replaces whatever is on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub shown_at: Instant,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Error)
    }

    fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            shown_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.shown_at) >= ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_after_ttl() {
        let note = Notification::success(WORKOUT_ADDED);
        let ttl = Duration::from_millis(2500);
        assert!(!note.is_expired(note.shown_at, ttl));
        assert!(!note.is_expired(note.shown_at + Duration::from_millis(2499), ttl));
        assert!(note.is_expired(note.shown_at + ttl, ttl));
        assert_eq!(note.kind, NotificationKind::Success);
    }

    #[test]
    fn error_kind() {
        let note = Notification::error(WORKOUT_SKIPPED);
        assert_eq!(note.kind, NotificationKind::Error);
        assert_eq!(note.message, "Workout marked as skipped");
    }
}
