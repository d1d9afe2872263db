//! Transient user notifications.
//!
//! Components report user-visible failures through a [`NotificationSink`].
//! Sending is fire-and-forget; a sink never reports back to the caller.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Title used for every error notification.
pub const ERROR_TITLE: &str = "Error";

/// Visual style of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationVariant {
    /// Informational message.
    Info,
    /// Operation completed.
    Success,
    /// Something may need attention.
    Warning,
    /// Operation failed.
    Error,
}

/// A transient alert shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Short heading.
    pub title: String,
    /// The text shown to the user.
    pub message: String,
    /// Visual style.
    pub variant: NotificationVariant,
}

impl Notification {
    /// Creates an error notification with the standard title.
    ///
    /// # Example
    ///
    /// ```
    /// use salary_breakdown::notify::{Notification, NotificationVariant};
    ///
    /// let n = Notification::error("Please enter valid salary with number format");
    /// assert_eq!(n.title, "Error");
    /// assert_eq!(n.variant, NotificationVariant::Error);
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: ERROR_TITLE.to_string(),
            message: message.into(),
            variant: NotificationVariant::Error,
        }
    }
}

/// Destination for user notifications.
pub trait NotificationSink: Send + Sync {
    /// Displays a notification.
    fn notify(&self, notification: Notification);
}

/// Sink that writes notifications to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl NotificationSink for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.variant {
            NotificationVariant::Error | NotificationVariant::Warning => warn!(
                title = %notification.title,
                variant = ?notification.variant,
                "{}",
                notification.message
            ),
            NotificationVariant::Info | NotificationVariant::Success => info!(
                title = %notification.title,
                variant = ?notification.variant,
                "{}",
                notification.message
            ),
        }
    }
}

/// A notification together with the time it was raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoggedNotification {
    /// When the notification was raised.
    pub raised_at: DateTime<Utc>,
    /// The notification itself.
    #[serde(flatten)]
    pub notification: Notification,
}

/// Sink that keeps the most recent notifications in memory.
///
/// Oldest entries are discarded once `capacity` is reached.
#[derive(Debug)]
pub struct NotificationLog {
    capacity: usize,
    entries: Mutex<VecDeque<LoggedNotification>>,
}

impl NotificationLog {
    /// Default number of notifications retained.
    pub const DEFAULT_CAPACITY: usize = 50;

    /// Creates a log retaining at most `capacity` notifications (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: Mutex::new(VecDeque::new()),
        }
    }

    /// Returns the retained notifications, oldest first.
    pub fn entries(&self) -> Vec<LoggedNotification> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    /// Returns just the messages, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .map(|entry| entry.notification.message)
            .collect()
    }
}

impl Default for NotificationLog {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }
}

impl NotificationSink for NotificationLog {
    fn notify(&self, notification: Notification) {
        TracingNotifier.notify(notification.clone());

        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(LoggedNotification {
            raised_at: Utc::now(),
            notification,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_records_in_order() {
        let log = NotificationLog::default();
        log.notify(Notification::error("first"));
        log.notify(Notification::error("second"));

        assert_eq!(log.messages(), vec!["first", "second"]);
    }

    #[test]
    fn test_log_drops_oldest_past_capacity() {
        let log = NotificationLog::with_capacity(2);
        log.notify(Notification::error("a"));
        log.notify(Notification::error("b"));
        log.notify(Notification::error("c"));

        assert_eq!(log.messages(), vec!["b", "c"]);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let log = NotificationLog::with_capacity(0);
        log.notify(Notification::error("only"));
        assert_eq!(log.messages(), vec!["only"]);
    }

    #[test]
    fn test_logged_notification_serializes_flat() {
        let log = NotificationLog::default();
        log.notify(Notification::error("boom"));

        let json = serde_json::to_value(&log.entries()[0]).unwrap();
        assert_eq!(json["title"], "Error");
        assert_eq!(json["message"], "boom");
        assert_eq!(json["variant"], "error");
        assert!(json["raised_at"].is_string());
    }
}
