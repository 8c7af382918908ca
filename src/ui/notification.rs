//! Non-blocking user notifications ("weak" toasts)

use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Maximum number of notifications kept before the oldest are dropped
const MAX_PENDING: usize = 32;

/// Notification collaborator
///
/// Fire-and-forget: callers never wait on or inspect the result.
pub trait Notifier: Send + Sync {
    /// Show a warning toast
    fn weak_error(&self, message: &str);

    /// Show an informational toast
    fn weak_info(&self, message: &str);
}

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// Informational
    Info,
    /// Warning about a failed action
    Error,
}

/// A notification waiting to be displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Severity
    pub level: NotificationLevel,
    /// Text shown to the user
    pub message: String,
    /// When the notification was raised
    pub created_at: DateTime<Utc>,
}

/// Notification queue polled by the view layer
#[derive(Debug, Default)]
pub struct NotificationCenter {
    pending: Mutex<VecDeque<Notification>>,
}

impl NotificationCenter {
    /// Create an empty center
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every pending notification, oldest first
    pub fn drain(&self) -> Vec<Notification> {
        self.lock().drain(..).collect()
    }

    /// Most recent pending notification
    pub fn latest(&self) -> Option<Notification> {
        self.lock().back().cloned()
    }

    /// Number of pending notifications
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing is pending
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn push(&self, level: NotificationLevel, message: &str) {
        let mut pending = self.lock();
        if pending.len() == MAX_PENDING {
            pending.pop_front();
        }
        pending.push_back(Notification {
            level,
            message: message.to_string(),
            created_at: Utc::now(),
        });
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<Notification>> {
        self.pending.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Notifier for NotificationCenter {
    fn weak_error(&self, message: &str) {
        tracing::warn!("Notification: {}", message);
        self.push(NotificationLevel::Error, message);
    }

    fn weak_info(&self, message: &str) {
        tracing::info!("Notification: {}", message);
        self.push(NotificationLevel::Info, message);
    }
}
