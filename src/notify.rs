//! Outcome notifications
//!
//! Every mutation, refresh failure and export reports its outcome through a
//! `Notifier`. The titles are the fixed user-facing messages below.

use std::sync::Mutex;

use tracing::{error, info};

pub const TRANSACTION_ADDED: &str = "Transaction added";
pub const TRANSACTION_ADD_FAILED: &str = "Error adding transaction";
pub const TRANSACTION_DELETED: &str = "Transaction deleted";
pub const TRANSACTION_DELETE_FAILED: &str = "Error deleting transaction";
pub const FETCH_TRANSACTIONS_FAILED: &str = "Error fetching transactions";
pub const FETCH_CATEGORIES_FAILED: &str = "Error fetching categories";
pub const EXPORT_SUCCEEDED: &str = "Export successful";
pub const EXPORT_FAILED: &str = "Export failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

/// Sink for user-facing outcome messages
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NotificationKind, title: &str, message: &str);

    fn success(&self, title: &str, message: &str) {
        self.notify(NotificationKind::Success, title, message);
    }

    fn error(&self, title: &str, message: &str) {
        self.notify(NotificationKind::Error, title, message);
    }
}

/// Forwards notifications to tracing
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, kind: NotificationKind, title: &str, message: &str) {
        match kind {
            NotificationKind::Success => info!(title, message, "notification"),
            NotificationKind::Error => error!(title, message, "notification"),
        }
    }
}

/// Prints notifications for the CLI; errors go to stderr
#[derive(Debug, Default)]
pub struct TerminalNotifier {
    /// Suppress success messages
    pub quiet: bool,
}

impl Notifier for TerminalNotifier {
    fn notify(&self, kind: NotificationKind, title: &str, message: &str) {
        match kind {
            NotificationKind::Success if !self.quiet => println!("{}: {}", title, message),
            NotificationKind::Success => {}
            NotificationKind::Error => eprintln!("{}: {}", title, message),
        }
    }
}

/// Keeps every notification in memory
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .map(|n| n.clone())
            .unwrap_or_default()
    }

    pub fn titles(&self) -> Vec<String> {
        self.notifications()
            .into_iter()
            .map(|n| n.title)
            .collect()
    }

    pub fn last(&self) -> Option<Notification> {
        self.notifications().pop()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NotificationKind, title: &str, message: &str) {
        if let Ok(mut notifications) = self.notifications.lock() {
            notifications.push(Notification {
                kind,
                title: title.to_string(),
                message: message.to_string(),
            });
        }
    }
}
