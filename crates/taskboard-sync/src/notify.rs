/*
[INPUT]:  Outcomes of synchronizer and workspace operations
[OUTPUT]: User-facing notifications via tracing or an mpsc channel
[POS]:    Notification layer - the toast surface of the presentation layer
[UPDATE]: When adding notification sinks or message texts
*/

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// Notification texts shown to the user.
pub mod messages {
    pub const BOARDS_LOAD_FAILED: &str = "Failed to load boards";
    pub const BOARD_CREATED: &str = "Board created successfully";
    pub const BOARD_CREATE_FAILED: &str = "Failed to create board";
    pub const BOARD_UPDATED: &str = "Board updated successfully";
    pub const BOARD_UPDATE_FAILED: &str = "Failed to update board";
    pub const BOARD_DELETED: &str = "Board deleted successfully";
    pub const BOARD_DELETE_FAILED: &str = "Failed to delete board";

    pub const TASKS_LOAD_FAILED: &str = "Failed to load tasks";
    pub const TASK_CREATED: &str = "Task created successfully";
    pub const TASK_CREATE_FAILED: &str = "Failed to create task";
    pub const TASK_UPDATED: &str = "Task updated successfully";
    pub const TASK_UPDATE_FAILED: &str = "Failed to update task";
    pub const TASK_STATUS_UPDATE_FAILED: &str = "Failed to update task status";
    pub const TASK_DELETED: &str = "Task deleted successfully";
    pub const TASK_DELETE_FAILED: &str = "Failed to delete task";

    pub const SELECT_BOARD_FIRST: &str = "Please select a board first";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub at: DateTime<Utc>,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            at: Utc::now(),
        }
    }
}

/// Sink for notification-worthy outcomes.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);

    fn success(&self, message: &str) {
        self.notify(Notification::new(NotificationLevel::Success, message));
    }

    fn warning(&self, message: &str) {
        self.notify(Notification::new(NotificationLevel::Warning, message));
    }

    fn error(&self, message: &str) {
        self.notify(Notification::new(NotificationLevel::Error, message));
    }
}

/// Writes notifications to the tracing subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success => info!(text = %notification.message, "notification"),
            NotificationLevel::Warning => warn!(text = %notification.message, "notification"),
            NotificationLevel::Error => error!(text = %notification.message, "notification"),
        }
    }
}

/// Forwards notifications into an unbounded channel for a renderer to drain.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Notification>,
}

impl ChannelNotifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notification: Notification) {
        if self.tx.send(notification).is_err() {
            warn!("notification receiver dropped");
        }
    }
}
