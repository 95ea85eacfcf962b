//! Notification domain model.
//!
//! Notifications have a lifecycle independent of tasks: seeded with demo
//! data on first load, flipped unread -> read one way, and removed only by
//! clear-all.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a notification.
pub type NotificationId = Uuid;

/// A user-facing notice shown in the notification panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    pub message: String,
    pub read: bool,
    /// Creation time in epoch milliseconds.
    pub created_at: i64,
}

impl Notification {
    /// Creates an unread notification with a generated stable id.
    pub fn new(title: impl Into<String>, message: impl Into<String>, created_at: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            message: message.into(),
            read: false,
            created_at,
        }
    }
}
