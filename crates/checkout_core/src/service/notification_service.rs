//! Notification use-case service.
//!
//! # Responsibility
//! - Provide list/mark-read/clear-all over the notification collection.
//! - Seed the demo notices on first load.
//!
//! # Invariants
//! - The unread count is recomputed on every read, never cached.
//! - Clearing persists an empty array; the seed never comes back.

use crate::model::epoch_ms_now;
use crate::model::notification::{Notification, NotificationId};
use crate::store::local_storage::LocalStorage;
use crate::store::notification_store::NotificationStore;
use crate::store::StoreResult;
use log::{debug, info};

const DAY_MS: i64 = 86_400_000;

/// Notification facade over the notification store.
pub struct NotificationService<'s, S: LocalStorage> {
    store: NotificationStore<'s, S>,
}

impl<'s, S: LocalStorage> NotificationService<'s, S> {
    /// Creates a service over the provided storage backend.
    pub fn new(storage: &'s S) -> Self {
        Self {
            store: NotificationStore::new(storage),
        }
    }

    /// Lists notifications in insertion order, seeding the demo notices
    /// when the collection has never been written.
    pub fn list(&self) -> StoreResult<Vec<Notification>> {
        if let Some(notifications) = self.store.load_existing()? {
            return Ok(notifications);
        }

        let seeded = demo_notifications(epoch_ms_now());
        self.store.save(&seeded)?;

        info!(
            "event=demo_notifications_seeded module=service status=ok count={}",
            seeded.len()
        );
        Ok(seeded)
    }

    /// Marks one notification read. Silent no-op when missing, and
    /// idempotent when already read.
    pub fn mark_read(&self, id: NotificationId) -> StoreResult<()> {
        if !self.store.mark_read(id)? {
            debug!("event=notification_mark_read module=service status=miss id={id}");
        }
        Ok(())
    }

    /// Empties the collection.
    pub fn clear_all(&self) -> StoreResult<()> {
        self.store.clear()?;
        info!("event=notifications_cleared module=service status=ok");
        Ok(())
    }

    /// Count of unread notifications, recomputed from the collection.
    pub fn unread_count(&self) -> StoreResult<usize> {
        let notifications = self.list()?;
        Ok(notifications
            .iter()
            .filter(|notification| !notification.read)
            .count())
    }
}

fn demo_notifications(now_ms: i64) -> Vec<Notification> {
    let mut reminder = Notification::new(
        "Reminder",
        "Task 'Complete project proposal' is due soon",
        now_ms - 2 * DAY_MS,
    );
    reminder.read = true;

    vec![
        Notification::new(
            "Task completed",
            "You've completed 'Review team updates'",
            now_ms,
        ),
        Notification::new(
            "Welcome to Checkout",
            "Get started by creating your first task",
            now_ms - DAY_MS,
        ),
        reminder,
    ]
}
