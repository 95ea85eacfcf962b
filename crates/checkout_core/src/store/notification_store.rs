//! Notification collection store.
//!
//! # Responsibility
//! - Own reads and writes of the `notifications` collection.
//!
//! # Invariants
//! - First-run state (never written) is distinct from an emptied
//!   collection: clear-all persists an empty array, so a later load does
//!   not count as first run.

use crate::model::notification::{Notification, NotificationId};
use crate::store::local_storage::LocalStorage;
use crate::store::{load_collection, save_collection, StoreResult, NOTIFICATIONS_KEY};

/// Store over the `notifications` collection.
pub struct NotificationStore<'s, S: LocalStorage> {
    storage: &'s S,
}

impl<'s, S: LocalStorage> NotificationStore<'s, S> {
    pub fn new(storage: &'s S) -> Self {
        Self { storage }
    }

    /// Loads the collection, or `None` when it has never been written.
    pub fn load_existing(&self) -> StoreResult<Option<Vec<Notification>>> {
        load_collection(self.storage, NOTIFICATIONS_KEY)
    }

    /// Overwrites the whole collection.
    pub fn save(&self, notifications: &[Notification]) -> StoreResult<()> {
        save_collection(self.storage, NOTIFICATIONS_KEY, notifications)
    }

    /// Sets the `read` flag of the notification with `id`.
    ///
    /// Returns whether the flag changed; marking an already-read entry (or
    /// a missing id) leaves storage untouched, which makes the operation
    /// idempotent.
    pub fn mark_read(&self, id: NotificationId) -> StoreResult<bool> {
        let mut notifications = self.load_existing()?.unwrap_or_default();
        let Some(notification) = notifications
            .iter_mut()
            .find(|notification| notification.id == id)
        else {
            return Ok(false);
        };
        if notification.read {
            return Ok(false);
        }
        notification.read = true;
        self.save(&notifications)?;
        Ok(true)
    }

    /// Empties the collection. Persists an empty array so the demo seed
    /// does not come back on the next load.
    pub fn clear(&self) -> StoreResult<()> {
        self.save(&[])
    }
}
