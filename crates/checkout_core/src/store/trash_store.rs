//! Trash collection store for soft-deleted tasks.
//!
//! # Responsibility
//! - Own reads and writes of the `deletedTasks` collection.
//!
//! # Invariants
//! - Entries only enter through `insert` (soft delete) and only leave
//!   through `take` (restore), `remove` (purge) or `clear` (empty trash).

use crate::model::task::{DeletedTask, TaskId};
use crate::store::local_storage::LocalStorage;
use crate::store::{load_collection, save_collection, StoreResult, DELETED_TASKS_KEY};

/// Store over the `deletedTasks` collection.
pub struct TrashStore<'s, S: LocalStorage> {
    storage: &'s S,
}

impl<'s, S: LocalStorage> TrashStore<'s, S> {
    pub fn new(storage: &'s S) -> Self {
        Self { storage }
    }

    /// Loads the collection, falling back to empty on first run.
    pub fn load(&self) -> StoreResult<Vec<DeletedTask>> {
        Ok(load_collection(self.storage, DELETED_TASKS_KEY)?.unwrap_or_default())
    }

    /// Overwrites the whole collection.
    pub fn save(&self, entries: &[DeletedTask]) -> StoreResult<()> {
        save_collection(self.storage, DELETED_TASKS_KEY, entries)
    }

    /// Appends one soft-deleted entry and persists.
    pub fn insert(&self, entry: DeletedTask) -> StoreResult<()> {
        let mut entries = self.load()?;
        entries.push(entry);
        self.save(&entries)
    }

    /// Removes and returns the entry with `id`, or `None` when absent.
    pub fn take(&self, id: TaskId) -> StoreResult<Option<DeletedTask>> {
        let mut entries = self.load()?;
        let Some(position) = entries.iter().position(|entry| entry.task.id == id) else {
            return Ok(None);
        };
        let entry = entries.remove(position);
        self.save(&entries)?;
        Ok(Some(entry))
    }

    /// Permanently removes the entry with `id`.
    ///
    /// Returns whether an entry was found; a miss leaves storage untouched.
    pub fn remove(&self, id: TaskId) -> StoreResult<bool> {
        Ok(self.take(id)?.is_some())
    }

    /// Empties the trash entirely, regardless of prior contents.
    pub fn clear(&self) -> StoreResult<()> {
        self.save(&[])
    }
}
