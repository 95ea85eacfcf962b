//! Active task collection store.
//!
//! # Responsibility
//! - Own reads and writes of the `tasks` collection.
//! - Keep insertion order: new tasks append, nothing re-sorts.
//!
//! # Invariants
//! - Removal is only performed through `take`, so the caller receives the
//!   record and ownership transfers instead of copying.

use crate::model::task::{Task, TaskId, TaskStatus};
use crate::store::local_storage::LocalStorage;
use crate::store::{load_collection, save_collection, StoreResult, TASKS_KEY};

/// Store over the `tasks` collection.
pub struct TaskStore<'s, S: LocalStorage> {
    storage: &'s S,
}

impl<'s, S: LocalStorage> TaskStore<'s, S> {
    pub fn new(storage: &'s S) -> Self {
        Self { storage }
    }

    /// Loads the collection, or `None` when it has never been written
    /// (first-run state, also covers unparseable values).
    pub fn load_existing(&self) -> StoreResult<Option<Vec<Task>>> {
        load_collection(self.storage, TASKS_KEY)
    }

    /// Loads the collection, falling back to empty on first run.
    pub fn load(&self) -> StoreResult<Vec<Task>> {
        Ok(self.load_existing()?.unwrap_or_default())
    }

    /// Overwrites the whole collection.
    pub fn save(&self, tasks: &[Task]) -> StoreResult<()> {
        save_collection(self.storage, TASKS_KEY, tasks)
    }

    /// Appends one task and persists.
    pub fn insert(&self, task: Task) -> StoreResult<()> {
        let mut tasks = self.load()?;
        tasks.push(task);
        self.save(&tasks)
    }

    /// Removes and returns the task with `id`, or `None` when absent.
    /// The collection is only rewritten on a hit.
    pub fn take(&self, id: TaskId) -> StoreResult<Option<Task>> {
        let mut tasks = self.load()?;
        let Some(position) = tasks.iter().position(|task| task.id == id) else {
            return Ok(None);
        };
        let task = tasks.remove(position);
        self.save(&tasks)?;
        Ok(Some(task))
    }

    /// Flips the status of the task with `id` in place.
    ///
    /// Returns whether a task was found; a miss leaves storage untouched.
    pub fn set_status(&self, id: TaskId, status: TaskStatus) -> StoreResult<bool> {
        let mut tasks = self.load()?;
        let Some(task) = tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(false);
        };
        task.status = status;
        self.save(&tasks)?;
        Ok(true)
    }
}
