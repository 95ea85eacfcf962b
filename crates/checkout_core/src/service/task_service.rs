//! Task lifecycle use-case service.
//!
//! # Responsibility
//! - Provide create/status/list operations over the active collection.
//! - Own the active <-> trash ownership transfer (soft delete, restore)
//!   and the terminal purge operations.
//! - Derive dashboard completion statistics.
//!
//! # Invariants
//! - A task id exists in at most one of the two collections; transfer is
//!   move semantics, never a copy.
//! - Lists preserve insertion order; filtering never re-sorts.
//! - Not-found on mutation by id is a silent no-op.

use crate::model::task::{DeletedTask, Task, TaskColor, TaskId, TaskStatus};
use crate::model::{epoch_ms_now, ValidationError};
use crate::store::local_storage::LocalStorage;
use crate::store::task_store::TaskStore;
use crate::store::trash_store::TrashStore;
use crate::store::StoreResult;
use log::{debug, info};
use uuid::Uuid;

const DAY_MS: i64 = 86_400_000;

/// Request model for creating one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    /// Display title. Must be non-empty after trimming.
    pub title: String,
    /// Free text, may be empty.
    pub description: String,
    /// Optional due time in epoch milliseconds.
    pub due_date: Option<i64>,
    /// Explicit color; a uniformly random palette entry when `None`.
    pub color: Option<TaskColor>,
}

impl CreateTaskRequest {
    /// Creates a request with only the required fields set.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            due_date: None,
            color: None,
        }
    }
}

/// Display filter for task lists. Matches the tasks/trash page filtering:
/// optional status tab plus case-insensitive search over title and
/// description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskListQuery {
    pub status: Option<TaskStatus>,
    pub search: Option<String>,
}

/// Dashboard completion statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
    /// Rounded whole percent of completed tasks; 0 when there are none.
    pub completion_rate: u8,
}

/// Task lifecycle facade over the active and trash stores.
pub struct TaskService<'s, S: LocalStorage> {
    tasks: TaskStore<'s, S>,
    trash: TrashStore<'s, S>,
}

impl<'s, S: LocalStorage> TaskService<'s, S> {
    /// Creates a service over the provided storage backend.
    pub fn new(storage: &'s S) -> Self {
        Self {
            tasks: TaskStore::new(storage),
            trash: TrashStore::new(storage),
        }
    }

    /// Creates a new pending task.
    ///
    /// # Contract
    /// - Fresh stable id, `created_at = now`, `status = pending`.
    /// - Color defaults to a uniformly random palette entry.
    /// - Fails with a validation error when the title is blank.
    pub fn create_task(&self, request: CreateTaskRequest) -> StoreResult<Task> {
        if request.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }

        let task = Task {
            id: Uuid::new_v4(),
            title: request.title,
            description: request.description,
            status: TaskStatus::Pending,
            created_at: epoch_ms_now(),
            due_date: request.due_date,
            color: request.color.unwrap_or_else(TaskColor::random),
        };
        self.tasks.insert(task.clone())?;

        info!("event=task_create module=service status=ok id={}", task.id);
        Ok(task)
    }

    /// Flips a task's status in place. Silent no-op when `id` is not in
    /// the active collection.
    pub fn set_status(&self, id: TaskId, status: TaskStatus) -> StoreResult<()> {
        if !self.tasks.set_status(id, status)? {
            debug!("event=task_set_status module=service status=miss id={id}");
        }
        Ok(())
    }

    /// Moves a task from the active collection to the trash, stamping
    /// `deleted_at = now`. Silent no-op when missing.
    pub fn soft_delete(&self, id: TaskId) -> StoreResult<()> {
        let Some(task) = self.tasks.take(id)? else {
            debug!("event=task_soft_delete module=service status=miss id={id}");
            return Ok(());
        };
        self.trash.insert(task.into_deleted(epoch_ms_now()))?;

        info!("event=task_soft_delete module=service status=ok id={id}");
        Ok(())
    }

    /// Moves a trashed task back to the active collection, dropping
    /// `deleted_at`. Silent no-op when missing.
    pub fn restore(&self, id: TaskId) -> StoreResult<()> {
        let Some(entry) = self.trash.take(id)? else {
            debug!("event=task_restore module=service status=miss id={id}");
            return Ok(());
        };
        self.tasks.insert(entry.into_restored())?;

        info!("event=task_restore module=service status=ok id={id}");
        Ok(())
    }

    /// Removes a trashed task irrecoverably. Silent no-op when missing.
    pub fn permanently_delete(&self, id: TaskId) -> StoreResult<()> {
        if self.trash.remove(id)? {
            info!("event=task_purge module=service status=ok id={id}");
        } else {
            debug!("event=task_purge module=service status=miss id={id}");
        }
        Ok(())
    }

    /// Empties the trash entirely, regardless of prior contents.
    pub fn empty_trash(&self) -> StoreResult<()> {
        let purged = self.trash.load()?.len();
        self.trash.clear()?;

        info!("event=trash_empty module=service status=ok purged={purged}");
        Ok(())
    }

    /// Lists active tasks in insertion order, filtered by the query.
    pub fn list_tasks(&self, query: &TaskListQuery) -> StoreResult<Vec<Task>> {
        let tasks = self.tasks.load()?;
        Ok(tasks
            .into_iter()
            .filter(|task| matches_query(task, query))
            .collect())
    }

    /// Lists trashed tasks in deletion order, filtered by the query.
    pub fn list_deleted(&self, query: &TaskListQuery) -> StoreResult<Vec<DeletedTask>> {
        let entries = self.trash.load()?;
        Ok(entries
            .into_iter()
            .filter(|entry| matches_query(&entry.task, query))
            .collect())
    }

    /// Computes dashboard completion statistics from the active
    /// collection. Recomputed on every call, never cached.
    pub fn completion_stats(&self) -> StoreResult<TaskStats> {
        let tasks = self.tasks.load()?;
        let total = tasks.len();
        let completed = tasks
            .iter()
            .filter(|task| task.status == TaskStatus::Completed)
            .count();
        let completion_rate = if total == 0 {
            0
        } else {
            ((completed as f64 / total as f64) * 100.0).round() as u8
        };

        Ok(TaskStats {
            total,
            pending: total - completed,
            completed,
            completion_rate,
        })
    }

    /// Seeds the demo tasks on first load.
    ///
    /// Writes only when the `tasks` entry has never been written; an
    /// emptied collection is left alone. Returns whether seeding happened.
    pub fn seed_demo_tasks(&self) -> StoreResult<bool> {
        if self.tasks.load_existing()?.is_some() {
            return Ok(false);
        }

        let seeded = demo_tasks(epoch_ms_now());
        self.tasks.save(&seeded)?;

        info!(
            "event=demo_tasks_seeded module=service status=ok count={}",
            seeded.len()
        );
        Ok(true)
    }
}

fn matches_query(task: &Task, query: &TaskListQuery) -> bool {
    if let Some(status) = query.status {
        if task.status != status {
            return false;
        }
    }
    match query.search.as_deref() {
        Some(search) => task.matches_query(search),
        None => true,
    }
}

fn demo_tasks(now_ms: i64) -> Vec<Task> {
    vec![
        Task {
            id: Uuid::new_v4(),
            title: "Complete project proposal".to_string(),
            description: "Finish the project proposal for the client meeting".to_string(),
            status: TaskStatus::Pending,
            created_at: now_ms,
            due_date: Some(now_ms + 2 * DAY_MS),
            color: TaskColor::Purple,
        },
        Task {
            id: Uuid::new_v4(),
            title: "Review team updates".to_string(),
            description: "Go through the weekly updates from the team".to_string(),
            status: TaskStatus::Completed,
            created_at: now_ms,
            due_date: None,
            color: TaskColor::Blue,
        },
        Task {
            id: Uuid::new_v4(),
            title: "Prepare presentation".to_string(),
            description: "Create slides for the upcoming presentation".to_string(),
            status: TaskStatus::Pending,
            created_at: now_ms,
            due_date: Some(now_ms + 5 * DAY_MS),
            color: TaskColor::Green,
        },
    ]
}
