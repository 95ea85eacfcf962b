//! Task domain model.
//!
//! # Responsibility
//! - Define the task record shared by the active and trash collections.
//! - Provide the ownership-transfer helpers for soft-delete and restore.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `created_at` is set once at creation and never rewritten.
//! - A `DeletedTask` is a `Task` plus `deleted_at`; restoring drops
//!   `deleted_at` and nothing else.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a task, kept as an alias to make semantic intent
/// explicit in signatures.
pub type TaskId = Uuid;

/// Task lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Created but not finished.
    Pending,
    /// Completed successfully.
    Completed,
}

/// Display color tag from the fixed palette.
///
/// Serialized lowercase to match the persisted layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskColor {
    Purple,
    Blue,
    Green,
    Pink,
    Orange,
}

impl TaskColor {
    /// The fixed palette, in declaration order.
    pub const PALETTE: [TaskColor; 5] = [
        TaskColor::Purple,
        TaskColor::Blue,
        TaskColor::Green,
        TaskColor::Pink,
        TaskColor::Orange,
    ];

    /// Picks a uniformly random palette entry. Used when a task is created
    /// without an explicit color.
    pub fn random() -> Self {
        *Self::PALETTE
            .choose(&mut rand::thread_rng())
            .expect("palette is non-empty")
    }
}

/// A user-created to-do item in the active collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable id, unique across the active and trash collections.
    pub id: TaskId,
    /// Non-empty display title.
    pub title: String,
    /// Free text, may be empty.
    pub description: String,
    pub status: TaskStatus,
    /// Creation time in epoch milliseconds. Immutable.
    pub created_at: i64,
    /// Optional due time in epoch milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<i64>,
    pub color: TaskColor,
}

impl Task {
    /// Moves this task into the trash collection, stamping `deleted_at`.
    pub fn into_deleted(self, deleted_at: i64) -> DeletedTask {
        DeletedTask {
            task: self,
            deleted_at,
        }
    }

    /// Case-insensitive search over title and description, matching the
    /// task-list display filter.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}

/// A soft-deleted task held in the trash collection.
///
/// Serialized as the task's own fields plus `deletedAt`, so the persisted
/// entry stays a flat object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedTask {
    #[serde(flatten)]
    pub task: Task,
    #[serde(rename = "deletedAt")]
    pub deleted_at: i64,
}

impl DeletedTask {
    /// Moves this entry back to the active collection, dropping
    /// `deleted_at`.
    pub fn into_restored(self) -> Task {
        self.task
    }
}
