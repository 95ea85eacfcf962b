//! Core domain logic for Checkout, a local-storage-backed task manager.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::notification::{Notification, NotificationId};
pub use model::profile::Profile;
pub use model::task::{DeletedTask, Task, TaskColor, TaskId, TaskStatus};
pub use model::ValidationError;
pub use service::notification_service::NotificationService;
pub use service::session_service::SessionService;
pub use service::task_service::{CreateTaskRequest, TaskListQuery, TaskService, TaskStats};
pub use store::local_storage::{LocalStorage, SqliteLocalStorage};
pub use store::{StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
