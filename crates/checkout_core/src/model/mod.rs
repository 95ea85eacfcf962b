//! Domain model for the Checkout task-management core.
//!
//! # Responsibility
//! - Define the canonical records persisted by the stores.
//! - Keep serde field names aligned with the persisted JSON layout.
//!
//! # Invariants
//! - Every task and notification is identified by a stable UUID.
//! - A task lives in exactly one of the active and trash collections.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

pub mod notification;
pub mod profile;
pub mod task;

/// Required-field validation failures, surfaced as inline form feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyTitle,
    EmptyName,
    EmptyEmail,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::EmptyEmail => write!(f, "email must not be empty"),
        }
    }
}

impl Error for ValidationError {}

/// Current wall-clock time in Unix epoch milliseconds.
///
/// All persisted timestamps (`createdAt`, `deletedAt`, `dueDate`) use this
/// unit.
pub fn epoch_ms_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::epoch_ms_now;

    #[test]
    fn epoch_ms_now_is_past_2020() {
        // 2020-01-01T00:00:00Z in epoch milliseconds.
        assert!(epoch_ms_now() > 1_577_836_800_000);
    }
}
