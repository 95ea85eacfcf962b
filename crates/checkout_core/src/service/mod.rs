//! Use-case services composing the collection stores.
//!
//! # Responsibility
//! - Provide the operations a UI layer composes, one facade per concern.
//! - Own cross-collection rules (the task/trash ownership transfer).
//!
//! # Invariants
//! - Services never bypass store persistence contracts.
//! - Not-found on mutation by id is a silent no-op, logged at debug only.

pub mod notification_service;
pub mod session_service;
pub mod task_service;
