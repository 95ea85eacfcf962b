//! Local-storage-backed stores, one per logical collection.
//!
//! # Responsibility
//! - Define the `LocalStorage` seam and the per-collection stores.
//! - Keep persistence an internal concern: callers see typed operations,
//!   never keys or JSON.
//!
//! # Invariants
//! - Every mutation is read-full-collection, mutate, write-full-collection.
//! - An absent or unparseable value is first-run state, never an error.

use crate::db::DbError;
use crate::model::ValidationError;
use local_storage::LocalStorage;
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod local_storage;
pub mod notification_store;
pub mod session_store;
pub mod task_store;
pub mod trash_store;

/// Storage key for the active task collection.
pub const TASKS_KEY: &str = "tasks";
/// Storage key for the trash collection.
pub const DELETED_TASKS_KEY: &str = "deletedTasks";
/// Storage key for the notification collection.
pub const NOTIFICATIONS_KEY: &str = "notifications";
/// Storage key for the single profile object.
pub const USER_KEY: &str = "user";
/// Storage key for the simulated-authentication flag string.
pub const IS_AUTHENTICATED_KEY: &str = "isAuthenticated";

pub type StoreResult<T> = Result<T, StoreError>;

/// Store and service layer error.
#[derive(Debug)]
pub enum StoreError {
    /// Required-field validation failure; the operation was aborted.
    Validation(ValidationError),
    /// Underlying storage backend failure.
    Db(DbError),
    /// A collection could not be serialized for persistence.
    Encode(serde_json::Error),
    /// Connection has not been migrated to the supported schema version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Connection is migrated but a required table is missing.
    MissingRequiredTable(&'static str),
    /// Connection is migrated but a required column is missing.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode collection: {err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "storage connection not initialized: schema version {actual_version}, expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "storage connection is missing required table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "storage connection is missing required column `{table}.{column}`"
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Reads a JSON-encoded collection from storage.
///
/// Returns `Ok(None)` when the key has never been written or when the
/// stored value cannot be parsed; per the error-handling contract that is
/// first-run state and falls back to the caller's default.
pub(crate) fn load_collection<S, T>(storage: &S, key: &'static str) -> StoreResult<Option<Vec<T>>>
where
    S: LocalStorage + ?Sized,
    T: DeserializeOwned,
{
    let Some(raw) = storage.get_item(key)? else {
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(items) => Ok(Some(items)),
        Err(err) => {
            warn!("event=storage_parse_failed module=store status=fallback key={key} error={err}");
            Ok(None)
        }
    }
}

/// Writes a whole collection back to storage as a JSON array.
pub(crate) fn save_collection<S, T>(storage: &S, key: &'static str, items: &[T]) -> StoreResult<()>
where
    S: LocalStorage + ?Sized,
    T: Serialize,
{
    let encoded = serde_json::to_string(items)?;
    storage.set_item(key, &encoded)
}
