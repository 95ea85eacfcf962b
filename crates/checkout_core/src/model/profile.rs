//! User profile model.
//!
//! A single profile instance exists per session and is overwritten
//! wholesale on update; there is no history.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The signed-in user's identity and profile fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Avatar URI.
    pub image: String,
}
