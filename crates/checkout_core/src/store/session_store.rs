//! Session and profile store.
//!
//! # Responsibility
//! - Own the single `user` profile object and the `isAuthenticated` flag.
//!
//! # Invariants
//! - The profile is overwritten wholesale on update; no history is kept.
//! - The authentication flag is the literal string `"true"` when set and
//!   absent otherwise.

use crate::model::profile::Profile;
use crate::store::local_storage::LocalStorage;
use crate::store::{StoreResult, IS_AUTHENTICATED_KEY, USER_KEY};
use log::warn;

/// Store over the `user` and `isAuthenticated` entries.
pub struct SessionStore<'s, S: LocalStorage> {
    storage: &'s S,
}

impl<'s, S: LocalStorage> SessionStore<'s, S> {
    pub fn new(storage: &'s S) -> Self {
        Self { storage }
    }

    /// Returns the stored profile, or `None` when absent or unparseable.
    pub fn profile(&self) -> StoreResult<Option<Profile>> {
        let Some(raw) = self.storage.get_item(USER_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(profile) => Ok(Some(profile)),
            Err(err) => {
                warn!(
                    "event=storage_parse_failed module=store status=fallback key={USER_KEY} error={err}"
                );
                Ok(None)
            }
        }
    }

    /// Overwrites the stored profile.
    pub fn set_profile(&self, profile: &Profile) -> StoreResult<()> {
        let encoded = serde_json::to_string(profile)?;
        self.storage.set_item(USER_KEY, &encoded)
    }

    /// Removes the stored profile entirely.
    pub fn clear_profile(&self) -> StoreResult<()> {
        self.storage.remove_item(USER_KEY)
    }

    /// Whether the authentication flag is present and set.
    pub fn is_authenticated(&self) -> StoreResult<bool> {
        Ok(self.storage.get_item(IS_AUTHENTICATED_KEY)?.as_deref() == Some("true"))
    }

    /// Sets the authentication flag.
    pub fn set_authenticated(&self) -> StoreResult<()> {
        self.storage.set_item(IS_AUTHENTICATED_KEY, "true")
    }

    /// Removes the authentication flag.
    pub fn clear_authenticated(&self) -> StoreResult<()> {
        self.storage.remove_item(IS_AUTHENTICATED_KEY)
    }
}
