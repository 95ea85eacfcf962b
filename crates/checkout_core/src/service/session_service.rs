//! Session and profile use-case service.
//!
//! # Responsibility
//! - Simulate sign-in/sign-up/sign-out against local storage.
//! - Provide profile read and wholesale-overwrite update operations.
//!
//! # Invariants
//! - Authentication is a simulation: any non-empty credentials succeed and
//!   store the demo identity.
//! - Profile updates preserve `id` and `image`; image updates preserve
//!   everything else.

use crate::model::profile::Profile;
use crate::model::ValidationError;
use crate::store::local_storage::LocalStorage;
use crate::store::session_store::SessionStore;
use crate::store::StoreResult;
use log::{debug, info};
use uuid::Uuid;

const DEMO_USER_NAME: &str = "Alex Johnson";
const DEMO_USER_IMAGE: &str = "/placeholder.svg?height=100&width=100";

/// Session facade over the session store.
pub struct SessionService<'s, S: LocalStorage> {
    store: SessionStore<'s, S>,
}

impl<'s, S: LocalStorage> SessionService<'s, S> {
    /// Creates a service over the provided storage backend.
    pub fn new(storage: &'s S) -> Self {
        Self {
            store: SessionStore::new(storage),
        }
    }

    /// Simulated sign-in: stores the demo identity under the supplied
    /// email and sets the authentication flag.
    pub fn sign_in(&self, email: &str) -> StoreResult<Profile> {
        self.start_session(DEMO_USER_NAME, email)
    }

    /// Simulated sign-up: same as sign-in but with the supplied name.
    pub fn sign_up(&self, name: &str, email: &str) -> StoreResult<Profile> {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        self.start_session(name, email)
    }

    /// Clears both session entries.
    pub fn sign_out(&self) -> StoreResult<()> {
        self.store.clear_authenticated()?;
        self.store.clear_profile()?;
        info!("event=session_sign_out module=service status=ok");
        Ok(())
    }

    /// Whether the authentication flag is set.
    pub fn is_authenticated(&self) -> StoreResult<bool> {
        self.store.is_authenticated()
    }

    /// The current profile, or `None` when signed out.
    pub fn profile(&self) -> StoreResult<Option<Profile>> {
        self.store.profile()
    }

    /// Overwrites name and email wholesale, preserving id and image.
    ///
    /// Returns the updated profile, or `None` (silent no-op) when no
    /// profile is stored.
    pub fn update_profile(&self, name: &str, email: &str) -> StoreResult<Option<Profile>> {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if email.trim().is_empty() {
            return Err(ValidationError::EmptyEmail.into());
        }

        let Some(mut profile) = self.store.profile()? else {
            debug!("event=profile_update module=service status=miss");
            return Ok(None);
        };
        profile.name = name.to_string();
        profile.email = email.to_string();
        self.store.set_profile(&profile)?;

        info!("event=profile_update module=service status=ok id={}", profile.id);
        Ok(Some(profile))
    }

    /// Replaces the avatar URI. Silent no-op when no profile is stored.
    pub fn update_image(&self, image: &str) -> StoreResult<Option<Profile>> {
        let Some(mut profile) = self.store.profile()? else {
            debug!("event=profile_image_update module=service status=miss");
            return Ok(None);
        };
        profile.image = image.to_string();
        self.store.set_profile(&profile)?;

        info!(
            "event=profile_image_update module=service status=ok id={}",
            profile.id
        );
        Ok(Some(profile))
    }

    fn start_session(&self, name: &str, email: &str) -> StoreResult<Profile> {
        if email.trim().is_empty() {
            return Err(ValidationError::EmptyEmail.into());
        }

        let profile = Profile {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            image: DEMO_USER_IMAGE.to_string(),
        };
        self.store.set_profile(&profile)?;
        self.store.set_authenticated()?;

        info!(
            "event=session_sign_in module=service status=ok id={}",
            profile.id
        );
        Ok(profile)
    }
}
