//! Profile service domain logic for the support hub.
//!
//! The profile is a singleton per session: it exists, empty, from the moment
//! the session starts, is edited in place by the family-information and
//! preferences forms, and is never deleted.

use anyhow::Result;
use chrono::NaiveDate;
use shared::{Preferences, SessionId, UserProfile};
use tracing::{info, warn};

use crate::domain::commands::profile::UpdateFamilyInfoCommand;
use crate::domain::models::ValidationError;
use crate::domain::today;
use crate::storage::SessionStorage;

pub const MIN_FAMILY_SIZE: u8 = 1;
pub const MAX_FAMILY_SIZE: u8 = 20;

/// Service for reading and editing the session's user profile
#[derive(Clone)]
pub struct ProfileService<S: SessionStorage> {
    storage: S,
}

impl<S: SessionStorage> ProfileService<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn get_profile(&self, session_id: SessionId) -> Result<UserProfile> {
        Ok(self.storage.with_store(session_id, |store| store.profile.clone())?)
    }

    /// Save the family information form and stamp `last_updated` with today
    pub fn update_family_info(&self, session_id: SessionId, command: UpdateFamilyInfoCommand) -> Result<UserProfile> {
        self.update_family_info_on(session_id, command, today())
    }

    pub fn update_family_info_on(
        &self,
        session_id: SessionId,
        command: UpdateFamilyInfoCommand,
        on: NaiveDate,
    ) -> Result<UserProfile> {
        if !(MIN_FAMILY_SIZE..=MAX_FAMILY_SIZE).contains(&command.family_size) {
            warn!("Rejected family size {} for session {}", command.family_size, session_id);
            return Err(ValidationError::OutOfRange {
                field: "family_size",
                min: MIN_FAMILY_SIZE as i64,
                max: MAX_FAMILY_SIZE as i64,
                value: command.family_size as i64,
            }
            .into());
        }

        let profile = self.storage.with_store_mut(session_id, |store| {
            let profile = &mut store.profile;
            profile.parent_name = command.parent_name.trim().to_string();
            profile.family_size = command.family_size;
            profile.location = command.location.trim().to_string();
            profile.primary_language = command.primary_language;
            profile.support_network = command.support_network.into_iter().collect();
            profile.children_info = command.children_info.trim().to_string();
            profile.last_updated = Some(on);
            profile.clone()
        })?;

        info!("Saved family information for session {}", session_id);
        Ok(profile)
    }

    pub fn update_preferences(&self, session_id: SessionId, preferences: Preferences) -> Result<UserProfile> {
        let profile = self.storage.with_store_mut(session_id, |store| {
            store.profile.preferences = preferences;
            store.profile.clone()
        })?;

        info!("Saved preferences for session {}", session_id);
        Ok(profile)
    }
}
