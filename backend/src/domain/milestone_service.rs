//! Milestone service domain logic for the support hub.
//!
//! ## Business Rules
//!
//! - A milestone needs a description; everything else has a default
//! - `shared_by` is the profile's parent name at the time of sharing, or
//!   "Anonymous" when no name has been saved
//! - Visibility defaults to the profile's "share milestones publicly" preference
//! - Celebrations are a plain counter; every call adds one
//! - Milestones are never edited or deleted

use anyhow::Result;
use shared::{MilestoneShare, RecordId, RecordView, SessionId};
use tracing::{debug, info, warn};

use crate::domain::commands::milestones::{MilestoneListQuery, ShareMilestoneCommand};
use crate::domain::models::validation::{optional_text, require};
use crate::domain::record_store::{milestone_date, sort_indexed, to_views};
use crate::domain::today;
use crate::storage::SessionStorage;

pub const ANONYMOUS: &str = "Anonymous";

/// Service for sharing and celebrating milestones
#[derive(Clone)]
pub struct MilestoneService<S: SessionStorage> {
    storage: S,
}

impl<S: SessionStorage> MilestoneService<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn share_milestone(&self, session_id: SessionId, command: ShareMilestoneCommand) -> Result<RecordView<MilestoneShare>> {
        if let Err(e) = require("text", &command.text) {
            warn!("Rejected milestone for session {}: {}", session_id, e);
            return Err(e.into());
        }

        let view = self.storage.with_store_mut(session_id, |store| {
            let shared_by = match store.profile.parent_name.trim() {
                "" => ANONYMOUS.to_string(),
                name => name.to_string(),
            };
            let milestone = MilestoneShare {
                text: command.text.trim().to_string(),
                milestone_type: command.milestone_type,
                child_age: optional_text(command.child_age),
                shared_by,
                date: command.date.unwrap_or_else(today),
                public: command.public.unwrap_or(store.profile.preferences.public_milestones),
                celebrations: 0,
            };
            let id = store.milestones.append(milestone.clone());
            RecordView {
                index: store.milestones.len() - 1,
                id,
                record: milestone,
            }
        })?;

        info!("Shared {} milestone {} for session {}", view.record.milestone_type, view.id, session_id);
        Ok(view)
    }

    /// Milestones ordered most recent first; equal dates keep stored order
    pub fn list_milestones(&self, session_id: SessionId, query: MilestoneListQuery) -> Result<Vec<RecordView<MilestoneShare>>> {
        let milestones = self.storage.with_store(session_id, |store| {
            let found = store
                .milestones
                .filter(|milestone| !query.public_only || milestone.public);
            let mut recent = sort_indexed(found, milestone_date, true);
            if let Some(limit) = query.limit {
                recent.truncate(limit);
            }
            to_views(recent)
        })?;

        debug!("Listed {} milestones for session {}", milestones.len(), session_id);
        Ok(milestones)
    }

    /// Add one celebration to the milestone at `index` in stored order
    pub fn celebrate(&self, session_id: SessionId, index: usize) -> Result<u32> {
        let celebrations = self
            .storage
            .with_store_mut(session_id, |store| {
                store.milestones.increment_counter(index, |m| &mut m.celebrations)
            })??;

        info!("Milestone {} in session {} now has {} celebrations", index, session_id, celebrations);
        Ok(celebrations)
    }

    /// Add one celebration to the milestone with this id. None if no such milestone.
    pub fn celebrate_by_id(&self, session_id: SessionId, id: RecordId) -> Result<Option<(usize, u32)>> {
        let celebrated = self.storage.with_store_mut(session_id, |store| {
            let index = store.milestones.position(id)?;
            store
                .milestones
                .increment_counter(index, |m| &mut m.celebrations)
                .ok()
                .map(|count| (index, count))
        })?;
        Ok(celebrated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record_store::StoreError;
    use crate::storage::InMemorySessionStorage;
    use chrono::NaiveDate;
    use shared::{MilestoneType, Preferences};

    fn setup() -> (MilestoneService<InMemorySessionStorage>, InMemorySessionStorage, SessionId) {
        let storage = InMemorySessionStorage::new();
        let session_id = storage.create_session().unwrap();
        (MilestoneService::new(storage.clone()), storage, session_id)
    }

    fn share(text: &str, day: u32, public: Option<bool>) -> ShareMilestoneCommand {
        ShareMilestoneCommand {
            text: text.to_string(),
            milestone_type: MilestoneType::Communication,
            child_age: Some(" ".to_string()),
            public,
            date: NaiveDate::from_ymd_opt(2026, 10, day),
        }
    }

    #[test]
    fn test_share_milestone_defaults() {
        let (service, _, session_id) = setup();

        let view = service.share_milestone(session_id, share("First full sentence!", 1, None)).unwrap();

        assert_eq!(view.index, 0);
        assert_eq!(view.record.shared_by, ANONYMOUS);
        assert_eq!(view.record.celebrations, 0);
        assert!(view.record.public);
        assert_eq!(view.record.child_age, None);
    }

    #[test]
    fn test_share_milestone_uses_profile() {
        let (service, storage, session_id) = setup();
        storage
            .with_store_mut(session_id, |store| {
                store.profile.parent_name = "Riley".to_string();
                store.profile.preferences = Preferences {
                    public_milestones: false,
                    ..Preferences::default()
                };
            })
            .unwrap();

        let view = service.share_milestone(session_id, share("Tied shoes", 1, None)).unwrap();
        assert_eq!(view.record.shared_by, "Riley");
        assert!(!view.record.public);

        let view = service.share_milestone(session_id, share("Rode a bike", 2, Some(true))).unwrap();
        assert!(view.record.public);
    }

    #[test]
    fn test_share_milestone_requires_text() {
        let (service, _, session_id) = setup();
        assert!(service.share_milestone(session_id, share("   ", 1, None)).is_err());
        assert!(service.list_milestones(session_id, MilestoneListQuery::default()).unwrap().is_empty());
    }

    #[test]
    fn test_list_most_recent_first_with_limit_and_visibility() {
        let (service, _, session_id) = setup();
        service.share_milestone(session_id, share("a", 3, Some(true))).unwrap();
        service.share_milestone(session_id, share("b", 9, Some(false))).unwrap();
        service.share_milestone(session_id, share("c", 5, Some(true))).unwrap();
        service.share_milestone(session_id, share("d", 1, Some(true))).unwrap();

        let all = service.list_milestones(session_id, MilestoneListQuery::default()).unwrap();
        let texts: Vec<&str> = all.iter().map(|m| m.record.text.as_str()).collect();
        assert_eq!(texts, ["b", "c", "a", "d"]);
        // Views carry the stored index
        assert_eq!(all[0].index, 1);

        let public = service
            .list_milestones(session_id, MilestoneListQuery { limit: Some(2), public_only: true })
            .unwrap();
        let texts: Vec<&str> = public.iter().map(|m| m.record.text.as_str()).collect();
        assert_eq!(texts, ["c", "a"]);
    }

    #[test]
    fn test_celebrate_targets_stored_index_from_sorted_view() {
        let (service, _, session_id) = setup();
        service.share_milestone(session_id, share("older", 1, None)).unwrap();
        service.share_milestone(session_id, share("newer", 2, None)).unwrap();

        let recent = service.list_milestones(session_id, MilestoneListQuery::default()).unwrap();
        assert_eq!(recent[0].record.text, "newer");

        service.celebrate(session_id, recent[0].index).unwrap();
        service.celebrate(session_id, recent[0].index).unwrap();

        let recent = service.list_milestones(session_id, MilestoneListQuery::default()).unwrap();
        assert_eq!(recent[0].record.celebrations, 2);
        assert_eq!(recent[1].record.celebrations, 0);
    }

    #[test]
    fn test_celebrate_out_of_range() {
        let (service, _, session_id) = setup();
        let err = service.celebrate(session_id, 4).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StoreError>(),
            Some(StoreError::IndexOutOfRange { index: 4, len: 0, .. })
        ));
    }

    #[test]
    fn test_celebrate_by_id() {
        let (service, _, session_id) = setup();
        let view = service.share_milestone(session_id, share("Said 'mama'", 1, None)).unwrap();

        assert_eq!(service.celebrate_by_id(session_id, view.id).unwrap(), Some((0, 1)));
        assert_eq!(service.celebrate_by_id(session_id, RecordId::new()).unwrap(), None);
    }
}
