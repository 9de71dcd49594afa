//! Emergency contact service domain logic for the support hub.
//!
//! Contacts are shown in two groups, primary first. Removal is by the stable
//! record id handed out when the contact was added, so two contacts with
//! identical details can still be removed one at a time.

use anyhow::Result;
use shared::{EmergencyContact, RecordId, RecordView, SessionId};
use tracing::{debug, info, warn};

use crate::domain::commands::emergency_contacts::AddEmergencyContactCommand;
use crate::domain::models::validation::{optional_text, require};
use crate::domain::record_store::to_views;
use crate::domain::today;
use crate::storage::SessionStorage;

/// Emergency contacts split into the two display groups, each in stored order
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedContacts {
    pub primary: Vec<RecordView<EmergencyContact>>,
    pub other: Vec<RecordView<EmergencyContact>>,
}

#[derive(Clone)]
pub struct EmergencyContactService<S: SessionStorage> {
    storage: S,
}

impl<S: SessionStorage> EmergencyContactService<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn add_contact(&self, session_id: SessionId, command: AddEmergencyContactCommand) -> Result<RecordView<EmergencyContact>> {
        for (field, value) in [("name", &command.name), ("phone", &command.phone)] {
            if let Err(e) = require(field, value) {
                warn!("Rejected emergency contact for session {}: {}", session_id, e);
                return Err(e.into());
            }
        }

        let contact = EmergencyContact {
            name: command.name.trim().to_string(),
            phone: command.phone.trim().to_string(),
            relationship: command.relationship,
            email: optional_text(command.email),
            address: optional_text(command.address),
            notes: optional_text(command.notes),
            primary: command.primary,
            added_date: command.date.unwrap_or_else(today),
        };

        let view = self.storage.with_store_mut(session_id, |store| {
            let id = store.emergency_contacts.append(contact.clone());
            RecordView {
                index: store.emergency_contacts.len() - 1,
                id,
                record: contact,
            }
        })?;

        info!(
            "Added {} emergency contact {} ({}) for session {}",
            if view.record.primary { "primary" } else { "secondary" },
            view.id,
            view.record.relationship,
            session_id
        );
        Ok(view)
    }

    pub fn list_contacts(&self, session_id: SessionId) -> Result<GroupedContacts> {
        let grouped = self.storage.with_store(session_id, |store| {
            let contacts = &store.emergency_contacts;
            GroupedContacts {
                primary: to_views(contacts.filter(|c| c.primary)),
                other: to_views(contacts.filter(|c| !c.primary)),
            }
        })?;

        debug!(
            "Listed {} primary and {} other emergency contacts for session {}",
            grouped.primary.len(),
            grouped.other.len(),
            session_id
        );
        Ok(grouped)
    }

    /// Remove the contact with this id. Returns false if it was not there.
    pub fn delete_contact(&self, session_id: SessionId, id: RecordId) -> Result<bool> {
        let removed = self
            .storage
            .with_store_mut(session_id, |store| store.emergency_contacts.delete_by_id(id))?;

        match removed {
            Some(entry) => {
                info!("Deleted emergency contact {} ({}) for session {}", id, entry.record.name, session_id);
                Ok(true)
            }
            None => {
                debug!("No emergency contact {} to delete in session {}", id, session_id);
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::ValidationError;
    use crate::storage::InMemorySessionStorage;
    use shared::Relationship;

    fn setup() -> (EmergencyContactService<InMemorySessionStorage>, SessionId) {
        let storage = InMemorySessionStorage::new();
        let session_id = storage.create_session().unwrap();
        (EmergencyContactService::new(storage), session_id)
    }

    fn contact(name: &str, phone: &str, primary: bool) -> AddEmergencyContactCommand {
        AddEmergencyContactCommand {
            name: name.to_string(),
            phone: phone.to_string(),
            relationship: Relationship::Doctor,
            email: Some(String::new()),
            address: None,
            notes: Some("Available 24/7".to_string()),
            primary,
            date: None,
        }
    }

    #[test]
    fn test_add_contact() {
        let (service, session_id) = setup();

        let view = service.add_contact(session_id, contact(" Dr. Patel ", "555-0101", true)).unwrap();

        assert_eq!(view.record.name, "Dr. Patel");
        assert_eq!(view.record.email, None);
        assert_eq!(view.record.notes.as_deref(), Some("Available 24/7"));
        assert_eq!(view.record.added_date, today());
    }

    #[test]
    fn test_add_contact_requires_name_and_phone() {
        let (service, session_id) = setup();

        let err = service.add_contact(session_id, contact("", "555-0101", false)).unwrap_err();
        assert_eq!(err.downcast_ref::<ValidationError>(), Some(&ValidationError::MissingField("name")));

        let err = service.add_contact(session_id, contact("Grandma", " ", false)).unwrap_err();
        assert_eq!(err.downcast_ref::<ValidationError>(), Some(&ValidationError::MissingField("phone")));

        let listed = service.list_contacts(session_id).unwrap();
        assert!(listed.primary.is_empty() && listed.other.is_empty());
    }

    #[test]
    fn test_list_splits_primary_and_other() {
        let (service, session_id) = setup();
        service.add_contact(session_id, contact("Neighbor", "555-0102", false)).unwrap();
        service.add_contact(session_id, contact("Spouse", "555-0103", true)).unwrap();
        service.add_contact(session_id, contact("Aunt", "555-0104", false)).unwrap();

        let listed = service.list_contacts(session_id).unwrap();

        assert_eq!(listed.primary.len(), 1);
        assert_eq!(listed.primary[0].index, 1);
        let others: Vec<&str> = listed.other.iter().map(|c| c.record.name.as_str()).collect();
        assert_eq!(others, ["Neighbor", "Aunt"]);
    }

    #[test]
    fn test_delete_identical_contacts_one_at_a_time() {
        let (service, session_id) = setup();
        let first = service.add_contact(session_id, contact("Grandpa", "555-0105", false)).unwrap();
        let second = service.add_contact(session_id, contact("Grandpa", "555-0105", false)).unwrap();

        assert!(service.delete_contact(session_id, second.id).unwrap());

        let listed = service.list_contacts(session_id).unwrap();
        assert_eq!(listed.other.len(), 1);
        assert_eq!(listed.other[0].id, first.id);

        // Already gone
        assert!(!service.delete_contact(session_id, second.id).unwrap());
    }
}
