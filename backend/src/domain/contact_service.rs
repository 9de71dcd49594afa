//! Directory contacts: therapists, advocates and saved hotlines.

use anyhow::Result;
use shared::{Contact, RecordView, SessionId};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::catalog::ResourceCatalog;
use crate::domain::commands::contacts::AddContactCommand;
use crate::domain::models::validation::{optional_text, require};
use crate::domain::models::ValidationError;
use crate::domain::record_store::to_views;
use crate::storage::SessionStorage;

#[derive(Clone)]
pub struct ContactService<S: SessionStorage> {
    storage: S,
    catalog: Arc<dyn ResourceCatalog>,
}

impl<S: SessionStorage> ContactService<S> {
    pub fn new(storage: S, catalog: Arc<dyn ResourceCatalog>) -> Self {
        Self { storage, catalog }
    }

    pub fn add_contact(&self, session_id: SessionId, command: AddContactCommand) -> Result<RecordView<Contact>> {
        if let Err(e) = require("name", &command.name) {
            warn!("Rejected contact for session {}: {}", session_id, e);
            return Err(e.into());
        }

        let contact = Contact {
            name: command.name.trim().to_string(),
            phone: command.phone.trim().to_string(),
            website: optional_text(command.website),
            category: command.category.trim().to_string(),
            notes: optional_text(command.notes),
        };

        let view = self.storage.with_store_mut(session_id, |store| {
            let id = store.contacts.append(contact.clone());
            RecordView {
                index: store.contacts.len() - 1,
                id,
                record: contact,
            }
        })?;

        info!("Added contact {} for session {}", view.id, session_id);
        Ok(view)
    }

    /// Copy a national hotline into the contact directory.
    ///
    /// Returns None when a contact with the same name and phone already exists.
    pub fn save_hotline(&self, session_id: SessionId, hotline_name: &str) -> Result<Option<RecordView<Contact>>> {
        let Some(hotline) = self.catalog.hotline_by_name(hotline_name) else {
            warn!("Session {} tried to save unknown hotline '{}'", session_id, hotline_name);
            return Err(ValidationError::NotInCatalog {
                kind: "hotline",
                name: hotline_name.to_string(),
            }
            .into());
        };

        let saved = self.storage.with_store_mut(session_id, |store| {
            let contacts = &mut store.contacts;
            if contacts
                .records()
                .any(|c| c.name == hotline.name && c.phone == hotline.phone)
            {
                return None;
            }
            let contact = Contact {
                name: hotline.name.clone(),
                phone: hotline.phone.clone(),
                website: None,
                category: hotline.hotline_type.to_string(),
                notes: Some(hotline.description.clone()),
            };
            let id = contacts.append(contact.clone());
            Some(RecordView {
                index: contacts.len() - 1,
                id,
                record: contact,
            })
        })?;

        match &saved {
            Some(view) => info!("Saved hotline '{}' as contact {} for session {}", hotline_name, view.id, session_id),
            None => debug!("Hotline '{}' already saved for session {}", hotline_name, session_id),
        }
        Ok(saved)
    }

    pub fn list_contacts(&self, session_id: SessionId) -> Result<Vec<RecordView<Contact>>> {
        Ok(self
            .storage
            .with_store(session_id, |store| to_views(store.contacts.all()))?)
    }
}
