//! Resource library service for the support hub.
//!
//! Searching reads the shared catalogue; saving copies a catalogue entry into
//! the session's own library. A resource that is already in the library is
//! not saved twice.

use anyhow::Result;
use shared::{RecordView, SavedResource, SessionId};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::catalog::{matches_query, ResourceCatalog};
use crate::domain::commands::resources::ResourceQuery;
use crate::domain::models::ValidationError;
use crate::domain::record_store::to_views;
use crate::storage::SessionStorage;

/// Result of asking to save a catalogue resource
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Saved(RecordView<SavedResource>),
    AlreadySaved,
}

#[derive(Clone)]
pub struct ResourceLibraryService<S: SessionStorage> {
    storage: S,
    catalog: Arc<dyn ResourceCatalog>,
}

impl<S: SessionStorage> ResourceLibraryService<S> {
    pub fn new(storage: S, catalog: Arc<dyn ResourceCatalog>) -> Self {
        Self { storage, catalog }
    }

    /// Catalogue entries matching every field of `query`, in catalogue order
    pub fn search(&self, query: &ResourceQuery) -> Vec<SavedResource> {
        let found: Vec<SavedResource> = self
            .catalog
            .resources()
            .iter()
            .filter(|resource| matches_query(resource, query))
            .cloned()
            .collect();
        debug!("Catalogue search {:?} matched {} resources", query, found.len());
        found
    }

    pub fn save_resource(&self, session_id: SessionId, title: &str) -> Result<SaveOutcome> {
        let Some(resource) = self.catalog.resource_by_title(title) else {
            warn!("Session {} tried to save unknown resource '{}'", session_id, title);
            return Err(ValidationError::NotInCatalog {
                kind: "resource",
                name: title.to_string(),
            }
            .into());
        };

        let outcome = self.storage.with_store_mut(session_id, |store| {
            let library = &mut store.saved_resources;
            if library.records().any(|saved| saved == resource) {
                return SaveOutcome::AlreadySaved;
            }
            let id = library.append(resource.clone());
            SaveOutcome::Saved(RecordView {
                index: library.len() - 1,
                id,
                record: resource.clone(),
            })
        })?;

        match &outcome {
            SaveOutcome::Saved(view) => info!("Saved '{}' to library for session {}", view.record.title, session_id),
            SaveOutcome::AlreadySaved => debug!("'{}' already in library for session {}", title, session_id),
        }
        Ok(outcome)
    }

    pub fn list_saved(&self, session_id: SessionId) -> Result<Vec<RecordView<SavedResource>>> {
        Ok(self
            .storage
            .with_store(session_id, |store| to_views(store.saved_resources.all()))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::BuiltInCatalog;
    use crate::storage::InMemorySessionStorage;
    use shared::ResourceCategory;

    fn setup() -> (ResourceLibraryService<InMemorySessionStorage>, SessionId) {
        let storage = InMemorySessionStorage::new();
        let session_id = storage.create_session().unwrap();
        (ResourceLibraryService::new(storage, Arc::new(BuiltInCatalog::new())), session_id)
    }

    #[test]
    fn test_search_by_category() {
        let (service, _) = setup();
        let found = service.search(&ResourceQuery {
            category: Some(ResourceCategory::Adhd),
            ..ResourceQuery::default()
        });
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "ADHD Medication Guide");
    }

    #[test]
    fn test_save_resource_once() {
        let (service, session_id) = setup();

        let outcome = service.save_resource(session_id, "Autism Sensory Strategies").unwrap();
        assert!(matches!(outcome, SaveOutcome::Saved(ref view) if view.index == 0));

        let again = service.save_resource(session_id, "Autism Sensory Strategies").unwrap();
        assert_eq!(again, SaveOutcome::AlreadySaved);

        let saved = service.list_saved(session_id).unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].record.topics.len(), 4);
    }

    #[test]
    fn test_save_unknown_resource() {
        let (service, session_id) = setup();
        let err = service.save_resource(session_id, "Not a real title").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ValidationError>(),
            Some(ValidationError::NotInCatalog { kind: "resource", .. })
        ));
        assert!(service.list_saved(session_id).unwrap().is_empty());
    }
}
