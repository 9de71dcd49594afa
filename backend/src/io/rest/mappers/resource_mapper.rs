use shared::{ResourceSearchRequest, SaveResourceResponse};

use crate::domain::commands::resources::ResourceQuery;
use crate::domain::resource_library_service::SaveOutcome;

pub struct ResourceMapper;

impl ResourceMapper {
    pub fn to_query(request: ResourceSearchRequest) -> ResourceQuery {
        ResourceQuery {
            search: request.search,
            category: request.category,
            resource_type: request.resource_type,
        }
    }

    pub fn to_save_response(outcome: SaveOutcome) -> SaveResourceResponse {
        match outcome {
            SaveOutcome::Saved(_) => SaveResourceResponse {
                saved: true,
                message: "Saved to your library!".to_string(),
            },
            SaveOutcome::AlreadySaved => SaveResourceResponse {
                saved: false,
                message: "Already in your library!".to_string(),
            },
        }
    }
}
