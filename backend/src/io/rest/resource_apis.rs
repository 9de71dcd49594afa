//! # REST API for the Resource Library
//!
//! Searching the catalogue and managing a session's saved resources.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use shared::{ResourceListResponse, ResourceSearchRequest, SaveResourceRequest, SavedResourceListResponse, SessionId};
use tracing::info;

use super::{error_response, not_found};
use super::mappers::resource_mapper::ResourceMapper;
use crate::storage::SessionStorage;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sessions/:session_id/resources", get(search_resources))
        .route("/sessions/:session_id/resources/saved", get(list_saved).post(save_resource))
}

/// The catalogue is shared, but searching still requires a live session
pub async fn search_resources(
    State(state): State<AppState>,
    Path(session_id): Path<SessionId>,
    Query(request): Query<ResourceSearchRequest>,
) -> impl IntoResponse {
    info!("GET /api/sessions/{}/resources - {:?}", session_id, request);
    if !state.sessions.session_exists(session_id) {
        return not_found(format!("session {} not found", session_id));
    }
    let query = ResourceMapper::to_query(request);
    let resources = state.resource_library_service.search(&query);
    (StatusCode::OK, Json(ResourceListResponse { resources })).into_response()
}

pub async fn list_saved(State(state): State<AppState>, Path(session_id): Path<SessionId>) -> impl IntoResponse {
    info!("GET /api/sessions/{}/resources/saved", session_id);
    match state.resource_library_service.list_saved(session_id) {
        Ok(resources) => (StatusCode::OK, Json(SavedResourceListResponse { resources })).into_response(),
        Err(e) => error_response("list saved resources", e),
    }
}

pub async fn save_resource(
    State(state): State<AppState>,
    Path(session_id): Path<SessionId>,
    Json(request): Json<SaveResourceRequest>,
) -> impl IntoResponse {
    info!("POST /api/sessions/{}/resources/saved - '{}'", session_id, request.title);
    match state.resource_library_service.save_resource(session_id, &request.title) {
        Ok(outcome) => (StatusCode::OK, Json(ResourceMapper::to_save_response(outcome))).into_response(),
        Err(e) => error_response("save resource", e),
    }
}

#[cfg(test)]
mod tests {
    use crate::io::rest::test_support::{send, start_session, test_app};
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn test_search_filters() {
        let app = test_app();
        let session = start_session(&app).await;
        let uri = format!("/api/sessions/{}/resources", session);

        let (status, body) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["resources"].as_array().unwrap().len(), 4);

        let (_, body) = send(&app, Method::GET, &format!("{}?search=sensory", uri), None).await;
        let found = body["resources"].as_array().unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0]["title"], "Autism Sensory Strategies");

        let (_, body) = send(&app, Method::GET, &format!("{}?type=Guide&category=ADHD", uri), None).await;
        let found = body["resources"].as_array().unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0]["title"], "ADHD Medication Guide");

        let (_, body) = send(&app, Method::GET, &format!("{}?search=strategies&type=Book", uri), None).await;
        assert!(body["resources"].as_array().unwrap().is_empty());

        let unknown = format!("/api/sessions/{}/resources", shared::SessionId::new());
        let (status, _) = send(&app, Method::GET, &unknown, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_save_is_idempotent() {
        let app = test_app();
        let session = start_session(&app).await;
        let uri = format!("/api/sessions/{}/resources/saved", session);
        let request = json!({ "title": "Understanding IEP vs 504 Plans" });

        let (status, body) = send(&app, Method::POST, &uri, Some(request.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["saved"], true);

        let (_, body) = send(&app, Method::POST, &uri, Some(request)).await;
        assert_eq!(body["saved"], false);
        assert_eq!(body["message"], "Already in your library!");

        let (_, body) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(body["resources"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_title_is_bad_request() {
        let app = test_app();
        let session = start_session(&app).await;
        let uri = format!("/api/sessions/{}/resources/saved", session);

        let (status, _) = send(&app, Method::POST, &uri, Some(json!({ "title": "Made Up Book" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
