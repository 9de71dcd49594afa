//! # REST API for the User Profile

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, put},
    Router,
};
use shared::{Preferences, ProfileResponse, SessionId, UpdateFamilyInfoRequest};
use tracing::info;

use super::error_response;
use super::mappers::profile_mapper::ProfileMapper;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sessions/:session_id/profile", get(get_profile).put(update_family_info))
        .route("/sessions/:session_id/profile/preferences", put(update_preferences))
}

pub async fn get_profile(State(state): State<AppState>, Path(session_id): Path<SessionId>) -> impl IntoResponse {
    info!("GET /api/sessions/{}/profile", session_id);
    match state.profile_service.get_profile(session_id) {
        Ok(profile) => (StatusCode::OK, Json(ProfileResponse { profile })).into_response(),
        Err(e) => error_response("get profile", e),
    }
}

pub async fn update_family_info(
    State(state): State<AppState>,
    Path(session_id): Path<SessionId>,
    Json(request): Json<UpdateFamilyInfoRequest>,
) -> impl IntoResponse {
    info!("PUT /api/sessions/{}/profile", session_id);
    let command = ProfileMapper::to_update_command(request);
    match state.profile_service.update_family_info(session_id, command) {
        Ok(profile) => (StatusCode::OK, Json(ProfileResponse { profile })).into_response(),
        Err(e) => error_response("update family information", e),
    }
}

pub async fn update_preferences(
    State(state): State<AppState>,
    Path(session_id): Path<SessionId>,
    Json(preferences): Json<Preferences>,
) -> impl IntoResponse {
    info!("PUT /api/sessions/{}/profile/preferences - {:?}", session_id, preferences);
    match state.profile_service.update_preferences(session_id, preferences) {
        Ok(profile) => (StatusCode::OK, Json(ProfileResponse { profile })).into_response(),
        Err(e) => error_response("update preferences", e),
    }
}
