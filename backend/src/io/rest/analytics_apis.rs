//! # REST API for the Activity Summary

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use shared::SessionId;
use tracing::info;

use super::error_response;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/sessions/:session_id/analytics/summary", get(get_summary))
}

pub async fn get_summary(State(state): State<AppState>, Path(session_id): Path<SessionId>) -> impl IntoResponse {
    info!("GET /api/sessions/{}/analytics/summary", session_id);
    match state.analytics_service.summary(session_id) {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(e) => error_response("build activity summary", e),
    }
}
