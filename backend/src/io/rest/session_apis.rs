//! # REST API for Sessions
//!
//! A session is one isolated user context. Every other session-scoped route
//! needs the id returned by `POST /api/sessions`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{delete, post},
    Router,
};
use shared::{CreateSessionResponse, EndSessionResponse, SessionId};
use tracing::info;

use super::error_response;
use crate::storage::SessionStorage;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sessions", post(create_session))
        .route("/sessions/:session_id", delete(end_session))
}

pub async fn create_session(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/sessions");
    match state.sessions.create_session() {
        Ok(session_id) => (StatusCode::CREATED, Json(CreateSessionResponse { session_id })).into_response(),
        Err(e) => error_response("create session", e.into()),
    }
}

/// Drop a session and everything in it. Ending an unknown session is not an error.
pub async fn end_session(State(state): State<AppState>, Path(session_id): Path<SessionId>) -> impl IntoResponse {
    info!("DELETE /api/sessions/{}", session_id);
    let ended = state.sessions.end_session(session_id);
    (StatusCode::OK, Json(EndSessionResponse { ended }))
}
