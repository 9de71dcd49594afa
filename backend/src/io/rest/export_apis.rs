//! # REST API for Export
//!
//! `:collection` is a collection name (`milestones`, `tasks`, ...) or `all`
//! for a whole-session JSON snapshot. Files written by `to-path` always land
//! in the configured export directory; `subfolder` may only name a relative
//! folder inside it.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use shared::{ExportDataRequest, ExportToPathRequest, SessionId};
use tracing::info;

use super::{error_response, not_found};
use crate::domain::ExportTarget;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sessions/:session_id/export/:collection", get(export_data))
        .route("/sessions/:session_id/export/:collection/to-path", post(export_to_path))
}

fn parse_target(collection: &str) -> Result<ExportTarget, Response> {
    collection
        .parse::<ExportTarget>()
        .map_err(|_| not_found(format!("Nothing to export named '{}'", collection)))
}

pub async fn export_data(
    State(state): State<AppState>,
    Path((session_id, collection)): Path<(SessionId, String)>,
    Query(request): Query<ExportDataRequest>,
) -> impl IntoResponse {
    info!("📄 GET /api/sessions/{}/export/{} - format {:?}", session_id, collection, request.format);
    let target = match parse_target(&collection) {
        Ok(target) => target,
        Err(response) => return response,
    };

    match state.export_service.export_data(session_id, target, request.format) {
        Ok(export) => (StatusCode::OK, Json(export)).into_response(),
        Err(e) => error_response("export data", e),
    }
}

pub async fn export_to_path(
    State(state): State<AppState>,
    Path((session_id, collection)): Path<(SessionId, String)>,
    Json(request): Json<ExportToPathRequest>,
) -> impl IntoResponse {
    info!("📁 POST /api/sessions/{}/export/{}/to-path - {:?}", session_id, collection, request);
    let target = match parse_target(&collection) {
        Ok(target) => target,
        Err(response) => return response,
    };

    match state
        .export_service
        .export_to_path(session_id, target, request.format, request.subfolder)
    {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => error_response("export data to path", e),
    }
}
