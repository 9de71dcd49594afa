//! # REST API for Milestones
//!
//! Sharing, listing (most recent first) and celebrating milestones.
//! `index` in the celebrate route is the `index` field of a listed milestone,
//! i.e. its stored position, not its position in the sorted list.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use shared::{CelebrateResponse, MilestoneListRequest, MilestoneListResponse, SessionId, ShareMilestoneRequest};
use tracing::info;

use super::error_response;
use super::mappers::milestone_mapper::MilestoneMapper;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sessions/:session_id/milestones", get(list_milestones).post(share_milestone))
        .route("/sessions/:session_id/milestones/:index/celebrate", post(celebrate_milestone))
}

pub async fn list_milestones(
    State(state): State<AppState>,
    Path(session_id): Path<SessionId>,
    Query(request): Query<MilestoneListRequest>,
) -> impl IntoResponse {
    info!("GET /api/sessions/{}/milestones - {:?}", session_id, request);
    let query = MilestoneMapper::to_list_query(request);
    match state.milestone_service.list_milestones(session_id, query) {
        Ok(milestones) => (StatusCode::OK, Json(MilestoneListResponse { milestones })).into_response(),
        Err(e) => error_response("list milestones", e),
    }
}

pub async fn share_milestone(
    State(state): State<AppState>,
    Path(session_id): Path<SessionId>,
    Json(request): Json<ShareMilestoneRequest>,
) -> impl IntoResponse {
    info!("POST /api/sessions/{}/milestones - type {}", session_id, request.milestone_type);
    let command = MilestoneMapper::to_share_command(request);
    match state.milestone_service.share_milestone(session_id, command) {
        Ok(milestone) => (StatusCode::CREATED, Json(MilestoneMapper::to_share_response(milestone))).into_response(),
        Err(e) => error_response("share milestone", e),
    }
}

pub async fn celebrate_milestone(
    State(state): State<AppState>,
    Path((session_id, index)): Path<(SessionId, usize)>,
) -> impl IntoResponse {
    info!("POST /api/sessions/{}/milestones/{}/celebrate", session_id, index);
    match state.milestone_service.celebrate(session_id, index) {
        Ok(celebrations) => (StatusCode::OK, Json(CelebrateResponse { index, celebrations })).into_response(),
        Err(e) => error_response("celebrate milestone", e),
    }
}
