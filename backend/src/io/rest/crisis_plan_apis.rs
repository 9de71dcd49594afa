//! # REST API for Crisis Plans

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{delete, get, post},
    Router,
};
use shared::{CreateCrisisPlanRequest, CrisisPlanListResponse, DeleteResponse, SessionId};
use tracing::info;

use super::error_response;
use super::mappers::crisis_plan_mapper::CrisisPlanMapper;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sessions/:session_id/crisis-plans", get(list_plans).post(create_plan))
        .route("/sessions/:session_id/crisis-plans/:index/activate", post(activate_plan))
        .route("/sessions/:session_id/crisis-plans/:index", delete(delete_plan))
}

pub async fn list_plans(State(state): State<AppState>, Path(session_id): Path<SessionId>) -> impl IntoResponse {
    info!("GET /api/sessions/{}/crisis-plans", session_id);
    match state.crisis_plan_service.list_plans(session_id) {
        Ok(plans) => (StatusCode::OK, Json(CrisisPlanListResponse { plans })).into_response(),
        Err(e) => error_response("list crisis plans", e),
    }
}

pub async fn create_plan(
    State(state): State<AppState>,
    Path(session_id): Path<SessionId>,
    Json(request): Json<CreateCrisisPlanRequest>,
) -> impl IntoResponse {
    info!("POST /api/sessions/{}/crisis-plans - {}", session_id, request.crisis_type);
    let command = CrisisPlanMapper::to_create_command(request);
    match state.crisis_plan_service.create_plan(session_id, command) {
        Ok(plan) => {
            let message = format!("Crisis plan '{}' created", plan.record.name);
            (StatusCode::CREATED, Json(CrisisPlanMapper::to_response(plan, message))).into_response()
        }
        Err(e) => error_response("create crisis plan", e),
    }
}

pub async fn activate_plan(
    State(state): State<AppState>,
    Path((session_id, index)): Path<(SessionId, usize)>,
) -> impl IntoResponse {
    info!("POST /api/sessions/{}/crisis-plans/{}/activate", session_id, index);
    match state.crisis_plan_service.activate_plan(session_id, index) {
        Ok(plan) => {
            let message = format!("Crisis plan '{}' activated", plan.record.name);
            (StatusCode::OK, Json(CrisisPlanMapper::to_response(plan, message))).into_response()
        }
        Err(e) => error_response("activate crisis plan", e),
    }
}

pub async fn delete_plan(
    State(state): State<AppState>,
    Path((session_id, index)): Path<(SessionId, usize)>,
) -> impl IntoResponse {
    info!("DELETE /api/sessions/{}/crisis-plans/{}", session_id, index);
    match state.crisis_plan_service.delete_plan(session_id, index) {
        Ok(plan) => {
            let response = DeleteResponse {
                deleted: true,
                message: format!("Crisis plan '{}' deleted", plan.name),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response("delete crisis plan", e),
    }
}
