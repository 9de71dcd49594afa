//! # REST API for Tasks
//!
//! Task CRUD plus the summary statistics. `index` is the stored position
//! reported in each listed task.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, patch},
    Router,
};
use shared::{
    CreateTaskRequest, DeleteResponse, SessionId, TaskFilterRequest, TaskListResponse, TaskResponse, UpdateTaskRequest,
};
use tracing::info;

use super::error_response;
use super::mappers::task_mapper::TaskMapper;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sessions/:session_id/tasks", get(list_tasks).post(create_task))
        .route("/sessions/:session_id/tasks/summary", get(get_summary))
        .route("/sessions/:session_id/tasks/:index", patch(update_task).delete(delete_task))
}

pub async fn list_tasks(
    State(state): State<AppState>,
    Path(session_id): Path<SessionId>,
    Query(request): Query<TaskFilterRequest>,
) -> impl IntoResponse {
    info!("GET /api/sessions/{}/tasks - {:?}", session_id, request);
    let query = TaskMapper::to_query(request);
    match state.task_service.list_tasks(session_id, &query) {
        Ok(tasks) => (StatusCode::OK, Json(TaskListResponse { tasks })).into_response(),
        Err(e) => error_response("list tasks", e),
    }
}

pub async fn create_task(
    State(state): State<AppState>,
    Path(session_id): Path<SessionId>,
    Json(request): Json<CreateTaskRequest>,
) -> impl IntoResponse {
    info!("POST /api/sessions/{}/tasks - '{}'", session_id, request.task);
    let command = TaskMapper::to_create_command(request);
    match state.task_service.create_task(session_id, command) {
        Ok(task) => {
            let response = TaskResponse {
                success_message: format!("Task '{}' added", task.record.task),
                task,
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => error_response("create task", e),
    }
}

pub async fn update_task(
    State(state): State<AppState>,
    Path((session_id, index)): Path<(SessionId, usize)>,
    Json(request): Json<UpdateTaskRequest>,
) -> impl IntoResponse {
    info!("PATCH /api/sessions/{}/tasks/{} - {:?}", session_id, index, request);
    let command = TaskMapper::to_update_command(request);
    match state.task_service.update_task(session_id, index, command) {
        Ok(task) => {
            let response = TaskResponse {
                success_message: format!("Task '{}' updated", task.record.task),
                task,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response("update task", e),
    }
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path((session_id, index)): Path<(SessionId, usize)>,
) -> impl IntoResponse {
    info!("DELETE /api/sessions/{}/tasks/{}", session_id, index);
    match state.task_service.delete_task(session_id, index) {
        Ok(task) => {
            let response = DeleteResponse {
                deleted: true,
                message: format!("Task '{}' deleted", task.task),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response("delete task", e),
    }
}

pub async fn get_summary(State(state): State<AppState>, Path(session_id): Path<SessionId>) -> impl IntoResponse {
    info!("GET /api/sessions/{}/tasks/summary", session_id);
    match state.task_service.summary(session_id) {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(e) => error_response("summarize tasks", e),
    }
}
