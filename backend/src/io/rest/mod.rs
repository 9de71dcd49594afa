//! # REST API Interface Layer
//!
//! HTTP endpoints for the support hub, all nested under `/api`.
//!
//! Every feature area has its own `*_apis` module exposing a `router()`.
//! Session-scoped routes live under `/sessions/:session_id/...`; the
//! directory content is under `/catalog`.
//!
//! ## Error Translation
//!
//! - `ValidationError` => 400 Bad Request
//! - `StoreError` (unknown session, index out of range) => 404 Not Found
//! - `StoreError::SessionLimitReached` => 503 Service Unavailable
//! - anything else => 500 Internal Server Error
//!
//! Error bodies are always `ErrorResponse { error }`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    Router,
};
use shared::ErrorResponse;
use tracing::{error, warn};

use crate::domain::models::ValidationError;
use crate::domain::record_store::StoreError;
use crate::AppState;

pub mod analytics_apis;
pub mod catalog_apis;
pub mod contact_apis;
pub mod crisis_plan_apis;
pub mod emergency_contact_apis;
pub mod export_apis;
pub mod mappers;
pub mod milestone_apis;
pub mod profile_apis;
pub mod resource_apis;
pub mod session_apis;
pub mod task_apis;
pub mod wellbeing_apis;

#[cfg(test)]
pub(crate) mod test_support;

/// All API routes, to be nested under `/api`
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(session_apis::router())
        .merge(profile_apis::router())
        .merge(milestone_apis::router())
        .merge(emergency_contact_apis::router())
        .merge(crisis_plan_apis::router())
        .merge(wellbeing_apis::router())
        .merge(resource_apis::router())
        .merge(task_apis::router())
        .merge(contact_apis::router())
        .merge(analytics_apis::router())
        .merge(export_apis::router())
        .merge(catalog_apis::router())
}

/// HTTP status for a failed domain operation
pub fn status_for(e: &anyhow::Error) -> StatusCode {
    if e.downcast_ref::<ValidationError>().is_some() {
        return StatusCode::BAD_REQUEST;
    }
    match e.downcast_ref::<StoreError>() {
        Some(StoreError::SessionLimitReached { .. }) => StatusCode::SERVICE_UNAVAILABLE,
        Some(_) => StatusCode::NOT_FOUND,
        None => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Log a failed operation and turn it into an `ErrorResponse`
pub fn error_response(action: &str, e: anyhow::Error) -> Response {
    let status = status_for(&e);
    if status.is_server_error() {
        error!("❌ Failed to {}: {:?}", action, e);
    } else {
        warn!("Failed to {}: {}", action, e);
    }
    (status, Json(ErrorResponse { error: e.to_string() })).into_response()
}

/// A 404 for a path segment that names nothing
pub fn not_found(message: String) -> Response {
    warn!("{}", message);
    (StatusCode::NOT_FOUND, Json(ErrorResponse { error: message })).into_response()
}
