//! # REST API for Emergency Contacts

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{delete, get},
    Router,
};
use shared::{AddEmergencyContactRequest, DeleteResponse, RecordId, SessionId};
use tracing::info;

use super::error_response;
use super::mappers::emergency_contact_mapper::EmergencyContactMapper;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/sessions/:session_id/emergency-contacts",
            get(list_emergency_contacts).post(add_emergency_contact),
        )
        .route(
            "/sessions/:session_id/emergency-contacts/:record_id",
            delete(delete_emergency_contact),
        )
}

pub async fn list_emergency_contacts(
    State(state): State<AppState>,
    Path(session_id): Path<SessionId>,
) -> impl IntoResponse {
    info!("GET /api/sessions/{}/emergency-contacts", session_id);
    match state.emergency_contact_service.list_contacts(session_id) {
        Ok(grouped) => (StatusCode::OK, Json(EmergencyContactMapper::to_list_response(grouped))).into_response(),
        Err(e) => error_response("list emergency contacts", e),
    }
}

pub async fn add_emergency_contact(
    State(state): State<AppState>,
    Path(session_id): Path<SessionId>,
    Json(request): Json<AddEmergencyContactRequest>,
) -> impl IntoResponse {
    info!("POST /api/sessions/{}/emergency-contacts - {}", session_id, request.relationship);
    let command = EmergencyContactMapper::to_add_command(request);
    match state.emergency_contact_service.add_contact(session_id, command) {
        Ok(contact) => (StatusCode::CREATED, Json(EmergencyContactMapper::to_add_response(contact))).into_response(),
        Err(e) => error_response("add emergency contact", e),
    }
}

/// Deleting a contact that is already gone reports `deleted: false`
pub async fn delete_emergency_contact(
    State(state): State<AppState>,
    Path((session_id, record_id)): Path<(SessionId, RecordId)>,
) -> impl IntoResponse {
    info!("DELETE /api/sessions/{}/emergency-contacts/{}", session_id, record_id);
    match state.emergency_contact_service.delete_contact(session_id, record_id) {
        Ok(deleted) => {
            let message = if deleted {
                "Emergency contact deleted".to_string()
            } else {
                "Emergency contact was already removed".to_string()
            };
            (StatusCode::OK, Json(DeleteResponse { deleted, message })).into_response()
        }
        Err(e) => error_response("delete emergency contact", e),
    }
}
