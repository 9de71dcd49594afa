//! # REST API for the Contact Directory

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use shared::{AddContactRequest, ContactListResponse, ContactResponse, SaveHotlineRequest, SessionId};
use tracing::info;

use super::error_response;
use super::mappers::contact_mapper::ContactMapper;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sessions/:session_id/contacts", get(list_contacts).post(add_contact))
        .route("/sessions/:session_id/contacts/from-hotline", post(save_hotline))
}

pub async fn list_contacts(State(state): State<AppState>, Path(session_id): Path<SessionId>) -> impl IntoResponse {
    info!("GET /api/sessions/{}/contacts", session_id);
    match state.contact_service.list_contacts(session_id) {
        Ok(contacts) => (StatusCode::OK, Json(ContactListResponse { contacts })).into_response(),
        Err(e) => error_response("list contacts", e),
    }
}

pub async fn add_contact(
    State(state): State<AppState>,
    Path(session_id): Path<SessionId>,
    Json(request): Json<AddContactRequest>,
) -> impl IntoResponse {
    info!("POST /api/sessions/{}/contacts", session_id);
    let command = ContactMapper::to_add_command(request);
    match state.contact_service.add_contact(session_id, command) {
        Ok(contact) => {
            let response = ContactResponse {
                message: format!("Added {} to contacts", contact.record.name),
                contact: Some(contact),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => error_response("add contact", e),
    }
}

pub async fn save_hotline(
    State(state): State<AppState>,
    Path(session_id): Path<SessionId>,
    Json(request): Json<SaveHotlineRequest>,
) -> impl IntoResponse {
    info!("POST /api/sessions/{}/contacts/from-hotline - '{}'", session_id, request.hotline_name);
    match state.contact_service.save_hotline(session_id, &request.hotline_name) {
        Ok(saved) => (StatusCode::OK, Json(ContactMapper::to_hotline_response(saved))).into_response(),
        Err(e) => error_response("save hotline", e),
    }
}
