//! # REST API for Directory Content
//!
//! Hotlines, crisis playbooks, form templates and external links are the
//! same for every session.

use axum::{extract::State, response::Json, routing::get, Router};
use shared::{CrisisPlaybook, Hotline, LinkCategory, TemplateCategory};
use tracing::info;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/catalog/hotlines", get(list_hotlines))
        .route("/catalog/playbooks", get(list_playbooks))
        .route("/catalog/templates", get(list_templates))
        .route("/catalog/links", get(list_links))
}

pub async fn list_hotlines(State(state): State<AppState>) -> Json<Vec<Hotline>> {
    info!("GET /api/catalog/hotlines");
    Json(state.catalog.hotlines().to_vec())
}

pub async fn list_playbooks(State(state): State<AppState>) -> Json<Vec<CrisisPlaybook>> {
    info!("GET /api/catalog/playbooks");
    Json(state.catalog.playbooks().to_vec())
}

pub async fn list_templates(State(state): State<AppState>) -> Json<Vec<TemplateCategory>> {
    info!("GET /api/catalog/templates");
    Json(state.catalog.templates().to_vec())
}

pub async fn list_links(State(state): State<AppState>) -> Json<Vec<LinkCategory>> {
    info!("GET /api/catalog/links");
    Json(state.catalog.links().to_vec())
}
