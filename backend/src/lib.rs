//! # Support Hub Backend
//!
//! Contains all non-UI logic for the Special Needs Parenting Support Hub.
//!
//! This crate brings together:
//! - **Domain**: Business rules for profiles, milestones, crisis planning,
//!   wellbeing check-ins, resources, tasks, contacts, analytics and export
//! - **Storage**: The in-memory session registry
//! - **IO**: The REST interface exposed to the UI
//!
//! ## Architecture
//!
//! ```text
//! UI Layer (any HTTP client)
//!     ↓
//! IO Layer (REST API, handlers, mappers)
//!     ↓
//! Domain Layer (services, record store)
//!     ↓
//! Storage Layer (session registry)
//! ```
//!
//! ## Key Responsibilities
//!
//! - Initialize the application state from `HubConfig`
//! - Set up the REST router with CORS and optional static file serving

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

use crate::config::HubConfig;
use crate::domain::{
    AnalyticsService, BuiltInCatalog, ContactService, CrisisPlanService, EmergencyContactService,
    ExportService, MilestoneService, ProfileService, ResourceCatalog, ResourceLibraryService,
    TaskService, WellbeingService,
};
use crate::storage::InMemorySessionStorage;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<HubConfig>,
    pub sessions: InMemorySessionStorage,
    pub catalog: Arc<dyn ResourceCatalog>,
    pub profile_service: ProfileService<InMemorySessionStorage>,
    pub milestone_service: MilestoneService<InMemorySessionStorage>,
    pub emergency_contact_service: EmergencyContactService<InMemorySessionStorage>,
    pub crisis_plan_service: CrisisPlanService<InMemorySessionStorage>,
    pub wellbeing_service: WellbeingService<InMemorySessionStorage>,
    pub resource_library_service: ResourceLibraryService<InMemorySessionStorage>,
    pub task_service: TaskService<InMemorySessionStorage>,
    pub contact_service: ContactService<InMemorySessionStorage>,
    pub analytics_service: AnalyticsService<InMemorySessionStorage>,
    pub export_service: ExportService<InMemorySessionStorage>,
}

/// Initialize the backend with the built-in catalogue
pub fn initialize_backend(config: HubConfig) -> AppState {
    initialize_backend_with_catalog(config, Arc::new(BuiltInCatalog::new()))
}

pub fn initialize_backend_with_catalog(config: HubConfig, catalog: Arc<dyn ResourceCatalog>) -> AppState {
    info!("Setting up session storage");
    let sessions = InMemorySessionStorage::with_limits(config.session_limits());

    info!("Setting up domain services");
    let export_service = ExportService::new(
        sessions.clone(),
        config.default_export_format,
        config.export_dir.clone(),
    );

    AppState {
        profile_service: ProfileService::new(sessions.clone()),
        milestone_service: MilestoneService::new(sessions.clone()),
        emergency_contact_service: EmergencyContactService::new(sessions.clone()),
        crisis_plan_service: CrisisPlanService::new(sessions.clone()),
        wellbeing_service: WellbeingService::new(sessions.clone()),
        resource_library_service: ResourceLibraryService::new(sessions.clone(), catalog.clone()),
        task_service: TaskService::new(sessions.clone()),
        contact_service: ContactService::new(sessions.clone(), catalog.clone()),
        analytics_service: AnalyticsService::new(sessions.clone()),
        export_service,
        catalog,
        sessions,
        config: Arc::new(config),
    }
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Result<Router> {
    let origin = app_state
        .config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin '{}'", app_state.config.cors_origin))?;

    // CORS setup to allow the frontend to make requests
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::PATCH, Method::DELETE])
        .allow_headers(Any);

    let static_dir = app_state.config.static_dir.clone();

    let mut router = Router::new().nest("/api", io::rest::api_router());
    if let Some(dir) = static_dir {
        info!("Serving static files from {}", dir.display());
        router = router.fallback_service(ServeDir::new(dir));
    }

    Ok(router.layer(cors).with_state(app_state))
}
