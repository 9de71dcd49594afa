//! # Domain Module
//!
//! Contains all business logic for the support hub.
//!
//! Every operation runs against exactly one session's `RecordStore`, reached
//! through the `SessionStorage` abstraction. Nothing in this module knows
//! about HTTP, files on disk (apart from export) or any UI.
//!
//! ## Module Organization
//!
//! - **record_store**: Collections, the per-session store and its aggregates
//! - **models**: Record edits (`Record`, patches) and validation errors
//! - **commands**: Internal input types mapped from the shared DTOs
//! - **catalog**: Read-only directory content (resources, hotlines, playbooks)
//! - **\*_service**: One service per feature area
//!
//! ## Core Concepts
//!
//! - **Record Store**: The in-memory holder of all collections of one session
//! - **Collection**: An insertion-ordered sequence of records of one type
//! - **Ordinal scale**: A closed set whose declaration order is meaningful
//!
//! ## Business Rules
//!
//! - Records are validated when they are created, never when they are shown
//! - A rejected command leaves the store untouched
//! - Index-addressed operations address stored order, not a sorted view
//! - Every mutation returns the affected record so callers can re-fetch views

use chrono::NaiveDate;

pub mod analytics_service;
pub mod catalog;
pub mod commands;
pub mod contact_service;
pub mod crisis_plan_service;
pub mod emergency_contact_service;
pub mod export_service;
pub mod milestone_service;
pub mod models;
pub mod profile_service;
pub mod record_store;
pub mod resource_library_service;
pub mod task_service;
pub mod wellbeing_service;

pub use analytics_service::AnalyticsService;
pub use catalog::{BuiltInCatalog, ResourceCatalog};
pub use contact_service::ContactService;
pub use crisis_plan_service::CrisisPlanService;
pub use emergency_contact_service::EmergencyContactService;
pub use export_service::{ExportService, ExportTarget};
pub use milestone_service::MilestoneService;
pub use profile_service::ProfileService;
pub use record_store::{RecordStore, StoreError};
pub use resource_library_service::{ResourceLibraryService, SaveOutcome};
pub use task_service::TaskService;
pub use wellbeing_service::WellbeingService;

/// Local calendar date used as the default for every dated record
pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
