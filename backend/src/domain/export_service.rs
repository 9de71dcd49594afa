//! Export service domain logic for the support hub.
//!
//! A session can export any one collection as CSV or JSON, or its whole store
//! as a single JSON snapshot. Export is one-way; nothing here reads files back.
//!
//! CSV output has one header row of field names and one row per record in
//! stored order. List fields are joined with "; " and missing optional values
//! are written as empty cells.

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use shared::{
    CollectionKind, Contact, CrisisPlan, EmergencyContact, ExportDataResponse, ExportFormat,
    ExportToPathResponse, MentalHealthCheck, MilestoneShare, SavedResource, SessionId, Task,
    UnknownValue, UserProfile,
};
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;
use tracing::{error, info, warn};

use crate::domain::models::{Record, ValidationError};
use crate::domain::record_store::{Collection, RecordStore};
use crate::domain::today;
use crate::storage::SessionStorage;

const LIST_SEPARATOR: &str = "; ";
const SNAPSHOT_NAME: &str = "support_hub";

/// A record that can be written as one CSV row
pub trait TabularRecord {
    /// Column names, in the order `row` writes them
    fn headers() -> &'static [&'static str];
    fn row(&self) -> Vec<String>;
}

fn opt(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn opt_date(value: &Option<NaiveDate>) -> String {
    value.map(|d| d.to_string()).unwrap_or_default()
}

impl TabularRecord for MilestoneShare {
    fn headers() -> &'static [&'static str] {
        &["text", "type", "child_age", "shared_by", "date", "public", "celebrations"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.text.clone(),
            self.milestone_type.to_string(),
            opt(&self.child_age),
            self.shared_by.clone(),
            self.date.to_string(),
            self.public.to_string(),
            self.celebrations.to_string(),
        ]
    }
}

impl TabularRecord for EmergencyContact {
    fn headers() -> &'static [&'static str] {
        &["name", "phone", "relationship", "email", "address", "notes", "primary", "added_date"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.phone.clone(),
            self.relationship.to_string(),
            opt(&self.email),
            opt(&self.address),
            opt(&self.notes),
            self.primary.to_string(),
            self.added_date.to_string(),
        ]
    }
}

impl TabularRecord for CrisisPlan {
    fn headers() -> &'static [&'static str] {
        &[
            "name",
            "type",
            "warning_signs",
            "immediate_steps",
            "contacts_to_call",
            "resources_needed",
            "notes",
            "created_date",
            "last_used",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.crisis_type.to_string(),
            self.warning_signs.clone(),
            self.immediate_steps.clone(),
            self.contacts_to_call.clone(),
            self.resources_needed.clone(),
            self.notes.clone(),
            self.created_date.to_string(),
            opt_date(&self.last_used),
        ]
    }
}

impl TabularRecord for MentalHealthCheck {
    fn headers() -> &'static [&'static str] {
        &[
            "date",
            "stress_level",
            "energy_level",
            "mood",
            "sleep_quality",
            "support_feeling",
            "coping_ability",
            "additional_concerns",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.date.to_string(),
            self.stress_level.to_string(),
            self.energy_level.to_string(),
            self.mood.to_string(),
            self.sleep_quality.to_string(),
            self.support_feeling.to_string(),
            self.coping_ability.to_string(),
            opt(&self.additional_concerns),
        ]
    }
}

impl TabularRecord for SavedResource {
    fn headers() -> &'static [&'static str] {
        &["title", "description", "type", "category", "topics", "length", "rating", "url"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.description.clone(),
            self.resource_type.to_string(),
            self.category.to_string(),
            self.topics.join(LIST_SEPARATOR),
            self.length.clone(),
            self.rating.to_string(),
            self.url.clone(),
        ]
    }
}

impl TabularRecord for Task {
    fn headers() -> &'static [&'static str] {
        &[
            "task",
            "category",
            "priority",
            "deadline",
            "status",
            "description",
            "assigned_to",
            "estimated_hours",
            "reminder_days",
            "created",
            "progress",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.task.clone(),
            self.category.clone(),
            self.priority.to_string(),
            self.deadline.to_string(),
            self.status.to_string(),
            self.description.clone(),
            self.assigned_to.clone(),
            self.estimated_hours.to_string(),
            self.reminder_days.to_string(),
            self.created.to_string(),
            self.progress.to_string(),
        ]
    }
}

impl TabularRecord for Contact {
    fn headers() -> &'static [&'static str] {
        &["name", "phone", "website", "category", "notes"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.phone.clone(),
            opt(&self.website),
            self.category.clone(),
            opt(&self.notes),
        ]
    }
}

/// What to export: one collection or the whole session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportTarget {
    Collection(CollectionKind),
    Everything,
}

impl ExportTarget {
    fn file_stem(&self) -> &'static str {
        match self {
            ExportTarget::Collection(kind) => kind.as_str(),
            ExportTarget::Everything => SNAPSHOT_NAME,
        }
    }
}

impl FromStr for ExportTarget {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(ExportTarget::Everything);
        }
        CollectionKind::from_str(s).map(ExportTarget::Collection)
    }
}

/// Whole-session JSON snapshot
#[derive(Serialize)]
struct SessionSnapshot<'a> {
    profile: &'a UserProfile,
    milestones: Vec<&'a MilestoneShare>,
    emergency_contacts: Vec<&'a EmergencyContact>,
    crisis_plans: Vec<&'a CrisisPlan>,
    mental_health_checks: Vec<&'a MentalHealthCheck>,
    saved_resources: Vec<&'a SavedResource>,
    tasks: Vec<&'a Task>,
    contacts: Vec<&'a Contact>,
}

impl<'a> SessionSnapshot<'a> {
    fn of(store: &'a RecordStore) -> Self {
        Self {
            profile: &store.profile,
            milestones: store.milestones.records().collect(),
            emergency_contacts: store.emergency_contacts.records().collect(),
            crisis_plans: store.crisis_plans.records().collect(),
            mental_health_checks: store.mental_health_checks.records().collect(),
            saved_resources: store.saved_resources.records().collect(),
            tasks: store.tasks.records().collect(),
            contacts: store.contacts.records().collect(),
        }
    }
}

/// Write a collection as CSV with a header row
pub fn to_csv<T: Record + TabularRecord>(collection: &Collection<T>) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(T::headers())?;
    for record in collection.records() {
        writer.write_record(record.row())?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

pub fn to_json<T: Record + Serialize>(collection: &Collection<T>) -> Result<String> {
    let records: Vec<&T> = collection.records().collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

fn render<T: Record + TabularRecord + Serialize>(collection: &Collection<T>, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Csv => to_csv(collection),
        ExportFormat::Json => to_json(collection),
    }
}

/// Render `target` from a store and count the records it holds
fn render_target(store: &RecordStore, target: ExportTarget, format: ExportFormat) -> Result<(String, usize)> {
    let kind = match target {
        ExportTarget::Everything => {
            if format == ExportFormat::Csv {
                return Err(ValidationError::UnsupportedExport {
                    format: format.as_str(),
                    target: "the whole session",
                }
                .into());
            }
            let count = CollectionKind::ALL.iter().map(|kind| store.len_of(*kind)).sum();
            let content = serde_json::to_string_pretty(&SessionSnapshot::of(store))?;
            return Ok((content, count));
        }
        ExportTarget::Collection(kind) => kind,
    };

    let content = match kind {
        CollectionKind::Milestones => render(&store.milestones, format)?,
        CollectionKind::EmergencyContacts => render(&store.emergency_contacts, format)?,
        CollectionKind::CrisisPlans => render(&store.crisis_plans, format)?,
        CollectionKind::MentalHealthChecks => render(&store.mental_health_checks, format)?,
        CollectionKind::SavedResources => render(&store.saved_resources, format)?,
        CollectionKind::Tasks => render(&store.tasks, format)?,
        CollectionKind::Contacts => render(&store.contacts, format)?,
    };
    Ok((content, store.len_of(kind)))
}

pub fn export_filename(target: ExportTarget, format: ExportFormat, on: NaiveDate) -> String {
    format!("{}_{}.{}", target.file_stem(), on.format("%Y%m%d"), format.as_str())
}

/// Export service that handles all export-related business logic
#[derive(Clone)]
pub struct ExportService<S: SessionStorage> {
    storage: S,
    default_format: ExportFormat,
    export_dir: Option<PathBuf>,
}

impl<S: SessionStorage> ExportService<S> {
    pub fn new(storage: S, default_format: ExportFormat, export_dir: Option<PathBuf>) -> Self {
        Self {
            storage,
            default_format,
            export_dir,
        }
    }

    pub fn export_data(
        &self,
        session_id: SessionId,
        target: ExportTarget,
        format: Option<ExportFormat>,
    ) -> Result<ExportDataResponse> {
        self.export_data_on(session_id, target, format, today())
    }

    /// Render `target` and name the file after `on`
    pub fn export_data_on(
        &self,
        session_id: SessionId,
        target: ExportTarget,
        format: Option<ExportFormat>,
        on: NaiveDate,
    ) -> Result<ExportDataResponse> {
        let format = format.unwrap_or(self.default_format);
        let (content, record_count) = self
            .storage
            .with_store(session_id, |store| render_target(store, target, format))??;

        let response = ExportDataResponse {
            filename: export_filename(target, format, on),
            record_count,
            format,
            content,
        };

        info!(
            "📄 EXPORT: Exported {} records for session {} as {} ({} bytes)",
            response.record_count,
            session_id,
            response.filename,
            response.content.len()
        );
        Ok(response)
    }

    /// Write an export into the configured export directory, or the user's
    /// Documents (then home) directory when none is configured.
    ///
    /// `subfolder` may name a relative folder under that directory; anything
    /// that would land outside it is rejected. File system failures are
    /// reported in the response, not as errors.
    pub fn export_to_path(
        &self,
        session_id: SessionId,
        target: ExportTarget,
        format: Option<ExportFormat>,
        subfolder: Option<String>,
    ) -> Result<ExportToPathResponse> {
        info!("📁 EXPORT: Exporting {:?} to path - subfolder: {:?}", target, subfolder);

        let Some(root) = self.default_export_dir() else {
            error!("❌ EXPORT: Could not determine default export directory");
            return Ok(ExportToPathResponse {
                success: false,
                message: "Failed to determine export directory".to_string(),
                file_path: String::new(),
                record_count: 0,
            });
        };

        let export_dir = match subfolder.as_deref() {
            Some(sub) => match resolve_subfolder(&root, sub) {
                Ok(dir) => dir,
                Err(e) => {
                    warn!("❌ EXPORT: Rejected subfolder {:?} for session {}: {}", sub, session_id, e);
                    return Err(e.into());
                }
            },
            None => root.clone(),
        };

        let export = self.export_data(session_id, target, format)?;

        if let Err(e) = fs::create_dir_all(&export_dir) {
            error!("❌ EXPORT: Failed to create export directory {:?}: {}", export_dir, e);
            return Ok(ExportToPathResponse {
                success: false,
                message: format!("Failed to create export directory: {}", e),
                file_path: export_dir.to_string_lossy().to_string(),
                record_count: 0,
            });
        }

        // A symlinked folder can still point elsewhere once it exists
        if let Err(e) = ensure_within(&root, &export_dir) {
            warn!("❌ EXPORT: {:?} resolves outside {:?}", export_dir, root);
            return Err(e.into());
        }

        let file_path = export_dir.join(&export.filename);
        let file_path_str = file_path.to_string_lossy().to_string();
        match fs::write(&file_path, &export.content) {
            Ok(()) => {
                info!("✅ EXPORT: Wrote {} records to {}", export.record_count, file_path_str);
                Ok(ExportToPathResponse {
                    success: true,
                    message: format!("File exported successfully to: {}", file_path_str),
                    file_path: file_path_str,
                    record_count: export.record_count,
                })
            }
            Err(e) => {
                warn!("❌ EXPORT: Failed to write export file to {:?}: {}", file_path, e);
                Ok(ExportToPathResponse {
                    success: false,
                    message: format!("Failed to write export file: {}", e),
                    file_path: file_path_str,
                    record_count: 0,
                })
            }
        }
    }

    fn default_export_dir(&self) -> Option<PathBuf> {
        self.export_dir
            .clone()
            .or_else(dirs::document_dir)
            .or_else(dirs::home_dir)
    }
}

/// Join a user-typed folder onto `root`.
///
/// Surrounding quotes, escaped spaces and trailing separators are cleaned up.
/// Only plain folder names are accepted: absolute paths, `..` and `~` are
/// rejected. A blank folder means `root` itself.
pub fn resolve_subfolder(root: &Path, subfolder: &str) -> Result<PathBuf, ValidationError> {
    let mut cleaned = subfolder.trim();
    for quote in ['"', '\''] {
        if cleaned.len() >= 2 && cleaned.starts_with(quote) && cleaned.ends_with(quote) {
            cleaned = &cleaned[1..cleaned.len() - 1];
            break;
        }
    }
    let cleaned = cleaned.trim().replace("\\ ", " ");

    let outside = || ValidationError::OutsideExportDir {
        path: subfolder.trim().to_string(),
    };
    if cleaned.starts_with('~') || cleaned.starts_with('\\') {
        return Err(outside());
    }

    let mut dir = root.to_path_buf();
    for component in Path::new(&cleaned).components() {
        match component {
            Component::Normal(name) => dir.push(name),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return Err(outside()),
        }
    }
    Ok(dir)
}

/// Fail unless `dir` resolves to `root` or a folder under it
fn ensure_within(root: &Path, dir: &Path) -> Result<(), ValidationError> {
    let outside = || ValidationError::OutsideExportDir {
        path: dir.to_string_lossy().to_string(),
    };
    let root = fs::canonicalize(root).map_err(|_| outside())?;
    let dir = fs::canonicalize(dir).map_err(|_| outside())?;
    if dir.starts_with(&root) {
        Ok(())
    } else {
        Err(outside())
    }
}
