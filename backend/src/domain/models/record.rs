//! Typed records and the in-place edits each record type accepts.
//!
//! Record types themselves live in the `shared` crate so that every UI shell
//! sees the same shape. This module ties each of them to its collection and
//! declares its `Patch` type. Records that are never edited use
//! `Infallible`, so an edit to them cannot even be expressed.

use chrono::NaiveDate;
use shared::{
    CollectionKind, Contact, CrisisPlan, EmergencyContact, MentalHealthCheck, MilestoneShare,
    SavedResource, Task, TaskStatus,
};
use std::convert::Infallible;

/// A record type that can be held in a `Collection`
pub trait Record: Clone {
    /// The collection this record type belongs to
    const KIND: CollectionKind;

    /// Field-level edit accepted by `Collection::update_field`
    type Patch;

    fn apply_patch(&mut self, patch: Self::Patch);
}

/// Edits allowed on a task after creation
#[derive(Debug, Clone, PartialEq)]
pub enum TaskPatch {
    Status(TaskStatus),
    /// Clamped to 0-100
    Progress(u8),
}

/// Edits allowed on a crisis plan after creation
#[derive(Debug, Clone, PartialEq)]
pub enum CrisisPlanPatch {
    /// Plan was activated on the given date
    MarkUsed(NaiveDate),
}

impl Record for MilestoneShare {
    const KIND: CollectionKind = CollectionKind::Milestones;
    type Patch = Infallible;

    fn apply_patch(&mut self, patch: Self::Patch) {
        match patch {}
    }
}

impl Record for EmergencyContact {
    const KIND: CollectionKind = CollectionKind::EmergencyContacts;
    type Patch = Infallible;

    fn apply_patch(&mut self, patch: Self::Patch) {
        match patch {}
    }
}

impl Record for CrisisPlan {
    const KIND: CollectionKind = CollectionKind::CrisisPlans;
    type Patch = CrisisPlanPatch;

    fn apply_patch(&mut self, patch: Self::Patch) {
        match patch {
            CrisisPlanPatch::MarkUsed(date) => self.last_used = Some(date),
        }
    }
}

impl Record for MentalHealthCheck {
    const KIND: CollectionKind = CollectionKind::MentalHealthChecks;
    type Patch = Infallible;

    fn apply_patch(&mut self, patch: Self::Patch) {
        match patch {}
    }
}

impl Record for SavedResource {
    const KIND: CollectionKind = CollectionKind::SavedResources;
    type Patch = Infallible;

    fn apply_patch(&mut self, patch: Self::Patch) {
        match patch {}
    }
}

impl Record for Task {
    const KIND: CollectionKind = CollectionKind::Tasks;
    type Patch = TaskPatch;

    fn apply_patch(&mut self, patch: Self::Patch) {
        match patch {
            TaskPatch::Status(status) => self.status = status,
            TaskPatch::Progress(progress) => self.progress = progress.min(100),
        }
    }
}

impl Record for Contact {
    const KIND: CollectionKind = CollectionKind::Contacts;
    type Patch = Infallible;

    fn apply_patch(&mut self, patch: Self::Patch) {
        match patch {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::TaskPriority;

    fn sample_task() -> Task {
        Task {
            task: "Request IEP meeting".to_string(),
            category: "School".to_string(),
            priority: TaskPriority::High,
            deadline: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            status: TaskStatus::NotStarted,
            description: String::new(),
            assigned_to: String::new(),
            estimated_hours: 1.0,
            reminder_days: 3,
            created: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            progress: 0,
        }
    }

    #[test]
    fn test_task_status_can_move_backwards() {
        let mut task = sample_task();
        task.apply_patch(TaskPatch::Status(TaskStatus::Completed));
        task.apply_patch(TaskPatch::Status(TaskStatus::NotStarted));
        assert_eq!(task.status, TaskStatus::NotStarted);
    }

    #[test]
    fn test_task_progress_is_clamped() {
        let mut task = sample_task();
        task.apply_patch(TaskPatch::Progress(250));
        assert_eq!(task.progress, 100);
    }
}
