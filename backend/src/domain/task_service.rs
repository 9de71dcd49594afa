//! Task service domain logic for the support hub.
//!
//! ## Business Rules
//!
//! - A task needs a name; priority defaults to Medium and status to Not Started
//! - Estimated hours must be a finite, non-negative number
//! - Progress is clamped to 0-100 on create and on update
//! - Status may move freely in either direction
//! - A task is overdue when its deadline has passed and it is not completed

use anyhow::Result;
use chrono::NaiveDate;
use shared::{RecordView, SessionId, Task, TaskPriority, TaskStatus, TaskSummary};
use tracing::{debug, info, warn};

use crate::domain::commands::tasks::{CreateTaskCommand, TaskQuery, UpdateTaskCommand};
use crate::domain::models::validation::require;
use crate::domain::models::{TaskPatch, ValidationError};
use crate::domain::record_store::{to_views, StoreError};
use crate::domain::today;
use crate::storage::SessionStorage;

/// True when `task` satisfies every field present in `query`
pub fn matches_query(task: &Task, query: &TaskQuery) -> bool {
    let term_matches = match query.search.as_deref().map(str::trim) {
        None | Some("") => true,
        Some(term) => {
            let term = term.to_lowercase();
            task.task.to_lowercase().contains(&term) || task.description.to_lowercase().contains(&term)
        }
    };

    term_matches
        && query.status.map_or(true, |s| s == task.status)
        && query.priority.map_or(true, |p| p == task.priority)
        && query
            .category
            .as_deref()
            .map_or(true, |c| c.trim().eq_ignore_ascii_case(task.category.trim()))
}

pub fn is_overdue(task: &Task, today: NaiveDate) -> bool {
    task.deadline < today && task.status != TaskStatus::Completed
}

#[derive(Clone)]
pub struct TaskService<S: SessionStorage> {
    storage: S,
}

impl<S: SessionStorage> TaskService<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn create_task(&self, session_id: SessionId, command: CreateTaskCommand) -> Result<RecordView<Task>> {
        if let Err(e) = validate_create(&command) {
            warn!("Rejected task for session {}: {}", session_id, e);
            return Err(e.into());
        }

        let task = Task {
            task: command.task.trim().to_string(),
            category: command.category.trim().to_string(),
            priority: command.priority.unwrap_or(TaskPriority::Medium),
            deadline: command.deadline,
            status: command.status.unwrap_or(TaskStatus::NotStarted),
            description: command.description.trim().to_string(),
            assigned_to: command.assigned_to.trim().to_string(),
            estimated_hours: command.estimated_hours,
            reminder_days: command.reminder_days,
            created: command.created.unwrap_or_else(today),
            progress: command.progress.min(100),
        };

        let view = self.storage.with_store_mut(session_id, |store| {
            let id = store.tasks.append(task.clone());
            RecordView {
                index: store.tasks.len() - 1,
                id,
                record: task,
            }
        })?;

        info!("Created {} priority task '{}' for session {}", view.record.priority, view.record.task, session_id);
        Ok(view)
    }

    /// Tasks matching `query`, in stored order
    pub fn list_tasks(&self, session_id: SessionId, query: &TaskQuery) -> Result<Vec<RecordView<Task>>> {
        let tasks = self
            .storage
            .with_store(session_id, |store| to_views(store.tasks.filter(|task| matches_query(task, query))))?;
        debug!("Listed {} tasks for session {}", tasks.len(), session_id);
        Ok(tasks)
    }

    /// Change status, progress or both on the task at `index`
    pub fn update_task(&self, session_id: SessionId, index: usize, command: UpdateTaskCommand) -> Result<RecordView<Task>> {
        let mut patches = Vec::with_capacity(2);
        if let Some(status) = command.status {
            patches.push(TaskPatch::Status(status));
        }
        if let Some(progress) = command.progress {
            patches.push(TaskPatch::Progress(progress));
        }
        if patches.is_empty() {
            return Err(ValidationError::MissingField("status or progress").into());
        }

        let view = self.storage.with_store_mut(session_id, |store| -> Result<RecordView<Task>, StoreError> {
            let tasks = &mut store.tasks;
            if tasks.get(index).is_none() {
                return Err(StoreError::IndexOutOfRange {
                    collection: tasks.kind(),
                    index,
                    len: tasks.len(),
                });
            }
            for patch in patches {
                tasks.update_field(index, patch)?;
            }
            tasks
                .get(index)
                .map(|entry| entry.to_view(index))
                .ok_or(StoreError::IndexOutOfRange {
                    collection: tasks.kind(),
                    index,
                    len: tasks.len(),
                })
        })??;

        info!(
            "Updated task '{}' for session {} ({}, {}%)",
            view.record.task, session_id, view.record.status, view.record.progress
        );
        Ok(view)
    }

    pub fn delete_task(&self, session_id: SessionId, index: usize) -> Result<Task> {
        let entry = self
            .storage
            .with_store_mut(session_id, |store| store.tasks.delete_at(index))??;
        info!("Deleted task '{}' for session {}", entry.record.task, session_id);
        Ok(entry.record)
    }

    pub fn summary(&self, session_id: SessionId) -> Result<TaskSummary> {
        self.summary_on(session_id, today())
    }

    /// Task statistics with overdue counted against `on`
    pub fn summary_on(&self, session_id: SessionId, on: NaiveDate) -> Result<TaskSummary> {
        Ok(self.storage.with_store(session_id, |store| {
            let tasks = &store.tasks;
            TaskSummary {
                total: tasks.len(),
                by_status: tasks.count_by(|t| t.status),
                by_priority: tasks.count_by(|t| t.priority),
                total_estimated_hours: tasks.sum_by(|t| t.estimated_hours),
                average_progress: tasks.average_by(|t| t.progress as f64),
                overdue: tasks.records().filter(|t| is_overdue(t, on)).count(),
            }
        })?)
    }
}

fn validate_create(command: &CreateTaskCommand) -> Result<(), ValidationError> {
    require("task", &command.task)?;
    if !command.estimated_hours.is_finite() || command.estimated_hours < 0.0 {
        return Err(ValidationError::Negative { field: "estimated_hours" });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemorySessionStorage;

    fn setup() -> (TaskService<InMemorySessionStorage>, SessionId) {
        let storage = InMemorySessionStorage::new();
        let session_id = storage.create_session().unwrap();
        (TaskService::new(storage), session_id)
    }

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, m, d).unwrap()
    }

    fn new_task(name: &str, category: &str, deadline: NaiveDate) -> CreateTaskCommand {
        CreateTaskCommand {
            task: name.to_string(),
            category: category.to_string(),
            priority: None,
            deadline,
            status: None,
            description: String::new(),
            assigned_to: "Parent".to_string(),
            estimated_hours: 2.0,
            reminder_days: 1,
            progress: 0,
            created: Some(date(10, 1)),
        }
    }

    #[test]
    fn test_create_task_defaults() {
        let (service, session_id) = setup();
        let mut command = new_task("Schedule OT evaluation", "Therapy", date(11, 1));
        command.progress = 140;

        let view = service.create_task(session_id, command).unwrap();

        assert_eq!(view.record.priority, TaskPriority::Medium);
        assert_eq!(view.record.status, TaskStatus::NotStarted);
        assert_eq!(view.record.progress, 100);
    }

    #[test]
    fn test_create_task_validation() {
        let (service, session_id) = setup();

        let err = service.create_task(session_id, new_task(" ", "Therapy", date(11, 1))).unwrap_err();
        assert_eq!(err.downcast_ref::<ValidationError>(), Some(&ValidationError::MissingField("task")));

        let mut command = new_task("Refill prescription", "Medical", date(11, 1));
        command.estimated_hours = -1.0;
        let err = service.create_task(session_id, command.clone()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ValidationError>(),
            Some(&ValidationError::Negative { field: "estimated_hours" })
        );

        command.estimated_hours = f64::NAN;
        assert!(service.create_task(session_id, command).is_err());
        assert!(service.list_tasks(session_id, &TaskQuery::default()).unwrap().is_empty());
    }

    #[test]
    fn test_list_with_filters() {
        let (service, session_id) = setup();
        service.create_task(session_id, new_task("Call insurance about appeal", "Insurance", date(11, 1))).unwrap();
        let mut school = new_task("Prepare IEP notes", "School", date(11, 2));
        school.priority = Some(TaskPriority::High);
        school.description = "Bring last quarter's progress report".to_string();
        service.create_task(session_id, school).unwrap();

        let query = TaskQuery {
            category: Some("school".to_string()),
            ..TaskQuery::default()
        };
        assert_eq!(service.list_tasks(session_id, &query).unwrap().len(), 1);

        let query = TaskQuery {
            search: Some("PROGRESS REPORT".to_string()),
            priority: Some(TaskPriority::High),
            ..TaskQuery::default()
        };
        let found = service.list_tasks(session_id, &query).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].index, 1);

        let query = TaskQuery {
            status: Some(TaskStatus::Completed),
            ..TaskQuery::default()
        };
        assert!(service.list_tasks(session_id, &query).unwrap().is_empty());
    }

    #[test]
    fn test_update_status_and_progress() {
        let (service, session_id) = setup();
        service.create_task(session_id, new_task("Order sensory kit", "Home", date(11, 1))).unwrap();

        let view = service
            .update_task(session_id, 0, UpdateTaskCommand { status: Some(TaskStatus::InProgress), progress: Some(40) })
            .unwrap();
        assert_eq!(view.record.status, TaskStatus::InProgress);
        assert_eq!(view.record.progress, 40);

        let view = service
            .update_task(session_id, 0, UpdateTaskCommand { status: Some(TaskStatus::NotStarted), progress: None })
            .unwrap();
        assert_eq!(view.record.status, TaskStatus::NotStarted);
        assert_eq!(view.record.progress, 40);

        assert!(service.update_task(session_id, 0, UpdateTaskCommand::default()).is_err());
        let err = service
            .update_task(session_id, 3, UpdateTaskCommand { status: None, progress: Some(10) })
            .unwrap_err();
        assert!(err.downcast_ref::<StoreError>().is_some());
    }

    #[test]
    fn test_delete_task() {
        let (service, session_id) = setup();
        service.create_task(session_id, new_task("A", "Home", date(11, 1))).unwrap();
        service.create_task(session_id, new_task("B", "Home", date(11, 1))).unwrap();

        assert_eq!(service.delete_task(session_id, 0).unwrap().task, "A");
        assert!(service.delete_task(session_id, 1).is_err());
        assert_eq!(service.list_tasks(session_id, &TaskQuery::default()).unwrap().len(), 1);
    }

    #[test]
    fn test_summary() {
        let (service, session_id) = setup();
        let empty = service.summary_on(session_id, date(10, 15)).unwrap();
        assert_eq!(empty.total, 0);
        assert_eq!(empty.average_progress, None);

        service.create_task(session_id, new_task("Past due", "Medical", date(10, 1))).unwrap();
        let mut done = new_task("Past but done", "Medical", date(10, 2));
        done.status = Some(TaskStatus::Completed);
        done.progress = 100;
        service.create_task(session_id, done).unwrap();
        let mut upcoming = new_task("Upcoming", "School", date(12, 1));
        upcoming.estimated_hours = 1.5;
        upcoming.progress = 50;
        service.create_task(session_id, upcoming).unwrap();

        let summary = service.summary_on(session_id, date(10, 15)).unwrap();

        assert_eq!(summary.total, 3);
        assert_eq!(summary.overdue, 1);
        assert_eq!(summary.total_estimated_hours, 5.5);
        assert_eq!(summary.average_progress, Some(50.0));
        assert_eq!(summary.by_status[0].value, "Not Started");
        assert_eq!(summary.by_status[0].count, 2);
        assert_eq!(summary.by_status[0].percentage, 66.7);
        assert_eq!(summary.by_priority.len(), 1);
        assert_eq!(summary.by_priority[0].value, "Medium");
    }
}
