use shared::{CreateTaskRequest, TaskFilterRequest, UpdateTaskRequest};

use crate::domain::commands::tasks::{CreateTaskCommand, TaskQuery, UpdateTaskCommand};

pub struct TaskMapper;

impl TaskMapper {
    pub fn to_create_command(request: CreateTaskRequest) -> CreateTaskCommand {
        CreateTaskCommand {
            task: request.task,
            category: request.category,
            priority: request.priority,
            deadline: request.deadline,
            status: request.status,
            description: request.description,
            assigned_to: request.assigned_to,
            estimated_hours: request.estimated_hours,
            reminder_days: request.reminder_days,
            progress: request.progress,
            created: request.created,
        }
    }

    pub fn to_query(request: TaskFilterRequest) -> TaskQuery {
        TaskQuery {
            status: request.status,
            priority: request.priority,
            category: request.category,
            search: request.search,
        }
    }

    pub fn to_update_command(request: UpdateTaskRequest) -> UpdateTaskCommand {
        UpdateTaskCommand {
            status: request.status,
            progress: request.progress,
        }
    }
}
