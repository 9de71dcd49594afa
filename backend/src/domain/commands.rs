//! Domain-level command and query types
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer is responsible for mapping the
//! public DTOs defined in the `shared` crate to these internal types.
//!
//! Dates are optional on every create command; services fall back to today.

pub mod profile {
    use shared::{Language, SupportNetworkMember};

    /// Input for saving the family information form.
    #[derive(Debug, Clone)]
    pub struct UpdateFamilyInfoCommand {
        pub parent_name: String,
        pub family_size: u8,
        pub location: String,
        pub primary_language: Language,
        pub support_network: Vec<SupportNetworkMember>,
        pub children_info: String,
    }
}

pub mod milestones {
    use chrono::NaiveDate;
    use shared::MilestoneType;

    /// Input for sharing a new milestone.
    #[derive(Debug, Clone)]
    pub struct ShareMilestoneCommand {
        pub text: String,
        pub milestone_type: MilestoneType,
        pub child_age: Option<String>,
        pub public: Option<bool>,
        pub date: Option<NaiveDate>,
    }

    /// Query parameters for listing milestones, most recent first.
    #[derive(Debug, Clone, Default)]
    pub struct MilestoneListQuery {
        pub limit: Option<usize>,
        pub public_only: bool,
    }
}

pub mod emergency_contacts {
    use chrono::NaiveDate;
    use shared::Relationship;

    /// Input for adding an emergency contact.
    #[derive(Debug, Clone)]
    pub struct AddEmergencyContactCommand {
        pub name: String,
        pub phone: String,
        pub relationship: Relationship,
        pub email: Option<String>,
        pub address: Option<String>,
        pub notes: Option<String>,
        pub primary: bool,
        pub date: Option<NaiveDate>,
    }
}

pub mod crisis_plans {
    use chrono::NaiveDate;
    use shared::CrisisType;

    /// Input for creating a crisis response plan.
    #[derive(Debug, Clone)]
    pub struct CreateCrisisPlanCommand {
        pub name: String,
        pub crisis_type: CrisisType,
        pub warning_signs: String,
        pub immediate_steps: String,
        pub contacts_to_call: String,
        pub resources_needed: String,
        pub notes: String,
        pub date: Option<NaiveDate>,
    }
}

pub mod wellbeing {
    use chrono::NaiveDate;
    use shared::{CopingAbility, EnergyLevel, Mood, SleepQuality, StressLevel, SupportFeeling};

    /// Input for recording a mental health check-in.
    #[derive(Debug, Clone)]
    pub struct RecordCheckInCommand {
        pub stress_level: StressLevel,
        pub energy_level: EnergyLevel,
        pub mood: Mood,
        pub sleep_quality: SleepQuality,
        pub support_feeling: SupportFeeling,
        pub coping_ability: CopingAbility,
        pub additional_concerns: Option<String>,
        pub date: Option<NaiveDate>,
    }
}

pub mod resources {
    use shared::{ResourceCategory, ResourceType};

    /// Conjunctive catalogue search; every present field must match.
    #[derive(Debug, Clone, Default)]
    pub struct ResourceQuery {
        /// Case-insensitive substring of title, description or any topic
        pub search: Option<String>,
        pub category: Option<ResourceCategory>,
        pub resource_type: Option<ResourceType>,
    }
}

pub mod tasks {
    use chrono::NaiveDate;
    use shared::{TaskPriority, TaskStatus};

    /// Input for creating a task.
    #[derive(Debug, Clone)]
    pub struct CreateTaskCommand {
        pub task: String,
        pub category: String,
        pub priority: Option<TaskPriority>,
        pub deadline: NaiveDate,
        pub status: Option<TaskStatus>,
        pub description: String,
        pub assigned_to: String,
        pub estimated_hours: f64,
        pub reminder_days: u32,
        pub progress: u8,
        pub created: Option<NaiveDate>,
    }

    /// Conjunctive task filter; every present field must match.
    #[derive(Debug, Clone, Default)]
    pub struct TaskQuery {
        pub status: Option<TaskStatus>,
        pub priority: Option<TaskPriority>,
        /// Exact category, compared case-insensitively
        pub category: Option<String>,
        /// Case-insensitive substring of the task name or description
        pub search: Option<String>,
    }

    /// Command for editing a task in place.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateTaskCommand {
        pub status: Option<TaskStatus>,
        pub progress: Option<u8>,
    }
}

pub mod contacts {
    /// Input for adding a directory contact.
    #[derive(Debug, Clone)]
    pub struct AddContactCommand {
        pub name: String,
        pub phone: String,
        pub website: Option<String>,
        pub category: String,
        pub notes: Option<String>,
    }
}
