//! Conversions between the public DTOs in `shared` and the domain's
//! internal command and result types.

pub mod contact_mapper;
pub mod crisis_plan_mapper;
pub mod emergency_contact_mapper;
pub mod milestone_mapper;
pub mod profile_mapper;
pub mod resource_mapper;
pub mod task_mapper;
pub mod wellbeing_mapper;
