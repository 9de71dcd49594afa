pub mod record;
pub mod validation;

pub use record::{CrisisPlanPatch, Record, TaskPatch};
pub use validation::ValidationError;
