//! # Storage Module
//!
//! Holds session state for the support hub.
//!
//! There is no persistence layer: every session's records live in memory and
//! are discarded when the session ends or the process exits. The module still
//! sits behind a trait so the domain layer depends on the abstraction rather
//! than on the registry.
//!
//! ## Key Responsibilities
//!
//! - **Session Lifecycle**: Creating and ending isolated sessions
//! - **Scoped Access**: Lending exactly one session's `RecordStore` to a
//!   domain operation at a time
//! - **Isolation**: No operation can reach across sessions

pub mod memory;
pub mod traits;

pub use memory::{InMemorySessionStorage, SessionLimits};
pub use traits::SessionStorage;
