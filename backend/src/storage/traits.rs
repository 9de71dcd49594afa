//! # Storage Traits
//!
//! The session storage abstraction the domain services are written against.
//! A backend decides where `RecordStore`s live; services only ever see one
//! session's store at a time, through a closure, for the length of one
//! operation.

use shared::SessionId;

use crate::domain::record_store::{RecordStore, StoreError};

/// Trait defining the interface for session-scoped record stores
///
/// Implementations must keep sessions isolated: a closure handed a store for
/// one session can never observe or mutate another session's store.
pub trait SessionStorage: Send + Sync + Clone {
    /// Start a new session with an empty store
    /// Fails with `SessionLimitReached` when the registry is full
    fn create_session(&self) -> Result<SessionId, StoreError>;

    /// Drop a session and all of its records
    /// Returns true if the session existed
    fn end_session(&self, session_id: SessionId) -> bool;

    fn session_exists(&self, session_id: SessionId) -> bool;

    fn session_count(&self) -> usize;

    /// Run a read-only operation against one session's store
    fn with_store<R, F>(&self, session_id: SessionId, read: F) -> Result<R, StoreError>
    where
        F: FnOnce(&RecordStore) -> R;

    /// Run a read-modify operation against one session's store
    fn with_store_mut<R, F>(&self, session_id: SessionId, write: F) -> Result<R, StoreError>
    where
        F: FnOnce(&mut RecordStore) -> R;
}
