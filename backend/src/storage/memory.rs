//! In-memory session registry.
//!
//! Each session's `RecordStore` sits behind its own mutex, so requests for
//! different sessions never wait on each other and one request always sees a
//! consistent store. The registry lock is only held long enough to look up
//! or insert a session handle.
//!
//! The registry is bounded: a session idle for longer than the configured
//! timeout is treated as ended and swept when the next session is created,
//! and creation fails once `max_sessions` live sessions exist.

use shared::SessionId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use super::traits::SessionStorage;
use crate::domain::record_store::{RecordStore, StoreError};

/// Bounds on how many sessions live at once and for how long
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLimits {
    pub max_sessions: usize,
    /// None keeps idle sessions until they are ended explicitly
    pub idle_timeout: Option<Duration>,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            max_sessions: 1000,
            idle_timeout: Some(Duration::from_secs(2 * 60 * 60)),
        }
    }
}

struct SessionSlot {
    store: Mutex<RecordStore>,
    last_seen: Mutex<Instant>,
}

impl SessionSlot {
    fn new() -> Self {
        Self {
            store: Mutex::new(RecordStore::new()),
            last_seen: Mutex::new(Instant::now()),
        }
    }

    fn idle_for(&self) -> Duration {
        self.last_seen.lock().unwrap_or_else(PoisonError::into_inner).elapsed()
    }

    fn touch(&self) {
        *self.last_seen.lock().unwrap_or_else(PoisonError::into_inner) = Instant::now();
    }
}

type SessionHandle = Arc<SessionSlot>;

/// Registry of live sessions keyed by `SessionId`
#[derive(Clone, Default)]
pub struct InMemorySessionStorage {
    sessions: Arc<RwLock<HashMap<SessionId, SessionHandle>>>,
    limits: SessionLimits,
}

impl InMemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: SessionLimits) -> Self {
        Self {
            sessions: Arc::default(),
            limits,
        }
    }

    fn is_expired(&self, slot: &SessionSlot) -> bool {
        self.limits
            .idle_timeout
            .is_some_and(|timeout| slot.idle_for() > timeout)
    }

    fn handle(&self, session_id: SessionId) -> Result<SessionHandle, StoreError> {
        let sessions = self.sessions.read().unwrap_or_else(PoisonError::into_inner);
        let slot = sessions
            .get(&session_id)
            .filter(|slot| !self.is_expired(slot))
            .cloned()
            .ok_or(StoreError::SessionNotFound(session_id))?;
        slot.touch();
        Ok(slot)
    }
}

impl SessionStorage for InMemorySessionStorage {
    fn create_session(&self) -> Result<SessionId, StoreError> {
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);

        let before = sessions.len();
        sessions.retain(|_, slot| !self.is_expired(slot));
        if sessions.len() < before {
            info!("Expired {} idle sessions", before - sessions.len());
        }

        if sessions.len() >= self.limits.max_sessions {
            warn!("Refusing new session: {} sessions active", sessions.len());
            return Err(StoreError::SessionLimitReached {
                limit: self.limits.max_sessions,
            });
        }

        let session_id = SessionId::new();
        sessions.insert(session_id, Arc::new(SessionSlot::new()));
        info!("Started session {} ({} active)", session_id, sessions.len());
        Ok(session_id)
    }

    fn end_session(&self, session_id: SessionId) -> bool {
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        let existed = sessions.remove(&session_id).is_some();
        if existed {
            info!("Ended session {} ({} active)", session_id, sessions.len());
        } else {
            debug!("End requested for unknown session {}", session_id);
        }
        existed
    }

    fn session_exists(&self, session_id: SessionId) -> bool {
        self.handle(session_id).is_ok()
    }

    fn session_count(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|slot| !self.is_expired(slot))
            .count()
    }

    fn with_store<R, F>(&self, session_id: SessionId, read: F) -> Result<R, StoreError>
    where
        F: FnOnce(&RecordStore) -> R,
    {
        let handle = self.handle(session_id)?;
        let store = handle.store.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(read(&*store))
    }

    fn with_store_mut<R, F>(&self, session_id: SessionId, write: F) -> Result<R, StoreError>
    where
        F: FnOnce(&mut RecordStore) -> R,
    {
        let handle = self.handle(session_id)?;
        let mut store = handle.store.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(write(&mut *store))
    }
}
