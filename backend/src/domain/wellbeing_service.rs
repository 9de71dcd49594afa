//! Mental health check-in service for the support hub.
//!
//! Check-ins are append-only. Reads present them most recent first, and the
//! trend compares the two most recent check-ins by scale position rather than
//! by label.

use anyhow::Result;
use shared::{MentalHealthCheck, Mood, RecordView, SessionId, StressLevel, TrendReport};
use tracing::{debug, info};

use crate::domain::commands::wellbeing::RecordCheckInCommand;
use crate::domain::models::validation::optional_text;
use crate::domain::record_store::to_views;
use crate::domain::today;
use crate::storage::SessionStorage;

pub const SELF_CARE_SUGGESTION: &str =
    "Immediate self-care suggestions: Take deep breaths, call a friend, go for a walk, or practice mindfulness.";

/// Outcome of recording a check-in
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCheckIn {
    pub check_in: RecordView<MentalHealthCheck>,
    pub needs_support: bool,
    pub suggestion: Option<String>,
}

/// True when stress is high or mood is low
pub fn needs_support(check_in: &MentalHealthCheck) -> bool {
    matches!(check_in.stress_level, StressLevel::High | StressLevel::VeryHigh)
        || matches!(check_in.mood, Mood::Low | Mood::VeryLow)
}

#[derive(Clone)]
pub struct WellbeingService<S: SessionStorage> {
    storage: S,
}

impl<S: SessionStorage> WellbeingService<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn record_check_in(&self, session_id: SessionId, command: RecordCheckInCommand) -> Result<RecordedCheckIn> {
        let check_in = MentalHealthCheck {
            date: command.date.unwrap_or_else(today),
            stress_level: command.stress_level,
            energy_level: command.energy_level,
            mood: command.mood,
            sleep_quality: command.sleep_quality,
            support_feeling: command.support_feeling,
            coping_ability: command.coping_ability,
            additional_concerns: optional_text(command.additional_concerns),
        };

        let view = self.storage.with_store_mut(session_id, |store| {
            let id = store.mental_health_checks.append(check_in.clone());
            RecordView {
                index: store.mental_health_checks.len() - 1,
                id,
                record: check_in,
            }
        })?;

        let needs_support = needs_support(&view.record);
        info!(
            "Recorded check-in for session {} (stress {}, mood {}, needs support: {})",
            session_id, view.record.stress_level, view.record.mood, needs_support
        );

        Ok(RecordedCheckIn {
            check_in: view,
            needs_support,
            suggestion: needs_support.then(|| SELF_CARE_SUGGESTION.to_string()),
        })
    }

    /// Check-ins most recent first, at most `limit` of them
    pub fn list_recent(&self, session_id: SessionId, limit: Option<usize>) -> Result<Vec<RecordView<MentalHealthCheck>>> {
        let check_ins = self.storage.with_store(session_id, |store| {
            let mut recent = store.recent_check_ins();
            if let Some(limit) = limit {
                recent.truncate(limit);
            }
            to_views(recent)
        })?;

        debug!("Listed {} check-ins for session {}", check_ins.len(), session_id);
        Ok(check_ins)
    }

    /// None until at least two check-ins exist
    pub fn trend(&self, session_id: SessionId) -> Result<Option<TrendReport>> {
        Ok(self.storage.with_store(session_id, |store| store.wellbeing_trend())?)
    }
}
