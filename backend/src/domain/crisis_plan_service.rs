//! Crisis plan service domain logic for the support hub.
//!
//! ## Business Rules
//!
//! - A plan needs a name and at least one immediate step
//! - `last_used` stays empty until the plan is first activated and is
//!   overwritten on every activation
//! - Activation and deletion address plans by stored position

use anyhow::Result;
use chrono::NaiveDate;
use shared::{CrisisPlan, RecordView, SessionId};
use tracing::{debug, info, warn};

use crate::domain::commands::crisis_plans::CreateCrisisPlanCommand;
use crate::domain::models::validation::require;
use crate::domain::models::CrisisPlanPatch;
use crate::domain::record_store::to_views;
use crate::domain::today;
use crate::storage::SessionStorage;

#[derive(Clone)]
pub struct CrisisPlanService<S: SessionStorage> {
    storage: S,
}

impl<S: SessionStorage> CrisisPlanService<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn create_plan(&self, session_id: SessionId, command: CreateCrisisPlanCommand) -> Result<RecordView<CrisisPlan>> {
        for (field, value) in [("name", &command.name), ("immediate_steps", &command.immediate_steps)] {
            if let Err(e) = require(field, value) {
                warn!("Rejected crisis plan for session {}: {}", session_id, e);
                return Err(e.into());
            }
        }

        let plan = CrisisPlan {
            name: command.name.trim().to_string(),
            crisis_type: command.crisis_type,
            warning_signs: command.warning_signs.trim().to_string(),
            immediate_steps: command.immediate_steps.trim().to_string(),
            contacts_to_call: command.contacts_to_call.trim().to_string(),
            resources_needed: command.resources_needed.trim().to_string(),
            notes: command.notes.trim().to_string(),
            created_date: command.date.unwrap_or_else(today),
            last_used: None,
        };

        let view = self.storage.with_store_mut(session_id, |store| {
            let id = store.crisis_plans.append(plan.clone());
            RecordView {
                index: store.crisis_plans.len() - 1,
                id,
                record: plan,
            }
        })?;

        info!("Created {} crisis plan '{}' for session {}", view.record.crisis_type, view.record.name, session_id);
        Ok(view)
    }

    pub fn list_plans(&self, session_id: SessionId) -> Result<Vec<RecordView<CrisisPlan>>> {
        let plans = self
            .storage
            .with_store(session_id, |store| to_views(store.crisis_plans.all()))?;
        debug!("Listed {} crisis plans for session {}", plans.len(), session_id);
        Ok(plans)
    }

    pub fn activate_plan(&self, session_id: SessionId, index: usize) -> Result<RecordView<CrisisPlan>> {
        self.activate_plan_on(session_id, index, today())
    }

    /// Record that the plan at `index` was put into use on `on`
    pub fn activate_plan_on(&self, session_id: SessionId, index: usize, on: NaiveDate) -> Result<RecordView<CrisisPlan>> {
        let view = self.storage.with_store_mut(session_id, |store| {
            store
                .crisis_plans
                .update_field(index, CrisisPlanPatch::MarkUsed(on))
                .map(|entry| entry.to_view(index))
        })??;

        info!("Activated crisis plan '{}' for session {}", view.record.name, session_id);
        Ok(view)
    }

    pub fn delete_plan(&self, session_id: SessionId, index: usize) -> Result<CrisisPlan> {
        let entry = self
            .storage
            .with_store_mut(session_id, |store| store.crisis_plans.delete_at(index))??;

        info!("Deleted crisis plan '{}' for session {}", entry.record.name, session_id);
        Ok(entry.record)
    }
}
