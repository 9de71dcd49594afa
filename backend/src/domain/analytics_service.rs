//! Activity summary and recommendations for one session.

use anyhow::Result;
use shared::{ActivitySummary, SessionId};
use tracing::debug;

use crate::domain::record_store::RecordStore;
use crate::storage::SessionStorage;

pub const ADD_EMERGENCY_CONTACT: &str = "Add at least one emergency contact for safety";
pub const CREATE_CRISIS_PLAN: &str = "Create a crisis response plan to be prepared";
pub const COMPLETE_PROFILE: &str = "Complete your profile information";
pub const SHARE_FIRST_MILESTONE: &str = "Share your first milestone with the community";
pub const FIRST_CHECK_IN: &str = "Complete a mental health check-in to track your wellbeing";

/// Next steps for a session, in display order
pub fn recommendations(store: &RecordStore) -> Vec<String> {
    [
        (store.emergency_contacts.is_empty(), ADD_EMERGENCY_CONTACT),
        (store.crisis_plans.is_empty(), CREATE_CRISIS_PLAN),
        (store.profile.parent_name.trim().is_empty(), COMPLETE_PROFILE),
        (store.milestones.is_empty(), SHARE_FIRST_MILESTONE),
        (store.mental_health_checks.is_empty(), FIRST_CHECK_IN),
    ]
    .into_iter()
    .filter(|(missing, _)| *missing)
    .map(|(_, text)| text.to_string())
    .collect()
}

pub fn activity_summary(store: &RecordStore) -> ActivitySummary {
    let total_celebrations: u64 = store.milestones.records().map(|m| m.celebrations as u64).sum();
    let most_celebrated = if total_celebrations > 0 {
        store
            .milestones
            .max_by(|m| m.celebrations)
            .map(|(index, entry)| entry.to_view(index))
    } else {
        None
    };

    ActivitySummary {
        milestones: store.milestones.len(),
        emergency_contacts: store.emergency_contacts.len(),
        crisis_plans: store.crisis_plans.len(),
        saved_resources: store.saved_resources.len(),
        mental_health_checks: store.mental_health_checks.len(),
        tasks: store.tasks.len(),
        contacts: store.contacts.len(),
        total_celebrations,
        most_celebrated,
        milestones_by_type: store.milestones.count_by(|m| m.milestone_type),
        engagement_score: store.engagement_score(),
        profile_completion: store.profile_completion(),
        recommendations: recommendations(store),
    }
}

#[derive(Clone)]
pub struct AnalyticsService<S: SessionStorage> {
    storage: S,
}

impl<S: SessionStorage> AnalyticsService<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn summary(&self, session_id: SessionId) -> Result<ActivitySummary> {
        let summary = self.storage.with_store(session_id, activity_summary)?;
        debug!(
            "Activity summary for session {}: engagement {}, {} recommendations",
            session_id,
            summary.engagement_score,
            summary.recommendations.len()
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::{CrisisPlan, CrisisType, EmergencyContact, MilestoneShare, MilestoneType, Relationship};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    fn milestone(text: &str, milestone_type: MilestoneType) -> MilestoneShare {
        MilestoneShare {
            text: text.to_string(),
            milestone_type,
            child_age: None,
            shared_by: "Anonymous".to_string(),
            date: date(1),
            public: true,
            celebrations: 0,
        }
    }

    #[test]
    fn test_empty_session() {
        let summary = activity_summary(&RecordStore::new());

        assert_eq!(summary.engagement_score, 0);
        assert_eq!(summary.total_celebrations, 0);
        assert!(summary.most_celebrated.is_none());
        assert!(summary.milestones_by_type.is_empty());
        assert_eq!(summary.profile_completion.percentage, 0);
        assert_eq!(
            summary.recommendations,
            [ADD_EMERGENCY_CONTACT, CREATE_CRISIS_PLAN, COMPLETE_PROFILE, SHARE_FIRST_MILESTONE, FIRST_CHECK_IN]
        );
    }

    #[test]
    fn test_most_celebrated_only_after_a_celebration() {
        let mut store = RecordStore::new();
        store.milestones.append(milestone("Waved hello", MilestoneType::Social));
        store.milestones.append(milestone("Used a spoon", MilestoneType::DailyLiving));
        store.milestones.append(milestone("Made a friend", MilestoneType::Social));

        assert!(activity_summary(&store).most_celebrated.is_none());

        store.milestones.increment_counter(1, |m| &mut m.celebrations).unwrap();
        store.milestones.increment_counter(1, |m| &mut m.celebrations).unwrap();
        store.milestones.increment_counter(2, |m| &mut m.celebrations).unwrap();

        let summary = activity_summary(&store);
        assert_eq!(summary.total_celebrations, 3);
        let top = summary.most_celebrated.unwrap();
        assert_eq!(top.index, 1);
        assert_eq!(top.record.text, "Used a spoon");
        assert_eq!(summary.milestones_by_type[0].value, "Social");
        assert_eq!(summary.milestones_by_type[0].count, 2);
    }

    #[test]
    fn test_recommendations_drop_as_sections_fill() {
        let mut store = RecordStore::new();
        store.profile.parent_name = "Casey".to_string();
        store.emergency_contacts.append(EmergencyContact {
            name: "Grandma".to_string(),
            phone: "555-0100".to_string(),
            relationship: Relationship::ExtendedFamily,
            email: None,
            address: None,
            notes: None,
            primary: true,
            added_date: date(1),
        });
        store.crisis_plans.append(CrisisPlan {
            name: "Elopement".to_string(),
            crisis_type: CrisisType::Safety,
            warning_signs: String::new(),
            immediate_steps: "Call 911, check the pond first".to_string(),
            contacts_to_call: String::new(),
            resources_needed: String::new(),
            notes: String::new(),
            created_date: date(1),
            last_used: None,
        });
        store.milestones.append(milestone("Swam alone", MilestoneType::DailyLiving));

        let summary = activity_summary(&store);
        assert_eq!(summary.recommendations, [FIRST_CHECK_IN]);
        assert_eq!(summary.engagement_score, 30);
        assert_eq!(summary.profile_completion.percentage, 80);
    }
}
