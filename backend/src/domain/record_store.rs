//! # Record Store
//!
//! The in-memory, session-scoped holder of every record collection.
//!
//! A `RecordStore` is created when a session starts and dropped when it ends.
//! It owns one `Collection` per entity plus the singleton `UserProfile`.
//! Services borrow it through `SessionStorage` for the duration of one
//! request; nothing here performs I/O or blocks.
//!
//! ## Collection rules
//!
//! - Stored order is insertion order and is only changed by deletion.
//! - Read operations (`filter`, `sorted_by`, `count_by`, ...) return new
//!   sequences and never reorder or modify stored entries.
//! - Every record gets a `RecordId` on append. Index-addressed operations
//!   address stored order; id-addressed operations survive reordering.
//! - Mutations either apply fully or fail with `StoreError` and leave the
//!   collection untouched.

use chrono::NaiveDate;
use shared::{
    Breakdown, CollectionKind, CompletionItem, Contact, CrisisPlan, EmergencyContact,
    MentalHealthCheck, MilestoneShare, ProfileCompletion, RecordId, RecordView, SavedResource,
    SessionId, Task, Trend, TrendReport, UserProfile,
};
use std::fmt;
use thiserror::Error;

use crate::domain::models::Record;

/// Recoverable failures of store operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("index {index} is out of range for {collection} (length {len})")]
    IndexOutOfRange {
        collection: CollectionKind,
        index: usize,
        len: usize,
    },
    #[error("session {0} not found")]
    SessionNotFound(SessionId),
    #[error("session limit of {limit} reached, try again later")]
    SessionLimitReached { limit: usize },
}

/// A record together with the id assigned when it was appended
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<T> {
    pub id: RecordId,
    pub record: T,
}

impl<T: Clone> Entry<T> {
    pub fn to_view(&self, index: usize) -> RecordView<T> {
        RecordView {
            index,
            id: self.id,
            record: self.record.clone(),
        }
    }
}

/// Position in stored order paired with the entry found there
pub type Indexed<'a, T> = (usize, &'a Entry<T>);

/// Convert a read result into owned views
pub fn to_views<T: Clone>(found: Vec<Indexed<'_, T>>) -> Vec<RecordView<T>> {
    found
        .into_iter()
        .map(|(index, entry)| entry.to_view(index))
        .collect()
}

/// One named, insertion-ordered sequence of records of a single type
#[derive(Debug, Clone)]
pub struct Collection<T> {
    entries: Vec<Entry<T>>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(&self) -> CollectionKind {
        T::KIND
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry<T>> {
        self.entries.get(index)
    }

    /// Stored position of the first entry with this id
    pub fn position(&self, id: RecordId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry<T>> {
        self.entries.iter()
    }

    pub fn records(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|entry| &entry.record)
    }

    /// Every entry in stored order
    pub fn all(&self) -> Vec<Indexed<'_, T>> {
        self.entries.iter().enumerate().collect()
    }

    /// Add a record at the end. Always succeeds.
    pub fn append(&mut self, record: T) -> RecordId {
        let id = RecordId::new();
        self.entries.push(Entry { id, record });
        id
    }

    fn out_of_range(&self, index: usize) -> StoreError {
        StoreError::IndexOutOfRange {
            collection: T::KIND,
            index,
            len: self.entries.len(),
        }
    }

    /// Apply a typed field edit to the record at `index`
    pub fn update_field(&mut self, index: usize, patch: T::Patch) -> Result<&Entry<T>, StoreError> {
        self.update_with(index, |record| record.apply_patch(patch))
    }

    fn update_with<F>(&mut self, index: usize, edit: F) -> Result<&Entry<T>, StoreError>
    where
        F: FnOnce(&mut T),
    {
        if index >= self.entries.len() {
            return Err(self.out_of_range(index));
        }
        let entry = &mut self.entries[index];
        edit(&mut entry.record);
        Ok(&*entry)
    }

    /// Add one to an integer field and return the new value.
    ///
    /// Not idempotent: every call counts, including retries.
    pub fn increment_counter<F>(&mut self, index: usize, field: F) -> Result<u32, StoreError>
    where
        F: FnOnce(&mut T) -> &mut u32,
    {
        let mut updated = 0;
        self.update_with(index, |record| {
            let counter = field(record);
            *counter = counter.saturating_add(1);
            updated = *counter;
        })?;
        Ok(updated)
    }

    /// Remove the record at `index`
    pub fn delete_at(&mut self, index: usize) -> Result<Entry<T>, StoreError> {
        if index >= self.entries.len() {
            return Err(self.out_of_range(index));
        }
        Ok(self.entries.remove(index))
    }

    /// Remove the first record with this id. A miss is a no-op.
    pub fn delete_by_id(&mut self, id: RecordId) -> Option<Entry<T>> {
        let index = self.position(id)?;
        Some(self.entries.remove(index))
    }

    /// Remove every record matching `predicate` and return how many went
    pub fn delete_where<P>(&mut self, mut predicate: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        let before = self.entries.len();
        self.entries.retain(|entry| !predicate(&entry.record));
        before - self.entries.len()
    }

    /// Entries matching `predicate`, in stored order
    pub fn filter<P>(&self, mut predicate: P) -> Vec<Indexed<'_, T>>
    where
        P: FnMut(&T) -> bool,
    {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| predicate(&entry.record))
            .collect()
    }

    /// Stable sort of a copy of the collection by `key`
    pub fn sorted_by<K, F>(&self, key: F, descending: bool) -> Vec<Indexed<'_, T>>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        sort_indexed(self.all(), key, descending)
    }

    /// First entry holding the largest key
    pub fn max_by<K, F>(&self, mut key: F) -> Option<Indexed<'_, T>>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        let mut best: Option<(K, Indexed<'_, T>)> = None;
        for (index, entry) in self.entries.iter().enumerate() {
            let candidate = key(&entry.record);
            let replace = match &best {
                Some((current, _)) => candidate > *current,
                None => true,
            };
            if replace {
                best = Some((candidate, (index, entry)));
            }
        }
        best.map(|(_, found)| found)
    }

    /// Distinct-value breakdown ordered by count descending, ties in
    /// first-seen order
    pub fn count_by<K, F>(&self, key: F) -> Vec<Breakdown>
    where
        K: PartialEq + fmt::Display,
        F: FnMut(&T) -> K,
    {
        breakdown(self.records(), key)
    }

    pub fn sum_by<F>(&self, value: F) -> f64
    where
        F: FnMut(&T) -> f64,
    {
        self.records().map(value).sum()
    }

    /// Mean of `value` over the collection, None when empty
    pub fn average_by<F>(&self, value: F) -> Option<f64>
    where
        F: FnMut(&T) -> f64,
    {
        if self.entries.is_empty() {
            return None;
        }
        Some(self.sum_by(value) / self.entries.len() as f64)
    }
}

/// Stable sort of already-selected entries by `key`
pub fn sort_indexed<'a, T, K, F>(found: Vec<Indexed<'a, T>>, mut key: F, descending: bool) -> Vec<Indexed<'a, T>>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut keyed: Vec<(K, Indexed<'a, T>)> = found
        .into_iter()
        .map(|found| (key(&found.1.record), found))
        .collect();
    if descending {
        keyed.sort_by(|a, b| b.0.cmp(&a.0));
    } else {
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
    }
    keyed.into_iter().map(|(_, found)| found).collect()
}

/// Count distinct values over any sequence of records
pub fn breakdown<'a, T, K, F, I>(records: I, mut key: F) -> Vec<Breakdown>
where
    T: 'a,
    I: Iterator<Item = &'a T>,
    K: PartialEq + fmt::Display,
    F: FnMut(&T) -> K,
{
    let mut counts: Vec<(K, usize)> = Vec::new();
    let mut total = 0usize;
    for record in records {
        total += 1;
        let value = key(record);
        match counts.iter_mut().find(|(seen, _)| *seen == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .map(|(value, count)| Breakdown {
            value: value.to_string(),
            count,
            percentage: percentage_one_decimal(count, total),
        })
        .collect()
}

/// `part / total * 100` rounded to one decimal place
pub fn percentage_one_decimal(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = part as f64 / total as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}

/// Weighted activity score derived from collection sizes
pub fn engagement_score(
    milestones: usize,
    emergency_contacts: usize,
    crisis_plans: usize,
    saved_resources: usize,
) -> u64 {
    milestones as u64 * 10
        + emergency_contacts as u64 * 5
        + crisis_plans as u64 * 15
        + saved_resources as u64 * 2
}

/// All collections and the profile of one session
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    pub profile: UserProfile,
    pub milestones: Collection<MilestoneShare>,
    pub emergency_contacts: Collection<EmergencyContact>,
    pub crisis_plans: Collection<CrisisPlan>,
    pub mental_health_checks: Collection<MentalHealthCheck>,
    pub saved_resources: Collection<SavedResource>,
    pub tasks: Collection<Task>,
    pub contacts: Collection<Contact>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len_of(&self, kind: CollectionKind) -> usize {
        match kind {
            CollectionKind::Milestones => self.milestones.len(),
            CollectionKind::EmergencyContacts => self.emergency_contacts.len(),
            CollectionKind::CrisisPlans => self.crisis_plans.len(),
            CollectionKind::MentalHealthChecks => self.mental_health_checks.len(),
            CollectionKind::SavedResources => self.saved_resources.len(),
            CollectionKind::Tasks => self.tasks.len(),
            CollectionKind::Contacts => self.contacts.len(),
        }
    }

    pub fn engagement_score(&self) -> u64 {
        engagement_score(
            self.milestones.len(),
            self.emergency_contacts.len(),
            self.crisis_plans.len(),
            self.saved_resources.len(),
        )
    }

    pub fn profile_completion(&self) -> ProfileCompletion {
        let checks = [
            ("Parent Name", !self.profile.parent_name.trim().is_empty()),
            ("Family Information", !self.profile.children_info.trim().is_empty()),
            ("Emergency Contacts", !self.emergency_contacts.is_empty()),
            ("Crisis Plans", !self.crisis_plans.is_empty()),
            ("Milestones Shared", !self.milestones.is_empty()),
        ];

        let completed = checks.iter().filter(|(_, done)| *done).count();
        let percentage = (completed as f64 / checks.len() as f64 * 100.0).round() as u8;

        ProfileCompletion {
            percentage,
            items: checks
                .iter()
                .map(|(label, completed)| CompletionItem {
                    label: label.to_string(),
                    completed: *completed,
                })
                .collect(),
        }
    }

    /// Check-ins ordered most recent first. The sort is stable, so same-day
    /// check-ins keep the order they were recorded in.
    pub fn recent_check_ins(&self) -> Vec<Indexed<'_, MentalHealthCheck>> {
        sort_indexed(self.mental_health_checks.all(), |c| c.date, true)
    }

    /// Compare stress and mood of the two most recent check-ins
    pub fn wellbeing_trend(&self) -> Option<TrendReport> {
        let recent = self.recent_check_ins();
        let (latest, previous) = match recent.as_slice() {
            [latest, previous, ..] => (&latest.1.record, &previous.1.record),
            _ => return None,
        };

        Some(TrendReport {
            stress: Trend::between(previous.stress_level.rank(), latest.stress_level.rank()),
            mood: Trend::between(previous.mood.rank(), latest.mood.rank()),
            latest_date: latest.date,
            previous_date: previous.date,
        })
    }
}

/// Dates used to order "most recent first" views
pub fn milestone_date(milestone: &MilestoneShare) -> NaiveDate {
    milestone.date
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::TaskPatch;
    use shared::{
        CopingAbility, EnergyLevel, Mood, MilestoneType, Relationship, SleepQuality, StressLevel,
        SupportFeeling, TaskPriority, TaskStatus,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn milestone(text: &str, milestone_type: MilestoneType, on: NaiveDate) -> MilestoneShare {
        MilestoneShare {
            text: text.to_string(),
            milestone_type,
            child_age: None,
            shared_by: "Anonymous".to_string(),
            date: on,
            public: true,
            celebrations: 0,
        }
    }

    fn task(name: &str, status: TaskStatus, hours: f64, progress: u8) -> Task {
        Task {
            task: name.to_string(),
            category: "Medical".to_string(),
            priority: TaskPriority::Medium,
            deadline: date(2026, 12, 1),
            status,
            description: String::new(),
            assigned_to: String::new(),
            estimated_hours: hours,
            reminder_days: 1,
            created: date(2026, 10, 1),
            progress,
        }
    }

    fn check_in(on: NaiveDate, stress_level: StressLevel, mood: Mood) -> MentalHealthCheck {
        MentalHealthCheck {
            date: on,
            stress_level,
            energy_level: EnergyLevel::Moderate,
            mood,
            sleep_quality: SleepQuality::Fair,
            support_feeling: SupportFeeling::Neutral,
            coping_ability: CopingAbility::Okay,
            additional_concerns: None,
        }
    }

    fn emergency_contact(name: &str) -> EmergencyContact {
        EmergencyContact {
            name: name.to_string(),
            phone: "555-0100".to_string(),
            relationship: Relationship::Friend,
            email: None,
            address: None,
            notes: None,
            primary: false,
            added_date: date(2026, 10, 1),
        }
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let mut tasks = Collection::new();
        let names = ["one", "two", "three", "four"];
        for name in names {
            tasks.append(task(name, TaskStatus::NotStarted, 1.0, 0));
        }

        assert_eq!(tasks.len(), names.len());
        let stored: Vec<&str> = tasks.records().map(|t| t.task.as_str()).collect();
        assert_eq!(stored, names);
    }

    #[test]
    fn test_append_assigns_distinct_ids_to_identical_records() {
        let mut contacts = Collection::new();
        let first = contacts.append(emergency_contact("Sam"));
        let second = contacts.append(emergency_contact("Sam"));
        assert_ne!(first, second);
        assert_eq!(contacts.position(second), Some(1));
    }

    #[test]
    fn test_filter_does_not_mutate() {
        let mut tasks = Collection::new();
        tasks.append(task("a", TaskStatus::Completed, 1.0, 100));
        tasks.append(task("b", TaskStatus::NotStarted, 1.0, 0));
        tasks.append(task("c", TaskStatus::Completed, 1.0, 100));
        let snapshot: Vec<Task> = tasks.records().cloned().collect();

        let done = tasks.filter(|t| t.status == TaskStatus::Completed);

        assert_eq!(done.len(), 2);
        assert_eq!(done[0].0, 0);
        assert_eq!(done[1].0, 2);
        assert_eq!(tasks.len(), 3);
        let after: Vec<Task> = tasks.records().cloned().collect();
        assert_eq!(after, snapshot);
    }

    #[test]
    fn test_sorted_by_date_descending_is_non_increasing_and_idempotent() {
        let mut milestones = Collection::new();
        milestones.append(milestone("a", MilestoneType::Social, date(2026, 3, 1)));
        milestones.append(milestone("b", MilestoneType::Social, date(2026, 5, 1)));
        milestones.append(milestone("c", MilestoneType::Social, date(2026, 1, 1)));
        milestones.append(milestone("d", MilestoneType::Social, date(2026, 5, 1)));

        let sorted = milestones.sorted_by(milestone_date, true);
        for pair in sorted.windows(2) {
            assert!(pair[0].1.record.date >= pair[1].1.record.date);
        }
        // Equal dates keep stored order
        let texts: Vec<&str> = sorted.iter().map(|(_, e)| e.record.text.as_str()).collect();
        assert_eq!(texts, ["b", "d", "a", "c"]);

        let mut resorted_source = Collection::new();
        for (_, entry) in &sorted {
            resorted_source.append(entry.record.clone());
        }
        let again: Vec<&str> = resorted_source
            .sorted_by(milestone_date, true)
            .iter()
            .map(|(_, e)| e.record.text.as_str())
            .collect();
        assert_eq!(again, texts);

        // Stored order untouched
        let stored: Vec<&str> = milestones.records().map(|m| m.text.as_str()).collect();
        assert_eq!(stored, ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_increment_counter_counts_every_call() {
        let mut milestones = Collection::new();
        milestones.append(milestone("first words", MilestoneType::Communication, date(2026, 1, 1)));

        for _ in 0..7 {
            milestones.increment_counter(0, |m| &mut m.celebrations).unwrap();
        }

        assert_eq!(milestones.get(0).unwrap().record.celebrations, 7);
        assert_eq!(milestones.increment_counter(0, |m| &mut m.celebrations), Ok(8));
    }

    #[test]
    fn test_increment_counter_out_of_range() {
        let mut milestones: Collection<MilestoneShare> = Collection::new();
        let err = milestones.increment_counter(0, |m| &mut m.celebrations).unwrap_err();
        assert_eq!(
            err,
            StoreError::IndexOutOfRange { collection: CollectionKind::Milestones, index: 0, len: 0 }
        );
    }

    #[test]
    fn test_delete_at_out_of_range_leaves_collection_unchanged() {
        let mut tasks = Collection::new();
        tasks.append(task("a", TaskStatus::NotStarted, 1.0, 0));
        tasks.append(task("b", TaskStatus::NotStarted, 2.0, 0));
        let before: Vec<Entry<Task>> = tasks.iter().cloned().collect();

        let err = tasks.delete_at(2).unwrap_err();

        assert_eq!(
            err,
            StoreError::IndexOutOfRange { collection: CollectionKind::Tasks, index: 2, len: 2 }
        );
        let after: Vec<Entry<Task>> = tasks.iter().cloned().collect();
        assert_eq!(after, before);
    }

    #[test]
    fn test_delete_by_id_removes_only_that_record() {
        let mut contacts = Collection::new();
        let first = contacts.append(emergency_contact("Sam"));
        let second = contacts.append(emergency_contact("Sam"));

        let removed = contacts.delete_by_id(second).unwrap();
        assert_eq!(removed.id, second);
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts.get(0).unwrap().id, first);

        // Missing id is a silent no-op
        assert!(contacts.delete_by_id(second).is_none());
        assert_eq!(contacts.len(), 1);
    }

    #[test]
    fn test_delete_where() {
        let mut tasks = Collection::new();
        tasks.append(task("a", TaskStatus::Completed, 1.0, 100));
        tasks.append(task("b", TaskStatus::NotStarted, 1.0, 0));
        tasks.append(task("c", TaskStatus::Completed, 1.0, 100));

        assert_eq!(tasks.delete_where(|t| t.status == TaskStatus::Completed), 2);
        assert_eq!(tasks.delete_where(|t| t.task == "missing"), 0);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks.get(0).unwrap().record.task, "b");
    }

    #[test]
    fn test_update_field() {
        let mut tasks = Collection::new();
        tasks.append(task("a", TaskStatus::NotStarted, 1.0, 0));

        let entry = tasks.update_field(0, TaskPatch::Status(TaskStatus::InProgress)).unwrap();
        assert_eq!(entry.record.status, TaskStatus::InProgress);

        let err = tasks.update_field(3, TaskPatch::Progress(50)).unwrap_err();
        assert!(matches!(err, StoreError::IndexOutOfRange { index: 3, len: 1, .. }));
        assert_eq!(tasks.get(0).unwrap().record.progress, 0);
    }

    #[test]
    fn test_max_by_returns_first_maximum() {
        let mut milestones = Collection::new();
        milestones.append(milestone("a", MilestoneType::Social, date(2026, 1, 1)));
        milestones.append(milestone("b", MilestoneType::Social, date(2026, 1, 2)));
        milestones.append(milestone("c", MilestoneType::Social, date(2026, 1, 3)));
        milestones.increment_counter(1, |m| &mut m.celebrations).unwrap();
        milestones.increment_counter(2, |m| &mut m.celebrations).unwrap();

        let (index, entry) = milestones.max_by(|m| m.celebrations).unwrap();
        assert_eq!(index, 1);
        assert_eq!(entry.record.text, "b");

        let empty: Collection<MilestoneShare> = Collection::new();
        assert!(empty.max_by(|m| m.celebrations).is_none());
    }

    #[test]
    fn test_count_by_percentages() {
        let mut milestones = Collection::new();
        milestones.append(milestone("a", MilestoneType::Social, date(2026, 1, 1)));
        milestones.append(milestone("b", MilestoneType::Medical, date(2026, 1, 1)));
        milestones.append(milestone("c", MilestoneType::Social, date(2026, 1, 1)));

        let counts = milestones.count_by(|m| m.milestone_type);

        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].value, "Social");
        assert_eq!(counts[0].count, 2);
        assert_eq!(counts[0].percentage, 66.7);
        assert_eq!(counts[1].value, "Medical");
        assert_eq!(counts[1].percentage, 33.3);
    }

    #[test]
    fn test_sum_and_average() {
        let mut tasks: Collection<Task> = Collection::new();
        assert_eq!(tasks.average_by(|t: &Task| t.progress as f64), None);

        tasks.append(task("a", TaskStatus::NotStarted, 1.5, 0));
        tasks.append(task("b", TaskStatus::InProgress, 2.5, 50));
        tasks.append(task("c", TaskStatus::Completed, 4.0, 100));

        assert_eq!(tasks.sum_by(|t| t.estimated_hours), 8.0);
        assert_eq!(tasks.average_by(|t| t.progress as f64), Some(50.0));
    }

    #[test]
    fn test_engagement_score() {
        assert_eq!(RecordStore::new().engagement_score(), 0);
        assert_eq!(engagement_score(2, 1, 1, 3), 46);
    }

    #[test]
    fn test_profile_completion_with_only_parent_name() {
        let mut store = RecordStore::new();
        assert_eq!(store.profile_completion().percentage, 0);

        store.profile.parent_name = "Jordan".to_string();
        let completion = store.profile_completion();

        assert_eq!(completion.percentage, 20);
        assert_eq!(completion.items.len(), 5);
        assert!(completion.items[0].completed);
        assert!(completion.items[1..].iter().all(|item| !item.completed));
    }

    #[test]
    fn test_wellbeing_trend_compares_scale_positions() {
        let mut store = RecordStore::new();
        store.mental_health_checks.append(check_in(date(2026, 10, 1), StressLevel::Moderate, Mood::Neutral));
        assert!(store.wellbeing_trend().is_none());

        store.mental_health_checks.append(check_in(date(2026, 10, 2), StressLevel::Low, Mood::Neutral));
        let trend = store.wellbeing_trend().unwrap();
        assert_eq!(trend.stress, Trend::Improving);
        assert_eq!(trend.mood, Trend::Stable);
        assert_eq!(trend.latest_date, date(2026, 10, 2));

        let mut store = RecordStore::new();
        store.mental_health_checks.append(check_in(date(2026, 10, 1), StressLevel::Moderate, Mood::Good));
        store.mental_health_checks.append(check_in(date(2026, 10, 2), StressLevel::High, Mood::Low));
        let trend = store.wellbeing_trend().unwrap();
        assert_eq!(trend.stress, Trend::Worsening);
        assert_eq!(trend.mood, Trend::Worsening);
    }

    #[test]
    fn test_wellbeing_trend_uses_dates_not_insertion_order() {
        let mut store = RecordStore::new();
        store.mental_health_checks.append(check_in(date(2026, 10, 5), StressLevel::VeryLow, Mood::VeryGood));
        store.mental_health_checks.append(check_in(date(2026, 10, 1), StressLevel::VeryHigh, Mood::VeryLow));

        let trend = store.wellbeing_trend().unwrap();
        assert_eq!(trend.stress, Trend::Improving);
        assert_eq!(trend.mood, Trend::Improving);
        assert_eq!(trend.previous_date, date(2026, 10, 1));
    }

    #[test]
    fn test_same_day_check_ins_are_stably_ordered() {
        let mut store = RecordStore::new();
        store.mental_health_checks.append(check_in(date(2026, 10, 4), StressLevel::Moderate, Mood::Neutral));
        store.mental_health_checks.append(check_in(date(2026, 10, 5), StressLevel::High, Mood::Good));
        store.mental_health_checks.append(check_in(date(2026, 10, 5), StressLevel::Low, Mood::Low));

        let order: Vec<usize> = store.recent_check_ins().iter().map(|(index, _)| *index).collect();
        assert_eq!(order, [1, 2, 0]);

        let trend = store.wellbeing_trend().unwrap();
        assert_eq!(trend.stress, Trend::Worsening);
        assert_eq!(trend.mood, Trend::Improving);
        assert_eq!(trend.latest_date, trend.previous_date);
    }

    #[test]
    fn test_len_of() {
        let mut store = RecordStore::new();
        store.tasks.append(task("a", TaskStatus::NotStarted, 1.0, 0));
        store.emergency_contacts.append(emergency_contact("Sam"));
        assert_eq!(store.len_of(CollectionKind::Tasks), 1);
        assert_eq!(store.len_of(CollectionKind::EmergencyContacts), 1);
        assert_eq!(store.len_of(CollectionKind::Contacts), 0);
    }
}
