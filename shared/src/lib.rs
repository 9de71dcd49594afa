use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Declares a closed set of values with a fixed display label per variant.
///
/// Declaration order is meaningful: `rank()` is the zero-based position of the
/// variant, which is what ordinal scales compare on.
macro_rules! closed_set {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every value, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            /// Zero-based position in the declared order
            pub fn rank(&self) -> usize {
                *self as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|value| value.as_str().eq_ignore_ascii_case(s.trim()))
                    .ok_or_else(|| UnknownValue {
                        set: stringify!($name),
                        value: s.to_string(),
                    })
            }
        }
    };
}

/// A string that does not belong to a closed set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownValue {
    pub set: &'static str,
    pub value: String,
}

impl fmt::Display for UnknownValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a valid {}", self.value, self.set)
    }
}

impl std::error::Error for UnknownValue {}

/// Identifier of one isolated user session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Stable identifier assigned to a record when it is appended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub Uuid);

impl RecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ---------------------------------------------------------------------------
// Closed value sets
// ---------------------------------------------------------------------------

closed_set! {
    /// Named record collections held by a session
    CollectionKind {
        Milestones => "milestones",
        EmergencyContacts => "emergency_contacts",
        CrisisPlans => "crisis_plans",
        MentalHealthChecks => "mental_health_checks",
        SavedResources => "saved_resources",
        Tasks => "tasks",
        Contacts => "contacts",
    }
}

closed_set! {
    Language {
        English => "English",
        Spanish => "Spanish",
        French => "French",
        German => "German",
        Other => "Other",
    }
}

closed_set! {
    Theme {
        Light => "Light",
        Dark => "Dark",
        Auto => "Auto",
    }
}

closed_set! {
    Timezone {
        Eastern => "Eastern",
        Central => "Central",
        Mountain => "Mountain",
        Pacific => "Pacific",
        Alaska => "Alaska",
        Hawaii => "Hawaii",
    }
}

closed_set! {
    SupportNetworkMember {
        ExtendedFamily => "Extended Family",
        Friends => "Friends",
        Neighbors => "Neighbors",
        SupportGroups => "Support Groups",
        Therapists => "Therapists",
        Teachers => "Teachers",
        MedicalTeam => "Medical Team",
    }
}

closed_set! {
    MilestoneType {
        Communication => "Communication",
        Educational => "Educational",
        Social => "Social",
        Medical => "Medical",
        Behavioral => "Behavioral",
        DailyLiving => "Daily Living",
    }
}

closed_set! {
    Relationship {
        SpousePartner => "Spouse/Partner",
        ParentGuardian => "Parent/Guardian",
        Sibling => "Sibling",
        ExtendedFamily => "Extended Family",
        Doctor => "Doctor",
        Therapist => "Therapist",
        Teacher => "Teacher",
        Neighbor => "Neighbor",
        Friend => "Friend",
        Other => "Other",
    }
}

closed_set! {
    CrisisType {
        Behavioral => "Behavioral",
        Medical => "Medical",
        MentalHealth => "Mental Health",
        School => "School",
        Safety => "Safety",
        Other => "Other",
    }
}

closed_set! {
    TaskPriority {
        Low => "Low",
        Medium => "Medium",
        High => "High",
    }
}

closed_set! {
    /// Any status may be set from any other; there is no enforced order
    TaskStatus {
        NotStarted => "Not Started",
        InProgress => "In Progress",
        Completed => "Completed",
    }
}

closed_set! {
    ResourceCategory {
        Autism => "Autism",
        Adhd => "ADHD",
        LearningDisabilities => "Learning Disabilities",
        Behavioral => "Behavioral",
        Medical => "Medical",
        Legal => "Legal",
        Educational => "Educational",
    }
}

closed_set! {
    ResourceType {
        Article => "Article",
        Video => "Video",
        Webinar => "Webinar",
        Podcast => "Podcast",
        Book => "Book",
        Guide => "Guide",
        Checklist => "Checklist",
    }
}

closed_set! {
    HotlineType {
        Emergency => "Emergency",
        MentalHealth => "Mental Health",
        Safety => "Safety",
        Medical => "Medical",
        DisabilitySpecific => "Disability-Specific",
    }
}

closed_set! {
    ExportFormat {
        Csv => "csv",
        Json => "json",
    }
}

// Ordinal scales. Index 0 is the best end of every scale except energy,
// where it is simply the lowest level.

closed_set! {
    StressLevel {
        VeryLow => "Very Low",
        Low => "Low",
        Moderate => "Moderate",
        High => "High",
        VeryHigh => "Very High",
    }
}

closed_set! {
    EnergyLevel {
        VeryLow => "Very Low",
        Low => "Low",
        Moderate => "Moderate",
        High => "High",
        VeryHigh => "Very High",
    }
}

closed_set! {
    Mood {
        VeryGood => "Very Good",
        Good => "Good",
        Neutral => "Neutral",
        Low => "Low",
        VeryLow => "Very Low",
    }
}

closed_set! {
    SleepQuality {
        Excellent => "Excellent",
        Good => "Good",
        Fair => "Fair",
        Poor => "Poor",
        VeryPoor => "Very Poor",
    }
}

closed_set! {
    SupportFeeling {
        VerySupported => "Very Supported",
        Supported => "Supported",
        Neutral => "Neutral",
        Unsupported => "Unsupported",
        VeryUnsupported => "Very Unsupported",
    }
}

closed_set! {
    CopingAbility {
        VeryWell => "Very Well",
        Well => "Well",
        Okay => "Okay",
        Struggling => "Struggling",
        VeryStruggling => "Very Struggling",
    }
}

/// Direction of change between two consecutive check-ins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Worsening,
    Stable,
}

impl Trend {
    /// Compare two scale positions where a lower position is better
    pub fn between(previous_rank: usize, latest_rank: usize) -> Self {
        if latest_rank < previous_rank {
            Trend::Improving
        } else if latest_rank > previous_rank {
            Trend::Worsening
        } else {
            Trend::Stable
        }
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub notifications: bool,
    pub theme: Theme,
    pub timezone: Timezone,
    /// Whether new milestones are shared with the community by default
    pub public_milestones: bool,
    pub crisis_alerts: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            notifications: true,
            theme: Theme::Light,
            timezone: Timezone::Eastern,
            public_milestones: true,
            crisis_alerts: true,
        }
    }
}

/// Singleton profile of the parent or guardian using a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub parent_name: String,
    /// Number of people in the family (1-20)
    pub family_size: u8,
    /// City, State
    pub location: String,
    pub primary_language: Language,
    pub support_network: BTreeSet<SupportNetworkMember>,
    /// Free text about the children (ages, diagnoses, interests)
    pub children_info: String,
    pub preferences: Preferences,
    /// Date the family information was last saved
    pub last_updated: Option<NaiveDate>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            parent_name: String::new(),
            family_size: 1,
            location: String::new(),
            primary_language: Language::English,
            support_network: BTreeSet::new(),
            children_info: String::new(),
            preferences: Preferences::default(),
            last_updated: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestoneShare {
    pub text: String,
    #[serde(rename = "type")]
    pub milestone_type: MilestoneType,
    pub child_age: Option<String>,
    /// Parent name at the time of sharing, or "Anonymous"
    pub shared_by: String,
    pub date: NaiveDate,
    pub public: bool,
    pub celebrations: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
    pub relationship: Relationship,
    pub email: Option<String>,
    pub address: Option<String>,
    /// e.g. "Has key to house", "Available 24/7"
    pub notes: Option<String>,
    pub primary: bool,
    pub added_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrisisPlan {
    pub name: String,
    #[serde(rename = "type")]
    pub crisis_type: CrisisType,
    pub warning_signs: String,
    pub immediate_steps: String,
    pub contacts_to_call: String,
    pub resources_needed: String,
    pub notes: String,
    pub created_date: NaiveDate,
    /// None until the plan is activated for the first time
    pub last_used: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentalHealthCheck {
    pub date: NaiveDate,
    pub stress_level: StressLevel,
    pub energy_level: EnergyLevel,
    pub mood: Mood,
    pub sleep_quality: SleepQuality,
    pub support_feeling: SupportFeeling,
    pub coping_ability: CopingAbility,
    pub additional_concerns: Option<String>,
}

/// Educational resource, either from the catalogue or saved to a library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedResource {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub category: ResourceCategory,
    pub topics: Vec<String>,
    /// e.g. "15 min read"
    pub length: String,
    pub rating: f32,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub task: String,
    pub category: String,
    pub priority: TaskPriority,
    pub deadline: NaiveDate,
    pub status: TaskStatus,
    pub description: String,
    pub assigned_to: String,
    pub estimated_hours: f64,
    pub reminder_days: u32,
    pub created: NaiveDate,
    /// Percent complete (0-100)
    pub progress: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub website: Option<String>,
    pub category: String,
    pub notes: Option<String>,
}

/// A stored record together with its position and stable id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordView<T> {
    /// Position in stored (insertion) order at the time of the read
    pub index: usize,
    pub id: RecordId,
    #[serde(flatten)]
    pub record: T,
}

// ---------------------------------------------------------------------------
// Static directory content
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotline {
    pub name: String,
    pub description: String,
    pub phone: String,
    #[serde(rename = "type")]
    pub hotline_type: HotlineType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrisisPlaybook {
    pub situation: String,
    pub immediate_steps: Vec<String>,
    /// When to call 911
    pub when_to_call: String,
    pub resources: Vec<String>,
}

/// A group of downloadable forms, listed by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateCategory {
    pub category: String,
    pub templates: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalLink {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkCategory {
    pub category: String,
    pub links: Vec<ExternalLink>,
}

// ---------------------------------------------------------------------------
// Sessions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSessionResponse {
    pub session_id: SessionId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndSessionResponse {
    pub ended: bool,
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateFamilyInfoRequest {
    pub parent_name: String,
    pub family_size: u8,
    pub location: String,
    pub primary_language: Language,
    #[serde(default)]
    pub support_network: Vec<SupportNetworkMember>,
    pub children_info: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub profile: UserProfile,
}

// ---------------------------------------------------------------------------
// Milestones
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareMilestoneRequest {
    pub text: String,
    pub milestone_type: MilestoneType,
    pub child_age: Option<String>,
    /// Defaults to the profile's public_milestones preference
    pub public: Option<bool>,
    /// Optional date override - uses today if not provided
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestoneListRequest {
    pub limit: Option<usize>,
    #[serde(default)]
    pub public_only: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestoneListResponse {
    pub milestones: Vec<RecordView<MilestoneShare>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestoneResponse {
    pub milestone: RecordView<MilestoneShare>,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelebrateResponse {
    pub index: usize,
    pub celebrations: u32,
}

// ---------------------------------------------------------------------------
// Emergency contacts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddEmergencyContactRequest {
    pub name: String,
    pub phone: String,
    pub relationship: Relationship,
    pub email: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub primary: bool,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyContactResponse {
    pub contact: RecordView<EmergencyContact>,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyContactListResponse {
    pub primary: Vec<RecordView<EmergencyContact>>,
    pub other: Vec<RecordView<EmergencyContact>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub deleted: bool,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Crisis plans
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCrisisPlanRequest {
    pub name: String,
    pub crisis_type: CrisisType,
    #[serde(default)]
    pub warning_signs: String,
    pub immediate_steps: String,
    #[serde(default)]
    pub contacts_to_call: String,
    #[serde(default)]
    pub resources_needed: String,
    #[serde(default)]
    pub notes: String,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrisisPlanResponse {
    pub plan: RecordView<CrisisPlan>,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrisisPlanListResponse {
    pub plans: Vec<RecordView<CrisisPlan>>,
}

// ---------------------------------------------------------------------------
// Mental health check-ins
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordCheckInRequest {
    pub stress_level: StressLevel,
    pub energy_level: EnergyLevel,
    pub mood: Mood,
    pub sleep_quality: SleepQuality,
    pub support_feeling: SupportFeeling,
    pub coping_ability: CopingAbility,
    pub additional_concerns: Option<String>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckInResponse {
    pub check_in: RecordView<MentalHealthCheck>,
    /// True when stress is high or mood is low
    pub needs_support: bool,
    pub suggestion: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckInListResponse {
    pub check_ins: Vec<RecordView<MentalHealthCheck>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendReport {
    pub stress: Trend,
    pub mood: Trend,
    pub latest_date: NaiveDate,
    pub previous_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendResponse {
    /// None until at least two check-ins exist
    pub trend: Option<TrendReport>,
}

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceSearchRequest {
    pub search: Option<String>,
    pub category: Option<ResourceCategory>,
    #[serde(rename = "type")]
    pub resource_type: Option<ResourceType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceListResponse {
    pub resources: Vec<SavedResource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveResourceRequest {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveResourceResponse {
    /// False when the resource was already in the library
    pub saved: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedResourceListResponse {
    pub resources: Vec<RecordView<SavedResource>>,
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    pub task: String,
    #[serde(default)]
    pub category: String,
    pub priority: Option<TaskPriority>,
    pub deadline: NaiveDate,
    pub status: Option<TaskStatus>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub assigned_to: String,
    #[serde(default)]
    pub estimated_hours: f64,
    #[serde(default)]
    pub reminder_days: u32,
    #[serde(default)]
    pub progress: u8,
    /// Optional creation date override - uses today if not provided
    pub created: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskFilterRequest {
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub category: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateTaskRequest {
    pub status: Option<TaskStatus>,
    pub progress: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskResponse {
    pub task: RecordView<Task>,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskListResponse {
    pub tasks: Vec<RecordView<Task>>,
}

/// Count of one distinct value within a collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub value: String,
    pub count: usize,
    /// Share of the collection, rounded to one decimal place
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSummary {
    pub total: usize,
    pub by_status: Vec<Breakdown>,
    pub by_priority: Vec<Breakdown>,
    pub total_estimated_hours: f64,
    /// None when there are no tasks
    pub average_progress: Option<f64>,
    /// Tasks past their deadline that are not completed
    pub overdue: usize,
}

// ---------------------------------------------------------------------------
// Contacts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddContactRequest {
    pub name: String,
    #[serde(default)]
    pub phone: String,
    pub website: Option<String>,
    #[serde(default)]
    pub category: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveHotlineRequest {
    pub hotline_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactResponse {
    /// None when an identical contact was already saved
    pub contact: Option<RecordView<Contact>>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactListResponse {
    pub contacts: Vec<RecordView<Contact>>,
}

// ---------------------------------------------------------------------------
// Analytics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionItem {
    pub label: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileCompletion {
    /// Whole-number percentage of completed items
    pub percentage: u8,
    pub items: Vec<CompletionItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivitySummary {
    pub milestones: usize,
    pub emergency_contacts: usize,
    pub crisis_plans: usize,
    pub saved_resources: usize,
    pub mental_health_checks: usize,
    pub tasks: usize,
    pub contacts: usize,
    pub total_celebrations: u64,
    pub most_celebrated: Option<RecordView<MilestoneShare>>,
    pub milestones_by_type: Vec<Breakdown>,
    pub engagement_score: u64,
    pub profile_completion: ProfileCompletion,
    pub recommendations: Vec<String>,
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportDataRequest {
    pub format: Option<ExportFormat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDataResponse {
    pub content: String,
    pub filename: String,
    pub record_count: usize,
    pub format: ExportFormat,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportToPathRequest {
    pub format: Option<ExportFormat>,
    /// Relative folder under the server's export directory
    pub subfolder: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportToPathResponse {
    pub success: bool,
    pub message: String,
    pub file_path: String,
    pub record_count: usize,
}

/// Body returned for every failed request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
