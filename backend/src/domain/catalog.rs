//! Static directory content: the educational resource catalogue, national
//! hotlines, crisis playbooks, form templates and external links.
//!
//! The content is read-only and shared by every session. It sits behind
//! `ResourceCatalog` so a deployment can swap in another provider without
//! touching the services that search or copy from it.

use shared::{
    CrisisPlaybook, ExternalLink, Hotline, HotlineType, LinkCategory, ResourceCategory, ResourceType,
    SavedResource, TemplateCategory,
};

use crate::domain::commands::resources::ResourceQuery;

/// Provider of the read-only directory content
pub trait ResourceCatalog: Send + Sync {
    fn resources(&self) -> &[SavedResource];
    fn hotlines(&self) -> &[Hotline];
    fn playbooks(&self) -> &[CrisisPlaybook];
    fn templates(&self) -> &[TemplateCategory];
    fn links(&self) -> &[LinkCategory];

    /// Catalogue entry with exactly this title
    fn resource_by_title(&self, title: &str) -> Option<&SavedResource> {
        self.resources().iter().find(|r| r.title == title)
    }

    fn hotline_by_name(&self, name: &str) -> Option<&Hotline> {
        self.hotlines().iter().find(|h| h.name == name)
    }
}

/// True when `resource` satisfies every field present in `query`
pub fn matches_query(resource: &SavedResource, query: &ResourceQuery) -> bool {
    let term_matches = match query.search.as_deref().map(str::trim) {
        None | Some("") => true,
        Some(term) => {
            let term = term.to_lowercase();
            resource.title.to_lowercase().contains(&term)
                || resource.description.to_lowercase().contains(&term)
                || resource.topics.iter().any(|t| t.to_lowercase().contains(&term))
        }
    };

    term_matches
        && query.category.map_or(true, |c| c == resource.category)
        && query.resource_type.map_or(true, |t| t == resource.resource_type)
}

/// Catalogue content compiled into the binary
#[derive(Debug, Clone)]
pub struct BuiltInCatalog {
    resources: Vec<SavedResource>,
    hotlines: Vec<Hotline>,
    playbooks: Vec<CrisisPlaybook>,
    templates: Vec<TemplateCategory>,
    links: Vec<LinkCategory>,
}

impl Default for BuiltInCatalog {
    fn default() -> Self {
        Self {
            resources: built_in_resources(),
            hotlines: built_in_hotlines(),
            playbooks: built_in_playbooks(),
            templates: built_in_templates(),
            links: built_in_links(),
        }
    }
}

impl BuiltInCatalog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResourceCatalog for BuiltInCatalog {
    fn resources(&self) -> &[SavedResource] {
        &self.resources
    }

    fn hotlines(&self) -> &[Hotline] {
        &self.hotlines
    }

    fn playbooks(&self) -> &[CrisisPlaybook] {
        &self.playbooks
    }

    fn templates(&self) -> &[TemplateCategory] {
        &self.templates
    }

    fn links(&self) -> &[LinkCategory] {
        &self.links
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn resource(
    title: &str,
    description: &str,
    resource_type: ResourceType,
    category: ResourceCategory,
    topics: &[&str],
    length: &str,
    rating: f32,
) -> SavedResource {
    SavedResource {
        title: title.to_string(),
        description: description.to_string(),
        resource_type,
        category,
        topics: strings(topics),
        length: length.to_string(),
        rating,
        url: "#".to_string(),
    }
}

fn built_in_resources() -> Vec<SavedResource> {
    vec![
        resource(
            "Understanding IEP vs 504 Plans",
            "Comprehensive guide to special education services and accommodations",
            ResourceType::Guide,
            ResourceCategory::Educational,
            &["IEP", "504 Plan", "Special Education", "Accommodations"],
            "15 min read",
            4.8,
        ),
        resource(
            "Autism Sensory Strategies",
            "Practical strategies for managing sensory challenges in daily life",
            ResourceType::Article,
            ResourceCategory::Autism,
            &["Sensory Processing", "Autism", "Daily Living", "Strategies"],
            "10 min read",
            4.9,
        ),
        resource(
            "ADHD Medication Guide",
            "Understanding medication options and side effects for ADHD",
            ResourceType::Guide,
            ResourceCategory::Adhd,
            &["ADHD", "Medication", "Treatment", "Side Effects"],
            "20 min read",
            4.7,
        ),
        resource(
            "Behavioral Intervention Strategies",
            "Evidence-based approaches to managing challenging behaviors",
            ResourceType::Video,
            ResourceCategory::Behavioral,
            &["Behavior", "Intervention", "ABA", "Strategies"],
            "45 min watch",
            4.6,
        ),
    ]
}

fn hotline(name: &str, description: &str, phone: &str, hotline_type: HotlineType) -> Hotline {
    Hotline {
        name: name.to_string(),
        description: description.to_string(),
        phone: phone.to_string(),
        hotline_type,
    }
}

fn built_in_hotlines() -> Vec<Hotline> {
    vec![
        hotline("911", "Emergency services", "911", HotlineType::Emergency),
        hotline(
            "988 Suicide & Crisis Lifeline",
            "24/7 mental health crisis support",
            "988",
            HotlineType::MentalHealth,
        ),
        hotline(
            "Crisis Text Line",
            "24/7 crisis support via text",
            "Text HOME to 741741",
            HotlineType::MentalHealth,
        ),
        hotline(
            "National Child Abuse Hotline",
            "Report child abuse",
            "1-800-4-A-CHILD (1-800-422-4453)",
            HotlineType::Safety,
        ),
        hotline(
            "Poison Control",
            "24/7 poison emergency help",
            "1-800-222-1222",
            HotlineType::Medical,
        ),
        hotline(
            "Autism Crisis & Safety Resources",
            "Autism-specific crisis support",
            "1-800-4-AUTISM",
            HotlineType::DisabilitySpecific,
        ),
        hotline(
            "NAMI Helpline",
            "Mental health information and support",
            "1-800-950-NAMI (6264)",
            HotlineType::MentalHealth,
        ),
    ]
}

fn playbook(situation: &str, immediate_steps: &[&str], when_to_call: &str, resources: &[&str]) -> CrisisPlaybook {
    CrisisPlaybook {
        situation: situation.to_string(),
        immediate_steps: strings(immediate_steps),
        when_to_call: when_to_call.to_string(),
        resources: strings(resources),
    }
}

fn built_in_playbooks() -> Vec<CrisisPlaybook> {
    vec![
        playbook(
            "Behavioral Crisis/Meltdown",
            &[
                "Ensure safety for everyone present",
                "Remove triggers if possible",
                "Use calm, reassuring voice",
                "Try preferred calming strategies",
                "Give space and time to de-escalate",
            ],
            "Call 911 if there's risk of serious injury to self or others",
            &[
                "Autism Crisis Support: 1-800-4AUTISM",
                "Local Crisis Mobile Response Team",
                "Your child's behavioral therapist",
            ],
        ),
        playbook(
            "Medical Emergency",
            &[
                "Call 911 immediately",
                "Have medical information ready",
                "Know current medications",
                "Contact emergency contact person",
                "Bring medical summary to hospital",
            ],
            "For seizures, breathing problems, loss of consciousness, severe injury",
            &[
                "Poison Control: 1-800-222-1222",
                "Your child's primary doctor",
                "Nearest children's hospital emergency department",
            ],
        ),
        playbook(
            "School Crisis",
            &[
                "Contact school administration immediately",
                "Document the incident",
                "Request immediate IEP/504 meeting",
                "Know your rights",
                "Consider temporary alternative placement",
            ],
            "For suspension threats, safety concerns, or discrimination",
            &[
                "Special Education Attorney",
                "State Department of Education Complaint Line",
                "Disability Rights Organizations",
            ],
        ),
        playbook(
            "Mental Health Crisis",
            &[
                "Stay with the person",
                "Listen without judgment",
                "Remove means of self-harm",
                "Call crisis line for guidance",
                "Seek immediate professional help",
            ],
            "For suicidal thoughts, self-harm, or severe depression/anxiety",
            &[
                "988 Suicide & Crisis Lifeline",
                "Crisis Text Line: 741741",
                "Local emergency mental health services",
            ],
        ),
    ]
}

fn templates(category: &str, names: &[&str]) -> TemplateCategory {
    TemplateCategory {
        category: category.to_string(),
        templates: strings(names),
    }
}

fn built_in_templates() -> Vec<TemplateCategory> {
    vec![
        templates(
            "IEP & 504 Planning",
            &[
                "IEP Meeting Preparation Checklist",
                "IEP Goal Tracking Sheet",
                "504 Plan Request Template",
                "Parent Input Form for IEP",
                "Transition Assessment Form",
            ],
        ),
        templates(
            "Medical & Therapy",
            &[
                "Medical History Summary",
                "Therapy Progress Tracker",
                "Medication Log Template",
                "Doctor Visit Preparation Form",
                "Insurance Appeal Letter Template",
            ],
        ),
        templates(
            "Daily Living",
            &[
                "Behavior Support Plan Template",
                "Daily Schedule Visual",
                "Chore Chart Template",
                "Social Stories Template",
                "Communication Board Template",
            ],
        ),
        templates(
            "Legal & Advocacy",
            &[
                "Special Education Complaint Form",
                "Due Process Request Template",
                "Accommodation Request Letter",
                "Meeting Documentation Form",
                "Rights Violation Report",
            ],
        ),
    ]
}

fn links(category: &str, entries: &[(&str, &str)]) -> LinkCategory {
    LinkCategory {
        category: category.to_string(),
        links: entries
            .iter()
            .map(|(name, url)| ExternalLink {
                name: name.to_string(),
                url: url.to_string(),
            })
            .collect(),
    }
}

fn built_in_links() -> Vec<LinkCategory> {
    vec![
        links(
            "Government Resources",
            &[
                ("IDEA - Individuals with Disabilities Education Act", "https://sites.ed.gov/idea/"),
                ("Office for Civil Rights", "https://www2.ed.gov/about/offices/list/ocr/"),
                ("Social Security Disability Benefits", "https://www.ssa.gov/disability/"),
                (
                    "Centers for Disease Control - Developmental Disabilities",
                    "https://www.cdc.gov/ncbddd/developmentaldisabilities/",
                ),
            ],
        ),
        links(
            "National Organizations",
            &[
                ("Autism Society", "https://autismsociety.org/"),
                ("National Down Syndrome Society", "https://www.ndss.org/"),
                ("CHADD - ADHD Support", "https://chadd.org/"),
                ("National Association for Mental Illness (NAMI)", "https://nami.org/"),
            ],
        ),
        links(
            "Educational Support",
            &[
                ("Understood.org", "https://www.understood.org/"),
                ("Wrightslaw - Special Education Law", "https://www.wrightslaw.com/"),
                ("Council of Parent Attorneys and Advocates", "https://www.copaa.org/"),
                ("National Center for Learning Disabilities", "https://www.ncld.org/"),
            ],
        ),
    ]
}
