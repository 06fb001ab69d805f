//! Proposal rendering
//!
//! Turns a completed conversation into the fixed-layout proposal document
//! framed by `[PROPOSAL_DATA]` markers. Rendering is deterministic: the same
//! state always yields the same bytes.

pub mod classify;

pub use classify::{Category, ClassifiedAnswers};

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use intake_agent_config::constants::{markers, proposal as defaults};
use intake_agent_config::ProposalSettings;
use intake_agent_core::ConversationState;

static LIST_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r",\s*").unwrap());

static NAMED_PROJECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:called|named)\s+([A-Za-z0-9]+)").unwrap());

const RULE: &str = "═══════════════════════════════════════";

/// Page answers that add nothing to the default pages
const NO_EXTRA_PAGES: [&str; 2] = ["none", "standard pages"];

/// Proposal renderer
#[derive(Debug, Clone, Default)]
pub struct ProposalRenderer {
    settings: ProposalSettings,
}

impl ProposalRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: ProposalSettings) -> Self {
        Self { settings }
    }

    /// Proposal document for a completed state
    pub fn render(&self, state: &ConversationState) -> String {
        let answers = ClassifiedAnswers::from_state(state, &self.settings);
        let fields = ProposalFields::from_answers(&answers, state, &self.settings);

        tracing::debug!(
            service = %fields.service,
            project = %fields.project_name,
            "Rendering proposal"
        );

        self.layout(&fields)
    }

    fn layout(&self, f: &ProposalFields) -> String {
        let mut pages = format!("  • Default: {}", self.settings.default_pages.join(", "));
        if !f.additional_pages.is_empty() {
            pages.push_str(&format!("\n  • Additional: {}", f.additional_pages.join(", ")));
        }

        let sections = [
            format!("{}\nPROJECT PROPOSAL", markers::PROPOSAL_OPEN),
            section(
                "CLIENT DETAILS",
                &format!(
                    "Client Name: {}\nProject Name: {}\nService: {}",
                    f.client_name, f.project_name, f.service
                ),
            ),
            section(
                "PROJECT OVERVIEW",
                &format!(
                    "{}\n\nWebsite Type: {}\n\nPages & Features:\n{}",
                    f.description, f.website_type, pages
                ),
            ),
            section(
                "TECHNICAL SPECIFICATIONS",
                &format!(
                    "Technology Stack: {}\nDeployment: {}\nDomain: {}\nDesign: {}\nIntegrations: {}",
                    f.tech_stack, f.deployment, f.domain, f.design, f.integrations
                ),
            ),
            section(
                "INVESTMENT & TIMELINE",
                &format!("Budget: {}\nTimeline: {}", f.budget, f.timeline),
            ),
            section(
                "NEXT STEPS",
                &format!(
                    "1. Review and confirm this proposal\n2. Sign agreement and pay deposit ({}%)\n3. Kickoff meeting to begin work\n\nTo customize this proposal, use the Edit Proposal option.\n{}",
                    self.settings.deposit_percent,
                    markers::PROPOSAL_CLOSE
                ),
            ),
        ];

        sections.join("\n\n")
    }
}

fn section(title: &str, body: &str) -> String {
    format!("{RULE}\n{title}\n{RULE}\n{body}")
}

/// Proposal values after defaults and formatting
#[derive(Debug, Clone, PartialEq, Eq)]
struct ProposalFields {
    client_name: String,
    project_name: String,
    service: String,
    description: String,
    website_type: String,
    additional_pages: Vec<String>,
    tech_stack: String,
    deployment: String,
    domain: String,
    design: String,
    integrations: String,
    budget: String,
    timeline: String,
}

impl ProposalFields {
    fn from_answers(
        answers: &ClassifiedAnswers,
        state: &ConversationState,
        settings: &ProposalSettings,
    ) -> Self {
        let project_name = answers
            .project_name
            .clone()
            .or_else(|| {
                answers
                    .description
                    .as_deref()
                    .and_then(|d| NAMED_PROJECT.captures(d))
                    .and_then(|caps| caps.get(1))
                    .map(|m| capitalize_first(m.as_str()))
            })
            .unwrap_or_else(|| defaults::PROJECT_NAME.to_string());

        let description = answers
            .description
            .as_deref()
            .map(format_description)
            .unwrap_or_else(|| defaults::DESCRIPTION.to_string());

        let service = if state.service.trim().is_empty() {
            settings.default_service.clone()
        } else {
            state.service.clone()
        };

        let list = |category: Category, default: &str| {
            answers
                .get(category)
                .map(normalize_list)
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            client_name: answers
                .client_name
                .clone()
                .unwrap_or_else(|| defaults::CLIENT_NAME.to_string()),
            project_name,
            service,
            description,
            website_type: list(Category::WebsiteType, defaults::WEBSITE_TYPE),
            additional_pages: answers.get(Category::Pages).map(additional_pages).unwrap_or_default(),
            tech_stack: list(Category::TechStack, defaults::TECH_STACK),
            deployment: list(Category::Deployment, defaults::DEPLOYMENT),
            domain: answers
                .get(Category::Domain)
                .map(domain_status)
                .unwrap_or(defaults::DOMAIN)
                .to_string(),
            design: answers
                .get(Category::Design)
                .map(design_status)
                .unwrap_or(defaults::DESIGN)
                .to_string(),
            integrations: list(Category::Integrations, defaults::INTEGRATIONS),
            budget: answers
                .get(Category::Budget)
                .unwrap_or(defaults::BUDGET)
                .to_string(),
            timeline: answers
                .get(Category::Timeline)
                .unwrap_or(defaults::TIMELINE)
                .to_string(),
        }
    }
}

/// Uppercase the first grapheme
fn capitalize_first(text: &str) -> String {
    let mut graphemes = text.graphemes(true);
    match graphemes.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), graphemes.as_str()),
        None => String::new(),
    }
}

fn format_description(description: &str) -> String {
    let mut formatted = capitalize_first(description.trim());
    if !formatted.ends_with(['.', '!', '?']) {
        formatted.push('.');
    }
    formatted
}

fn normalize_list(value: &str) -> String {
    LIST_SEPARATOR.replace_all(value, ", ").into_owned()
}

fn additional_pages(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|page| !page.is_empty() && !NO_EXTRA_PAGES.contains(&page.to_lowercase().as_str()))
        .map(str::to_string)
        .collect()
}

fn domain_status(value: &str) -> &'static str {
    let lower = value.to_lowercase();
    if lower.contains("already have") || (lower.contains("have") && !lower.contains("don't")) {
        "✓ Client owns domain"
    } else if lower.contains("don't") || lower.contains("need") {
        "Domain purchase required"
    } else {
        defaults::DOMAIN
    }
}

fn design_status(value: &str) -> &'static str {
    let lower = value.to_lowercase();
    if lower.contains("i have") || lower.contains("have design") {
        "✓ Client will provide designs"
    } else if lower.contains("need") || lower.contains("help") {
        "Design to be created"
    } else if lower.contains("reference") {
        "Design from references"
    } else if lower.contains("not sure") {
        "Design consultation needed"
    } else {
        defaults::DESIGN
    }
}

/// Whether a message carries a rendered proposal
pub fn contains_proposal(text: &str) -> bool {
    text.contains(markers::PROPOSAL_OPEN) && text.contains(markers::PROPOSAL_CLOSE)
}

/// Proposal body between the markers, trimmed
pub fn extract_proposal(text: &str) -> Option<&str> {
    let start = text.find(markers::PROPOSAL_OPEN)? + markers::PROPOSAL_OPEN.len();
    let end = start + text[start..].find(markers::PROPOSAL_CLOSE)?;
    Some(text[start..end].trim())
}
