//! Content classification of collected answers
//!
//! Services phrase equivalent questions under different keys, so the proposal
//! is filled by what a value looks like, not by the key it was stored under.
//! Each value goes to the first category in `Category::BATTERY` that matches
//! it and is still empty.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use intake_agent_config::ProposalSettings;
use intake_agent_core::ConversationState;

static BUDGET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)₹\s*[\d,]+|under\s*₹|[\d,]+\s*(?:lakh|k\b)|inr\s*[\d,]+|^\d{4,}$|^\d+(?:\.\d+)?\s*l$|^flexible$",
    )
    .unwrap()
});

// Durations, plus the urgency, relative, month and "by" phrases the timeline
// extractor keeps verbatim; anchored at the start so prose mentioning a date
// stays out
static TIMELINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?ix)
        ^\s*(?:within\s+)?(?:\d+[-\s]?\d*\s*)?(?:day|week|month|year)s?\s*$
        | ^flexible$
        | ^\s*(?:asap|urgent(?:ly)?|immediately)\b
        | ^\s*(?:within\s+)?(?:this|next|coming)\s+(?:week|month|quarter|year)\b
        | ^\s*(?:by|before|mid|early|late|end\s+of)\s+(?:the\s+)?(?:end\s+of\s+)?
            (?:january|february|march|april|may|june|july|august|september|october|november|december
              |next|this|q[1-4]\b|\d)
        | ^\s*in\s+(?:january|february|march|april|may|june|july|august|september|october|november|december
              |\d+\s*(?:day|week|month|year)s?\b)
        | ^\s*(?:january|february|march|april|june|july|august|september|october|november|december)\b
        | ^\s*may\s+\d
        ",
    )
    .unwrap()
});

static TECH_STACK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:react(?:\.?js)?|next(?:\.?js)?|node(?:\.?js)?|wordpress|shopify|laravel|django|mern|pern|vue|frontend\s+only|backend\s+only)\b",
    )
    .unwrap()
});

static DEPLOYMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)vercel|netlify|aws|digitalocean|railway|render|vps|server|heroku").unwrap()
});

static DOMAIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:have|need|don't).*domain|already have domain|i don't have").unwrap()
});

static DESIGN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)have design|need design|wireframe|figma|reference|not sure yet").unwrap()
});

static WEBSITE_TYPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)landing\s*page|business\s*website|informational|e-commerce|portfolio|web\s*app|saas")
        .unwrap()
});

static PAGES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)services|products|gallery|testimonials|blog|faq|pricing|shop|store|cart|checkout|wishlist|order|reviews|ratings|search|book\s*now|account|login|dashboard|analytics|support|resources|events|notifications|chat|widget",
    )
    .unwrap()
});

static INTEGRATIONS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)payment|razorpay|stripe|paypal|email|sendgrid|mailchimp|delivery|shipping|sms|analytics|social login|google|facebook|crm|marketing|cloud storage|video|chatbot|ai assistant",
    )
    .unwrap()
});

/// Proposal field a value can be classified into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Budget,
    Timeline,
    TechStack,
    Deployment,
    Domain,
    Design,
    WebsiteType,
    Pages,
    Integrations,
}

impl Category {
    /// Evaluation order, first match wins
    pub const BATTERY: [Category; 9] = [
        Category::Budget,
        Category::Timeline,
        Category::TechStack,
        Category::Deployment,
        Category::Domain,
        Category::Design,
        Category::WebsiteType,
        Category::Pages,
        Category::Integrations,
    ];

    pub fn matches(self, value: &str) -> bool {
        let pattern: &Regex = match self {
            Category::Budget => &*BUDGET,
            Category::Timeline => &*TIMELINE,
            Category::TechStack => &*TECH_STACK,
            Category::Deployment => &*DEPLOYMENT,
            Category::Domain => &*DOMAIN,
            Category::Design => &*DESIGN,
            Category::WebsiteType => &*WEBSITE_TYPE,
            Category::Pages => &*PAGES,
            Category::Integrations => &*INTEGRATIONS,
        };
        pattern.is_match(value)
    }
}

/// Raw proposal fields before defaults and formatting
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedAnswers {
    pub client_name: Option<String>,
    pub project_name: Option<String>,
    pub description: Option<String>,
    categories: HashMap<Category, String>,
}

impl ClassifiedAnswers {
    pub fn get(&self, category: Category) -> Option<&str> {
        self.categories.get(&category).map(|v| v.as_str())
    }

    /// Classify every answered value of the state, in catalog order
    pub fn from_state(state: &ConversationState, settings: &ProposalSettings) -> Self {
        let mut classified = Self {
            client_name: state.answer("name").map(|v| v.trim().to_string()),
            ..Self::default()
        };

        for question in &state.questions {
            if question.key == "name" {
                continue;
            }
            let Some(value) = state.answer(&question.key) else {
                continue;
            };
            classified.assign(&question.key, value.trim(), settings);
        }

        classified
    }

    fn assign(&mut self, key: &str, value: &str, settings: &ProposalSettings) {
        let category = Category::BATTERY
            .into_iter()
            .find(|c| !self.categories.contains_key(c) && c.matches(value));

        if let Some(category) = category {
            tracing::trace!(key, ?category, "Classified answer");
            self.categories.insert(category, value.to_string());
            return;
        }

        let length = value.chars().count();
        if length > settings.description_min_chars && self.description.is_none() {
            self.description = Some(value.to_string());
        } else if key == "company"
            && length <= settings.project_name_max_chars
            && self.project_name.is_none()
        {
            self.project_name = Some(value.to_string());
        } else {
            tracing::trace!(key, "Answer left out of proposal");
        }
    }
}
