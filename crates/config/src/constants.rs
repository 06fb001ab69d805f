//! Centralized constants for the intake agent
//!
//! Single source of truth for marker strings, service names and the default
//! wording that ends up in rendered proposals. Markers are a contract with the
//! presentation layer, so change them only together with the UI.

/// Markers embedded in assistant messages
pub mod markers {
    /// Sentinel stored for an explicitly skipped question
    pub const SKIPPED: &str = intake_agent_core::SKIPPED;

    /// Single-choice suggestion annotation tag
    pub const SUGGESTIONS: &str = "SUGGESTIONS";

    /// Multi-choice suggestion annotation tag
    pub const MULTI_SELECT: &str = "MULTI_SELECT";

    /// Hidden tag naming the question an assistant message asked
    pub const QUESTION_KEY: &str = "QUESTION_KEY";

    /// Opening marker of a rendered proposal
    pub const PROPOSAL_OPEN: &str = "[PROPOSAL_DATA]";

    /// Closing marker of a rendered proposal
    pub const PROPOSAL_CLOSE: &str = "[/PROPOSAL_DATA]";
}

/// Service names with special meaning in catalog resolution
pub mod services {
    /// Catalog used for unknown service names
    pub const DEFAULT: &str = "default";

    /// Catalog that alias entries (`null` lists) resolve to
    pub const ALIAS_TARGET: &str = "Website Development";
}

/// Extraction thresholds
pub mod extraction {
    /// Longest message still accepted as a bare name
    pub const NAME_MAX_CHARS: usize = 40;

    /// Shortest message accepted as an opportunistic project description
    pub const DESCRIPTIVE_MIN_CHARS: usize = 25;
}

/// Proposal defaults
pub mod proposal {
    /// Values longer than this with no other category become the description
    pub const DESCRIPTION_MIN_CHARS: usize = 20;

    /// Longest `company` answer used verbatim as the project name
    pub const PROJECT_NAME_MAX_CHARS: usize = 20;

    /// Share of the budget requested up front
    pub const DEPOSIT_PERCENT: u8 = 50;

    /// Service line when the conversation carried no service name
    pub const DEFAULT_SERVICE: &str = "Website Development";

    /// Pages every website ships with
    pub const DEFAULT_PAGES: [&str; 5] = ["Home", "About", "Contact", "Privacy Policy", "Terms of Service"];

    pub const CLIENT_NAME: &str = "Client";
    pub const PROJECT_NAME: &str = "Custom Project";
    pub const DESCRIPTION: &str = "Custom web development project as per client requirements.";
    pub const WEBSITE_TYPE: &str = "Custom Website";
    pub const TECH_STACK: &str = "To be recommended based on requirements";
    pub const DEPLOYMENT: &str = "To be discussed";
    pub const DOMAIN: &str = "To be discussed";
    pub const DESIGN: &str = "Design assistance required";
    pub const INTEGRATIONS: &str = "None specified";
    pub const BUDGET: &str = "To be discussed";
    pub const TIMELINE: &str = "Flexible";
}
