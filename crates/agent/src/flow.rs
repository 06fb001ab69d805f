//! Intake flow facade
//!
//! `IntakeFlow` bundles the state tracker, presenter and proposal renderer
//! behind `ConversationFlow`. The free functions at the bottom run the same
//! operations against the process-wide catalog with default settings.

use std::sync::Arc;

use intake_agent_config::{service_catalog, CatalogError, IntakeSettings, ServiceCatalog};
use intake_agent_core::{AdvanceOutcome, ChatMessage, ConversationFlow, ConversationState, QuestionSpec};

use crate::dst::{self, IntakeStateTracker};
use crate::prompt;
use crate::proposal::ProposalRenderer;

/// Scripted intake flow over one catalog
#[derive(Debug, Clone)]
pub struct IntakeFlow {
    tracker: IntakeStateTracker,
    renderer: ProposalRenderer,
}

impl Default for IntakeFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl IntakeFlow {
    /// Flow over the process-wide catalog with default settings
    pub fn new() -> Self {
        Self::with_catalog(service_catalog())
    }

    pub fn with_catalog(catalog: Arc<ServiceCatalog>) -> Self {
        Self {
            tracker: IntakeStateTracker::with_catalog(catalog),
            renderer: ProposalRenderer::new(),
        }
    }

    /// Flow configured from loaded settings
    ///
    /// Uses the catalog file named by `catalog.path` when set, otherwise the
    /// process-wide catalog.
    pub fn from_settings(settings: &IntakeSettings) -> Result<Self, CatalogError> {
        let catalog = match settings.catalog.path {
            Some(_) => Arc::new(settings.load_catalog()?),
            None => service_catalog(),
        };

        tracing::info!(
            services = catalog.service_names().len(),
            deposit_percent = settings.proposal.deposit_percent,
            "Intake flow configured"
        );

        Ok(Self {
            tracker: IntakeStateTracker::with_catalog(catalog)
                .with_extraction(&settings.extraction),
            renderer: ProposalRenderer::with_settings(settings.proposal.clone()),
        })
    }

    pub fn catalog(&self) -> &ServiceCatalog {
        self.tracker.catalog()
    }

    pub fn tracker(&self) -> &IntakeStateTracker {
        &self.tracker
    }
}

impl ConversationFlow for IntakeFlow {
    fn resolve_catalog(&self, service: &str) -> &[QuestionSpec] {
        self.tracker.catalog().resolve(service)
    }

    fn build_state(&self, history: &[ChatMessage], service: &str) -> ConversationState {
        self.tracker.build_state(history, service)
    }

    fn advance_state(&self, state: &ConversationState, message: &str) -> AdvanceOutcome {
        self.tracker.advance_state(state, message)
    }

    fn next_prompt(&self, state: &ConversationState) -> Option<String> {
        prompt::next_prompt(state)
    }

    fn is_ready_for_proposal(&self, state: &ConversationState) -> bool {
        dst::is_ready_for_proposal(state)
    }

    fn render_proposal(&self, state: &ConversationState) -> String {
        self.renderer.render(state)
    }

    fn opening_message(&self, service: &str) -> String {
        self.tracker.catalog().opening_message(service).to_string()
    }
}

/// Question list for a service from the process-wide catalog
pub fn resolve_catalog(service: &str) -> Vec<QuestionSpec> {
    service_catalog().resolve(service).to_vec()
}

/// Rebuild state from history against the process-wide catalog
pub fn build_state(history: &[ChatMessage], service: &str) -> ConversationState {
    IntakeStateTracker::new().build_state(history, service)
}

/// Feed one user message into a state
pub fn advance_state(state: &ConversationState, message: &str) -> AdvanceOutcome {
    IntakeStateTracker::new().advance_state(state, message)
}

pub fn next_prompt(state: &ConversationState) -> Option<String> {
    prompt::next_prompt(state)
}

pub fn is_ready_for_proposal(state: &ConversationState) -> bool {
    dst::is_ready_for_proposal(state)
}

/// Proposal with default settings
pub fn render_proposal(state: &ConversationState) -> String {
    ProposalRenderer::new().render(state)
}

pub fn opening_message(service: &str) -> String {
    service_catalog().opening_message(service).to_string()
}
