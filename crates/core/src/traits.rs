//! Conversation flow abstraction
//!
//! Callers (HTTP handlers, chat workers) depend on this trait rather than on
//! the concrete state machine, so they can be tested with a scripted flow.

use crate::conversation::{AdvanceOutcome, ChatMessage, ConversationState};
use crate::question::QuestionSpec;

/// Scripted intake flow
///
/// Every operation is a pure function of its inputs. Requests for the same
/// conversation must be serialized by the caller.
pub trait ConversationFlow: Send + Sync {
    /// Question list for a service, after alias and default resolution
    fn resolve_catalog(&self, service: &str) -> &[QuestionSpec];

    /// Rebuild state from the full chronological history
    fn build_state(&self, history: &[ChatMessage], service: &str) -> ConversationState;

    /// Feed one new user message into an existing state
    fn advance_state(&self, state: &ConversationState, message: &str) -> AdvanceOutcome;

    /// Rendered next question, `None` when the proposal is due
    fn next_prompt(&self, state: &ConversationState) -> Option<String>;

    /// Every question has a value
    fn is_ready_for_proposal(&self, state: &ConversationState) -> bool;

    /// Proposal document framed by `[PROPOSAL_DATA]` markers
    fn render_proposal(&self, state: &ConversationState) -> String;

    /// First assistant message for a service
    fn opening_message(&self, service: &str) -> String;
}
