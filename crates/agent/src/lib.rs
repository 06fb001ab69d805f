//! Scripted intake agent
//!
//! Walks a client through a per-service question list and renders a project
//! proposal once every question has a value.
//!
//! - `dst`: state building from history and single-message advancing
//! - `prompt`: question rendering and the hidden question tag
//! - `proposal`: answer classification and the proposal document
//! - `flow`: `IntakeFlow` and free-function entry points
//!
//! State is never stored. Each turn rebuilds it from the message log, so the
//! same history always yields the same state.

pub mod dst;
pub mod flow;
pub mod prompt;
pub mod proposal;

pub use dst::{is_ready_for_proposal, AnswerExtractor, IntakeStateTracker, SlotKind};
pub use flow::IntakeFlow;
pub use prompt::{parse_question_tag, render_prompt, render_prompt_with_rng, strip_question_tag, Prompt};
pub use proposal::{contains_proposal, extract_proposal, ProposalRenderer};

pub use intake_agent_core::{
    AdvanceOutcome, ChatMessage, ConversationFlow, ConversationState, QuestionSpec, Role, SKIPPED,
};
