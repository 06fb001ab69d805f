//! Core types for the intake agent
//!
//! Shared between the config crate (which owns the question catalog) and the
//! agent crate (which owns the conversation state machine).

pub mod conversation;
pub mod question;
pub mod traits;

pub use conversation::{AdvanceOutcome, ChatMessage, ConversationState, Role};
pub use question::QuestionSpec;
pub use traits::ConversationFlow;

/// Sentinel stored for a question the user explicitly skipped.
///
/// Counts as answered for completion, never surfaces as proposal content.
pub const SKIPPED: &str = "[skipped]";
