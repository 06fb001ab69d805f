//! Conversation messages and derived state
//!
//! `ConversationState` is never persisted. It is rebuilt from the message log
//! on every request, so the only invariant it has to carry is the relation
//! between `collected_data`, `current_step` and `is_complete`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::question::QuestionSpec;
use crate::SKIPPED;

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Assistant,
    User,
}

/// One entry of the chronological message log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }

    pub fn is_assistant(&self) -> bool {
        self.role == Role::Assistant
    }
}

/// Intake state derived from a message history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationState {
    /// Slot key -> extracted value or the skip sentinel
    pub collected_data: BTreeMap<String, String>,
    /// Index of the first unanswered question, `questions.len()` when done
    pub current_step: usize,
    /// Resolved catalog for this conversation
    pub questions: Vec<QuestionSpec>,
    /// Service name exactly as the caller passed it
    pub service: String,
    /// Every question has a non-empty value
    pub is_complete: bool,
}

impl ConversationState {
    /// Create an all-unanswered state
    pub fn new(service: impl Into<String>, questions: Vec<QuestionSpec>) -> Self {
        let mut state = Self {
            collected_data: BTreeMap::new(),
            current_step: 0,
            questions,
            service: service.into(),
            is_complete: false,
        };
        state.refresh();
        state
    }

    /// Stored value for a key, ignoring empty entries
    pub fn value(&self, key: &str) -> Option<&str> {
        self.collected_data
            .get(key)
            .map(|v| v.as_str())
            .filter(|v| !v.trim().is_empty())
    }

    /// Answered value for a key, excluding the skip sentinel
    pub fn answer(&self, key: &str) -> Option<&str> {
        self.value(key).filter(|v| *v != SKIPPED)
    }

    /// Whether the key has any non-empty value, skip sentinel included
    pub fn is_answered(&self, key: &str) -> bool {
        self.value(key).is_some()
    }

    pub fn is_skipped(&self, key: &str) -> bool {
        self.value(key) == Some(SKIPPED)
    }

    /// Whether the catalog has a question with this key
    pub fn has_question(&self, key: &str) -> bool {
        self.question(key).is_some()
    }

    pub fn question(&self, key: &str) -> Option<&QuestionSpec> {
        self.questions.iter().find(|q| q.key == key)
    }

    /// Question at the step pointer, `None` once every question is answered
    pub fn current_question(&self) -> Option<&QuestionSpec> {
        self.questions.get(self.current_step)
    }

    /// Index of the first question without a value
    pub fn first_gap(&self) -> usize {
        self.questions
            .iter()
            .position(|q| !self.is_answered(&q.key))
            .unwrap_or(self.questions.len())
    }

    /// Store a value and recompute the step pointer
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.collected_data.insert(key.into(), value.into());
        self.refresh();
    }

    /// Recompute `current_step` and `is_complete` from `collected_data`
    pub fn refresh(&mut self) {
        self.current_step = self.first_gap();
        self.is_complete = self.current_step >= self.questions.len();
    }

    /// Keys with a value, in catalog order
    pub fn answered_keys(&self) -> Vec<&str> {
        self.questions
            .iter()
            .filter(|q| self.is_answered(&q.key))
            .map(|q| q.key.as_str())
            .collect()
    }

    /// Keys still waiting for a value, in catalog order
    pub fn pending_keys(&self) -> Vec<&str> {
        self.questions
            .iter()
            .filter(|q| !self.is_answered(&q.key))
            .map(|q| q.key.as_str())
            .collect()
    }

    /// Compact summary for prompts, e.g. when an LLM answers a user's
    /// counter-question before the script resumes
    pub fn to_context_string(&self) -> String {
        let mut parts = Vec::new();

        for question in &self.questions {
            match self.value(&question.key) {
                Some(SKIPPED) => parts.push(format!("{}: (skipped)", question.key)),
                Some(value) => parts.push(format!("{}: {}", question.key, value)),
                None => {}
            }
        }

        let pending = self.pending_keys();
        if !pending.is_empty() {
            parts.push(format!("Still needed: {}", pending.join(", ")));
        }

        if parts.is_empty() {
            "No information collected yet.".to_string()
        } else {
            parts.join("\n")
        }
    }
}

/// Result of feeding one message into a state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvanceOutcome {
    pub state: ConversationState,
    /// Key the message was bound to, if any
    pub answered_key: Option<String>,
    /// The user asked something instead of answering
    pub is_user_question: bool,
    /// The message was a bare greeting
    pub is_greeting: bool,
}

impl AdvanceOutcome {
    /// Outcome that leaves the state untouched
    pub fn unchanged(state: ConversationState) -> Self {
        Self {
            state,
            answered_key: None,
            is_user_question: false,
            is_greeting: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions() -> Vec<QuestionSpec> {
        vec![
            QuestionSpec::new("name", &["Name?"]),
            QuestionSpec::new("budget", &["Budget?"]),
            QuestionSpec::new("timeline", &["When?"]),
        ]
    }

    #[test]
    fn test_new_state_starts_at_zero() {
        let state = ConversationState::new("default", questions());
        assert_eq!(state.current_step, 0);
        assert!(!state.is_complete);
        assert_eq!(state.current_question().unwrap().key, "name");
    }

    #[test]
    fn test_step_is_first_gap() {
        let mut state = ConversationState::new("default", questions());
        state.set("budget", "60k");
        assert_eq!(state.current_step, 0);

        state.set("name", "Asha");
        assert_eq!(state.current_step, 2);
        assert_eq!(state.pending_keys(), vec!["timeline"]);
    }

    #[test]
    fn test_empty_value_is_a_gap() {
        let mut state = ConversationState::new("default", questions());
        state.set("name", "   ");
        assert_eq!(state.current_step, 0);
        assert!(!state.is_answered("name"));
    }

    #[test]
    fn test_skip_counts_as_answered() {
        let mut state = ConversationState::new("default", questions());
        state.set("name", SKIPPED);
        state.set("budget", "Flexible");
        state.set("timeline", "1 month");

        assert!(state.is_complete);
        assert_eq!(state.current_step, 3);
        assert!(state.current_question().is_none());
        assert!(state.is_skipped("name"));
        assert_eq!(state.answer("name"), None);
        assert_eq!(state.answer("budget"), Some("Flexible"));
    }

    #[test]
    fn test_context_string() {
        let mut state = ConversationState::new("default", questions());
        assert_eq!(state.to_context_string(), "Still needed: name, budget, timeline");

        state.set("name", "Asha");
        state.set("budget", SKIPPED);
        let context = state.to_context_string();
        assert!(context.contains("name: Asha"));
        assert!(context.contains("budget: (skipped)"));
        assert!(context.contains("Still needed: timeline"));
    }

    #[test]
    fn test_message_roles_serialize_lowercase() {
        let msg = ChatMessage::assistant("Hi");
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"Hi"}"#);

        let back: ChatMessage = serde_json::from_str(r#"{"role":"user","content":"yo"}"#).unwrap();
        assert!(back.is_user());
    }
}
