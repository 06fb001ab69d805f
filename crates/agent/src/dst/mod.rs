//! Intake State Tracking
//!
//! Derives a `ConversationState` from the message log instead of storing one.
//!
//! # Building from history
//!
//! 1. Resolve the service's question list
//! 2. Volunteered pass: every user message, in order, may fill the still-empty
//!    name, budget, timeline and description slots
//! 3. Tagged pass: each (assistant, user) pair whose assistant message carries
//!    a `[QUESTION_KEY: key]` tag binds the reply to that question, replacing
//!    whatever the volunteered pass stored for the key
//! 4. The step pointer is the first question without a value
//!
//! # Advancing
//!
//! A single new message runs the volunteered pass and is then bound to the
//! question at the step pointer, unless that pass already filled it.
//!
//! # Example
//!
//! ```ignore
//! use intake_agent_agent::dst::IntakeStateTracker;
//!
//! let tracker = IntakeStateTracker::new();
//! let state = tracker.build_state(&history, "Website Development");
//! let outcome = tracker.advance_state(&state, "₹50,000");
//! assert_eq!(outcome.state.answer("budget"), Some("50000"));
//! ```

pub mod extractor;

pub use extractor::{AnswerExtractor, SlotKind};

use std::sync::Arc;

use intake_agent_config::{service_catalog, ExtractionSettings, ServiceCatalog};
use intake_agent_core::{AdvanceOutcome, ChatMessage, ConversationState};
use intake_agent_text_processing::is_greeting;

use crate::prompt::parse_question_tag;

/// Builds and advances intake conversation state
#[derive(Debug, Clone)]
pub struct IntakeStateTracker {
    catalog: Arc<ServiceCatalog>,
    extractor: AnswerExtractor,
}

impl Default for IntakeStateTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl IntakeStateTracker {
    /// Tracker over the process-wide catalog
    pub fn new() -> Self {
        Self::with_catalog(service_catalog())
    }

    pub fn with_catalog(catalog: Arc<ServiceCatalog>) -> Self {
        Self {
            catalog,
            extractor: AnswerExtractor::new(),
        }
    }

    pub fn with_extraction(mut self, settings: &ExtractionSettings) -> Self {
        self.extractor = AnswerExtractor::with_settings(settings);
        self
    }

    pub fn catalog(&self) -> &ServiceCatalog {
        &self.catalog
    }

    pub fn extractor(&self) -> &AnswerExtractor {
        &self.extractor
    }

    /// Rebuild state from the full chronological history
    pub fn build_state(&self, history: &[ChatMessage], service: &str) -> ConversationState {
        let questions = self.catalog.resolve(service).to_vec();
        let mut state = ConversationState::new(service, questions);

        for message in history.iter().filter(|m| m.is_user()) {
            self.apply_volunteered(&mut state, &message.content);
        }

        for pair in history.windows(2) {
            let (asked, reply) = (&pair[0], &pair[1]);
            if !asked.is_assistant() || !reply.is_user() {
                continue;
            }
            let Some(key) = parse_question_tag(&asked.content) else {
                continue;
            };
            let Some(spec) = state.question(key) else {
                tracing::warn!(key, service, "Tagged question not in catalog, ignoring");
                continue;
            };

            if let Some(value) = self.extractor.extract_answer(spec, &reply.content) {
                if let Some(previous) = state.value(key).filter(|v| *v != value) {
                    tracing::debug!(key, previous, value = %value, "Tagged answer replaces volunteered value");
                }
                state.collected_data.insert(key.to_string(), value);
            }
        }

        state.refresh();
        tracing::debug!(
            service,
            messages = history.len(),
            step = state.current_step,
            complete = state.is_complete,
            "State rebuilt from history"
        );
        state
    }

    /// Feed one new user message into an existing state
    pub fn advance_state(&self, state: &ConversationState, message: &str) -> AdvanceOutcome {
        if is_greeting(message) {
            tracing::trace!(step = state.current_step, "Greeting, re-asking current question");
            return AdvanceOutcome {
                is_greeting: true,
                ..AdvanceOutcome::unchanged(state.clone())
            };
        }

        let mut next = state.clone();
        next.refresh();
        let asked = next.current_question().map(|q| q.key.clone());
        let is_user_question = self.extractor.is_user_question(message);

        let volunteered = self.apply_volunteered(&mut next, message);

        // Bind to the asked question unless the volunteered pass filled it
        let answered_key = match asked {
            Some(key) if next.is_answered(&key) => Some(key),
            _ => self
                .bind_to_current(&mut next, message)
                .or_else(|| volunteered.into_iter().next()),
        };

        tracing::debug!(
            answered = ?answered_key,
            user_question = is_user_question,
            step = next.current_step,
            "State advanced"
        );

        AdvanceOutcome {
            state: next,
            answered_key,
            is_user_question,
            is_greeting: false,
        }
    }

    /// Every question has a value, skip sentinel included
    pub fn is_ready_for_proposal(&self, state: &ConversationState) -> bool {
        is_ready_for_proposal(state)
    }

    /// Store volunteered values, returning the keys that were filled
    fn apply_volunteered(&self, state: &mut ConversationState, message: &str) -> Vec<String> {
        let found = self.extractor.extract_volunteered(state, message);
        let keys: Vec<String> = found.iter().map(|(key, _)| key.clone()).collect();

        for (key, value) in found {
            tracing::debug!(key = %key, value = %value, "Volunteered value");
            state.collected_data.insert(key, value);
        }

        state.refresh();
        keys
    }

    /// Bind the message to the question at the step pointer
    fn bind_to_current(&self, state: &mut ConversationState, message: &str) -> Option<String> {
        let spec = state.current_question()?;
        let key = spec.key.clone();
        let value = self.extractor.extract_answer(spec, message)?;

        tracing::debug!(key = %key, value = %value, "Answer stored");
        state.set(key.clone(), value);
        Some(key)
    }
}

/// Every question has a non-empty value, regardless of the step pointer
pub fn is_ready_for_proposal(state: &ConversationState) -> bool {
    state.questions.iter().all(|q| state.is_answered(&q.key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake_agent_core::{QuestionSpec, SKIPPED};

    fn catalog() -> Arc<ServiceCatalog> {
        Arc::new(ServiceCatalog::builtin())
    }

    fn tracker() -> IntakeStateTracker {
        IntakeStateTracker::with_catalog(catalog())
    }

    fn tagged(key: &str) -> ChatMessage {
        ChatMessage::assistant(format!("Question?\n[QUESTION_KEY: {key}]"))
    }

    #[test]
    fn test_empty_history() {
        let state = tracker().build_state(&[], "default");
        assert_eq!(state.current_step, 0);
        assert!(state.collected_data.is_empty());
        assert!(!state.is_complete);
        assert_eq!(state.service, "default");
    }

    #[test]
    fn test_unknown_service_keeps_given_name() {
        let state = tracker().build_state(&[], "Knitting");
        assert_eq!(state.service, "Knitting");
        assert_eq!(state.questions.len(), 5);
    }

    #[test]
    fn test_tagged_binding() {
        let history = vec![
            tagged("name"),
            ChatMessage::user("Asha"),
            tagged("company"),
            ChatMessage::user("Loomly"),
        ];
        let state = tracker().build_state(&history, "default");
        assert_eq!(state.answer("name"), Some("Asha"));
        assert_eq!(state.answer("company"), Some("Loomly"));
        assert_eq!(state.current_step, 2);
    }

    #[test]
    fn test_out_of_order_volunteered_budget() {
        let history = vec![
            tagged("name"),
            ChatMessage::user("Asha"),
            tagged("company"),
            ChatMessage::user("Our budget is ₹40,000"),
        ];
        let state = tracker().build_state(&history, "default");
        assert_eq!(state.answer("budget"), Some("40000"));
    }

    #[test]
    fn test_tagged_pass_overrides_volunteered() {
        let history = vec![
            tagged("company"),
            ChatMessage::user("Loomly, budget is 40000"),
            tagged("budget"),
            ChatMessage::user("60k"),
        ];
        let state = tracker().build_state(&history, "default");
        assert_eq!(state.answer("budget"), Some("60k"));
        assert_eq!(state.answer("company"), Some("Loomly, budget is 40000"));
    }

    #[test]
    fn test_retagged_question_takes_latest_answer() {
        let history = vec![
            tagged("name"),
            ChatMessage::user("Asha"),
            tagged("name"),
            ChatMessage::user("my name is Asha Rao"),
        ];
        let state = tracker().build_state(&history, "default");
        assert_eq!(state.answer("name"), Some("Asha Rao"));
    }

    #[test]
    fn test_unknown_tag_is_ignored() {
        let history = vec![tagged("favourite_colour"), ChatMessage::user("Blue")];
        let state = tracker().build_state(&history, "default");
        // Still picked up by the volunteered pass as a name
        assert_eq!(state.answer("name"), Some("Blue"));
        assert!(state.value("favourite_colour").is_none());
    }

    #[test]
    fn test_greeting_in_history_is_not_an_answer() {
        let history = vec![tagged("name"), ChatMessage::user("hey")];
        let state = tracker().build_state(&history, "default");
        assert!(state.collected_data.is_empty());
    }

    #[test]
    fn test_advance_greeting() {
        let tracker = tracker();
        let state = tracker.build_state(&[tagged("name"), ChatMessage::user("Asha")], "default");
        let outcome = tracker.advance_state(&state, "hiii");
        assert!(outcome.is_greeting);
        assert_eq!(outcome.state, state);
        assert_eq!(outcome.answered_key, None);
    }

    #[test]
    fn test_advance_binds_current_question() {
        let tracker = tracker();
        let state = tracker.build_state(&[], "default");

        let outcome = tracker.advance_state(&state, "Asha");
        assert_eq!(outcome.answered_key.as_deref(), Some("name"));
        assert_eq!(outcome.state.current_step, 1);

        let outcome = tracker.advance_state(&outcome.state, "Loomly");
        assert_eq!(outcome.answered_key.as_deref(), Some("company"));
        assert_eq!(outcome.state.answer("company"), Some("Loomly"));
        assert_eq!(outcome.state.current_step, 2);
    }

    #[test]
    fn test_advance_volunteered_message_is_not_bound_twice() {
        let tracker = tracker();
        let mut state = tracker.build_state(&[], "default");
        state.set("name", "Asha");
        state.set("company", "Loomly");

        let outcome = tracker.advance_state(&state, "I need an online store for my candle business");
        assert_eq!(outcome.answered_key.as_deref(), Some("description"));
        assert!(outcome.state.value("budget").is_none());
        assert_eq!(outcome.state.current_step, 3);
    }

    #[test]
    fn test_advance_volunteered_figure_still_binds_current() {
        let tracker = tracker();
        let mut state = tracker.build_state(&[], "default");
        state.set("name", "Asha");
        state.set("company", "Loomly");

        let reply = "I want an online store for my candles, launching in 2 months";
        let outcome = tracker.advance_state(&state, reply);
        assert_eq!(outcome.answered_key.as_deref(), Some("description"));
        assert_eq!(outcome.state.answer("description"), Some(reply));
        assert_eq!(outcome.state.answer("timeline"), Some("2 months"));
        assert_eq!(outcome.state.current_step, 3);

        let history = vec![
            tagged("name"),
            ChatMessage::user("Asha"),
            tagged("company"),
            ChatMessage::user("Loomly"),
            tagged("description"),
            ChatMessage::user(reply),
        ];
        assert_eq!(outcome.state, tracker.build_state(&history, "default"));
    }

    #[test]
    fn test_advance_unanswerable_reply_reports_volunteered_key() {
        let tracker = tracker();
        let mut state = tracker.build_state(&[], "default");
        state.set("name", "Asha");
        state.set("company", "Loomly");

        // Counter-question: description stays open, the budget is still kept
        let outcome = tracker.advance_state(&state, "Can you do it for 60k?");
        assert_eq!(outcome.answered_key.as_deref(), Some("budget"));
        assert_eq!(outcome.state.answer("budget"), Some("60k"));
        assert!(!outcome.state.is_answered("description"));
        assert_eq!(outcome.state.current_step, 2);
    }

    #[test]
    fn test_advance_name_that_reads_like_a_question() {
        let tracker = tracker();
        let state = tracker.build_state(&[], "default");

        for name in ["Will", "May", "Will Smith"] {
            let outcome = tracker.advance_state(&state, name);
            assert_eq!(outcome.answered_key.as_deref(), Some("name"));
            assert_eq!(outcome.state.answer("name"), Some(name));
            assert_eq!(outcome.state.current_step, 1);
        }
    }

    #[test]
    fn test_advance_skip() {
        let tracker = tracker();
        let mut state = tracker.build_state(&[], "default");
        state.set("name", "Asha");

        let outcome = tracker.advance_state(&state, "skip");
        assert_eq!(outcome.state.value("company"), Some(SKIPPED));
        assert_eq!(outcome.state.current_step, 2);
        assert_eq!(outcome.answered_key.as_deref(), Some("company"));
    }

    #[test]
    fn test_advance_user_question() {
        let tracker = tracker();
        let mut state = tracker.build_state(&[], "default");
        state.set("name", "Asha");

        let outcome = tracker.advance_state(&state, "Why do you need my company name?");
        assert!(outcome.is_user_question);
        assert_eq!(outcome.answered_key, None);
        assert_eq!(outcome.state.current_step, 1);
    }

    #[test]
    fn test_advance_on_complete_state() {
        let tracker = tracker();
        let mut state = tracker.build_state(&[], "default");
        for key in ["name", "company", "description", "budget", "timeline"] {
            state.set(key, "x");
        }
        let outcome = tracker.advance_state(&state, "anything else?");
        assert_eq!(outcome.state.current_step, 5);
        assert!(outcome.state.is_complete);
        assert_eq!(outcome.answered_key, None);
    }

    #[test]
    fn test_completion_gate_ignores_step() {
        let mut state = ConversationState::new(
            "custom",
            vec![QuestionSpec::new("a", &["?"]), QuestionSpec::new("b", &["?"])],
        );
        state.collected_data.insert("b".into(), "x".into());
        state.current_step = 2;
        assert!(!is_ready_for_proposal(&state));

        state.collected_data.insert("a".into(), SKIPPED.into());
        state.current_step = 0;
        assert!(is_ready_for_proposal(&state));
    }
}
