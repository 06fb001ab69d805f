//! Answer extraction for intake questions
//!
//! Two entry points:
//! - `extract_answer` binds a message to one specific question (dispatch by
//!   key for `name`/`budget`/`timeline`, by suggestions otherwise, verbatim
//!   text as the fallback)
//! - `extract_volunteered` scans a message for values the user offered before
//!   being asked (name, budget, timeline, project description)

use once_cell::sync::Lazy;
use regex::Regex;

use intake_agent_config::ExtractionSettings;
use intake_agent_core::{ConversationState, QuestionSpec, SKIPPED};
use intake_agent_text_processing::{
    is_greeting, is_skip, match_suggestion, IntakeEntityExtractor, QuestionDetector,
};

static DESCRIPTIVE_VERB: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:need|build|creat|develop|want|requir|mak)\w*").unwrap()
});

/// Slot type a question is dispatched to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Name,
    Budget,
    Timeline,
    Choice,
    FreeText,
}

impl SlotKind {
    pub fn of(spec: &QuestionSpec) -> Self {
        match spec.key.as_str() {
            "name" => SlotKind::Name,
            "budget" => SlotKind::Budget,
            "timeline" => SlotKind::Timeline,
            _ if spec.has_suggestions() => SlotKind::Choice,
            _ => SlotKind::FreeText,
        }
    }
}

/// Answer extractor for intake conversations
#[derive(Debug, Clone)]
pub struct AnswerExtractor {
    entities: IntakeEntityExtractor,
    questions: QuestionDetector,
    /// Shortest message accepted as a volunteered description
    descriptive_min_chars: usize,
}

impl Default for AnswerExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl AnswerExtractor {
    pub fn new() -> Self {
        Self::with_settings(&ExtractionSettings::default())
    }

    pub fn with_settings(settings: &ExtractionSettings) -> Self {
        Self {
            entities: IntakeEntityExtractor::new().with_name_max_chars(settings.name_max_chars),
            questions: QuestionDetector::new(),
            descriptive_min_chars: settings.descriptive_min_chars,
        }
    }

    /// The user is asking rather than answering
    pub fn is_user_question(&self, message: &str) -> bool {
        self.questions.is_user_question(message)
    }

    /// Value for `spec` carried by `message`, `None` when it does not answer it
    pub fn extract_answer(&self, spec: &QuestionSpec, message: &str) -> Option<String> {
        let message = message.trim();
        if message.is_empty() || is_greeting(message) {
            return None;
        }
        if is_skip(message) {
            return Some(SKIPPED.to_string());
        }

        let value = match SlotKind::of(spec) {
            // Names such as "Will" or "May" open like questions; only a
            // literal question mark sends a name reply to salvage
            SlotKind::Name => {
                if message.contains('?') {
                    self.questions
                        .salvage_statement(message)
                        .and_then(|statement| self.entities.extract_name(&statement))
                } else {
                    self.entities.extract_name(message)
                }
            }
            SlotKind::Budget => self
                .entities
                .extract_budget(message)
                .or_else(|| self.match_label(spec, message)),
            SlotKind::Timeline => self
                .entities
                .extract_timeline(message)
                .or_else(|| self.match_label(spec, message)),
            SlotKind::Choice => self
                .match_label(spec, message)
                .or_else(|| self.free_text(message)),
            SlotKind::FreeText => self.free_text(message),
        };

        tracing::trace!(key = %spec.key, found = value.is_some(), "Answer extraction");
        value
    }

    /// `(key, value)` pairs the message fills among the state's empty slots
    ///
    /// Only keys present in the state's catalog are considered.
    pub fn extract_volunteered(
        &self,
        state: &ConversationState,
        message: &str,
    ) -> Vec<(String, String)> {
        let message = message.trim();
        if message.is_empty() || is_greeting(message) || is_skip(message) {
            return Vec::new();
        }

        let is_question = self.questions.is_user_question(message);
        let entities = self.entities.extract(message);
        let is_open = |key: &str| state.has_question(key) && !state.is_answered(key);

        let mut found = Vec::new();

        if is_open("name") && !is_question {
            if let Some(name) = entities.name.clone() {
                found.push(("name".to_string(), name));
            }
        }
        if is_open("budget") {
            if let Some(budget) = entities.budget.clone() {
                found.push(("budget".to_string(), budget));
            }
        }
        if is_open("timeline") {
            if let Some(timeline) = entities.timeline.clone() {
                found.push(("timeline".to_string(), timeline));
            }
        }

        if let Some(spec) = state.questions.iter().find(|q| q.is_descriptive()) {
            if !state.is_answered(&spec.key)
                && !is_question
                && !entities.has_figure()
                && message.chars().count() >= self.descriptive_min_chars
                && DESCRIPTIVE_VERB.is_match(message)
            {
                found.push((spec.key.clone(), message.to_string()));
            }
        }

        found
    }

    fn match_label(&self, spec: &QuestionSpec, message: &str) -> Option<String> {
        match_suggestion(message, spec.suggestion_labels()).map(|label| label.to_string())
    }

    fn free_text(&self, message: &str) -> Option<String> {
        if self.questions.is_user_question(message) {
            return self.questions.salvage_statement(message);
        }
        Some(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(key: &str) -> QuestionSpec {
        QuestionSpec::new(key, &["?"])
    }

    fn choice(key: &str, labels: &[&str]) -> QuestionSpec {
        QuestionSpec::new(key, &["?"]).with_suggestions(labels)
    }

    fn state() -> ConversationState {
        ConversationState::new(
            "default",
            vec![spec("name"), spec("company"), spec("description"), spec("budget"), spec("timeline")],
        )
    }

    #[test]
    fn test_slot_kind_dispatch() {
        assert_eq!(SlotKind::of(&spec("name")), SlotKind::Name);
        assert_eq!(SlotKind::of(&choice("budget", &["Flexible"])), SlotKind::Budget);
        assert_eq!(SlotKind::of(&spec("timeline")), SlotKind::Timeline);
        assert_eq!(SlotKind::of(&choice("design", &["Need design help"])), SlotKind::Choice);
        assert_eq!(SlotKind::of(&spec("company")), SlotKind::FreeText);
    }

    #[test]
    fn test_greeting_and_empty_are_not_answers() {
        let extractor = AnswerExtractor::new();
        assert_eq!(extractor.extract_answer(&spec("company"), "hii"), None);
        assert_eq!(extractor.extract_answer(&spec("company"), "   "), None);
    }

    #[test]
    fn test_skip_sentinel() {
        let extractor = AnswerExtractor::new();
        assert_eq!(extractor.extract_answer(&spec("budget"), "skip"), Some(SKIPPED.to_string()));
        assert_eq!(extractor.extract_answer(&spec("company"), "n/a"), Some(SKIPPED.to_string()));
    }

    #[test]
    fn test_budget_and_timeline_dispatch() {
        let extractor = AnswerExtractor::new();
        assert_eq!(extractor.extract_answer(&spec("budget"), "₹50,000"), Some("50000".to_string()));
        assert_eq!(extractor.extract_answer(&spec("budget"), "no idea"), None);
        assert_eq!(extractor.extract_answer(&spec("timeline"), "1 month"), Some("1 month".to_string()));
        assert_eq!(extractor.extract_answer(&spec("timeline"), "whenever"), None);
    }

    #[test]
    fn test_timeline_falls_back_to_label() {
        let extractor = AnswerExtractor::new();
        let timeline = choice("timeline", &["Whenever works"]);
        assert_eq!(
            extractor.extract_answer(&timeline, "whenever works!"),
            Some("Whenever works".to_string())
        );
    }

    #[test]
    fn test_name_rejects_questions() {
        let extractor = AnswerExtractor::new();
        assert_eq!(extractor.extract_answer(&spec("name"), "Asha"), Some("Asha".to_string()));
        assert_eq!(extractor.extract_answer(&spec("name"), "who are you?"), None);
        assert_eq!(extractor.extract_answer(&spec("name"), "I want a website"), None);
    }

    #[test]
    fn test_name_starting_with_interrogative_word() {
        let extractor = AnswerExtractor::new();
        for name in ["Will", "May", "Will Smith", "Howard"] {
            assert_eq!(extractor.extract_answer(&spec("name"), name), Some(name.to_string()));
        }
        assert_eq!(extractor.extract_answer(&spec("name"), "Will you call me?"), None);
    }

    #[test]
    fn test_choice_returns_catalog_label() {
        let extractor = AnswerExtractor::new();
        let website_type = choice("website_type", &["Landing Page", "E-commerce"]);
        assert_eq!(
            extractor.extract_answer(&website_type, "e-commerce"),
            Some("E-commerce".to_string())
        );
        assert_eq!(
            extractor.extract_answer(&website_type, "Landing Page, E-commerce"),
            Some("Landing Page, E-commerce".to_string())
        );
    }

    #[test]
    fn test_free_text_question_handling() {
        let extractor = AnswerExtractor::new();
        assert_eq!(extractor.extract_answer(&spec("company"), "  Loomly "), Some("Loomly".to_string()));
        assert_eq!(extractor.extract_answer(&spec("company"), "Why do you need that?"), None);
        assert_eq!(
            extractor.extract_answer(&spec("company"), "It's Loomly. Why do you ask?"),
            Some("It's Loomly".to_string())
        );
    }

    #[test]
    fn test_volunteered_budget_and_timeline() {
        let extractor = AnswerExtractor::new();
        let found = extractor.extract_volunteered(&state(), "budget is 60k and we need it in 2 weeks");
        assert!(found.contains(&("budget".to_string(), "60k".to_string())));
        assert!(found.contains(&("timeline".to_string(), "2 weeks".to_string())));
        assert!(!found.iter().any(|(key, _)| key == "name" || key == "description"));
    }

    #[test]
    fn test_volunteered_description() {
        let extractor = AnswerExtractor::new();
        let found = extractor.extract_volunteered(&state(), "I need an e-commerce store for handmade goods");
        assert_eq!(
            found,
            vec![(
                "description".to_string(),
                "I need an e-commerce store for handmade goods".to_string()
            )]
        );

        // Too short, or phrased as a question
        assert!(extractor.extract_volunteered(&state(), "need a store").iter().all(|(k, _)| k != "description"));
        assert!(extractor
            .extract_volunteered(&state(), "Can you build an e-commerce store for me?")
            .is_empty());
    }

    #[test]
    fn test_volunteered_skips_filled_slots() {
        let extractor = AnswerExtractor::new();
        let mut state = state();
        state.set("name", "Asha");
        state.set("budget", SKIPPED);

        let found = extractor.extract_volunteered(&state, "Ravi");
        assert!(found.is_empty());

        let found = extractor.extract_volunteered(&state, "my budget is 70k");
        assert!(found.is_empty());
    }

    #[test]
    fn test_volunteered_ignores_greetings_and_skips() {
        let extractor = AnswerExtractor::new();
        assert!(extractor.extract_volunteered(&state(), "hey").is_empty());
        assert!(extractor.extract_volunteered(&state(), "skip").is_empty());
    }

    #[test]
    fn test_volunteered_only_for_catalog_keys() {
        let extractor = AnswerExtractor::new();
        let state = ConversationState::new("custom", vec![spec("company")]);
        assert!(extractor.extract_volunteered(&state, "budget is 60k").is_empty());
    }
}
