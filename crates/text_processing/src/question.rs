//! Question-vs-answer detection
//!
//! Users sometimes reply to a question with one of their own ("Can you use
//! Shopify?"). Those replies must not be stored as answers, but a statement in
//! front of the question ("We sell candles. Can you help?") is still usable.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::entities::IntakeEntityExtractor;

static INTERROGATIVE_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^\s*(?:can|could|would|should|do|does|is|are|will|may|what|why|how|when|where|which)\b",
    )
    .unwrap()
});

static SENTENCE_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!;\n]").unwrap());

/// Classifies replies as questions and salvages statements from them
#[derive(Debug, Clone, Default)]
pub struct QuestionDetector {
    entities: IntakeEntityExtractor,
}

impl QuestionDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// The user is asking rather than answering
    pub fn is_user_question(&self, text: &str) -> bool {
        let text = text.trim();
        if text.contains('?') && !self.entities.is_bare_figure(text) {
            return true;
        }
        INTERROGATIVE_START.is_match(text)
    }

    /// Statement preceding the question, if one is usable as an answer
    pub fn salvage_statement(&self, text: &str) -> Option<String> {
        let before_question = text.split('?').next().unwrap_or(text);

        let boundary = SENTENCE_BOUNDARY.find_iter(before_question).last()?;
        let statement = before_question[..boundary.start()].trim();

        if statement.is_empty()
            || self.is_user_question(statement)
            || self.entities.is_bare_figure(statement)
        {
            tracing::trace!(text, "Nothing to salvage from user question");
            return None;
        }

        Some(statement.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_mark() {
        let detector = QuestionDetector::new();
        assert!(detector.is_user_question("Shopify or WordPress, which is better?"));
        assert!(detector.is_user_question("you do SEO too?"));
    }

    #[test]
    fn test_bare_figure_with_question_mark_is_an_answer() {
        let detector = QuestionDetector::new();
        assert!(!detector.is_user_question("50k?"));
        assert!(!detector.is_user_question("2-3 weeks?"));
    }

    #[test]
    fn test_interrogative_start() {
        let detector = QuestionDetector::new();
        assert!(detector.is_user_question("Can you build it on Shopify"));
        assert!(detector.is_user_question("how much does hosting cost"));
        assert!(detector.is_user_question("Which stack do you recommend"));
        assert!(!detector.is_user_question("Candles and soaps"));
        assert!(!detector.is_user_question("Loomly"));
    }

    #[test]
    fn test_salvage_statement() {
        let detector = QuestionDetector::new();
        assert_eq!(
            detector.salvage_statement("We sell handmade candles. Can you help with SEO?"),
            Some("We sell handmade candles".to_string())
        );
        assert_eq!(
            detector.salvage_statement("Bakery site! Blog too; do you do blogs?"),
            Some("Bakery site! Blog too".to_string())
        );
    }

    #[test]
    fn test_salvage_nothing_usable() {
        let detector = QuestionDetector::new();
        assert_eq!(detector.salvage_statement("Can you use Shopify?"), None);
        assert_eq!(detector.salvage_statement("50k. Is that enough?"), None);
        assert_eq!(detector.salvage_statement("What do you suggest. Any ideas?"), None);
    }
}
