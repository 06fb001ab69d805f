//! Question presenter
//!
//! Renders the question at the step pointer: a randomly chosen template with
//! `{key}` placeholders filled from collected answers, an optional suggestion
//! annotation, and the hidden `[QUESTION_KEY: key]` tag that lets the state
//! builder bind the user's reply to this exact question.

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

use intake_agent_config::constants::markers;
use intake_agent_core::ConversationState;

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{(\w+)\}").unwrap());

static DANGLING_COMMA: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*,\s*([!?.])").unwrap());

static QUESTION_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[QUESTION_KEY:\s*([\w-]+)\s*\]").unwrap());

static QUESTION_TAG_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n?\[QUESTION_KEY:\s*[\w-]+\s*\]").unwrap());

/// A rendered question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    /// Key of the question being asked
    pub key: String,
    /// Question text without annotations
    pub text: String,
    /// Suggestion chip labels, empty for free text
    pub suggestions: Vec<String>,
    pub multi_select: bool,
}

impl Prompt {
    /// Chat message form: text, suggestion annotation, question tag
    pub fn to_message(&self) -> String {
        let mut message = self.text.clone();

        if !self.suggestions.is_empty() {
            let tag = if self.multi_select {
                markers::MULTI_SELECT
            } else {
                markers::SUGGESTIONS
            };
            message.push_str(&format!("\n[{}: {}]", tag, self.suggestions.join(" | ")));
        }

        message.push_str(&format!("\n[{}: {}]", markers::QUESTION_KEY, self.key));
        message
    }
}

/// Next question, `None` when every question has a value
pub fn render_prompt(state: &ConversationState) -> Option<Prompt> {
    render_prompt_with_rng(state, &mut rand::thread_rng())
}

/// Like `render_prompt` with a caller-supplied template picker
pub fn render_prompt_with_rng<R: Rng + ?Sized>(
    state: &ConversationState,
    rng: &mut R,
) -> Option<Prompt> {
    let spec = state.current_question()?;

    let template = spec
        .templates
        .choose(rng)
        .map(|t| t.as_str())
        .unwrap_or_default();

    Some(Prompt {
        key: spec.key.clone(),
        text: fill_placeholders(template, state),
        suggestions: spec.suggestion_labels().to_vec(),
        multi_select: spec.multi_select,
    })
}

/// Next question as a chat message
pub fn next_prompt(state: &ConversationState) -> Option<String> {
    render_prompt(state).map(|prompt| prompt.to_message())
}

/// Key named by a `[QUESTION_KEY: key]` tag in an assistant message
pub fn parse_question_tag(text: &str) -> Option<&str> {
    QUESTION_TAG
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Message text with the hidden question tag removed, for display
pub fn strip_question_tag(text: &str) -> String {
    QUESTION_TAG_LINE.replace_all(text, "").into_owned()
}

fn fill_placeholders(template: &str, state: &ConversationState) -> String {
    let filled = PLACEHOLDER.replace_all(template, |caps: &regex::Captures| {
        let wanted = &caps[1];
        state
            .collected_data
            .keys()
            .find(|key| key.eq_ignore_ascii_case(wanted))
            .and_then(|key| state.answer(key))
            .unwrap_or_default()
            .to_string()
    });

    DANGLING_COMMA.replace_all(&filled, "$1").into_owned()
}
