//! Intake entity extraction
//!
//! Pulls normalized slot values out of free-form replies:
//! - Budgets ("₹60,000" -> "60000", "60k", "2L", "1 lakh", "Flexible")
//! - Timelines ("2-4 weeks", "1 month", "asap", "by March", "Flexible")
//! - Names ("my name is Asha" -> "Asha", or a short plain reply)
//!
//! `extract_*` methods answer a question that was actually asked.
//! `extract` scans a message for values the user volunteered unprompted and is
//! stricter: a bare "flexible" or "by ..." phrase only counts when the message
//! also says what it refers to.
//!
//! # Example
//!
//! ```ignore
//! use intake_agent_text_processing::entities::IntakeEntityExtractor;
//!
//! let extractor = IntakeEntityExtractor::new();
//! assert_eq!(extractor.extract_budget("around ₹60,000"), Some("60000".to_string()));
//! assert_eq!(extractor.extract_timeline("1 month"), Some("1 month".to_string()));
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use intake_agent_config::constants::extraction;

use crate::normalize::strip_trailing_punctuation;

/// Values volunteered in a single message
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntakeEntities {
    pub budget: Option<String>,
    pub timeline: Option<String>,
    pub name: Option<String>,
}

impl IntakeEntities {
    /// Check if any entities were extracted
    pub fn is_empty(&self) -> bool {
        self.budget.is_none() && self.timeline.is_none() && self.name.is_none()
    }

    /// Whether the message carried a budget or timeline figure
    pub fn has_figure(&self) -> bool {
        self.budget.is_some() || self.timeline.is_some()
    }
}

// Budget patterns
static FLEXIBLE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bflexible\b").unwrap());

static CURRENCY_PREFIX_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:₹|\binr\b|\brs\b\.?|\brupees?\b)\s*(\d[\d,]*)(?:\.\d+)?(\s*(?:k|l|lakhs?|lacs?)\b)?")
        .unwrap()
});

static CURRENCY_SUFFIX_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d[\d,]*)(?:\.\d+)?\s*(?:rupees?|inr|rs\b\.?)").unwrap()
});

static THOUSANDS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\d+(?:\.\d+)?)\s*k\b").unwrap());

static L_SUFFIX_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\d+(?:\.\d+)?)\s*l\b").unwrap());

static LAKH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\d+(?:\.\d+)?)\s*(?:lakhs?|lacs?)\b").unwrap());

static BARE_AMOUNT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,3}(?:,\d{2,3})+|\d{4,})\b").unwrap());

static BUDGET_WORD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:budget|spend|spending|cost|costs|price|rupees|inr|rs|afford|pay)\b").unwrap()
});

// Timeline patterns
static RANGE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d+)\s*(?:-|–|to)\s*(\d+)\s*(day|week|month|year)s?\b").unwrap()
});

static COUNT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\d+)\s*(day|week|month|year)s?\b").unwrap());

static URGENCY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:asap|urgent|urgently|immediately)\b").unwrap());

static RELATIVE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:this|next|coming)\s+(?:week|month|quarter|year)\b").unwrap()
});

static MONTH_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:january|february|march|april|june|july|august|september|october|november|december)\b|\b(?:in|by|mid|early|late|end\s+of)\s+may\b|\bmay\s+\d",
    )
    .unwrap()
});

static BY_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bby\b").unwrap());

static BY_DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\bby\s+(?:the\s+)?(?:end|mid|middle|start|beginning|early|late|next|this|tomorrow|tonight|monday|tuesday|wednesday|thursday|friday|saturday|sunday|q[1-4]\b|\d)",
    )
    .unwrap()
});

static TIME_WORD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:timeline|time|deadline|schedule|deliver|delivery|launch|ready|done)\b").unwrap()
});

// Bare budget or timeline figure, nothing else
static BARE_FIGURE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:about|around|approx\.?|maybe|max|~)?\s*(?:₹|rs\.?|inr)?\s*\d[\d,.]*\s*(?:k|l|lakhs?|lacs?|rupees|inr|days?|weeks?|months?|years?)?(?:\s*(?:-|–|to)\s*(?:₹|rs\.?)?\s*\d[\d,.]*\s*(?:k|l|lakhs?|lacs?|rupees|inr|days?|weeks?|months?|years?)?)?\s*\+?[\s?!.]*$|^flexible[\s?!.]*$",
    )
    .unwrap()
});

// Name patterns
static MY_NAME_IS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*my\s+name\s+is\s+").unwrap());

static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)https?://|\bwww\.|\b[a-z0-9-]+\.(?:com|in|io|net|org|co|dev|app)\b").unwrap()
});

static DIGIT_RUN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{2,}").unwrap());

static NOT_A_NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:budget|timeline|website|app|project|need|want|build|looking)\b").unwrap()
});

/// Kind of timeline phrase a message matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimelineKind {
    Flexible,
    Range,
    Count,
    Urgent,
    Relative,
    Month,
    By,
}

/// Entity extractor for intake replies
#[derive(Debug, Clone)]
pub struct IntakeEntityExtractor {
    /// Longest reply accepted as a bare name
    name_max_chars: usize,
}

impl Default for IntakeEntityExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl IntakeEntityExtractor {
    pub fn new() -> Self {
        Self {
            name_max_chars: extraction::NAME_MAX_CHARS,
        }
    }

    /// Override the bare-name length limit
    pub fn with_name_max_chars(mut self, name_max_chars: usize) -> Self {
        self.name_max_chars = name_max_chars;
        self
    }

    /// Values volunteered in a message nobody asked for
    pub fn extract(&self, text: &str) -> IntakeEntities {
        let budget = self.extract_budget(text).filter(|value| {
            value != "Flexible" || BUDGET_WORD_PATTERN.is_match(text)
        });

        let timeline = self
            .classify_timeline(text)
            .filter(|(kind, _)| match kind {
                TimelineKind::Flexible => TIME_WORD_PATTERN.is_match(text),
                TimelineKind::By => BY_DATE_PATTERN.is_match(text),
                _ => true,
            })
            .map(|(_, value)| value);

        let name = if budget.is_some() || timeline.is_some() {
            None
        } else {
            self.extract_name(text)
        };

        IntakeEntities {
            budget,
            timeline,
            name,
        }
    }

    /// Budget as "Flexible", digits, "Nk", "NL" or "N lakh"
    pub fn extract_budget(&self, text: &str) -> Option<String> {
        if FLEXIBLE_PATTERN.is_match(text) {
            return Some("Flexible".to_string());
        }

        if let Some(caps) = CURRENCY_PREFIX_PATTERN.captures(text) {
            // "₹50k", "Rs 2 lakh": the multiplier rules below keep the unit
            if caps.get(2).is_none() {
                return Some(digits_only(caps.get(1)?.as_str()));
            }
        } else if let Some(caps) = CURRENCY_SUFFIX_PATTERN.captures(text) {
            return Some(digits_only(caps.get(1)?.as_str()));
        }

        if let Some(caps) = THOUSANDS_PATTERN.captures(text) {
            return Some(format!("{}k", caps.get(1)?.as_str()));
        }

        if let Some(caps) = L_SUFFIX_PATTERN.captures(text) {
            return Some(format!("{}L", caps.get(1)?.as_str()));
        }

        if let Some(caps) = LAKH_PATTERN.captures(text) {
            return Some(format!("{} lakh", caps.get(1)?.as_str()));
        }

        if BUDGET_WORD_PATTERN.is_match(text) {
            if let Some(caps) = BARE_AMOUNT_PATTERN.captures(text) {
                return Some(digits_only(caps.get(1)?.as_str()));
            }
        }

        tracing::trace!(text, "No budget found");
        None
    }

    /// Timeline as "Flexible", "a-b units", "N unit(s)" or the phrase verbatim
    pub fn extract_timeline(&self, text: &str) -> Option<String> {
        self.classify_timeline(text).map(|(_, value)| value)
    }

    fn classify_timeline(&self, text: &str) -> Option<(TimelineKind, String)> {
        if FLEXIBLE_PATTERN.is_match(text) {
            return Some((TimelineKind::Flexible, "Flexible".to_string()));
        }

        if let Some(caps) = RANGE_PATTERN.captures(text) {
            let value = format!(
                "{}-{} {}s",
                caps.get(1)?.as_str(),
                caps.get(2)?.as_str(),
                caps.get(3)?.as_str().to_lowercase()
            );
            return Some((TimelineKind::Range, value));
        }

        if let Some(caps) = COUNT_PATTERN.captures(text) {
            let count: u32 = caps.get(1)?.as_str().parse().ok()?;
            let unit = caps.get(2)?.as_str().to_lowercase();
            let value = if count == 1 {
                format!("1 {unit}")
            } else {
                format!("{count} {unit}s")
            };
            return Some((TimelineKind::Count, value));
        }

        let verbatim = || text.trim().to_string();

        if URGENCY_PATTERN.is_match(text) {
            return Some((TimelineKind::Urgent, verbatim()));
        }
        if RELATIVE_PATTERN.is_match(text) {
            return Some((TimelineKind::Relative, verbatim()));
        }
        if MONTH_PATTERN.is_match(text) {
            return Some((TimelineKind::Month, verbatim()));
        }
        if BY_PATTERN.is_match(text) {
            return Some((TimelineKind::By, verbatim()));
        }

        tracing::trace!(text, "No timeline found");
        None
    }

    /// Name from "my name is X" or a short plain reply
    pub fn extract_name(&self, text: &str) -> Option<String> {
        if let Some(m) = MY_NAME_IS_PATTERN.find(text) {
            let rest = &text[m.end()..];
            let name = rest
                .split(|c: char| matches!(c, '.' | ',' | '!' | ';' | '\n'))
                .next()
                .unwrap_or(rest)
                .trim();
            return (!name.is_empty()).then(|| name.to_string());
        }

        let candidate = strip_trailing_punctuation(text);
        if candidate.is_empty()
            || candidate.chars().count() > self.name_max_chars
            || candidate.contains('@')
            || URL_PATTERN.is_match(candidate)
            || DIGIT_RUN_PATTERN.is_match(candidate)
            || NOT_A_NAME_PATTERN.is_match(candidate)
        {
            return None;
        }

        Some(candidate.to_string())
    }

    /// Message is nothing but a budget or timeline figure ("50k?", "2-3 weeks")
    pub fn is_bare_figure(&self, text: &str) -> bool {
        BARE_FIGURE_PATTERN.is_match(text.trim())
    }
}

fn digits_only(amount: &str) -> String {
    amount.chars().filter(char::is_ascii_digit).collect()
}
