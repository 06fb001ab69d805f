//! Message normalization and the greeting/skip filters

use once_cell::sync::Lazy;
use regex::Regex;

static TRAILING_PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s.!?,;:]+$").unwrap());

static GREETING_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:h+i+|h+e+y+|h+e+l+o+|y+o+|s+u+p+|wh?at'?s\s*u+p+)(?:\s+there)?[\s!.,?]*$",
    )
    .unwrap()
});

/// Lowercase, trimmed, without trailing punctuation
pub fn normalize_answer(text: &str) -> String {
    TRAILING_PUNCTUATION
        .replace(text.trim(), "")
        .to_lowercase()
}

/// Trimmed, without trailing punctuation, case kept
pub fn strip_trailing_punctuation(text: &str) -> &str {
    let trimmed = text.trim();
    match TRAILING_PUNCTUATION.find(trimmed) {
        Some(m) => &trimmed[..m.start()],
        None => trimmed,
    }
}

/// Small talk that never answers a question ("hi", "hiii", "hey there", "what's up")
pub fn is_greeting(text: &str) -> bool {
    GREETING_PATTERN.is_match(text.trim())
}

/// Explicit request to skip the current question
pub fn is_skip(text: &str) -> bool {
    let normalized = normalize_answer(text);
    matches!(normalized.as_str(), "skip" | "done" | "na" | "n/a") || normalized.contains("skip")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_answer() {
        assert_eq!(normalize_answer("  E-Commerce!! "), "e-commerce");
        assert_eq!(normalize_answer("Yes."), "yes");
        assert_eq!(normalize_answer("..."), "");
    }

    #[test]
    fn test_strip_trailing_punctuation() {
        assert_eq!(strip_trailing_punctuation(" Asha. "), "Asha");
        assert_eq!(strip_trailing_punctuation("Next.js"), "Next.js");
    }

    #[test]
    fn test_greetings() {
        for greeting in ["hi", "Hiii", "hey", "HEYYY!", "hello", "helloooo", "yo", "sup", "what's up?", "whats up", "hey there!"] {
            assert!(is_greeting(greeting), "{greeting}");
        }
    }

    #[test]
    fn test_not_greetings() {
        for text in ["Hi, I'm Asha", "hello world store", "Yoga studio", "Supreme", "history"] {
            assert!(!is_greeting(text), "{text}");
        }
    }

    #[test]
    fn test_skip() {
        for text in ["skip", "Skip!", "done", "NA", "n/a", "let's skip this one", "SKIP IT"] {
            assert!(is_skip(text), "{text}");
        }
        for text in ["nah I have one", "done deal with Shopify", "national"] {
            assert!(!is_skip(text), "{text}");
        }
    }
}
