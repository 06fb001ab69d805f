//! Question definitions
//!
//! A `QuestionSpec` is one slot of a service's intake script. Specs are
//! immutable once a catalog is built.

use serde::{Deserialize, Serialize};

/// Keys that hold the free-form project description, in lookup order.
pub const DESCRIPTIVE_KEYS: [&str; 3] = ["description", "summary", "vision"];

/// One question of a service catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSpec {
    /// Slot identifier, unique within one catalog
    pub key: String,
    /// Lookup/debugging hints, never used for extraction
    #[serde(default, alias = "patterns")]
    pub match_patterns: Vec<String>,
    /// Phrasings; one is picked at random per presentation
    pub templates: Vec<String>,
    /// Suggestion chips, `None` when free text is expected
    #[serde(default)]
    pub suggestions: Option<Vec<String>>,
    /// Whether several suggestions may be picked at once
    #[serde(default)]
    pub multi_select: bool,
}

impl QuestionSpec {
    /// Create a free-text question
    pub fn new(key: impl Into<String>, templates: &[&str]) -> Self {
        Self {
            key: key.into(),
            match_patterns: Vec::new(),
            templates: templates.iter().map(|t| t.to_string()).collect(),
            suggestions: None,
            multi_select: false,
        }
    }

    pub fn with_patterns(mut self, patterns: &[&str]) -> Self {
        self.match_patterns = patterns.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn with_suggestions(mut self, suggestions: &[&str]) -> Self {
        self.suggestions = Some(suggestions.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn multi_select(mut self) -> Self {
        self.multi_select = true;
        self
    }

    /// Suggestion labels, empty for free-text questions
    pub fn suggestion_labels(&self) -> &[String] {
        self.suggestions.as_deref().unwrap_or(&[])
    }

    pub fn has_suggestions(&self) -> bool {
        !self.suggestion_labels().is_empty()
    }

    /// Whether this slot holds the project description
    pub fn is_descriptive(&self) -> bool {
        DESCRIPTIVE_KEYS.contains(&self.key.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let spec = QuestionSpec::new("tech", &["Which stack?"])
            .with_patterns(&["tech", "stack"])
            .with_suggestions(&["React.js", "WordPress"])
            .multi_select();

        assert_eq!(spec.key, "tech");
        assert_eq!(spec.match_patterns, vec!["tech", "stack"]);
        assert_eq!(spec.suggestion_labels(), ["React.js", "WordPress"]);
        assert!(spec.multi_select);
        assert!(spec.has_suggestions());
        assert!(!spec.is_descriptive());
    }

    #[test]
    fn test_free_text_has_no_suggestions() {
        let spec = QuestionSpec::new("description", &["Tell me about it"]);
        assert!(!spec.has_suggestions());
        assert!(spec.suggestion_labels().is_empty());
        assert!(spec.is_descriptive());
    }

    #[test]
    fn test_deserialize_with_patterns_alias() {
        let json = r#"{"key":"name","patterns":["name"],"templates":["Who are you?"],"suggestions":null}"#;
        let spec: QuestionSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.match_patterns, vec!["name"]);
        assert!(spec.suggestions.is_none());
        assert!(!spec.multi_select);
    }
}
