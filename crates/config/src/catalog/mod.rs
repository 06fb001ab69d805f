//! Service Catalog
//!
//! Keyed table of question scripts plus the resolution rules:
//! - an alias entry (`null` list) resolves to the alias target's list
//! - an unknown service resolves to the default list
//! - anything else resolves to its own list
//!
//! Resolution is total. A catalog is built once (built-in data or a YAML file)
//! and is read-only afterwards.

mod builtin;

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use intake_agent_core::QuestionSpec;
use once_cell::sync::{Lazy, OnceCell};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::services;
use crate::prompts::{builtin_openings, FALLBACK_OPENING};

/// Question scripts keyed by service name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceCatalog {
    /// Service whose list is used for unknown names
    #[serde(default = "default_service")]
    pub default_service: String,
    /// Service whose list alias entries resolve to
    #[serde(default = "default_alias_target")]
    pub alias_target: String,
    /// Service name -> ordered questions, `None` for aliases
    #[serde(default)]
    pub services: HashMap<String, Option<Vec<QuestionSpec>>>,
    /// Service name -> opening message
    #[serde(default = "builtin_openings")]
    pub openings: HashMap<String, String>,
}

fn default_service() -> String {
    services::DEFAULT.to_string()
}

fn default_alias_target() -> String {
    services::ALIAS_TARGET.to_string()
}

impl Default for ServiceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ServiceCatalog {
    /// Catalog compiled into the crate
    pub fn builtin() -> Self {
        let services = builtin::builtin_services()
            .into_iter()
            .map(|(name, questions)| (name.to_string(), questions))
            .collect();

        Self {
            default_service: default_service(),
            alias_target: default_alias_target(),
            services,
            openings: builtin_openings(),
        }
    }

    /// Load and validate a catalog from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            CatalogError::FileNotFound(path.as_ref().display().to_string(), e.to_string())
        })?;

        Self::from_yaml_str(&content)
    }

    /// Parse and validate a catalog from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self, CatalogError> {
        let catalog: Self =
            serde_yaml::from_str(content).map_err(|e| CatalogError::Parse(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check the invariants resolution relies on
    pub fn validate(&self) -> Result<(), CatalogError> {
        match self.services.get(&self.default_service) {
            Some(Some(_)) => {}
            _ => return Err(CatalogError::MissingDefault(self.default_service.clone())),
        }

        for (service, questions) in &self.services {
            let Some(questions) = questions else {
                match self.services.get(&self.alias_target) {
                    Some(Some(_)) => continue,
                    _ => {
                        return Err(CatalogError::DanglingAlias {
                            service: service.clone(),
                            target: self.alias_target.clone(),
                        })
                    }
                }
            };

            let mut seen = HashSet::new();
            for question in questions {
                if !seen.insert(question.key.as_str()) {
                    return Err(CatalogError::DuplicateKey {
                        service: service.clone(),
                        key: question.key.clone(),
                    });
                }
                if question.templates.iter().all(|t| t.trim().is_empty()) {
                    return Err(CatalogError::EmptyTemplates {
                        service: service.clone(),
                        key: question.key.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Ordered questions for a service name
    pub fn resolve(&self, service: &str) -> &[QuestionSpec] {
        match self.services.get(service) {
            Some(Some(questions)) => questions,
            Some(None) => {
                tracing::trace!(service, target = %self.alias_target, "Resolving alias service");
                self.list(&self.alias_target)
                    .unwrap_or_else(|| self.default_questions())
            }
            None => {
                tracing::debug!(service, "Unknown service, using default catalog");
                self.default_questions()
            }
        }
    }

    /// Opening message for a service, falling back to the `default` entry
    pub fn opening_message(&self, service: &str) -> &str {
        self.openings
            .get(service)
            .or_else(|| self.openings.get(&self.default_service))
            .map(|s| s.as_str())
            .unwrap_or(FALLBACK_OPENING)
    }

    /// Whether the name has its own entry (list or alias)
    pub fn is_known(&self, service: &str) -> bool {
        self.services.contains_key(service)
    }

    /// Services with their own entry, sorted
    pub fn service_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.services.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    fn list(&self, service: &str) -> Option<&[QuestionSpec]> {
        self.services.get(service).and_then(|q| q.as_deref())
    }

    fn default_questions(&self) -> &[QuestionSpec] {
        self.list(&self.default_service).unwrap_or(&[])
    }
}

/// Errors when loading or installing a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Service catalog not found at {0}: {1}")]
    FileNotFound(String, String),
    #[error("Failed to parse service catalog: {0}")]
    Parse(String),
    #[error("Default service '{0}' has no question list")]
    MissingDefault(String),
    #[error("Service '{service}' is an alias but '{target}' has no question list")]
    DanglingAlias { service: String, target: String },
    #[error("Service '{service}' defines key '{key}' more than once")]
    DuplicateKey { service: String, key: String },
    #[error("Question '{key}' of service '{service}' has no templates")]
    EmptyTemplates { service: String, key: String },
    #[error("Service catalog already initialized")]
    AlreadyInitialized,
}

static BUILTIN_CATALOG: Lazy<Arc<ServiceCatalog>> = Lazy::new(|| Arc::new(ServiceCatalog::builtin()));

static SERVICE_CATALOG: OnceCell<Arc<ServiceCatalog>> = OnceCell::new();

/// Install the process-wide catalog
///
/// Must run during startup, before the first conversation is handled. Only
/// the first successful call takes effect.
pub fn init_service_catalog(catalog: ServiceCatalog) -> Result<Arc<ServiceCatalog>, CatalogError> {
    catalog.validate()?;
    let catalog = Arc::new(catalog);
    SERVICE_CATALOG
        .set(catalog.clone())
        .map_err(|_| CatalogError::AlreadyInitialized)?;
    tracing::info!(services = catalog.services.len(), "Service catalog initialized");
    Ok(catalog)
}

/// Process-wide catalog, or the built-in one if none was installed
pub fn service_catalog() -> Arc<ServiceCatalog> {
    SERVICE_CATALOG
        .get()
        .cloned()
        .unwrap_or_else(|| BUILTIN_CATALOG.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn keys(questions: &[QuestionSpec]) -> Vec<&str> {
        questions.iter().map(|q| q.key.as_str()).collect()
    }

    #[test]
    fn test_builtin_is_valid() {
        let catalog = ServiceCatalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.services.len(), 13);
    }

    #[test]
    fn test_exact_match() {
        let catalog = ServiceCatalog::builtin();
        let questions = catalog.resolve("Website Development");
        assert_eq!(questions.len(), 12);
        assert_eq!(questions.first().unwrap().key, "name");
        assert_eq!(questions.last().unwrap().key, "timeline");
    }

    #[test]
    fn test_alias_resolves_to_website_development() {
        let catalog = ServiceCatalog::builtin();
        assert_eq!(
            keys(catalog.resolve("App Development")),
            keys(catalog.resolve("Website Development"))
        );
        assert_eq!(
            keys(catalog.resolve("Software Development")),
            keys(catalog.resolve("Website Development"))
        );
    }

    #[test]
    fn test_unknown_service_uses_default() {
        let catalog = ServiceCatalog::builtin();
        assert_eq!(
            keys(catalog.resolve("Underwater Basket Weaving")),
            vec!["name", "company", "description", "budget", "timeline"]
        );
        assert_eq!(keys(catalog.resolve("")), keys(catalog.resolve("default")));
    }

    #[test]
    fn test_every_builtin_list_ends_with_budget_and_timeline() {
        let catalog = ServiceCatalog::builtin();
        for name in catalog.service_names() {
            let questions = catalog.resolve(name);
            let keys = keys(questions);
            assert_eq!(keys.first(), Some(&"name"), "{name}");
            assert!(keys.contains(&"budget"), "{name}");
            assert!(keys.contains(&"timeline"), "{name}");
        }
    }

    #[test]
    fn test_opening_message_fallback() {
        let catalog = ServiceCatalog::builtin();
        assert!(catalog.opening_message("Video Services").contains("video"));
        assert_eq!(catalog.opening_message("Knitting"), FALLBACK_OPENING);
    }

    #[test]
    fn test_yaml_catalog() {
        let yaml = r#"
alias_target: Consulting
services:
  default:
    - key: name
      patterns: [name]
      templates: ["What's your name?"]
  Consulting:
    - key: name
      templates: ["Hi! Who am I talking to?"]
    - key: topic
      templates: ["What do you need advice on, {name}?"]
      suggestions: [Strategy, Operations]
  Advisory: ~
openings:
  Consulting: "Let's talk strategy."
"#;
        let catalog = ServiceCatalog::from_yaml_str(yaml).unwrap();
        assert_eq!(catalog.default_service, "default");
        assert_eq!(keys(catalog.resolve("Advisory")), vec!["name", "topic"]);
        assert_eq!(keys(catalog.resolve("Other")), vec!["name"]);
        assert_eq!(catalog.opening_message("Consulting"), "Let's talk strategy.");
        assert_eq!(catalog.opening_message("Advisory"), FALLBACK_OPENING);

        let topic = &catalog.resolve("Consulting")[1];
        assert_eq!(topic.suggestion_labels(), ["Strategy", "Operations"]);
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let yaml = r#"
services:
  default:
    - key: name
      templates: ["a"]
    - key: name
      templates: ["b"]
"#;
        let err = ServiceCatalog::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateKey { ref key, .. } if key == "name"));
    }

    #[test]
    fn test_dangling_alias_rejected() {
        let yaml = r#"
services:
  default:
    - key: name
      templates: ["a"]
  App Development: ~
"#;
        let err = ServiceCatalog::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, CatalogError::DanglingAlias { .. }));
    }

    #[test]
    fn test_missing_default_rejected() {
        let yaml = r#"
services:
  Video Services:
    - key: name
      templates: ["a"]
"#;
        let err = ServiceCatalog::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, CatalogError::MissingDefault(_)));
    }

    #[test]
    fn test_empty_templates_rejected() {
        let yaml = r#"
services:
  default:
    - key: name
      templates: []
"#;
        let err = ServiceCatalog::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyTemplates { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "services:\n  default:\n    - key: name\n      templates: [\"Name?\"]"
        )
        .unwrap();

        let catalog = ServiceCatalog::load(file.path()).unwrap();
        assert_eq!(keys(catalog.resolve("anything")), vec!["name"]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ServiceCatalog::load("/nonexistent/catalog.yaml").unwrap_err();
        assert!(matches!(err, CatalogError::FileNotFound(..)));
    }

    #[test]
    fn test_global_defaults_to_builtin() {
        let catalog = service_catalog();
        assert!(catalog.is_known("Website Development"));
    }
}
