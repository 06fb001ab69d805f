//! Intake settings
//!
//! Layered loading:
//! 1. Serialized defaults
//! 2. Optional settings file (format picked from the extension)
//! 3. `INTAKE_` environment variables, `__` between nested keys
//!    (e.g. `INTAKE_PROPOSAL__DEPOSIT_PERCENT=40`)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{CatalogError, ServiceCatalog};
use crate::constants::{extraction, proposal};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "INTAKE";

/// Root settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntakeSettings {
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub extraction: ExtractionSettings,
    #[serde(default)]
    pub proposal: ProposalSettings,
}

/// Where the service catalog comes from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// YAML catalog replacing the built-in one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Answer extraction thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionSettings {
    /// Longest message accepted as a bare name
    #[serde(default = "default_name_max_chars")]
    pub name_max_chars: usize,
    /// Shortest message accepted as an opportunistic description
    #[serde(default = "default_descriptive_min_chars")]
    pub descriptive_min_chars: usize,
}

/// Proposal rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalSettings {
    #[serde(default = "default_description_min_chars")]
    pub description_min_chars: usize,
    #[serde(default = "default_project_name_max_chars")]
    pub project_name_max_chars: usize,
    #[serde(default = "default_pages")]
    pub default_pages: Vec<String>,
    #[serde(default = "default_deposit_percent")]
    pub deposit_percent: u8,
    #[serde(default = "default_service")]
    pub default_service: String,
}

fn default_name_max_chars() -> usize {
    extraction::NAME_MAX_CHARS
}
fn default_descriptive_min_chars() -> usize {
    extraction::DESCRIPTIVE_MIN_CHARS
}
fn default_description_min_chars() -> usize {
    proposal::DESCRIPTION_MIN_CHARS
}
fn default_project_name_max_chars() -> usize {
    proposal::PROJECT_NAME_MAX_CHARS
}
fn default_pages() -> Vec<String> {
    proposal::DEFAULT_PAGES.iter().map(|p| p.to_string()).collect()
}
fn default_deposit_percent() -> u8 {
    proposal::DEPOSIT_PERCENT
}
fn default_service() -> String {
    proposal::DEFAULT_SERVICE.to_string()
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            name_max_chars: default_name_max_chars(),
            descriptive_min_chars: default_descriptive_min_chars(),
        }
    }
}

impl Default for ProposalSettings {
    fn default() -> Self {
        Self {
            description_min_chars: default_description_min_chars(),
            project_name_max_chars: default_project_name_max_chars(),
            default_pages: default_pages(),
            deposit_percent: default_deposit_percent(),
            default_service: default_service(),
        }
    }
}

impl IntakeSettings {
    /// Catalog named by `catalog.path`, or the built-in one
    pub fn load_catalog(&self) -> Result<ServiceCatalog, CatalogError> {
        match &self.catalog.path {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading service catalog");
                ServiceCatalog::load(path)
            }
            None => Ok(ServiceCatalog::builtin()),
        }
    }

    /// Effective settings as a TOML document, loadable again with `with_file`
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Settings loader
#[derive(Debug, Default)]
pub struct SettingsLoader {
    settings_path: Option<PathBuf>,
    env_prefix: Option<String>,
}

impl SettingsLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Settings file layered over the defaults
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.settings_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Override the environment prefix
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    pub fn load(&self) -> Result<IntakeSettings, SettingsError> {
        let defaults_json = serde_json::to_string(&IntakeSettings::default())?;
        let mut builder =
            Config::builder().add_source(File::from_str(&defaults_json, FileFormat::Json));

        if let Some(path) = &self.settings_path {
            if !path.exists() {
                return Err(SettingsError::FileNotFound(path.clone()));
            }
            builder = builder.add_source(File::from(path.as_path()));
        }

        builder = builder.add_source(
            Environment::with_prefix(self.env_prefix.as_deref().unwrap_or(ENV_PREFIX))
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("proposal.default_pages"),
        );

        let settings: IntakeSettings = builder.build()?.try_deserialize()?;
        tracing::debug!(
            catalog = ?settings.catalog.path,
            deposit_percent = settings.proposal.deposit_percent,
            "Intake settings loaded"
        );
        Ok(settings)
    }
}

/// Settings loading errors
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Settings file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Settings error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Failed to serialize default settings: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to render settings as TOML: {0}")]
    Toml(#[from] toml::ser::Error),
}
