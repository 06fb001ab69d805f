//! Configuration for the intake agent
//!
//! - `catalog`: service question scripts and their resolution rules
//! - `settings`: layered settings (defaults, file, environment)
//! - `prompts`: opening messages
//! - `constants`: markers, thresholds and proposal defaults

pub mod catalog;
pub mod constants;
pub mod prompts;
pub mod settings;

pub use catalog::{init_service_catalog, service_catalog, CatalogError, ServiceCatalog};
pub use settings::{
    CatalogSettings, ExtractionSettings, IntakeSettings, ProposalSettings, SettingsError,
    SettingsLoader,
};
