//! huetag configuration.
//!
//! TOML-based configuration for output rendering, logging, and pinned label
//! colors. Every section has defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use huetag_config::{config_to_json, load_config};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{HuetagConfig, LogLevel, OutputFormat, CONFIG_SCHEMA_VERSION};
pub use toml_loader::{default_config_path, load_default, load_from_path};

use huetag_common::ConfigError;
use std::path::Path;

/// Load and validate the config.
///
/// Reads `path` when given, otherwise the platform default location
/// (creating it with commented defaults if missing).
pub fn load_config(path: Option<&Path>) -> Result<HuetagConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &HuetagConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
