//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod output;
mod overrides;


use crate::schema::HuetagConfig;
use huetag_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &HuetagConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    output::validate_output(&mut errors, config);
    overrides::validate_overrides(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
