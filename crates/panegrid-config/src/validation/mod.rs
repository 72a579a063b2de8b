//! Full configuration validation.
//!
//! Validates numeric ranges and URL formats. Each domain has its own
//! submodule; this orchestrator calls them all and collects errors into a
//! single `ConfigError`.

mod helpers;
mod layout;
mod timing;


use crate::schema::PanegridConfig;
use panegrid_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &PanegridConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    layout::validate_pool(&mut errors, config);
    layout::validate_layout(&mut errors, config);
    timing::validate_pane(&mut errors, config);
    timing::validate_controls(&mut errors, config);
    timing::validate_fullscreen(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
