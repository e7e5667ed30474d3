//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod misc;
mod splitter;

#[cfg(test)]
mod tests;

use crate::schema::SashConfig;
use sash_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &SashConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    splitter::validate_splitter(&mut errors, config);
    misc::validate_container(&mut errors, config);
    misc::validate_explorer(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
