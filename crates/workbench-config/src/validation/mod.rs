//! Full configuration validation.
//!
//! Every check pushes onto a shared error list; the result is a single
//! `ConfigError::ValidationError` listing everything that is wrong.

mod helpers;

#[cfg(test)]
mod tests;

use crate::schema::WorkbenchConfig;
use workbench_common::ConfigError;

use helpers::{validate_log_directive, validate_non_empty, validate_range};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &WorkbenchConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_range(&mut errors, "ids.ceiling", config.ids.ceiling, 2, 1_000_000);
    validate_non_empty(&mut errors, "language.default", &config.language.default);
    validate_log_directive(&mut errors, "logging.level", &config.logging.level);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
