//! Shared validation helpers.

use std::str::FromStr;
use tracing::level_filters::LevelFilter;

/// Push an error if `value` is outside `[min, max]`.
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is empty or only whitespace.
pub(crate) fn validate_non_empty(errors: &mut Vec<String>, name: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{name} must not be empty"));
    }
}

/// Push an error for each `target=level` directive whose level does not parse.
///
/// Bare targets and bare levels are both accepted, like `EnvFilter` does.
pub(crate) fn validate_log_directive(errors: &mut Vec<String>, name: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{name} must not be empty"));
        return;
    }
    for directive in value.split(',').map(str::trim).filter(|d| !d.is_empty()) {
        if let Some((_, level)) = directive.rsplit_once('=') {
            if LevelFilter::from_str(level).is_err() {
                errors.push(format!("{name}: invalid level '{level}' in '{directive}'"));
            }
        }
    }
}
