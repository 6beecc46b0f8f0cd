//! Workbench configuration system.
//!
//! TOML-based configuration for the pane hub: id ceilings, language
//! fallbacks and the default log filter. Every section uses serde
//! defaults so a partial (or empty) file works out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use workbench_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{IdsConfig, LanguageConfig, LoggingConfig, WorkbenchConfig, CONFIG_SCHEMA_VERSION};

use workbench_common::ConfigError;

/// Load config from the platform default path and validate it.
///
/// Creates a commented default file if none exists yet.
pub fn load_config() -> Result<WorkbenchConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &WorkbenchConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&WorkbenchConfig::default());
        assert!(json.contains("\"ids\""));
        assert!(json.contains("\"language\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = WorkbenchConfig::default();
        let json = config_to_json(&config);
        let parsed: WorkbenchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
        assert_eq!(parsed.ids.ceiling, 100_000);
        assert_eq!(parsed.language.default, "c++");
    }
}
