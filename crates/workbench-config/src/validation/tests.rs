//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    assert!(validate(&WorkbenchConfig::default()).is_ok());
}

#[test]
fn catches_ceiling_too_small() {
    let mut config = WorkbenchConfig::default();
    config.ids.ceiling = 1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("ids.ceiling"));
}

#[test]
fn catches_ceiling_too_large() {
    let mut config = WorkbenchConfig::default();
    config.ids.ceiling = 2_000_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("ids.ceiling = 2000000 is out of range"));
}

#[test]
fn catches_empty_default_language() {
    let mut config = WorkbenchConfig::default();
    config.language.default = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("language.default must not be empty"));
}

#[test]
fn catches_bad_log_level() {
    let mut config = WorkbenchConfig::default();
    config.logging.level = "workbench=loud".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("invalid level 'loud'"));
}

#[test]
fn accepts_compound_log_directive() {
    let mut config = WorkbenchConfig::default();
    config.logging.level = "warn,workbench_hub=trace,workbench_layout".into();
    assert!(validate(&config).is_ok());
}

#[test]
fn collects_multiple_errors() {
    let mut config = WorkbenchConfig::default();
    config.ids.ceiling = 0;
    config.language.default = String::new();
    config.logging.level = String::new();
    let err = validate(&config).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)));
    let msg = err.to_string();
    assert!(msg.contains("ids.ceiling"));
    assert!(msg.contains("language.default"));
    assert!(msg.contains("logging.level"));
}
