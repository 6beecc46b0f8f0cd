//! Configuration schema.
//!
//! `WorkbenchConfig` is the root; each section lives in its own module.

mod ids;
mod language;
mod logging;

pub use ids::*;
pub use language::*;
pub use logging::*;

use serde::{Deserialize, Serialize};

/// Bumped when a section changes incompatibly.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkbenchConfig {
    pub ids: IdsConfig,
    pub language: LanguageConfig,
    pub logging: LoggingConfig,
}
