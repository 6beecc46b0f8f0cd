//! Identifier allocation settings.

use serde::{Deserialize, Serialize};
use workbench_common::DEFAULT_ID_CEILING;

/// Limits for editor and compiler id allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdsConfig {
    /// Exclusive upper bound; ids are handed out from `1..ceiling`.
    pub ceiling: u32,
}

impl Default for IdsConfig {
    fn default() -> Self {
        Self {
            ceiling: DEFAULT_ID_CEILING,
        }
    }
}
