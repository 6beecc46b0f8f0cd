use workbench_common::{LanguageId, DEFAULT_ID_CEILING};
use workbench_config::WorkbenchConfig;

/// Construction parameters for a [`Hub`](super::Hub).
#[derive(Debug, Clone, PartialEq)]
pub struct HubSettings {
    /// Editor and compiler ids are allocated from `1..id_ceiling`.
    pub id_ceiling: u32,
    /// Language for new panes when nothing has been opened yet.
    pub default_language: LanguageId,
    /// Language implied by the host name the workbench was served from.
    pub subdomain_language: Option<LanguageId>,
}

impl Default for HubSettings {
    fn default() -> Self {
        Self {
            id_ceiling: DEFAULT_ID_CEILING,
            default_language: LanguageId::new("c++"),
            subdomain_language: None,
        }
    }
}

impl From<&WorkbenchConfig> for HubSettings {
    fn from(config: &WorkbenchConfig) -> Self {
        Self {
            id_ceiling: config.ids.ceiling,
            default_language: LanguageId::new(config.language.default.as_str()),
            subdomain_language: config
                .language
                .subdomain
                .as_deref()
                .filter(|s| !s.is_empty())
                .map(LanguageId::new),
        }
    }
}
