//! Language fallback settings for new editor panes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageConfig {
    /// Used when nothing else picks a language.
    pub default: String,
    /// Language implied by the hosting site, if any. Takes precedence
    /// over `default` but not over the last language the user opened.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subdomain: Option<String>,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            default: "c++".into(),
            subdomain: None,
        }
    }
}
