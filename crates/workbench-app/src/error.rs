use std::path::PathBuf;

use workbench_common::{ConfigError, HubError};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Hub(#[from] HubError),

    #[error("failed to read layout {}: {source}", path.display())]
    LayoutRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse layout {}: {source}", path.display())]
    LayoutParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}
