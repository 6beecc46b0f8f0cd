//! Startup: layout selection, hub start and the demo session.

use std::path::Path;

use serde_json::json;
use tracing::{info, warn};

use workbench_common::PaneKind;
use workbench_hub::{Hub, HubSettings};
use workbench_layout::{ItemConfig, LayoutTree};

use crate::error::AppError;
use crate::panes;

/// One editor next to one compiler.
pub fn default_layout() -> Vec<ItemConfig> {
    vec![ItemConfig::row(vec![
        ItemConfig::component(PaneKind::Editor, json!({})),
        ItemConfig::component(PaneKind::Compiler, json!({})),
    ])]
}

/// Read a JSON list of items from `path`.
pub fn load_layout(path: &Path) -> Result<Vec<ItemConfig>, AppError> {
    let content = std::fs::read_to_string(path).map_err(|source| AppError::LayoutRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| AppError::LayoutParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Start the hub over `items`, open a diff pane and close the first editor.
pub fn run(items: &[ItemConfig], settings: HubSettings) -> Result<Hub, AppError> {
    let mut hub = Hub::start(LayoutTree::from_config(items), panes::registry(), settings)?;
    info!(
        editors = hub.editor_ids().len(),
        compilers = hub.compiler_ids().len(),
        "startup layout built"
    );

    let diff = hub.add_at_root(&ItemConfig::component(PaneKind::Diff, json!({})))?;
    info!(node = %diff, "opened diff pane");

    let first_editor = hub
        .pane_nodes()
        .into_iter()
        .find(|&node| hub.pane(node).map(|p| p.kind()) == Some(PaneKind::Editor));
    match first_editor {
        Some(node) => {
            hub.close_pane(node)?;
        }
        None => warn!("no editor to close"),
    }

    info!(
        panes = hub.pane_count(),
        editors = ?hub.editor_ids(),
        compilers = ?hub.compiler_ids(),
        language = %hub.language_for_new_pane(),
        "session settled"
    );
    Ok(hub)
}
