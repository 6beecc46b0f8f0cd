//! Item configuration: the layout engine's persisted description of a subtree.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use workbench_common::PaneKind;

use super::{LayoutNode, LayoutTree, NodeId, PaneSlot};

fn default_closable() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemConfig {
    Row {
        #[serde(default)]
        content: Vec<ItemConfig>,
    },
    Column {
        #[serde(default)]
        content: Vec<ItemConfig>,
    },
    Component {
        kind: PaneKind,
        #[serde(default)]
        state: Value,
        #[serde(default = "default_closable")]
        closable: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
}

impl ItemConfig {
    pub fn row(content: Vec<ItemConfig>) -> Self {
        ItemConfig::Row { content }
    }

    pub fn column(content: Vec<ItemConfig>) -> Self {
        ItemConfig::Column { content }
    }

    pub fn component(kind: PaneKind, state: Value) -> Self {
        ItemConfig::Component {
            kind,
            state,
            closable: true,
            title: None,
        }
    }
}

impl LayoutTree {
    /// Build a tree whose top-level items are `items`, in order.
    pub fn from_config(items: &[ItemConfig]) -> Self {
        let mut tree = Self::new();
        for item in items {
            let id = tree.create_content_item(item);
            tree.top_level.push(id);
        }
        tree
    }

    /// Snapshot the attached tree back into item configs.
    pub fn to_config(&self) -> Vec<ItemConfig> {
        self.top_level
            .iter()
            .filter_map(|&id| self.item_config(id))
            .collect()
    }

    /// Materialize `config` as a detached subtree and return its root.
    pub fn create_content_item(&mut self, config: &ItemConfig) -> NodeId {
        match config {
            ItemConfig::Row { content } => {
                let id = self.alloc(LayoutNode::row());
                self.create_children(id, content);
                id
            }
            ItemConfig::Column { content } => {
                let id = self.alloc(LayoutNode::column());
                self.create_children(id, content);
                id
            }
            ItemConfig::Component {
                kind,
                state,
                closable,
                title,
            } => self.alloc(LayoutNode::Pane(PaneSlot {
                kind: *kind,
                state: state.clone(),
                closable: *closable,
                title: title.clone(),
            })),
        }
    }

    fn create_children(&mut self, parent: NodeId, content: &[ItemConfig]) {
        for item in content {
            let child = self.create_content_item(item);
            self.link(parent, child);
        }
    }

    fn item_config(&self, id: NodeId) -> Option<ItemConfig> {
        let node = self.node(id)?;
        let content = || -> Vec<ItemConfig> {
            node.children()
                .iter()
                .filter_map(|&child| self.item_config(child))
                .collect()
        };
        Some(match node {
            LayoutNode::Row { .. } => ItemConfig::Row { content: content() },
            LayoutNode::Column { .. } => ItemConfig::Column { content: content() },
            LayoutNode::Pane(slot) => ItemConfig::Component {
                kind: slot.kind,
                state: slot.state.clone(),
                closable: slot.closable,
                title: slot.title.clone(),
            },
        })
    }
}
