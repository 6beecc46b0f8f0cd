//! Upward and depth-first traversal of the layout tree.

use super::{LayoutNode, LayoutTree, NodeId};

impl LayoutTree {
    /// The row or column that owns `node`; `None` for top-level items.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.entry(node).and_then(|e| e.parent)
    }

    /// Walk strictly upward from `node` to the nearest row or column.
    pub fn find_parent_row_or_column(&self, node: NodeId) -> Option<NodeId> {
        let mut current = self.parent(node);
        while let Some(id) = current {
            if self.node(id).is_some_and(LayoutNode::is_row_or_column) {
                return Some(id);
            }
            current = self.parent(id);
        }
        None
    }

    /// Attached pane leaves in depth-first, left-to-right order.
    pub fn panes(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        for &id in &self.top_level {
            self.collect_panes_into(id, &mut out);
        }
        out
    }

    /// Pane leaves at or below `node`, depth-first.
    pub fn panes_under(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_panes_into(node, &mut out);
        out
    }

    fn collect_panes_into(&self, id: NodeId, out: &mut Vec<NodeId>) {
        match self.node(id) {
            Some(LayoutNode::Pane(_)) => out.push(id),
            Some(node) => {
                for &child in node.children() {
                    self.collect_panes_into(child, out);
                }
            }
            None => {}
        }
    }
}
