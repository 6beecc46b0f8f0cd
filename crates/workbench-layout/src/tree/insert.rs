//! Root insertion policy for newly opened panes.

use tracing::debug;

use super::{ItemConfig, LayoutNode, LayoutTree, NodeId};

impl LayoutTree {
    /// Insert `item` at the top of the layout and return its node.
    ///
    /// - If the first top-level item is a row or column, the new item becomes
    ///   its last child.
    /// - If it is a lone pane, it is wrapped in a new row: the old pane first,
    ///   the new item second.
    /// - If the tree is empty, a root row holding only the new item is created.
    ///
    /// Once two panes exist the root therefore always starts with a row or
    /// column, and later insertions only ever append.
    pub fn add_at_root(&mut self, item: &ItemConfig) -> NodeId {
        let new = self.create_content_item(item);

        let Some(first) = self.first_top_level() else {
            let row = self.alloc(LayoutNode::row());
            self.link(row, new);
            self.top_level.push(row);
            debug!(%row, %new, "created root row");
            return new;
        };

        match self.node(first) {
            Some(LayoutNode::Row { .. } | LayoutNode::Column { .. }) => {
                self.link(first, new);
                debug!(container = %first, %new, "appended to root container");
            }
            Some(LayoutNode::Pane(_)) | None => {
                let row = self.alloc(LayoutNode::row());
                self.swap_in(first, row);
                self.link(row, first);
                self.link(row, new);
                debug!(%row, pane = %first, %new, "wrapped root pane in a row");
            }
        }
        new
    }
}
