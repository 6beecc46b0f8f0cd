//! Mutating primitives of the layout engine: attach, replace, remove.

use tracing::trace;

use workbench_common::LayoutError;

use super::{LayoutTree, NodeId};

impl LayoutTree {
    /// Append a detached `child` as the last child of a row or column.
    pub fn add_child(&mut self, container: NodeId, child: NodeId) -> Result<(), LayoutError> {
        if !self.check(container)?.node.is_row_or_column() {
            return Err(LayoutError::NotAContainer(container.0));
        }
        self.check_detached(child)?;
        if self.is_ancestor_or_self(child, container) {
            return Err(LayoutError::AlreadyAttached(child.0));
        }
        self.link(container, child);
        trace!(%container, %child, "added child");
        Ok(())
    }

    /// Put the detached `new` where `old` currently sits. `old` is detached
    /// but kept alive so it can be re-inserted elsewhere.
    pub fn replace_child(&mut self, old: NodeId, new: NodeId) -> Result<(), LayoutError> {
        let old_parent = self.check(old)?.parent;
        if old_parent.is_none() && !self.top_level.contains(&old) {
            return Err(LayoutError::UnknownNode(old.0));
        }
        self.check_detached(new)?;
        if self.is_ancestor_or_self(new, old) {
            return Err(LayoutError::AlreadyAttached(new.0));
        }
        self.swap_in(old, new);
        trace!(%old, %new, "replaced child");
        Ok(())
    }

    /// Append a detached node to the root's top-level items.
    pub fn push_top_level(&mut self, node: NodeId) -> Result<(), LayoutError> {
        self.check_detached(node)?;
        self.top_level.push(node);
        Ok(())
    }

    /// Detach `node` and free it together with its whole subtree.
    /// Returns every freed node, the given one first.
    pub fn remove(&mut self, node: NodeId) -> Result<Vec<NodeId>, LayoutError> {
        let parent = self.check(node)?.parent;
        match parent {
            Some(parent) => {
                if let Some(children) = self
                    .entry_mut(parent)
                    .and_then(|e| e.node.children_mut())
                {
                    children.retain(|&c| c != node);
                }
            }
            None => self.top_level.retain(|&c| c != node),
        }

        let mut freed = Vec::new();
        let mut pending = vec![node];
        while let Some(id) = pending.pop() {
            if let Some(entry) = self.entries.get_mut(id.0).and_then(Option::take) {
                pending.extend(entry.node.children().iter().rev());
                freed.push(id);
            }
        }
        trace!(%node, freed = freed.len(), "removed subtree");
        Ok(freed)
    }

    /// Replace a row or column holding exactly one child with that child,
    /// freeing the container. Returns the promoted child.
    pub fn collapse(&mut self, container: NodeId) -> Option<NodeId> {
        let &[only] = self.children(container) else {
            return None;
        };
        if let Some(children) = self.entry_mut(container).and_then(|e| e.node.children_mut()) {
            children.clear();
        }
        self.swap_in(container, only);
        if let Some(entry) = self.entries.get_mut(container.0) {
            *entry = None;
        }
        trace!(%container, child = %only, "collapsed container");
        Some(only)
    }

    /// Set a pane's closable flag. Returns `false` for non-pane nodes.
    pub fn set_closable(&mut self, node: NodeId, closable: bool) -> bool {
        match self.slot_mut(node) {
            Some(slot) => {
                slot.closable = closable;
                true
            }
            None => false,
        }
    }

    // -- Internal helpers; callers guarantee validity --

    pub(crate) fn link(&mut self, parent: NodeId, child: NodeId) {
        if let Some(children) = self.entry_mut(parent).and_then(|e| e.node.children_mut()) {
            children.push(child);
        }
        if let Some(entry) = self.entry_mut(child) {
            entry.parent = Some(parent);
        }
    }

    pub(crate) fn swap_in(&mut self, old: NodeId, new: NodeId) {
        let parent = self.entry(old).and_then(|e| e.parent);
        match parent {
            Some(parent) => {
                if let Some(children) = self.entry_mut(parent).and_then(|e| e.node.children_mut()) {
                    for slot in children.iter_mut().filter(|c| **c == old) {
                        *slot = new;
                    }
                }
            }
            None => {
                for slot in self.top_level.iter_mut().filter(|c| **c == old) {
                    *slot = new;
                }
            }
        }
        if let Some(entry) = self.entry_mut(new) {
            entry.parent = parent;
        }
        if let Some(entry) = self.entry_mut(old) {
            entry.parent = None;
        }
    }

    fn check_detached(&self, node: NodeId) -> Result<(), LayoutError> {
        let entry = self.check(node)?;
        if entry.parent.is_some() || self.top_level.contains(&node) {
            return Err(LayoutError::AlreadyAttached(node.0));
        }
        Ok(())
    }

    /// True if `ancestor` is `node` or lies on its parent chain.
    fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.entry(id).and_then(|e| e.parent);
        }
        false
    }
}
