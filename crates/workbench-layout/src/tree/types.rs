//! Core types for the layout tree: node handles, node variants, pane slots.

use serde_json::Value;
use std::fmt;

use workbench_common::{LayoutError, PaneKind};

/// Handle to a node in a [`LayoutTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

/// The component hosted by a pane leaf.
#[derive(Debug, Clone, PartialEq)]
pub struct PaneSlot {
    pub kind: PaneKind,
    /// Component state as persisted by the layout engine.
    pub state: Value,
    /// Whether the user may close this pane.
    pub closable: bool,
    pub title: Option<String>,
}

impl PaneSlot {
    pub fn new(kind: PaneKind) -> Self {
        Self {
            kind,
            state: Value::Null,
            closable: true,
            title: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutNode {
    Row { children: Vec<NodeId> },
    Column { children: Vec<NodeId> },
    Pane(PaneSlot),
}

impl LayoutNode {
    pub fn row() -> Self {
        LayoutNode::Row {
            children: Vec::new(),
        }
    }

    pub fn column() -> Self {
        LayoutNode::Column {
            children: Vec::new(),
        }
    }

    pub fn is_row_or_column(&self) -> bool {
        match self {
            LayoutNode::Row { .. } | LayoutNode::Column { .. } => true,
            LayoutNode::Pane(_) => false,
        }
    }

    pub fn children(&self) -> &[NodeId] {
        match self {
            LayoutNode::Row { children } | LayoutNode::Column { children } => children,
            LayoutNode::Pane(_) => &[],
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut Vec<NodeId>> {
        match self {
            LayoutNode::Row { children } | LayoutNode::Column { children } => Some(children),
            LayoutNode::Pane(_) => None,
        }
    }

    pub fn as_pane(&self) -> Option<&PaneSlot> {
        match self {
            LayoutNode::Pane(slot) => Some(slot),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Entry {
    pub(crate) node: LayoutNode,
    pub(crate) parent: Option<NodeId>,
}

/// Arena-backed layout tree.
///
/// The implicit root holds an ordered list of top-level items. Nodes built
/// with [`LayoutTree::create_content_item`] start out detached and join the
/// tree through `add_child`, `replace_child` or `push_top_level`.
#[derive(Debug, Clone, Default)]
pub struct LayoutTree {
    pub(crate) entries: Vec<Option<Entry>>,
    pub(crate) top_level: Vec<NodeId>,
}

impl LayoutTree {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Accessors --

    pub fn node(&self, id: NodeId) -> Option<&LayoutNode> {
        self.entry(id).map(|e| &e.node)
    }

    pub fn slot(&self, id: NodeId) -> Option<&PaneSlot> {
        self.node(id).and_then(LayoutNode::as_pane)
    }

    pub fn slot_mut(&mut self, id: NodeId) -> Option<&mut PaneSlot> {
        match self.entry_mut(id).map(|e| &mut e.node) {
            Some(LayoutNode::Pane(slot)) => Some(slot),
            _ => None,
        }
    }

    /// Children of a row or column; empty for panes and unknown nodes.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(LayoutNode::children).unwrap_or(&[])
    }

    pub fn top_level(&self) -> &[NodeId] {
        &self.top_level
    }

    pub fn first_top_level(&self) -> Option<NodeId> {
        self.top_level.first().copied()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.entry(id).is_some()
    }

    /// Number of live nodes, attached or not.
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.top_level.is_empty()
    }

    /// True when the node is reachable from the root.
    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut current = id;
        loop {
            match self.entry(current) {
                None => return false,
                Some(Entry {
                    parent: Some(parent),
                    ..
                }) => current = *parent,
                Some(Entry { parent: None, .. }) => return self.top_level.contains(&current),
            }
        }
    }

    // -- Internal helpers --

    pub(crate) fn entry(&self, id: NodeId) -> Option<&Entry> {
        self.entries.get(id.0).and_then(Option::as_ref)
    }

    pub(crate) fn entry_mut(&mut self, id: NodeId) -> Option<&mut Entry> {
        self.entries.get_mut(id.0).and_then(Option::as_mut)
    }

    /// The arena only grows: freed slots stay `None` and node ids are never
    /// reused, so a stale `NodeId` can never alias a newer node.
    pub(crate) fn alloc(&mut self, node: LayoutNode) -> NodeId {
        let id = NodeId(self.entries.len());
        self.entries.push(Some(Entry { node, parent: None }));
        id
    }

    pub(crate) fn check(&self, id: NodeId) -> Result<&Entry, LayoutError> {
        self.entry(id).ok_or(LayoutError::UnknownNode(id.0))
    }
}
