//! Row / column / pane tree owned by the workbench layout engine.
//!
//! Nodes live in an arena and are addressed by [`NodeId`]. The tree keeps
//! parent links so panes can find their enclosing row or column, and
//! implements the root insertion policy used when new panes are opened.

pub mod tree;

pub use tree::{ItemConfig, LayoutNode, LayoutTree, NodeId, PaneSlot};
