//! Operations the hub exposes to panes: ids, event hubs, layout insertion.

use tracing::{debug, info, warn};

use workbench_common::{CompilerId, EditorId, Event, HubError, IdError, LanguageId, LayoutError};
use workbench_layout::{ItemConfig, NodeId};

use crate::events::{Emitter, EventHub};

use super::Hub;

impl Hub {
    // -- Ids --

    pub fn next_editor_id(&self) -> Result<EditorId, IdError> {
        self.state.borrow_mut().editors.next().map(EditorId)
    }

    pub fn next_compiler_id(&self) -> Result<CompilerId, IdError> {
        self.state.borrow_mut().compilers.next().map(CompilerId)
    }

    /// Mark an id restored from persisted state as taken right away, so ids
    /// handed out before the deferred `EditorOpen` arrives cannot collide.
    pub fn adopt_editor_id(&self, id: EditorId) {
        self.state.borrow_mut().editors.add(id.0);
    }

    pub fn adopt_compiler_id(&self, id: CompilerId) {
        self.state.borrow_mut().compilers.add(id.0);
    }

    pub fn editor_ids(&self) -> Vec<EditorId> {
        self.state
            .borrow()
            .editors
            .in_use()
            .into_iter()
            .map(EditorId)
            .collect()
    }

    pub fn compiler_ids(&self) -> Vec<CompilerId> {
        self.state
            .borrow()
            .compilers
            .in_use()
            .into_iter()
            .map(CompilerId)
            .collect()
    }

    // -- Events --

    /// A fresh per-pane view of the channel, bound to this hub's deferral.
    pub fn create_event_hub(&self) -> EventHub {
        EventHub::new(self.channel.clone(), self.deferred.clone())
    }

    pub fn emitter(&self) -> Emitter {
        self.lifecycle.emitter()
    }

    pub fn emit(&self, event: Event) {
        self.lifecycle.emit(event);
    }

    // -- Languages --

    /// Language a newly opened pane should start in: the last one any editor
    /// switched to, else the subdomain's, else the configured default.
    pub fn language_for_new_pane(&self) -> LanguageId {
        self.last_opened_language()
            .or_else(|| self.subdomain_language.clone())
            .unwrap_or_else(|| self.default_language.clone())
    }

    // -- Layout --

    /// Insert `item` at the top of the layout and build its panes.
    ///
    /// If any pane of the new subtree fails to build, the panes already built
    /// for it are destroyed and the layout is put back the way it was.
    pub fn add_at_root(&mut self, item: &ItemConfig) -> Result<NodeId, HubError> {
        let was_empty = self.layout.is_empty();
        let lone_pane = self
            .layout
            .first_top_level()
            .filter(|&first| self.layout.slot(first).is_some());

        let node = self.layout.add_at_root(item);
        let leaves = self.layout.panes_under(node);
        match self.instantiate_all(leaves) {
            Ok(created) => {
                debug!(%node, created, "added at root");
                Ok(node)
            }
            Err(e) => {
                warn!(%node, error = %e, "pane failed to build, rolling back insertion");
                self.roll_back_insert(node, was_empty, lone_pane)?;
                Err(e)
            }
        }
    }

    fn roll_back_insert(
        &mut self,
        node: NodeId,
        was_empty: bool,
        lone_pane: Option<NodeId>,
    ) -> Result<(), HubError> {
        let row = self.layout.parent(node);
        if self.layout.contains(node) {
            self.close_pane(node)?;
        }

        // Drop the row `add_at_root` created, unless a nested insert put
        // something else into it meanwhile.
        let Some(row) = row else {
            return Ok(());
        };
        if was_empty && self.layout.children(row).is_empty() {
            self.layout.remove(row)?;
        } else if let Some(pane) = lone_pane {
            if self.layout.children(row) == [pane] {
                self.layout.collapse(row);
            }
        }
        Ok(())
    }

    pub fn find_parent_row_or_column(&self, node: NodeId) -> Option<NodeId> {
        self.layout.find_parent_row_or_column(node)
    }

    /// Destroy every pane at or below `node` and remove it from the layout.
    /// Returns the number of panes destroyed.
    pub fn close_pane(&mut self, node: NodeId) -> Result<usize, HubError> {
        if !self.layout.contains(node) {
            return Err(LayoutError::UnknownNode(node.index()).into());
        }

        let mut destroyed = 0;
        for leaf in self.layout.panes_under(node) {
            if let Some(mut pane) = self.panes.remove(&leaf) {
                pane.destroy(self);
                destroyed += 1;
            }
        }
        // A pane's destroy hook may already have removed its own subtree.
        if self.layout.contains(node) {
            self.layout.remove(node)?;
        }

        info!(%node, destroyed, "closed");
        Ok(destroyed)
    }
}
