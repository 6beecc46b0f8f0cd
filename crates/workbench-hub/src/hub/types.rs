//! Core state and accessors of the Hub.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use workbench_common::{HubPhase, LanguageId, SessionId};
use workbench_layout::{LayoutTree, NodeId};

use crate::events::{Channel, DeferredEmissions, EventHub};
use crate::pane::Pane;
use crate::registry::ComponentRegistry;

use super::session::SessionState;

/// Coordinates pane identity, events and layout insertion.
///
/// Built with [`Hub::start`], which instantiates every pane in the initial
/// layout before any startup event is delivered. The hub is then `Ready`
/// for the rest of its life.
pub struct Hub {
    pub(super) session: SessionId,
    pub(super) phase: HubPhase,
    pub(super) layout: LayoutTree,
    pub(super) registry: ComponentRegistry,
    /// Live pane instances keyed by their layout node.
    pub(super) panes: HashMap<NodeId, Box<dyn Pane>>,
    /// Nodes whose factory is currently running.
    pub(super) constructing: HashSet<NodeId>,
    pub(super) state: Rc<RefCell<SessionState>>,
    pub(super) default_language: LanguageId,
    pub(super) subdomain_language: Option<LanguageId>,
    pub(super) channel: Channel,
    pub(super) deferred: DeferredEmissions,
    /// The hub's own lifecycle subscriptions.
    pub(super) lifecycle: EventHub,
}

impl Hub {
    // -- Accessors --

    pub fn phase(&self) -> HubPhase {
        self.phase
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session
    }

    pub fn layout(&self) -> &LayoutTree {
        &self.layout
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    pub fn channel(&self) -> &Channel {
        &self.channel
    }

    pub fn pane(&self, node: NodeId) -> Option<&dyn Pane> {
        self.panes.get(&node).map(|p| p.as_ref())
    }

    pub fn pane_count(&self) -> usize {
        self.panes.len()
    }

    /// Nodes with a live pane, in layout order.
    pub fn pane_nodes(&self) -> Vec<NodeId> {
        self.layout
            .panes()
            .into_iter()
            .filter(|n| self.panes.contains_key(n))
            .collect()
    }

    pub fn last_opened_language(&self) -> Option<LanguageId> {
        self.state.borrow().last_opened_language.clone()
    }
}

impl std::fmt::Debug for Hub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hub")
            .field("session", &self.session.short())
            .field("phase", &self.phase)
            .field("panes", &self.panes.len())
            .field("state", &self.state.borrow())
            .finish()
    }
}
