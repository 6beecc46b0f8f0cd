//! Startup sequence: listeners, pane instantiation, flush, `Initialised`.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use tracing::{debug, info};

use workbench_common::{Event, HubError, HubPhase, LayoutError, SessionId};
use workbench_layout::{LayoutTree, NodeId};

use crate::events::{Channel, DeferredEmissions, EventHub};
use crate::registry::{ComponentRegistry, Container};

use super::session::SessionState;
use super::{Hub, HubSettings};

impl Hub {
    /// Build the hub around `layout` and bring it to `Ready`.
    ///
    /// Every pane leaf in `layout` is built through `registry` while
    /// emissions are deferred. Once all of them exist the deferred queue is
    /// flushed in request order, then `Initialised` is emitted.
    pub fn start(
        layout: LayoutTree,
        registry: ComponentRegistry,
        settings: HubSettings,
    ) -> Result<Self, HubError> {
        let channel = Channel::new();
        let deferred = DeferredEmissions::new();
        let state = Rc::new(RefCell::new(SessionState::new(settings.id_ceiling)));

        let mut lifecycle = EventHub::new(channel.clone(), deferred.clone());
        for kind in SessionState::OBSERVED {
            let state = Rc::clone(&state);
            lifecycle.on(kind, move |event| state.borrow_mut().observe(event));
        }

        let mut hub = Self {
            session: SessionId::new(),
            phase: HubPhase::Initializing,
            layout,
            registry,
            panes: HashMap::new(),
            constructing: HashSet::new(),
            state,
            default_language: settings.default_language,
            subdomain_language: settings.subdomain_language,
            channel,
            deferred,
            lifecycle,
        };

        info!(
            session = hub.session.short(),
            panes = hub.layout.panes().len(),
            components = hub.registry.len(),
            "initializing hub"
        );

        let pending = hub.layout.panes();
        let created = hub.instantiate_all(pending)?;
        hub.undefer();
        hub.emit(Event::Initialised);

        info!(session = hub.session.short(), created, "hub ready");
        Ok(hub)
    }

    /// Leave the startup phase and deliver every deferred emission.
    fn undefer(&mut self) {
        self.phase = HubPhase::Ready;
        let flushed = self.deferred.flush(&self.channel);
        debug!(flushed, "deferred emissions delivered");
    }

    /// Build a pane for each of `nodes` that is still attached and does not
    /// have one yet.
    pub(super) fn instantiate_all(&mut self, nodes: Vec<NodeId>) -> Result<usize, HubError> {
        let mut created = 0;
        for node in nodes {
            // A factory that ran earlier in this loop may have removed or
            // already built this node.
            if self.panes.contains_key(&node)
                || self.constructing.contains(&node)
                || !self.layout.is_attached(node)
            {
                continue;
            }
            self.instantiate(node)?;
            created += 1;
        }
        Ok(created)
    }

    fn instantiate(&mut self, node: NodeId) -> Result<(), HubError> {
        let slot = self
            .layout
            .slot(node)
            .ok_or(LayoutError::UnknownNode(node.index()))?;
        let kind = slot.kind;
        let state = slot.state.clone();
        let factory = self
            .registry
            .factory(kind)
            .ok_or(HubError::UnregisteredComponent(kind))?;

        // Layouts saved by older sessions may carry `closable: false`.
        self.layout.set_closable(node, true);

        self.constructing.insert(node);
        let built = factory(&mut *self, Container { node, kind }, &state);
        self.constructing.remove(&node);

        let pane = built?;
        debug!(%node, ?kind, title = %pane.title(), "pane created");
        self.panes.insert(node, pane);
        Ok(())
    }
}
