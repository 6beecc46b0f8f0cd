//! Component registry: one factory per pane kind.

use std::collections::HashMap;
use std::rc::Rc;

use serde_json::Value;

use workbench_common::{HubError, PaneKind};
use workbench_layout::NodeId;

use crate::hub::Hub;
use crate::pane::Pane;

/// The layout slot a pane is being built into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Container {
    pub node: NodeId,
    pub kind: PaneKind,
}

/// Builds a pane from the hub, its container and its persisted state.
pub type ComponentFactory =
    Rc<dyn Fn(&mut Hub, Container, &Value) -> Result<Box<dyn Pane>, HubError>>;

#[derive(Clone, Default)]
pub struct ComponentRegistry {
    factories: HashMap<PaneKind, ComponentFactory>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the factory for `kind`.
    pub fn register<F>(&mut self, kind: PaneKind, factory: F) -> &mut Self
    where
        F: Fn(&mut Hub, Container, &Value) -> Result<Box<dyn Pane>, HubError> + 'static,
    {
        if self.factories.insert(kind, Rc::new(factory)).is_some() {
            tracing::debug!(?kind, "replaced component factory");
        }
        self
    }

    /// Builder form of [`register`](Self::register).
    pub fn with<F>(mut self, kind: PaneKind, factory: F) -> Self
    where
        F: Fn(&mut Hub, Container, &Value) -> Result<Box<dyn Pane>, HubError> + 'static,
    {
        self.register(kind, factory);
        self
    }

    pub fn factory(&self, kind: PaneKind) -> Option<ComponentFactory> {
        self.factories.get(&kind).cloned()
    }

    pub fn is_registered(&self, kind: PaneKind) -> bool {
        self.factories.contains_key(&kind)
    }

    /// Registered kinds, in [`PaneKind::ALL`] order.
    pub fn kinds(&self) -> Vec<PaneKind> {
        PaneKind::ALL
            .into_iter()
            .filter(|k| self.factories.contains_key(k))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl std::fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("kinds", &self.kinds())
            .finish()
    }
}
