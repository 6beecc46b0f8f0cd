//! Pane coordination for the workbench.
//!
//! The [`Hub`] owns id allocation for editors and compilers, the shared event
//! channel with its startup deferral, and the component factories the layout
//! engine uses to build panes. Panes receive the hub by `&mut` reference
//! while they are constructed and talk to each other only through events.

pub mod events;
pub mod hub;
pub mod pane;
pub mod registry;

pub use events::{Channel, DeferredEmissions, Emitter, EventHub, SubscriptionId};
pub use hub::{Hub, HubSettings};
pub use pane::Pane;
pub use registry::{ComponentFactory, ComponentRegistry, Container};
