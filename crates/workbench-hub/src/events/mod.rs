//! Typed pub/sub for panes.
//!
//! [`Channel`] is the shared subscriber list every pane talks through.
//! [`EventHub`] wraps it per pane: emissions honor the startup deferral in
//! [`DeferredEmissions`], and every subscription is remembered so a pane can
//! drop all of them at once.

mod channel;
mod deferred;
mod event_hub;

pub use channel::{Callback, Channel, SubscriptionId};
pub use deferred::DeferredEmissions;
pub use event_hub::{Emitter, EventHub};
