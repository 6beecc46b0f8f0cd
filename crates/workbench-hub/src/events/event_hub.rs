use workbench_common::{Event, EventKind};

use super::{Channel, DeferredEmissions, SubscriptionId};

/// Emission handle honoring the startup deferral. Cheap to clone, owns no
/// subscriptions, so callbacks can capture one to emit follow-up events.
#[derive(Debug, Clone)]
pub struct Emitter {
    channel: Channel,
    deferred: DeferredEmissions,
}

impl Emitter {
    pub fn new(channel: Channel, deferred: DeferredEmissions) -> Self {
        Self { channel, deferred }
    }

    /// Deliver `event` now, or queue it while startup is still deferring.
    pub fn emit(&self, event: Event) {
        if let Some(event) = self.deferred.push(event) {
            self.channel.emit(&event);
        }
    }
}

/// Per-pane view of the shared channel.
///
/// Every subscription made through an `EventHub` is recorded and removed by
/// [`unsubscribe`](EventHub::unsubscribe), or when the hub is dropped.
#[derive(Debug)]
pub struct EventHub {
    emitter: Emitter,
    subscriptions: Vec<SubscriptionId>,
}

impl EventHub {
    pub fn new(channel: Channel, deferred: DeferredEmissions) -> Self {
        Self {
            emitter: Emitter::new(channel, deferred),
            subscriptions: Vec::new(),
        }
    }

    pub fn emit(&self, event: Event) {
        self.emitter.emit(event);
    }

    pub fn emitter(&self) -> Emitter {
        self.emitter.clone()
    }

    pub fn on(&mut self, kind: EventKind, callback: impl Fn(&Event) + 'static) -> SubscriptionId {
        let id = self.emitter.channel.on(kind, callback);
        self.subscriptions.push(id);
        id
    }

    pub fn on_any(&mut self, callback: impl Fn(&Event) + 'static) -> SubscriptionId {
        let id = self.emitter.channel.on_any(callback);
        self.subscriptions.push(id);
        id
    }

    /// Remove every subscription made through this hub. Safe to call twice.
    pub fn unsubscribe(&mut self) {
        for id in self.subscriptions.drain(..) {
            self.emitter.channel.off(id);
        }
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }
}

impl Drop for EventHub {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
