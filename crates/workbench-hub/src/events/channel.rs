use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::trace;

use workbench_common::{Event, EventKind};

pub type Callback = Rc<dyn Fn(&Event)>;

/// Handle returned by [`Channel::on`], used to remove the subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscriber {
    id: SubscriptionId,
    /// `None` receives every event.
    kind: Option<EventKind>,
    callback: Callback,
}

#[derive(Default)]
struct Subscribers {
    next_id: u64,
    entries: Vec<Subscriber>,
}

/// Shared, single-threaded event channel.
///
/// Cloning yields another handle to the same subscriber list. Callbacks run
/// synchronously inside [`emit`](Channel::emit) and may subscribe,
/// unsubscribe or emit again while running.
#[derive(Clone, Default)]
pub struct Channel {
    inner: Rc<RefCell<Subscribers>>,
}

impl Channel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(&self, kind: EventKind, callback: impl Fn(&Event) + 'static) -> SubscriptionId {
        self.insert(Some(kind), Rc::new(callback))
    }

    /// Subscribe to every event regardless of kind.
    pub fn on_any(&self, callback: impl Fn(&Event) + 'static) -> SubscriptionId {
        self.insert(None, Rc::new(callback))
    }

    /// Remove a subscription. Returns `false` if it was already gone.
    pub fn off(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.entries.len();
        inner.entries.retain(|s| s.id != id);
        inner.entries.len() != before
    }

    /// Deliver `event` to matching subscribers in subscription order.
    /// Returns the number of callbacks invoked.
    pub fn emit(&self, event: &Event) -> usize {
        let kind = event.kind();
        let targets: Vec<(SubscriptionId, Callback)> = self
            .inner
            .borrow()
            .entries
            .iter()
            .filter(|s| s.kind.map_or(true, |k| k == kind))
            .map(|s| (s.id, Rc::clone(&s.callback)))
            .collect();

        let mut delivered = 0;
        for (id, callback) in targets {
            // An earlier callback may have removed this one.
            if !self.is_subscribed(id) {
                continue;
            }
            callback(event);
            delivered += 1;
        }
        trace!(event = kind.name(), delivered, "emitted");
        delivered
    }

    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.inner.borrow().entries.iter().any(|s| s.id == id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    fn insert(&self, kind: Option<EventKind>, callback: Callback) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = SubscriptionId(inner.next_id);
        inner.entries.push(Subscriber { id, kind, callback });
        id
    }
}

impl fmt::Debug for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
