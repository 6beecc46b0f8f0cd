use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use tracing::debug;

use workbench_common::Event;

use super::Channel;

#[derive(Debug)]
struct DeferredState {
    deferring: bool,
    queue: VecDeque<Event>,
}

/// Startup gate for emissions.
///
/// While deferring, emissions are queued instead of delivered. [`flush`]
/// turns deferral off for good and then delivers the queue in request order.
///
/// [`flush`]: DeferredEmissions::flush
#[derive(Debug, Clone)]
pub struct DeferredEmissions {
    inner: Rc<RefCell<DeferredState>>,
}

impl DeferredEmissions {
    /// A gate that starts out deferring.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(DeferredState {
                deferring: true,
                queue: VecDeque::new(),
            })),
        }
    }

    pub fn is_deferring(&self) -> bool {
        self.inner.borrow().deferring
    }

    /// Number of queued emissions.
    pub fn pending(&self) -> usize {
        self.inner.borrow().queue.len()
    }

    /// Queue `event` if deferring. Hands the event back otherwise.
    pub fn push(&self, event: Event) -> Option<Event> {
        let mut state = self.inner.borrow_mut();
        if state.deferring {
            debug!(
                event = event.kind().name(),
                queued = state.queue.len() + 1,
                "deferred emission"
            );
            state.queue.push_back(event);
            None
        } else {
            Some(event)
        }
    }

    /// Stop deferring and deliver everything queued so far, oldest first.
    ///
    /// Emissions made by callbacks during the flush go straight through.
    /// Calling this again is a no-op. Returns the number of events flushed.
    pub fn flush(&self, channel: &Channel) -> usize {
        let queued = {
            let mut state = self.inner.borrow_mut();
            if !state.deferring {
                return 0;
            }
            state.deferring = false;
            std::mem::take(&mut state.queue)
        };

        debug!(events = queued.len(), "flushing deferred emissions");
        for event in &queued {
            channel.emit(event);
        }
        queued.len()
    }
}

impl Default for DeferredEmissions {
    fn default() -> Self {
        Self::new()
    }
}
