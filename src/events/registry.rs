//! Listener registry.
//!
//! A publish/subscribe map from event kind to an ordered list of handlers.
//! Dispatch is synchronous and runs in registration order, against a
//! snapshot of the subscriber list taken when dispatch starts, so a handler
//! that subscribes or unsubscribes during dispatch never corrupts the
//! in-flight iteration. The engine owns one registry; there is no global bus.
//!
//! Handlers are `Rc`-backed because the engine is single-threaded by design.
//! A caller embedding the engine in a concurrent context serializes access
//! externally.

use std::rc::Rc;

use rustc_hash::FxHashMap;
use tracing::trace;

use super::event::{EngineEvent, EventKind};

/// Shared handler callback.
pub type Handler = Rc<dyn Fn(&EngineEvent)>;

/// Token returned by [`ListenerRegistry::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Ordered listener storage keyed by event kind.
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: FxHashMap<EventKind, Vec<(ListenerId, Handler)>>,
    next_id: u64,
}

impl ListenerRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for an event kind.
    ///
    /// Handlers fire in registration order. The same closure may be
    /// registered for several kinds; each registration gets its own id.
    pub fn subscribe(&mut self, kind: EventKind, handler: Handler) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.entry(kind).or_default().push((id, handler));
        id
    }

    /// Remove a previously registered handler.
    ///
    /// Returns false if the id was never registered for `kind` or was
    /// already removed.
    pub fn unsubscribe(&mut self, kind: EventKind, id: ListenerId) -> bool {
        match self.listeners.get_mut(&kind) {
            Some(entries) => {
                let before = entries.len();
                entries.retain(|(entry_id, _)| *entry_id != id);
                entries.len() != before
            }
            None => false,
        }
    }

    /// Number of handlers registered for a kind.
    #[must_use]
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners.get(&kind).map_or(0, Vec::len)
    }

    /// Dispatch an event to every handler of its kind, synchronously, in
    /// registration order. Iterates a snapshot of the handler list so
    /// subscription changes made by a handler take effect only for later
    /// dispatches.
    pub fn emit(&self, event: &EngineEvent) {
        let Some(entries) = self.listeners.get(&event.kind()) else {
            return;
        };

        let snapshot: Vec<Handler> = entries.iter().map(|(_, h)| Rc::clone(h)).collect();
        trace!(kind = %event.kind(), listeners = snapshot.len(), "dispatching event");

        for handler in snapshot {
            handler(event);
        }
    }
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut counts = f.debug_struct("ListenerRegistry");
        for (kind, entries) in &self.listeners {
            counts.field(&format!("{kind}"), &entries.len());
        }
        counts.finish()
    }
}
