//! Identifier-keyed handler registry with synchronous fan-out dispatch.
//!
//! [`EventDispatcher::dispatch`] invokes every handler registered for an id,
//! in registration order, against a snapshot taken at dispatch start. The
//! snapshot is what makes re-entrancy safe: a handler may register,
//! unregister, or dispatch on this same dispatcher mid-pass, and the change
//! only affects future dispatches.
//!
//! Handlers are not isolated from one another: a panic in one handler
//! unwinds to the `dispatch` caller and aborts the remaining invocations of
//! that pass.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::event::{Event, Handler};
use crate::id::{EventId, EventKey};

/// Maps event ids to ordered handler lists and fans dispatches out to them.
///
/// A handler list is created lazily on first registration for an id and
/// removed entirely once its last handler is unregistered, so the registry
/// never holds dangling empty lists.
#[derive(Default)]
pub struct EventDispatcher {
    registry: RefCell<HashMap<EventId, Vec<Handler>>>,
}

impl fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Closures are opaque; show ids and handler counts only.
        f.debug_struct("EventDispatcher")
            .field("registered", &self.registered())
            .finish()
    }
}

impl EventDispatcher {
    /// Create a new dispatcher with no registrations.
    pub fn new() -> Self {
        Self {
            registry: RefCell::new(HashMap::new()),
        }
    }

    /// Append `handler` to the key's dispatch list, creating the list on
    /// first registration.
    ///
    /// Registering the same `Rc` twice is permitted and yields two
    /// invocations per dispatch; registrations are not deduplicated.
    pub fn register<'a>(&self, key: impl Into<EventKey<'a>>, handler: Handler) {
        let id = key.into().resolve();
        self.registry.borrow_mut().entry(id).or_default().push(handler);
    }

    /// Replace the key's entire dispatch list with `handler` alone.
    ///
    /// Destructive: every previously registered handler for that id is
    /// discarded, including ones added via [`EventDispatcher::register`].
    pub fn register_single<'a>(&self, key: impl Into<EventKey<'a>>, handler: Handler) {
        let id = key.into().resolve();
        self.registry.borrow_mut().insert(id, vec![handler]);
    }

    /// Remove the first registration of `handler` (pointer identity) for
    /// the key.
    ///
    /// The registry entry is removed entirely once its list empties.
    /// Unknown ids and handlers that were never registered are a no-op.
    pub fn unregister<'a>(&self, key: impl Into<EventKey<'a>>, handler: &Handler) {
        let id = key.into().resolve();
        let mut registry = self.registry.borrow_mut();
        let Some(handlers) = registry.get_mut(&id) else {
            return;
        };
        if let Some(pos) = handlers.iter().position(|h| Rc::ptr_eq(h, handler)) {
            handlers.remove(pos);
        }
        if handlers.is_empty() {
            registry.remove(&id);
        }
    }

    /// Stamp `event.kind` and invoke every handler registered for the key,
    /// in registration order.
    ///
    /// No registered handlers is a silent no-op; the event is not stamped.
    /// The handler list is snapshotted (and the registry borrow released)
    /// before the first invocation, so handlers may re-enter this
    /// dispatcher freely.
    pub fn dispatch<'a>(&self, key: impl Into<EventKey<'a>>, event: &mut Event) {
        let id = key.into().resolve();
        let snapshot: Vec<Handler> = match self.registry.borrow().get(&id) {
            Some(handlers) => handlers.clone(),
            None => return,
        };

        event.kind = id;
        for handler in &snapshot {
            handler(event);
        }
    }

    /// Drop every registered handler for every id.
    pub fn clear(&self) {
        self.registry.borrow_mut().clear();
    }

    /// Number of handlers currently registered for the key.
    pub fn handler_count<'a>(&self, key: impl Into<EventKey<'a>>) -> usize {
        let id = key.into().resolve();
        self.registry.borrow().get(&id).map_or(0, Vec::len)
    }

    /// Read-only enumeration of `(id, handler count)` pairs, sorted by id.
    /// Diagnostics only; exposes no handles to the registered closures.
    pub fn registered(&self) -> Vec<(EventId, usize)> {
        let mut out: Vec<(EventId, usize)> = self
            .registry
            .borrow()
            .iter()
            .map(|(id, handlers)| (*id, handlers.len()))
            .collect();
        out.sort_unstable_by_key(|(id, _)| *id);
        out
    }
}

// ===========================================================================
// Tests
// ===========================================================================
