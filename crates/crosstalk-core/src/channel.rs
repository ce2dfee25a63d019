//! A named pairing of one event dispatcher and one message queue.

use crate::dispatcher::EventDispatcher;
use crate::error::MessagingError;
use crate::event::{Broadcast, Event, Handler};
use crate::id::{EventId, EventKey};
use crate::queue::MessageQueue;

/// Composes an [`EventDispatcher`] and a [`MessageQueue`] under a name.
///
/// The name is set at creation and immutable. A channel adds no behavior of
/// its own beyond delegating to its two owned parts; see
/// [`crate::hub::MessagingHub`] for name-based routing across channels.
///
/// String keys used directly on a channel hash via
/// [`crate::id::EventId::from_name`] without touching the hub's reverse
/// id-to-name diagnostics map; only hub-level APIs record names. Route
/// registrations through the hub when `name_of` lookups matter.
#[derive(Debug)]
pub struct Channel {
    name: String,
    dispatcher: EventDispatcher,
    queue: MessageQueue,
}

impl Channel {
    /// Create a channel with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dispatcher: EventDispatcher::new(),
            queue: MessageQueue::new(),
        }
    }

    /// The name this channel was created under.
    pub fn name(&self) -> &str {
        &self.name
    }

    // -- queue side --

    /// Whether any messages are queued.
    pub fn has_queued_items(&self) -> bool {
        self.queue.has_items()
    }

    /// Remove and return the head of the message queue.
    pub fn dequeue(&self) -> Result<Broadcast, MessagingError> {
        self.queue.dequeue()
    }

    /// Append one message to the tail of the message queue.
    pub fn queue_message(&self, message: Broadcast) {
        self.queue.queue(message);
    }

    // -- dispatch side --

    /// Register a handler for the key. See [`EventDispatcher::register`].
    pub fn register<'a>(&self, key: impl Into<EventKey<'a>>, handler: Handler) {
        self.dispatcher.register(key, handler);
    }

    /// Register a handler as the key's only handler, replacing any others.
    /// See [`EventDispatcher::register_single`].
    pub fn register_single<'a>(&self, key: impl Into<EventKey<'a>>, handler: Handler) {
        self.dispatcher.register_single(key, handler);
    }

    /// Unregister a previously registered handler by identity.
    /// See [`EventDispatcher::unregister`].
    pub fn unregister<'a>(&self, key: impl Into<EventKey<'a>>, handler: &Handler) {
        self.dispatcher.unregister(key, handler);
    }

    /// Dispatch an event to every handler registered for the key.
    /// See [`EventDispatcher::dispatch`].
    pub fn dispatch<'a>(&self, key: impl Into<EventKey<'a>>, event: &mut Event) {
        self.dispatcher.dispatch(key, event);
    }

    // -- diagnostics & maintenance --

    /// Read-only enumeration of `(id, handler count)` pairs, sorted by id.
    pub fn registered_events(&self) -> Vec<(EventId, usize)> {
        self.dispatcher.registered()
    }

    /// Drop every registered handler and every queued message.
    pub fn clear(&self) {
        self.dispatcher.clear();
        self.queue.clear();
    }
}

// ===========================================================================
// Tests
// ===========================================================================
