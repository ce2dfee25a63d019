//! Event envelopes, queued broadcasts, and handler closures.
//!
//! An [`Event`] is the mutable envelope handed to handlers during dispatch;
//! a [`Broadcast`] is an immutable message placed on a channel's queue for
//! later pull-based consumption. Both carry an arbitrary `dyn Any` payload
//! that consumers downcast to the concrete type they expect.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use crate::id::EventId;

// ---------------------------------------------------------------------------
// Handler
// ---------------------------------------------------------------------------

/// A handler invoked synchronously when its event id is dispatched.
///
/// Handlers are shared via [`Rc`] and matched by pointer identity
/// ([`Rc::ptr_eq`]) on unregistration, so keep a clone of the handle you
/// register if you intend to unregister it later. The registry holds the
/// closure, not its captured state.
pub type Handler = Rc<dyn Fn(&mut Event)>;

// ---------------------------------------------------------------------------
// Event -- the dispatched envelope
// ---------------------------------------------------------------------------

/// The mutable envelope passed to every handler during a dispatch pass.
///
/// `kind` is stamped by the dispatcher immediately before handlers run;
/// callers do not need to set it themselves.
pub struct Event {
    /// The id this envelope was dispatched under.
    pub kind: EventId,
    /// Arbitrary payload; handlers downcast via [`Event::payload_ref`].
    pub payload: Option<Box<dyn Any>>,
}

impl Event {
    /// Create an empty envelope. `kind` is overwritten at dispatch time.
    pub fn new() -> Self {
        Self {
            kind: EventId(0),
            payload: None,
        }
    }

    /// Create an envelope carrying a payload.
    pub fn with_payload(payload: impl Any) -> Self {
        Self {
            kind: EventId(0),
            payload: Some(Box::new(payload)),
        }
    }

    /// Downcast the payload to a concrete type.
    pub fn payload_ref<T: Any>(&self) -> Option<&T> {
        self.payload.as_ref()?.downcast_ref::<T>()
    }

    /// Downcast the payload to a concrete type, mutably.
    pub fn payload_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.payload.as_mut()?.downcast_mut::<T>()
    }
}

impl Default for Event {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("kind", &self.kind)
            .field(
                "payload",
                &if self.payload.is_some() {
                    "Some(<any>)"
                } else {
                    "None"
                },
            )
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Broadcast -- the queued message
// ---------------------------------------------------------------------------

/// A message queued for later pull-based consumption.
///
/// Immutable after construction, unlike [`Event`], which dispatch stamps in
/// place. Queued in strict FIFO order.
pub struct Broadcast {
    kind: EventId,
    payload: Option<Box<dyn Any>>,
}

impl Broadcast {
    /// Create a broadcast with no payload.
    pub fn new(kind: EventId) -> Self {
        Self {
            kind,
            payload: None,
        }
    }

    /// Create a broadcast carrying a payload.
    pub fn with_payload(kind: EventId, payload: impl Any) -> Self {
        Self {
            kind,
            payload: Some(Box::new(payload)),
        }
    }

    /// The message's type id.
    pub fn kind(&self) -> EventId {
        self.kind
    }

    /// Downcast the payload to a concrete type.
    pub fn payload_ref<T: Any>(&self) -> Option<&T> {
        self.payload.as_ref()?.downcast_ref::<T>()
    }

    /// Consume the broadcast, taking the payload if it has the expected type.
    pub fn into_payload<T: Any>(self) -> Option<T> {
        self.payload?.downcast::<T>().ok().map(|boxed| *boxed)
    }
}

impl fmt::Debug for Broadcast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Broadcast")
            .field("kind", &self.kind)
            .field(
                "payload",
                &if self.payload.is_some() {
                    "Some(<any>)"
                } else {
                    "None"
                },
            )
            .finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Test 1: payload downcast round trip
    // -----------------------------------------------------------------------
    #[test]
    fn event_payload_downcasts() {
        let mut event = Event::with_payload(7u32);
        assert_eq!(event.payload_ref::<u32>(), Some(&7));
        assert_eq!(event.payload_ref::<String>(), None);

        *event.payload_mut::<u32>().unwrap() = 9;
        assert_eq!(event.payload_ref::<u32>(), Some(&9));
    }

    // -----------------------------------------------------------------------
    // Test 2: empty event has no payload
    // -----------------------------------------------------------------------
    #[test]
    fn empty_event_has_no_payload() {
        let event = Event::new();
        assert!(event.payload.is_none());
        assert_eq!(event.payload_ref::<u32>(), None);
    }

    // -----------------------------------------------------------------------
    // Test 3: broadcast kind and payload accessors
    // -----------------------------------------------------------------------
    #[test]
    fn broadcast_accessors() {
        let msg = Broadcast::with_payload(EventId(3), "loot".to_string());
        assert_eq!(msg.kind(), EventId(3));
        assert_eq!(msg.payload_ref::<String>().unwrap(), "loot");
        assert_eq!(msg.into_payload::<String>().unwrap(), "loot");
    }

    // -----------------------------------------------------------------------
    // Test 4: into_payload with the wrong type returns None
    // -----------------------------------------------------------------------
    #[test]
    fn into_payload_wrong_type() {
        let msg = Broadcast::with_payload(EventId(3), 5u64);
        assert!(msg.into_payload::<String>().is_none());

        let empty = Broadcast::new(EventId(1));
        assert!(empty.into_payload::<u64>().is_none());
    }
}
