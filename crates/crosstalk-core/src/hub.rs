//! The messaging hub: owns named channels and routes calls by name.
//!
//! A hub is an explicitly constructed service instance, not a global:
//! create one, share it where it is needed (typically as
//! `Rc<MessagingHub>` so handlers can capture it), and drop it when the
//! host shuts down. Tests construct and tear down hubs freely.
//!
//! # The `"general"` fallback
//!
//! Looking up an unknown channel name does not fail: it logs a warning and
//! resolves to the channel named [`FALLBACK_CHANNEL`] instead. That channel
//! is never auto-created -- if it has not been created explicitly, the
//! fallback lookup itself fails with
//! [`MessagingError::ChannelNotFound`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::warn;

use crate::channel::Channel;
use crate::error::MessagingError;
use crate::event::{Broadcast, Event, Handler};
use crate::id::{EventId, EventKey};

/// Name of the fallback channel consulted when an unknown channel name is
/// queried.
pub const FALLBACK_CHANNEL: &str = "general";

/// Owns every channel and the id-to-name diagnostics map.
#[derive(Debug, Default)]
pub struct MessagingHub {
    channels: RefCell<HashMap<String, Rc<Channel>>>,
    /// Reverse id -> name map, recorded whenever a hub API resolves a
    /// string key. Diagnostics only, never consulted for dispatch; on a
    /// hash collision the last-recorded name wins here.
    names: RefCell<HashMap<EventId, String>>,
}

impl MessagingHub {
    /// Create a hub with no channels.
    pub fn new() -> Self {
        Self {
            channels: RefCell::new(HashMap::new()),
            names: RefCell::new(HashMap::new()),
        }
    }

    // -- channel lifecycle --

    /// Get-or-create: returns the existing channel when the name is
    /// already registered, never overwrites.
    pub fn create_channel(&self, name: &str) -> Rc<Channel> {
        if let Some(channel) = self.channels.borrow().get(name) {
            return Rc::clone(channel);
        }
        let channel = Rc::new(Channel::new(name));
        self.channels
            .borrow_mut()
            .insert(name.to_string(), Rc::clone(&channel));
        channel
    }

    /// Look up a channel by name.
    ///
    /// Unknown names degrade-and-warn: a warning is logged and the
    /// [`FALLBACK_CHANNEL`] is returned instead. Only a missing fallback
    /// is an error; nothing is ever auto-created here.
    pub fn channel(&self, name: &str) -> Result<Rc<Channel>, MessagingError> {
        let channels = self.channels.borrow();
        if let Some(channel) = channels.get(name) {
            return Ok(Rc::clone(channel));
        }

        warn!("channel '{name}' not found, falling back to '{FALLBACK_CHANNEL}'");
        channels
            .get(FALLBACK_CHANNEL)
            .map(Rc::clone)
            .ok_or_else(|| MessagingError::ChannelNotFound {
                name: name.to_string(),
            })
    }

    /// Channel removal is not implemented; calling this does nothing.
    /// Kept as a documented no-op rather than removed from the API.
    pub fn remove_channel(&self, _name: &str) {}

    // -- queue pass-throughs --

    /// Whether any messages are queued on the named channel.
    pub fn has_queue_items(&self, channel: &str) -> Result<bool, MessagingError> {
        Ok(self.channel(channel)?.has_queued_items())
    }

    /// Remove and return the head message of the named channel's queue.
    pub fn dequeue_message(&self, channel: &str) -> Result<Broadcast, MessagingError> {
        self.channel(channel)?.dequeue()
    }

    /// Append one message to the named channel's queue.
    pub fn queue_message(&self, channel: &str, message: Broadcast) -> Result<(), MessagingError> {
        self.channel(channel)?.queue_message(message);
        Ok(())
    }

    // -- dispatch pass-throughs --

    /// Register a handler on the named channel.
    pub fn register_event<'a>(
        &self,
        channel: &str,
        key: impl Into<EventKey<'a>>,
        handler: Handler,
    ) -> Result<(), MessagingError> {
        let id = self.resolve(key.into());
        self.channel(channel)?.register(id, handler);
        Ok(())
    }

    /// Register a handler as the key's only handler on the named channel,
    /// replacing any others.
    pub fn register_single_event<'a>(
        &self,
        channel: &str,
        key: impl Into<EventKey<'a>>,
        handler: Handler,
    ) -> Result<(), MessagingError> {
        let id = self.resolve(key.into());
        self.channel(channel)?.register_single(id, handler);
        Ok(())
    }

    /// Unregister a handler from the named channel by identity.
    pub fn unregister_event<'a>(
        &self,
        channel: &str,
        key: impl Into<EventKey<'a>>,
        handler: &Handler,
    ) -> Result<(), MessagingError> {
        let id = self.resolve(key.into());
        self.channel(channel)?.unregister(id, handler);
        Ok(())
    }

    /// Dispatch an event on the named channel.
    pub fn dispatch_event<'a>(
        &self,
        channel: &str,
        key: impl Into<EventKey<'a>>,
        event: &mut Event,
    ) -> Result<(), MessagingError> {
        let id = self.resolve(key.into());
        self.channel(channel)?.dispatch(id, event);
        Ok(())
    }

    /// Drop every handler and queued message on the named channel.
    pub fn clear_channel(&self, channel: &str) -> Result<(), MessagingError> {
        self.channel(channel)?.clear();
        Ok(())
    }

    // -- name hashing & diagnostics --

    /// Hash a name to its id, recording the reverse mapping for
    /// [`MessagingHub::name_of`].
    pub fn hash(&self, name: &str) -> EventId {
        let id = EventId::from_name(name);
        self.names.borrow_mut().insert(id, name.to_string());
        id
    }

    /// The original name for an id previously resolved through this hub.
    pub fn name_of(&self, id: EventId) -> Option<String> {
        self.names.borrow().get(&id).cloned()
    }

    /// Snapshot of all `(name, channel)` pairs, sorted by name. Read-only:
    /// intended for diagnostic surfaces that enumerate channels and their
    /// registered handler counts without mutating anything.
    pub fn channels(&self) -> Vec<(String, Rc<Channel>)> {
        let mut out: Vec<(String, Rc<Channel>)> = self
            .channels
            .borrow()
            .iter()
            .map(|(name, channel)| (name.clone(), Rc::clone(channel)))
            .collect();
        out.sort_by(|(a, _), (b, _)| a.cmp(b));
        out
    }

    fn resolve(&self, key: EventKey<'_>) -> EventId {
        match key {
            EventKey::Id(id) => id,
            EventKey::Name(name) => self.hash(name),
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
