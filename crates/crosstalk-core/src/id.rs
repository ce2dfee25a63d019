//! Event identifiers and name hashing.
//!
//! Every registration and dispatch is keyed by an [`EventId`]. Callers may
//! supply the integer directly or a string name; names are hashed with
//! FNV-1a (32-bit), so the same name always resolves to the same id for the
//! lifetime of the process. Collisions between distinct names are neither
//! detected nor resolved -- dispatch operates purely on the integer key.

use std::fmt;

/// Identifies an event type within a channel. Cheap to copy and compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventId(pub u32);

impl EventId {
    const FNV_OFFSET: u32 = 0x811c9dc5;
    const FNV_PRIME: u32 = 0x0100_0193;

    /// Hash a name into an event id. FNV-1a, 32-bit. Pure and deterministic.
    pub fn from_name(name: &str) -> Self {
        let mut hash = Self::FNV_OFFSET;
        for &b in name.as_bytes() {
            hash ^= b as u32;
            hash = hash.wrapping_mul(Self::FNV_PRIME);
        }
        EventId(hash)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An event key as supplied by callers: a raw id, or a name that hashes to
/// one. Every registration/dispatch API accepts `impl Into<EventKey>`, so
/// call sites pass an [`EventId`], a `u32`, or a `&str` interchangeably.
#[derive(Debug, Clone, Copy)]
pub enum EventKey<'a> {
    Id(EventId),
    Name(&'a str),
}

impl EventKey<'_> {
    /// Resolve to the integer id, hashing names.
    pub fn resolve(self) -> EventId {
        match self {
            EventKey::Id(id) => id,
            EventKey::Name(name) => EventId::from_name(name),
        }
    }
}

impl From<EventId> for EventKey<'_> {
    fn from(id: EventId) -> Self {
        EventKey::Id(id)
    }
}

impl From<u32> for EventKey<'_> {
    fn from(raw: u32) -> Self {
        EventKey::Id(EventId(raw))
    }
}

impl<'a> From<&'a str> for EventKey<'a> {
    fn from(name: &'a str) -> Self {
        EventKey::Name(name)
    }
}
