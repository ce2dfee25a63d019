//! Crosstalk Core -- channel-scoped messaging for single-threaded game loops.
//!
//! This crate provides the publish/subscribe backbone a game client hangs
//! its feature code on: named channels, each pairing an event dispatcher
//! (push-based, synchronous fan-out) with a message queue (pull-based,
//! strict FIFO), all routed through one [`hub::MessagingHub`].
//!
//! # Events vs. broadcasts
//!
//! - An [`event::Event`] is dispatched immediately: every handler registered
//!   for its id runs, in registration order, before `dispatch` returns.
//! - A [`event::Broadcast`] is queued and consumed later by whoever polls
//!   the channel's queue. The dispatcher never sees it.
//!
//! # Re-entrancy
//!
//! Dispatch snapshots the handler list before invoking anything, so a
//! handler may register, unregister, or dispatch on the same or another
//! channel mid-pass; such changes take effect on the next dispatch only.
//!
//! # Threading
//!
//! Everything here is single-threaded by design: interior mutability is
//! `RefCell`, sharing is `Rc`, and nothing blocks or awaits. A
//! multi-threaded host must add its own synchronization around the hub.
//!
//! # Key Types
//!
//! - [`hub::MessagingHub`] -- owns named channels, routes calls by name.
//! - [`channel::Channel`] -- one dispatcher plus one queue under a name.
//! - [`dispatcher::EventDispatcher`] -- id-keyed handler registry.
//! - [`queue::MessageQueue`] -- FIFO of broadcasts.
//! - [`id::EventId`] -- integer event key, optionally hashed from a name.

pub mod channel;
pub mod dispatcher;
pub mod error;
pub mod event;
pub mod hub;
pub mod id;
pub mod queue;
