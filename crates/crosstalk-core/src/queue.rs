//! FIFO queue of broadcast messages.
//!
//! Push-side is unbounded; consumption is pull-based via
//! [`MessageQueue::dequeue`]. The API is `&self` over a `RefCell` so a
//! queue can live inside a shared [`Channel`](crate::channel::Channel);
//! single-threaded by design.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::error::MessagingError;
use crate::event::Broadcast;

/// An ordered FIFO container of untyped broadcast messages.
#[derive(Debug, Default)]
pub struct MessageQueue {
    messages: RefCell<VecDeque<Broadcast>>,
}

impl MessageQueue {
    /// Create a new empty queue.
    pub fn new() -> Self {
        Self {
            messages: RefCell::new(VecDeque::new()),
        }
    }

    /// Append one message at the tail.
    pub fn queue(&self, message: Broadcast) {
        self.messages.borrow_mut().push_back(message);
    }

    /// Remove and return the head message.
    ///
    /// Errors with [`MessagingError::EmptyQueue`] when the queue is empty;
    /// guard with [`MessageQueue::has_items`] or handle the error.
    pub fn dequeue(&self) -> Result<Broadcast, MessagingError> {
        self.messages
            .borrow_mut()
            .pop_front()
            .ok_or(MessagingError::EmptyQueue)
    }

    /// Whether any messages are queued. O(1).
    pub fn has_items(&self) -> bool {
        !self.messages.borrow().is_empty()
    }

    /// Number of messages currently queued.
    pub fn len(&self) -> usize {
        self.messages.borrow().len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }

    /// Drop all queued messages.
    pub fn clear(&self) {
        self.messages.borrow_mut().clear();
    }
}

// ===========================================================================
// Tests
// ===========================================================================
