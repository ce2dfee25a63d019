//! Error types for the messaging core.

/// Errors that can occur in the messaging core.
///
/// Both variants are usage errors surfaced immediately to the caller; the
/// core performs no retries. Unknown channel names are *not* an error --
/// they degrade to the `"general"` fallback channel with a warning (see
/// [`crate::hub::MessagingHub::channel`]).
#[derive(Debug, thiserror::Error)]
pub enum MessagingError {
    /// Dequeue was called on an empty message queue. Guard with
    /// `has_items` first, or handle this.
    #[error("dequeue from empty message queue")]
    EmptyQueue,

    /// The named channel is unregistered and the `"general"` fallback
    /// channel does not exist either.
    #[error("channel '{name}' not found and no 'general' fallback channel exists")]
    ChannelNotFound { name: String },
}
