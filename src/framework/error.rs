//! # Framework Errors
//!
//! Common error types used throughout the actor framework. Entity-specific failures travel
//! inside [`FrameworkError::EntityError`] and are unwrapped again by the domain clients.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    /// The mailbox is full; returned only by non-waiting sends.
    #[error("Actor mailbox is full")]
    Busy,
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
