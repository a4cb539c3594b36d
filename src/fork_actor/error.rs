//! Error types for the Fork actor.

use crate::model::{ForkId, PhilosopherId};
use thiserror::Error;

/// Errors that can occur during fork operations.
///
/// An unavailable fork is not an error; `TryAcquire` answers it with `false`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ForkError {
    /// A philosopher tried to put back a fork it does not hold.
    #[error("{by} cannot release {fork}: held by {holder:?}")]
    NotHeld {
        fork: ForkId,
        by: PhilosopherId,
        holder: Option<PhilosopherId>,
    },

    /// The fork replied with a result that does not belong to the request.
    #[error("Unexpected reply from fork: {0}")]
    UnexpectedReply(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ForkError {
    fn from(msg: String) -> Self {
        ForkError::ActorCommunicationError(msg)
    }
}
