//! Actions accepted by a [`Fork`](crate::model::Fork) actor.
//!
//! These are the only two operations anybody may perform on a fork. They are handled by
//! [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action).

use crate::model::PhilosopherId;

/// Operations on a fork.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForkAction {
    /// Take the fork if it is free. Never waits for the current holder.
    TryAcquire(PhilosopherId),
    /// Put the fork back.
    ///
    /// # Errors
    /// Rejected if the sender is not the current holder.
    Release(PhilosopherId),
}

/// Results from ForkActions - variants match 1:1 with ForkAction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForkActionResult {
    /// `true` if the fork was granted to the requester.
    Acquired(bool),
    Released,
}
