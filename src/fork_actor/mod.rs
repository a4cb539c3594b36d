//! # Fork Actor
//!
//! Each fork on the table is owned by its own [`ResourceActor`]. The actor task is the single
//! serialization point for the fork's in-use state: philosophers never touch the state
//! directly, they send [`ForkAction`]s and wait for the answer.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Fork`]
//! - [`error`] - [`ForkError`] type for type-safe error handling
//! - [`actions`] - [`ForkAction`] and [`ForkActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use dining_philosophers::clients::ForkClient;
//! use dining_philosophers::fork_actor;
//! use dining_philosophers::model::{ForkId, PhilosopherId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = fork_actor::new(ForkId(0), 1);
//!     let fork = ForkClient::new(ForkId(0), generic_client);
//!     let handle = tokio::spawn(actor.run(()));
//!
//!     let me = PhilosopherId(0);
//!     assert!(fork.try_acquire(me).await?);
//!     assert!(!fork.try_acquire(PhilosopherId(1)).await?);
//!     fork.release(me).await?;
//!
//!     drop(fork);
//!     let final_state = handle.await?;
//!     assert_eq!(final_state.grants, 1);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::{Fork, ForkId};

/// Creates a new, free Fork actor and its client.
///
/// `mailbox` is the number of requests that may wait for the fork at once; with `1` a
/// `TryAcquire` that finds another request already queued is refused straight away.
pub fn new(id: ForkId, mailbox: usize) -> (ResourceActor<Fork>, ResourceClient<Fork>) {
    ResourceActor::new(Fork::new(id), mailbox)
}
