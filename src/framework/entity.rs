//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract for state that is owned by exactly one
//! [`ResourceActor`](crate::framework::ResourceActor). The actor task is the only place the
//! entity is ever mutated; everyone else talks to it through a
//! [`ResourceClient`](crate::framework::ResourceClient).
//!
//! # Architecture Note
//! We use "Associated Types" (type Id, type Action, etc.) to enforce type safety.
//! A `Fork` actor only accepts `ForkAction`s, and you can't accidentally send it
//! anything else. The compiler prevents this class of bugs entirely.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_start`]
//! - [`ActorEntity::on_stop`]
//!
//! The default implementations do nothing (`Ok(())`).

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any entity must implement to be owned by a `ResourceActor`.
///
/// # Async & Context
/// This trait is `#[async_trait]` so hooks may await other actors. The `Context` type is
/// injected into every hook, which allows "Late Binding" of dependencies (passing them to
/// `run()` instead of `new()`).
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The identifier used in logs and errors (e.g., `ForkId`).
    type Id: Eq + Clone + Send + Sync + Display + Debug;

    /// Enum representing the operations this entity accepts.
    ///
    /// `Clone` lets test doubles record what they were sent.
    type Action: Clone + Send + Sync + Debug;

    /// The result type returned by actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// The framework boxes it into [`FrameworkError::EntityError`](crate::framework::FrameworkError::EntityError);
    /// domain clients downcast it back.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Identity of this entity.
    fn id(&self) -> &Self::Id;

    /// Called once when the actor loop starts, before the first request.
    async fn on_start(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle one action. Requests are never interleaved: the next one is only
    /// dequeued after this returns.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    /// Called once after the mailbox closes, before the final state is handed back.
    async fn on_stop(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
