//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the "Server" side of the Actor Model. It owns
//! one entity and processes messages sequentially, which gives the entity exclusive access
//! semantics without any locking.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a single entity.
///
/// # Architecture Note
/// This struct owns the state (`entity`) and the receiver end of the mailbox.
///
/// **Concurrency Model**:
/// Every request is handled to completion before the next one is dequeued. Two clients
/// racing on the same entity are therefore ordered by the mailbox, and a check-then-set
/// inside [`ActorEntity::handle_action`] is atomic with respect to all of them. No `Mutex`
/// is needed around `entity`.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies into `actor.run(context)`.
/// 3.  **Run**: Spawn the run loop in a background task. Its `JoinHandle` yields the final
///     entity state after every client has been dropped.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    entity: T,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` owning `entity`, and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `entity` - The initial state. Ownership moves into the actor.
    /// * `buffer_size` - The capacity of the mailbox. Must be at least 1.
    pub fn new(entity: T, buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, entity };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// Returns the final entity state.
    pub async fn run(mut self, context: T::Context) -> T {
        // Extract just the type name (e.g., "Fork" instead of "dining_philosophers::model::fork::Fork")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        let id = self.entity.id().clone();
        info!(entity_type, %id, "Actor started");

        if let Err(e) = self.entity.on_start(&context).await {
            warn!(entity_type, %id, error = %e, "on_start failed");
        }

        let mut handled: u64 = 0;
        while let Some(msg) = self.receiver.recv().await {
            handled += 1;
            match msg {
                ResourceRequest::Get { respond_to } => {
                    debug!(entity_type, %id, "Get");
                    let _ = respond_to.send(Ok(self.entity.clone()));
                }
                ResourceRequest::Action { action, respond_to } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let result = self
                        .entity
                        .handle_action(action, &context)
                        .await
                        .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                    if let Err(e) = &result {
                        warn!(entity_type, %id, error = %e, "Action failed");
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        if let Err(e) = self.entity.on_stop(&context).await {
            warn!(entity_type, %id, error = %e, "on_stop failed");
        }
        info!(entity_type, %id, handled, "Shutdown");
        self.entity
    }
}
