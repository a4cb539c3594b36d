//! # Fork Client
//!
//! Provides a high‑level API for interacting with a `Fork` actor.
//! It wraps a `ResourceClient<Fork>` and exposes the two fork operations.
use crate::fork_actor::{ForkAction, ForkActionResult, ForkError};
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Fork, ForkId, PhilosopherId};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with one Fork actor.
#[derive(Clone)]
pub struct ForkClient {
    id: ForkId,
    inner: ResourceClient<Fork>,
}

impl ForkClient {
    pub fn new(id: ForkId, inner: ResourceClient<Fork>) -> Self {
        Self { id, inner }
    }

    pub fn id(&self) -> ForkId {
        self.id
    }

    /// Try to pick the fork up.
    ///
    /// Returns `Ok(false)` if the fork is held by somebody else, or if the fork's mailbox is
    /// already full. Never waits for mailbox space.
    #[instrument(skip(self), fields(fork = %self.id))]
    pub async fn try_acquire(&self, by: PhilosopherId) -> Result<bool, ForkError> {
        match self.inner.try_perform_action(ForkAction::TryAcquire(by)).await {
            Ok(ForkActionResult::Acquired(granted)) => Ok(granted),
            Ok(other) => Err(ForkError::UnexpectedReply(format!("{other:?}"))),
            Err(FrameworkError::Busy) => {
                debug!("Fork mailbox full");
                Ok(false)
            }
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Put the fork back. Only the current holder may do this.
    #[instrument(skip(self), fields(fork = %self.id))]
    pub async fn release(&self, by: PhilosopherId) -> Result<(), ForkError> {
        match self.inner.perform_action(ForkAction::Release(by)).await {
            Ok(ForkActionResult::Released) => Ok(()),
            Ok(other) => Err(ForkError::UnexpectedReply(format!("{other:?}"))),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

#[async_trait]
impl ActorClient<Fork> for ForkClient {
    type Error = ForkError;

    fn inner(&self) -> &ResourceClient<Fork> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            // Hand the fork's own error back unchanged
            FrameworkError::EntityError(inner) => match inner.downcast::<ForkError>() {
                Ok(fork_error) => *fork_error,
                Err(other) => ForkError::ActorCommunicationError(other.to_string()),
            },
            other => ForkError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fork_actor;
    use crate::framework::mock::{create_mock_client, expect_action, expect_get, MockClient};

    const ME: PhilosopherId = PhilosopherId(4);

    #[tokio::test]
    async fn test_try_acquire_returns_grant() {
        let (client, mut receiver) = create_mock_client::<Fork>(1);
        let fork = ForkClient::new(ForkId(3), client);

        let task = tokio::spawn(async move { fork.try_acquire(ME).await });

        let (action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(action, ForkAction::TryAcquire(ME));
        responder.send(Ok(ForkActionResult::Acquired(true))).unwrap();

        assert_eq!(task.await.unwrap(), Ok(true));
    }

    #[tokio::test]
    async fn test_try_acquire_on_full_mailbox_is_refused_immediately() {
        let (client, mut receiver) = create_mock_client::<Fork>(1);
        let fork = ForkClient::new(ForkId(0), client);

        // Occupy the only mailbox slot with a request nobody answers yet
        let first = fork.clone();
        let pending = tokio::spawn(async move { first.try_acquire(PhilosopherId(1)).await });
        tokio::task::yield_now().await;

        assert_eq!(fork.try_acquire(ME).await, Ok(false));

        let (action, responder) = expect_action(&mut receiver).await.unwrap();
        assert_eq!(action, ForkAction::TryAcquire(PhilosopherId(1)));
        responder.send(Ok(ForkActionResult::Acquired(true))).unwrap();
        assert_eq!(pending.await.unwrap(), Ok(true));
    }

    #[tokio::test]
    async fn test_try_acquire_on_closed_fork_is_an_error() {
        let (client, receiver) = create_mock_client::<Fork>(1);
        drop(receiver);
        let fork = ForkClient::new(ForkId(0), client);

        let result = fork.try_acquire(ME).await;

        assert!(matches!(result, Err(ForkError::ActorCommunicationError(_))));
    }

    #[tokio::test]
    async fn test_release_by_non_holder_surfaces_fork_error() {
        let (actor, generic_client) = fork_actor::new(ForkId(2), 1);
        let handle = tokio::spawn(actor.run(()));
        let fork = ForkClient::new(ForkId(2), generic_client);

        assert_eq!(fork.try_acquire(PhilosopherId(0)).await, Ok(true));
        let result = fork.release(ME).await;

        assert_eq!(
            result,
            Err(ForkError::NotHeld {
                fork: ForkId(2),
                by: ME,
                holder: Some(PhilosopherId(0)),
            })
        );

        // The holder is untouched
        let snapshot = fork.snapshot().await.unwrap();
        assert_eq!(snapshot.holder, Some(PhilosopherId(0)));

        fork.release(PhilosopherId(0)).await.unwrap();
        drop(fork);
        let final_state = handle.await.unwrap();
        assert!(!final_state.in_use());
        assert_eq!(final_state.grants, 1);
    }

    #[tokio::test]
    async fn test_snapshot_returns_fork_state() {
        let (client, mut receiver) = create_mock_client::<Fork>(1);
        let fork = ForkClient::new(ForkId(5), client);

        let task = tokio::spawn(async move { fork.snapshot().await });

        let responder = expect_get(&mut receiver).await.expect("Expected Get request");
        let mut state = Fork::new(ForkId(5));
        state.holder = Some(ME);
        responder.send(Ok(state.clone())).unwrap();

        assert_eq!(task.await.unwrap(), Ok(state));
    }

    #[tokio::test]
    async fn test_snapshot_of_unreachable_fork_is_an_error() {
        let mut mock = MockClient::<Fork>::new();
        mock.expect_get().return_err(FrameworkError::ActorDropped);
        let fork = ForkClient::new(ForkId(1), mock.client());

        let result = fork.snapshot().await;

        assert!(matches!(result, Err(ForkError::ActorCommunicationError(_))));
        mock.verify();
    }
}
