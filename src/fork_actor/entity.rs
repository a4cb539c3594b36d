//! ActorEntity trait implementation for the Fork domain type.
//!
//! The check-then-set on `holder` lives here. It is only ever executed by the fork's own
//! actor task, one request at a time, so two philosophers can never both see the fork free.

use super::actions::{ForkAction, ForkActionResult};
use super::error::ForkError;
use crate::framework::ActorEntity;
use crate::model::{Fork, ForkId};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl ActorEntity for Fork {
    type Id = ForkId;
    type Action = ForkAction;
    type ActionResult = ForkActionResult;
    type Context = ();
    type Error = ForkError;

    fn id(&self) -> &ForkId {
        &self.id
    }

    /// Handles fork actions.
    ///
    /// # Actions
    /// - `TryAcquire`: grants the fork if free, otherwise answers `Acquired(false)` and
    ///   changes nothing
    /// - `Release`: frees the fork if the sender holds it, otherwise `ForkError::NotHeld`
    async fn handle_action(&mut self, action: ForkAction, _ctx: &()) -> Result<ForkActionResult, ForkError> {
        match action {
            ForkAction::TryAcquire(by) => match self.holder {
                None => {
                    self.holder = Some(by);
                    self.grants += 1;
                    debug!(fork = %self.id, philosopher = %by, "Fork now in use");
                    Ok(ForkActionResult::Acquired(true))
                }
                Some(holder) => {
                    debug!(fork = %self.id, philosopher = %by, %holder, "Fork unavailable");
                    Ok(ForkActionResult::Acquired(false))
                }
            },
            ForkAction::Release(by) => {
                if self.holder != Some(by) {
                    return Err(ForkError::NotHeld {
                        fork: self.id,
                        by,
                        holder: self.holder,
                    });
                }
                self.holder = None;
                debug!(fork = %self.id, philosopher = %by, "Fork released");
                Ok(ForkActionResult::Released)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PhilosopherId;

    const ALICE: PhilosopherId = PhilosopherId(0);
    const BOB: PhilosopherId = PhilosopherId(1);

    #[tokio::test]
    async fn test_acquire_free_fork() {
        let mut fork = Fork::new(ForkId(0));

        let result = fork.handle_action(ForkAction::TryAcquire(ALICE), &()).await;

        assert_eq!(result, Ok(ForkActionResult::Acquired(true)));
        assert_eq!(fork.holder, Some(ALICE));
        assert_eq!(fork.grants, 1);
    }

    #[tokio::test]
    async fn test_acquire_busy_fork_has_no_side_effect() {
        let mut fork = Fork::new(ForkId(0));
        fork.handle_action(ForkAction::TryAcquire(ALICE), &()).await.unwrap();

        let result = fork.handle_action(ForkAction::TryAcquire(BOB), &()).await;

        assert_eq!(result, Ok(ForkActionResult::Acquired(false)));
        assert_eq!(fork.holder, Some(ALICE));
        assert_eq!(fork.grants, 1);

        // The holder asking again is refused too
        let again = fork.handle_action(ForkAction::TryAcquire(ALICE), &()).await;
        assert_eq!(again, Ok(ForkActionResult::Acquired(false)));
    }

    #[tokio::test]
    async fn test_release_then_reacquire() {
        let mut fork = Fork::new(ForkId(2));
        fork.handle_action(ForkAction::TryAcquire(ALICE), &()).await.unwrap();

        let released = fork.handle_action(ForkAction::Release(ALICE), &()).await;
        assert_eq!(released, Ok(ForkActionResult::Released));
        assert!(!fork.in_use());

        let result = fork.handle_action(ForkAction::TryAcquire(BOB), &()).await;
        assert_eq!(result, Ok(ForkActionResult::Acquired(true)));
        assert_eq!(fork.holder, Some(BOB));
        assert_eq!(fork.grants, 2);
    }

    #[tokio::test]
    async fn test_release_by_non_holder_is_rejected() {
        let mut fork = Fork::new(ForkId(1));
        fork.handle_action(ForkAction::TryAcquire(ALICE), &()).await.unwrap();

        let result = fork.handle_action(ForkAction::Release(BOB), &()).await;

        assert_eq!(
            result,
            Err(ForkError::NotHeld {
                fork: ForkId(1),
                by: BOB,
                holder: Some(ALICE),
            })
        );
        assert_eq!(fork.holder, Some(ALICE));
    }

    #[tokio::test]
    async fn test_release_free_fork_is_rejected() {
        let mut fork = Fork::new(ForkId(1));

        let result = fork.handle_action(ForkAction::Release(ALICE), &()).await;

        assert!(matches!(result, Err(ForkError::NotHeld { holder: None, .. })));
        assert!(!fork.in_use());
        assert_eq!(fork.grants, 0);
    }
}
