//! # Mock Framework
//!
//! Utilities for testing code that talks to actors, without spawning the real actor.
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Determinism** | Scripted replies, in order | Subject to scheduler |
//! | **State** | No real state (expectations) | Real state management |
//! | **Use Case** | Testing logic *around* the client | Testing the actor itself or full system |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! Use [`MockClient`] for the fluent API, or [`create_mock_client`] together with
//! [`expect_action`] / [`expect_get`] when a test wants to answer each request by hand.
//!
//! ```rust,ignore
//! let mut fork = MockClient::<Fork>::new();
//! fork.expect_action()
//!     .matching(|a| matches!(a, ForkAction::TryAcquire(_)))
//!     .return_ok(ForkActionResult::Acquired(true));
//!
//! let client = ForkClient::new(ForkId(0), fork.client());
//! // ... drive the code under test ...
//! fork.verify();
//! ```

use crate::framework::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

type ActionMatcher<T> = Box<dyn Fn(&<T as ActorEntity>::Action) -> bool + Send>;

/// An expected request and the reply to send back.
enum Expectation<T: ActorEntity> {
    Get {
        response: Result<T, FrameworkError>,
    },
    Action {
        matcher: Option<ActionMatcher<T>>,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

/// Shared between the `MockClient` handle and its background task.
struct MockState<T: ActorEntity> {
    expectations: VecDeque<Expectation<T>>,
    received: Vec<T::Action>,
    failures: Vec<String>,
}

/// Raised back to the caller when a request did not match the next expectation.
#[derive(Debug, thiserror::Error)]
#[error("mock expectation mismatch: {0}")]
pub struct MockMismatch(pub String);

/// A mock client with expectation tracking for fluent testing.
///
/// Requests are matched against expectations strictly in the order the expectations were
/// registered. A mismatch is answered with [`MockMismatch`] and remembered, so
/// [`verify`](Self::verify) fails the test afterwards.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    state: Arc<Mutex<MockState<T>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let state = Arc::new(Mutex::new(MockState {
            expectations: VecDeque::new(),
            received: Vec::new(),
            failures: Vec::new(),
        }));
        let task_state = state.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut state = task_state.lock().unwrap();
                let expectation = state.expectations.pop_front();

                match (request, expectation) {
                    (ResourceRequest::Get { respond_to }, Some(Expectation::Get { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { action, respond_to },
                        Some(Expectation::Action { matcher, response }),
                    ) => {
                        let accepted = matcher.as_ref().map_or(true, |m| m(&action));
                        if accepted {
                            state.received.push(action);
                            let _ = respond_to.send(response);
                        } else {
                            let msg = format!("unexpected action {action:?}");
                            state.received.push(action);
                            state.failures.push(msg.clone());
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(
                                MockMismatch(msg),
                            ))));
                        }
                    }
                    (ResourceRequest::Get { respond_to }, _) => {
                        let msg = "unexpected get".to_string();
                        state.failures.push(msg.clone());
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(MockMismatch(msg)))));
                    }
                    (ResourceRequest::Action { action, respond_to }, _) => {
                        let msg = format!("unexpected action {action:?}");
                        state.received.push(action);
                        state.failures.push(msg.clone());
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(MockMismatch(msg)))));
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            state,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            state: self.state.clone(),
        }
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            matcher: None,
            state: self.state.clone(),
        }
    }

    /// Every action received so far, in arrival order.
    pub fn received_actions(&self) -> Vec<T::Action> {
        self.state.lock().unwrap().received.clone()
    }

    /// Verifies that all expectations were met and nothing unexpected arrived.
    pub fn verify(&self) {
        let state = self.state.lock().unwrap();
        if !state.failures.is_empty() {
            panic!("Mock received unexpected requests: {:?}", state.failures);
        }
        if !state.expectations.is_empty() {
            panic!("Not all expectations were met. {} remaining", state.expectations.len());
        }
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: ActorEntity> {
    state: Arc<Mutex<MockState<T>>>,
}

impl<T: ActorEntity> GetExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: T) {
        let mut state = self.state.lock().unwrap();
        state.expectations.push_back(Expectation::Get { response: Ok(value) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        let mut state = self.state.lock().unwrap();
        state.expectations.push_back(Expectation::Get { response: Err(error) });
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: ActorEntity> {
    matcher: Option<ActionMatcher<T>>,
    state: Arc<Mutex<MockState<T>>>,
}

impl<T: ActorEntity> ActionExpectationBuilder<T> {
    /// Only accept an action for which `predicate` holds.
    pub fn matching(mut self, predicate: impl Fn(&T::Action) -> bool + Send + 'static) -> Self {
        self.matcher = Some(Box::new(predicate));
        self
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, result: T::ActionResult) {
        let mut state = self.state.lock().unwrap();
        state.expectations.push_back(Expectation::Action {
            matcher: self.matcher,
            response: Ok(result),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        let mut state = self.state.lock().unwrap();
        state.expectations.push_back(Expectation::Action {
            matcher: self.matcher,
            response: Err(error),
        });
    }
}

// =============================================================================
// LOW-LEVEL HELPERS
// =============================================================================

/// Creates a client and the receiving end of its mailbox.
///
/// The test plays the actor: it pulls requests off `receiver` and answers them. This is
/// also the way to exercise a full mailbox, since nothing drains it until the test does.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<tokio::sync::oneshot::Sender<Result<T, FrameworkError>>> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Action,
    tokio::sync::oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Lamp {
        id: u32,
        on: bool,
    }

    #[derive(Clone, Debug, PartialEq)]
    enum LampAction {
        Toggle,
        Inspect,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Lamp error")]
    struct LampError;

    #[async_trait]
    impl ActorEntity for Lamp {
        type Id = u32;
        type Action = LampAction;
        type ActionResult = bool;
        type Context = ();
        type Error = LampError;

        fn id(&self) -> &u32 {
            &self.id
        }

        async fn handle_action(&mut self, _action: LampAction, _ctx: &()) -> Result<bool, LampError> {
            Ok(self.on)
        }
    }

    #[tokio::test]
    async fn test_mock_replies_in_order_and_records_actions() {
        let mut mock = MockClient::<Lamp>::new();
        mock.expect_action().return_ok(true);
        mock.expect_action()
            .matching(|a| *a == LampAction::Inspect)
            .return_ok(false);
        mock.expect_get().return_ok(Lamp { id: 3, on: true });

        let client = mock.client();
        assert!(client.perform_action(LampAction::Toggle).await.unwrap());
        assert!(!client.perform_action(LampAction::Inspect).await.unwrap());
        assert_eq!(client.get().await.unwrap(), Lamp { id: 3, on: true });

        assert_eq!(mock.received_actions(), vec![LampAction::Toggle, LampAction::Inspect]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_rejects_unmatched_action() {
        let mut mock = MockClient::<Lamp>::new();
        mock.expect_action()
            .matching(|a| *a == LampAction::Inspect)
            .return_ok(true);

        let result = mock.client().perform_action(LampAction::Toggle).await;
        assert!(matches!(result, Err(FrameworkError::EntityError(_))));

        let verdict = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| mock.verify()));
        assert!(verdict.is_err(), "verify should report the mismatch");
    }

    #[tokio::test]
    async fn test_mock_returns_scripted_error() {
        let mut mock = MockClient::<Lamp>::new();
        mock.expect_action().return_err(FrameworkError::ActorClosed);

        let result = mock.client().perform_action(LampAction::Toggle).await;
        assert!(matches!(result, Err(FrameworkError::ActorClosed)));
        mock.verify();
    }

    #[tokio::test]
    async fn test_manual_helpers() {
        let (client, mut receiver) = create_mock_client::<Lamp>(1);
        let task = tokio::spawn(async move { client.perform_action(LampAction::Inspect).await });

        let (action, responder) = expect_action(&mut receiver).await.expect("Expected Action request");
        assert_eq!(action, LampAction::Inspect);
        responder.send(Ok(true)).unwrap();

        assert!(task.await.unwrap().unwrap());
    }
}
