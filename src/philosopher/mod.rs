//! # Philosopher
//!
//! A philosopher is a plain tokio task, not a request-serving actor: it drives its own
//! state machine and talks to exactly two forks through [`ForkClient`]s.
//!
//! ## Acquisition protocol
//!
//! The right fork is always tried first, the left one second, and both with a
//! non-waiting `TryAcquire`. If the left fork is unavailable the right one is put back
//! before anything else happens. A philosopher therefore never holds a fork while waiting
//! for another one, which rules out the circular wait behind the classic deadlock.
//!
//! After any refused attempt the philosopher pauses for a random
//! [`retry_backoff`](DiningContext::retry_backoff) and tries the right fork again; it does
//! not go back to thinking.
//!
//! The protocol is deadlock-free but not starvation-free: an unlucky philosopher can keep
//! losing the race for its forks while its neighbours eat.
//!
//! ## Failures
//!
//! A fork that cannot be reached stops the philosopher. Before the error is returned, every
//! fork it still holds is put back as far as the forks allow, so a failing philosopher does
//! not lock its neighbours out. [`Philosopher::holding`] tells what could not be returned.

pub mod context;
pub mod error;

pub use context::*;
pub use error::*;

use crate::clients::ForkClient;
use crate::model::{DinerReport, DiningState, EventKind, PhilosopherId};
use tracing::{debug, info, warn};

/// Which of its two forks a philosopher currently holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Holding {
    pub right: bool,
    pub left: bool,
}

impl Holding {
    pub fn any(&self) -> bool {
        self.right || self.left
    }
}

/// One seat at the table.
///
/// The meal counter and statistics are only ever touched by the task running
/// [`dine`](Self::dine).
pub struct Philosopher {
    id: PhilosopherId,
    right: ForkClient,
    left: ForkClient,
    target: u32,
    state: DiningState,
    holding: Holding,
    meals: u32,
    attempts: u64,
    backoffs: u64,
}

impl Philosopher {
    /// Creates a philosopher that leaves after `target` meals.
    pub fn new(id: PhilosopherId, right: ForkClient, left: ForkClient, target: u32) -> Self {
        let state = if target == 0 {
            DiningState::Terminated
        } else {
            DiningState::Thinking
        };
        Self {
            id,
            right,
            left,
            target,
            state,
            holding: Holding::default(),
            meals: 0,
            attempts: 0,
            backoffs: 0,
        }
    }

    pub fn id(&self) -> PhilosopherId {
        self.id
    }

    pub fn state(&self) -> DiningState {
        self.state
    }

    pub fn holding(&self) -> Holding {
        self.holding
    }

    pub fn meals(&self) -> u32 {
        self.meals
    }

    pub fn report(&self) -> DinerReport {
        DinerReport {
            philosopher: self.id,
            meals: self.meals,
            attempts: self.attempts,
            backoffs: self.backoffs,
        }
    }

    /// Runs the state machine until the meal target is reached.
    pub async fn dine(mut self, ctx: &DiningContext) -> Result<DinerReport, PhilosopherError> {
        while self.state != DiningState::Terminated {
            self.step(ctx).await?;
        }
        info!(philosopher = %self.id, meals = self.meals, "Left the table");
        ctx.events.emit(self.id, EventKind::LeftTable { meals: self.meals });
        Ok(self.report())
    }

    /// Performs exactly one transition and returns the new state.
    ///
    /// On error every held fork is put back where possible before the error is returned.
    /// If that leaves nothing in hand while waiting for the second fork, the philosopher
    /// falls back to `AcquiringFirst`; otherwise the state is left where it was and a later
    /// step only touches forks that are still held.
    pub async fn step(&mut self, ctx: &DiningContext) -> Result<DiningState, PhilosopherError> {
        match self.transition(ctx).await {
            Ok(next) => {
                self.state = next;
                Ok(next)
            }
            Err(e) => {
                warn!(philosopher = %self.id, state = ?self.state, error = %e, "Fork failure");
                self.give_back(ctx).await;
                if self.state == DiningState::AcquiringSecond && !self.holding.right {
                    self.state = DiningState::AcquiringFirst;
                }
                Err(e)
            }
        }
    }

    async fn transition(&mut self, ctx: &DiningContext) -> Result<DiningState, PhilosopherError> {
        let next = match self.state {
            DiningState::Thinking => {
                info!(philosopher = %self.id, "Thinking");
                ctx.events.emit(self.id, EventKind::Thinking);
                ctx.think.pause().await;
                DiningState::AcquiringFirst
            }
            DiningState::AcquiringFirst => {
                self.attempts += 1;
                if try_take(self.id, &self.right, ctx).await? {
                    self.holding.right = true;
                    DiningState::AcquiringSecond
                } else {
                    ctx.retry_backoff.pause().await;
                    DiningState::AcquiringFirst
                }
            }
            DiningState::AcquiringSecond => {
                self.attempts += 1;
                if try_take(self.id, &self.left, ctx).await? {
                    self.holding.left = true;
                    DiningState::Eating
                } else {
                    put_back(self.id, &self.right, ctx).await?;
                    self.holding.right = false;
                    self.backoffs += 1;
                    ctx.retry_backoff.pause().await;
                    DiningState::AcquiringFirst
                }
            }
            DiningState::Eating => {
                self.meals += 1;
                info!(philosopher = %self.id, meal = self.meals, "Eating");
                ctx.events.emit(self.id, EventKind::Eating { meal: self.meals });
                ctx.eat.pause().await;
                DiningState::Releasing
            }
            DiningState::Releasing => {
                if self.holding.right {
                    put_back(self.id, &self.right, ctx).await?;
                    self.holding.right = false;
                }
                if self.holding.left {
                    put_back(self.id, &self.left, ctx).await?;
                    self.holding.left = false;
                }
                if self.meals >= self.target {
                    DiningState::Terminated
                } else {
                    DiningState::Thinking
                }
            }
            DiningState::Terminated => DiningState::Terminated,
        };
        Ok(next)
    }

    /// Puts back every fork still held. Failures are logged; the fork stays marked as held.
    async fn give_back(&mut self, ctx: &DiningContext) {
        if self.holding.right {
            match put_back(self.id, &self.right, ctx).await {
                Ok(()) => self.holding.right = false,
                Err(e) => warn!(philosopher = %self.id, fork = %self.right.id(), error = %e, "Could not put fork back"),
            }
        }
        if self.holding.left {
            match put_back(self.id, &self.left, ctx).await {
                Ok(()) => self.holding.left = false,
                Err(e) => warn!(philosopher = %self.id, fork = %self.left.id(), error = %e, "Could not put fork back"),
            }
        }
    }
}

async fn try_take(id: PhilosopherId, fork: &ForkClient, ctx: &DiningContext) -> Result<bool, PhilosopherError> {
    let granted = fork.try_acquire(id).await?;
    if granted {
        debug!(philosopher = %id, fork = %fork.id(), "Acquired fork");
        ctx.events.emit(id, EventKind::Acquired(fork.id()));
    } else {
        debug!(philosopher = %id, fork = %fork.id(), "Fork unavailable");
        ctx.events.emit(id, EventKind::Unavailable(fork.id()));
    }
    Ok(granted)
}

async fn put_back(id: PhilosopherId, fork: &ForkClient, ctx: &DiningContext) -> Result<(), PhilosopherError> {
    // Announce first: once the fork has processed the release a neighbour may already
    // report acquiring it.
    ctx.events.emit(id, EventKind::Released(fork.id()));
    fork.release(id).await?;
    debug!(philosopher = %id, fork = %fork.id(), "Released fork");
    Ok(())
}
