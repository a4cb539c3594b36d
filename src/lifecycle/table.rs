//! # The Table
//!
//! [`Table`] owns one dinner from seating to shutdown and hands back a [`TableReport`]. The
//! free function [`run`] is the shortcut for a default-paced table of a given size.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio::task::{JoinHandle, JoinSet};
use tracing::{error, info};

use super::seating::{self, Seat};
use super::{TableConfig, TableError};
use crate::clients::ForkClient;
use crate::fork_actor;
use crate::model::{DinerReport, DiningEvent, Fork, ForkId};
use crate::philosopher::{DiningContext, EventSink, Philosopher};

/// The coordinator of one dinner.
///
/// `Table` is responsible for:
/// - **Wiring**: one fork actor per seat, and a ring seating plan binding each philosopher
///   to its two neighbouring forks
/// - **Launching**: every philosopher runs as its own Tokio task
/// - **Completion**: waiting until every philosopher has eaten its meals, then shutting the
///   forks down and checking none is still held
///
/// # Example
///
/// ```ignore
/// let mut table = Table::new(TableConfig::default())?;
/// let mut events = table.subscribe(); // optional
///
/// let report = table.run().await?;
/// assert!(report.diners.iter().all(|d| d.meals == 3));
/// ```
pub struct Table {
    config: TableConfig,
    seats: Vec<Seat>,
    /// Clients kept by the table itself. Dropping them (and the philosophers' clones) is
    /// what shuts the fork actors down.
    forks: Vec<ForkClient>,
    fork_handles: Vec<JoinHandle<Fork>>,
    philosophers: Vec<Philosopher>,
    events: EventSink,
}

/// Outcome of a finished dinner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableReport {
    /// One report per philosopher, ordered by seat.
    pub diners: Vec<DinerReport>,
    /// Final state of every fork, ordered by position.
    pub forks: Vec<Fork>,
}

impl TableReport {
    pub fn total_meals(&self) -> u64 {
        self.diners.iter().map(|d| u64::from(d.meals)).sum()
    }

    pub fn total_backoffs(&self) -> u64 {
        self.diners.iter().map(|d| d.backoffs).sum()
    }
}

impl Table {
    /// Validates `config`, spawns the fork actors and seats the philosophers.
    ///
    /// Must be called from within a Tokio runtime. Nobody starts eating until
    /// [`run`](Self::run).
    pub fn new(config: TableConfig) -> Result<Self, TableError> {
        config.validate()?;
        let seats = seating::ring(config.philosophers);
        seating::validate(&seats, config.philosophers)?;

        // 1. Forks, each owned by its own actor task
        let mut forks = Vec::with_capacity(config.philosophers);
        let mut fork_handles = Vec::with_capacity(config.philosophers);
        for i in 0..config.philosophers {
            let id = ForkId(i);
            let (actor, client) = fork_actor::new(id, config.fork_mailbox);
            fork_handles.push(tokio::spawn(actor.run(())));
            forks.push(ForkClient::new(id, client));
        }

        // 2. Philosophers, holding clients for their two forks
        let philosophers = seats
            .iter()
            .map(|seat| {
                Philosopher::new(
                    seat.philosopher,
                    forks[seat.right.0].clone(),
                    forks[seat.left.0].clone(),
                    config.meals,
                )
            })
            .collect();

        info!(philosophers = config.philosophers, meals = config.meals, "Table set");
        Ok(Self {
            config,
            seats,
            forks,
            fork_handles,
            philosophers,
            events: EventSink::disabled(),
        })
    }

    /// Starts recording every [`DiningEvent`] of the upcoming run.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<DiningEvent> {
        let (sink, receiver) = EventSink::channel();
        self.events = sink;
        receiver
    }

    pub fn seating(&self) -> &[Seat] {
        &self.seats
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Runs the dinner to completion.
    ///
    /// # Shutdown Process
    ///
    /// Once every philosopher task has finished, all fork clients are gone: the table drops
    /// its own, and each philosopher dropped its pair when its task ended. Each fork actor
    /// then sees its mailbox close and hands back its final state.
    ///
    /// # Returns
    ///
    /// - `Ok(TableReport)` if every philosopher reached the meal target and every fork is free
    /// - `Err(TableError)` for the first philosopher or task failure, or a fork left held
    pub async fn run(self) -> Result<TableReport, TableError> {
        let ctx = Arc::new(DiningContext::new(&self.config, self.events));
        info!("Dinner started");

        let mut diners = JoinSet::new();
        for philosopher in self.philosophers {
            let ctx = ctx.clone();
            diners.spawn(async move { philosopher.dine(&ctx).await });
        }

        let mut reports = Vec::with_capacity(self.config.philosophers);
        let mut failure: Option<TableError> = None;
        while let Some(joined) = diners.join_next().await {
            match joined {
                Ok(Ok(report)) => reports.push(report),
                Ok(Err(e)) => {
                    error!(error = %e, "Philosopher failed");
                    if failure.is_none() {
                        failure = Some(e.into());
                    }
                    diners.abort_all();
                }
                // Aborted after an earlier failure
                Err(e) if e.is_cancelled() => {}
                Err(e) => {
                    error!(error = %e, "Philosopher task failed");
                    if failure.is_none() {
                        failure = Some(TableError::TaskFailed(e.to_string()));
                    }
                    diners.abort_all();
                }
            }
        }

        // Close every fork mailbox and collect the final states
        drop(self.forks);
        let mut forks = Vec::with_capacity(self.fork_handles.len());
        for handle in self.fork_handles {
            match handle.await {
                Ok(fork) => forks.push(fork),
                Err(e) => {
                    error!(error = %e, "Fork task failed");
                    if failure.is_none() {
                        failure = Some(TableError::TaskFailed(e.to_string()));
                    }
                }
            }
        }

        if let Some(e) = failure {
            return Err(e);
        }
        if let Some((fork, holder)) = forks.iter().find_map(|f| f.holder.map(|h| (f.id, h))) {
            return Err(TableError::ForkLeaked { fork, holder });
        }

        reports.sort_by_key(|r| r.philosopher);
        let report = TableReport { diners: reports, forks };
        info!(
            meals = report.total_meals(),
            backoffs = report.total_backoffs(),
            "Dinner finished"
        );
        Ok(report)
    }
}

/// Seats `philosophers` around as many forks and blocks until each has eaten `meals` meals.
///
/// Uses the default pacing from [`TableConfig`].
pub async fn run(philosophers: usize, meals: u32) -> Result<TableReport, TableError> {
    Table::new(TableConfig::new(philosophers, meals))?.run().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fork_actor::ForkError;
    use crate::model::PhilosopherId;
    use crate::philosopher::PhilosopherError;

    #[tokio::test]
    async fn test_lost_fork_aborts_the_dinner() {
        let table = Table::new(TableConfig::instant(4, 3)).unwrap();
        // The fork task is cancelled before it ever handles a request
        table.fork_handles[0].abort();

        let result = tokio::time::timeout(std::time::Duration::from_secs(10), table.run())
            .await
            .expect("Dinner did not stop in time");

        assert!(matches!(
            result,
            Err(TableError::Philosopher(PhilosopherError::Fork(
                ForkError::ActorCommunicationError(_)
            )))
        ));
    }

    #[tokio::test]
    async fn test_fork_held_after_dinner_is_reported() {
        let mut table = Table::new(TableConfig::instant(3, 1)).unwrap();
        // Nobody dines; an outsider keeps fork 1
        table.philosophers.clear();
        let outsider = PhilosopherId(7);
        assert_eq!(table.forks[1].try_acquire(outsider).await, Ok(true));

        let result = table.run().await;

        assert_eq!(
            result,
            Err(TableError::ForkLeaked {
                fork: ForkId(1),
                holder: outsider,
            })
        );
    }
}
