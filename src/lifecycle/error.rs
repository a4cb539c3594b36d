//! Error types for the table.

use crate::model::{ForkId, PhilosopherId};
use crate::philosopher::PhilosopherError;
use thiserror::Error;

/// Errors that prevent a dinner from starting or finishing cleanly.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TableError {
    /// The configuration cannot describe a dinner.
    #[error("Invalid table configuration: {0}")]
    InvalidConfig(String),

    /// The seating plan breaks the ring: some fork is not shared by exactly two neighbours.
    #[error("Invalid seating: {0}")]
    InvalidSeating(String),

    #[error("Philosopher failed: {0}")]
    Philosopher(#[from] PhilosopherError),

    /// A philosopher or fork task panicked or was cancelled.
    #[error("Task failed: {0}")]
    TaskFailed(String),

    /// A fork was still held after every philosopher left.
    #[error("{fork} still held by {holder} after the dinner")]
    ForkLeaked { fork: ForkId, holder: PhilosopherId },
}
