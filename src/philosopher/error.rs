//! Error types for philosophers.

use crate::fork_actor::ForkError;
use thiserror::Error;

/// Errors that stop a philosopher before it reaches its meal target.
///
/// A busy fork is never one of them; only a fork that can no longer be reached or that
/// rejects a release does.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PhilosopherError {
    #[error("Fork error: {0}")]
    Fork(#[from] ForkError),
}
