use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Philosophers. Seat number at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PhilosopherId(pub usize);

impl Display for PhilosopherId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "philosopher_{}", self.0)
    }
}

/// Where a philosopher is in its dining cycle.
///
/// ```text
/// Thinking -> AcquiringFirst -> AcquiringSecond -> Eating -> Releasing -> Thinking | Terminated
///                  ^   |               |
///                  +---+ (unavailable) |
///                  ^                   |
///                  +-------------------+ (unavailable, first fork put back)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiningState {
    Thinking,
    /// Trying the right fork. Nothing held.
    AcquiringFirst,
    /// Holding the right fork, trying the left one.
    AcquiringSecond,
    /// Holding both forks.
    Eating,
    Releasing,
    Terminated,
}

/// What a philosopher reports when it leaves the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DinerReport {
    pub philosopher: PhilosopherId,
    pub meals: u32,
    /// `TryAcquire` requests sent, successful or not.
    pub attempts: u64,
    /// Times the right fork was put back because the left one was unavailable.
    pub backoffs: u64,
}
