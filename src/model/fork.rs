//! One fork on the table.
//!
//! # Actor Framework
//! [`Fork`] implements the [`ActorEntity`](crate::framework::ActorEntity) trait, so each
//! fork is owned by its own [`ResourceActor`](crate::framework::ResourceActor).
//!
//! See [`impl ActorEntity for Fork`](Fork#impl-ActorEntity-for-Fork) for the actions it accepts.

use serde::{Deserialize, Serialize};

use std::fmt::Display;

use super::PhilosopherId;

/// Type-safe identifier for Forks. Ordinal position on the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ForkId(pub usize);

impl Display for ForkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "fork_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fork {
    pub id: ForkId,
    /// Who holds the fork right now. `None` means free.
    pub holder: Option<PhilosopherId>,
    /// Number of successful acquisitions over the fork's lifetime.
    pub grants: u64,
}

impl Fork {
    /// Creates a free fork.
    pub fn new(id: ForkId) -> Self {
        Self {
            id,
            holder: None,
            grants: 0,
        }
    }

    pub fn in_use(&self) -> bool {
        self.holder.is_some()
    }
}
