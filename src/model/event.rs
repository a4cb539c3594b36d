use serde::{Deserialize, Serialize};

use super::{ForkId, PhilosopherId};

/// One observable step of the dinner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiningEvent {
    pub philosopher: PhilosopherId,
    pub kind: EventKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    Thinking,
    /// Emitted after the fork granted the request.
    Acquired(ForkId),
    Unavailable(ForkId),
    /// Emitted before the release request is sent.
    Released(ForkId),
    Eating { meal: u32 },
    LeftTable { meals: u32 },
}
