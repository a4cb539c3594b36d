//! # Table Lifecycle & Orchestration
//!
//! Individual forks and philosophers are simple; wiring them into a ring and knowing when
//! the dinner is over is where the coordination lives. This module is that coordinator.
//!
//! **Key Responsibilities:**
//! 1. **Configuration** - [`TableConfig`]: seats, meal target, pacing
//! 2. **Seating** - [`seating`]: the fixed ring assignment and its validation
//! 3. **Actor Creation** - one fork actor per seat, one philosopher task per seat
//! 4. **Completion** - [`Table::run`] waits for every philosopher, then shuts the forks down
//! 5. **Observability Setup** - [`setup_tracing`]
//!
//! ## Dependency Injection
//!
//! Nothing is global. Each philosopher receives its two [`ForkClient`](crate::clients::ForkClient)s
//! at construction and a shared [`DiningContext`](crate::philosopher::DiningContext) (pacing
//! and event sink) when it starts dining.
//!
//! ## Graceful Shutdown
//!
//! 1. **Philosophers finish** - each task ends after its last meal, dropping its fork clients
//! 2. **Table drops its clients** - every fork mailbox is now closed
//! 3. **Forks detect closure** - `receiver.recv()` returns `None` and the actor returns its state
//! 4. **Await completion** - the final fork states end up in the [`TableReport`]

pub mod config;
pub mod error;
pub mod seating;
pub mod table;
pub mod telemetry;

pub use config::*;
pub use error::*;
pub use seating::Seat;
pub use table::*;
pub use telemetry::*;
