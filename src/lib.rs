//! # Dining Philosophers
//!
//! > **Mutually exclusive shared resources, arbitrated by actors.**
//!
//! `N` philosophers sit around a round table with `N` forks, one between each pair of
//! neighbours. A philosopher alternates between thinking and eating, and needs both adjacent
//! forks to eat. This crate runs the dinner with one Tokio actor per fork and one task per
//! philosopher until every philosopher has eaten its meals.
//!
//! ## 🏗️ Design
//!
//! ### Forks are actors
//! A fork's in-use flag is never shared memory. Each fork is owned by a
//! [`ResourceActor`](framework::ResourceActor) that processes requests one at a time, so
//! mutual exclusion falls out of sequential message handling. No locks are involved.
//!
//! ### Nobody waits while holding
//! Forks are requested with a non-blocking `TryAcquire`. If a philosopher gets its first fork
//! but not its second, it puts the first one back before retrying. The circular wait behind
//! the classic deadlock can never form. See [`philosopher`] for the full protocol.
//!
//! ### Typed errors per layer
//! [`ForkError`](fork_actor::ForkError) → [`PhilosopherError`](philosopher::PhilosopherError)
//! → [`TableError`](lifecycle::TableError), each converting from the layer below with `#[from]`.
//! A busy fork is not an error; only unreachable forks and rejected releases are.
//!
//! ### Observability
//! Structured `tracing` throughout, see [`lifecycle::telemetry`]. For programmatic checks a
//! [`Table`](lifecycle::Table) can also stream every [`DiningEvent`](model::DiningEvent).
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ResourceActor<T>` message loop, its client, and the [`MockClient`](framework::mock::MockClient)
//! used to test code that talks to actors.
//!
//! ### 2. The Fork ([`fork_actor`], [`clients`])
//! [`Fork`](model::Fork) as an [`ActorEntity`](framework::ActorEntity), and the
//! [`ForkClient`](clients::ForkClient) philosophers use to talk to it.
//!
//! ### 3. The Diner ([`philosopher`])
//! The thinking → acquiring → eating → releasing state machine.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`Table`](lifecycle::Table) wires forks and philosophers into a ring, runs the dinner, and
//! shuts everything down.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Five philosophers, three meals each
//! RUST_LOG=info cargo run
//! ```
//!
//! Other table sizes go through [`TableConfig`](lifecycle::TableConfig) or the
//! [`run`](lifecycle::run) shortcut:
//!
//! ```rust,no_run
//! # async fn demo() -> Result<(), dining_philosophers::lifecycle::TableError> {
//! let report = dining_philosophers::lifecycle::run(7, 1).await?;
//! assert_eq!(report.total_meals(), 7);
//! # Ok(())
//! # }
//! ```

pub mod clients;
pub mod fork_actor;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod philosopher;
