//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! Verbosity comes from the `RUST_LOG` environment variable. The compact format hides the
//! module prefix (`with_target(false)`); the structured fields (`philosopher`, `fork`,
//! `meal`, `entity_type`) carry the context instead.
//!
//! ## What Gets Traced
//!
//! - **info**: fork actor start/shutdown, thinking, eating meal N, leaving the table, dinner
//!   start/finish
//! - **debug**: every fork grant, refusal and release, seen from both the fork and the
//!   philosopher, plus each request handled by an actor
//! - **warn/error**: rejected releases, failed philosophers and tasks
//!
//! ## Usage Examples
//!
//! ```bash
//! # Who thinks and who eats
//! RUST_LOG=info cargo run
//!
//! # Every fork handover
//! RUST_LOG=debug cargo run
//!
//! # Only the forks' side of the story
//! RUST_LOG=info,dining_philosophers::fork_actor=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` one handover reads:
//!
//! ```text
//! DEBUG Fork now in use fork=fork_1 philosopher=philosopher_1
//! DEBUG Acquired fork philosopher=philosopher_1 fork=fork_1
//! DEBUG Fork unavailable fork=fork_1 philosopher=philosopher_0 holder=philosopher_1
//! DEBUG Released fork philosopher=philosopher_0 fork=fork_0
//! ```
//!
//! Tests never call [`setup_tracing`]; the global subscriber can only be installed once.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
