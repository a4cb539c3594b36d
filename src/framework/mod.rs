//! Generic single-owner actor framework.
//!
//! This module provides the building blocks for state that must only ever be touched by one
//! execution context: a resource is owned by a [`ResourceActor`], and everybody else sends it
//! requests through a cloneable [`ResourceClient`].
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that owned state implements to be driven by an actor
//! - [`ResourceActor`] - Generic actor that owns one entity and serializes access to it
//! - [`ResourceClient`] - Type-safe client, with waiting and non-waiting sends
//! - [`ActorClient`] - Trait for domain clients wrapping a `ResourceClient`
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
