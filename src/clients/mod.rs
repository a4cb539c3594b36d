//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod fork_client;

pub use fork_client::*;
