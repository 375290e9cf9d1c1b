//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`] drives the application: the HTTP API and the CLI.
//! - [`outbound`] is driven by it: the cluster stores.

pub mod inbound;
pub mod outbound;
