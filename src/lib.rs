//! opencenter - REST backend serving a cluster resource over pluggable storage.
//!
//! The service exposes create, read, update, list and soft-delete operations
//! on clusters through a JSON API with a uniform response envelope. Storage
//! is selected at startup: an in-memory map for development, or SQLite via
//! Diesel when a database URL is configured. Both backends answer list
//! queries identically.
//!
//! # Architecture
//!
//! - **`domain`** - Cluster entity, partial updates, list filters
//! - **`port`** - The [`port::ClusterStore`] contract
//! - **`adapter::outbound`** - Memory and SQLite store implementations
//! - **`adapter::inbound`** - HTTP router and command line
//! - **`infrastructure`** - Configuration and composition root
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use opencenter::adapter::inbound::http::router;
//! use opencenter::adapter::outbound::MemoryClusterStore;
//!
//! let app = router(Arc::new(MemoryClusterStore::new()), Duration::from_secs(30));
//! ```

pub mod adapter;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
