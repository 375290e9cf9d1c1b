//! SQLite persistence adapter.
//!
//! Provides the SQLite-backed cluster store using Diesel ORM.

pub mod database;
pub mod store;

pub use store::SqliteClusterStore;
