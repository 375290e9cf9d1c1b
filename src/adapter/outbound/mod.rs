//! Outbound adapters (driven side): cluster store implementations.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryClusterStore;
pub use sqlite::SqliteClusterStore;
