//! Persistence port for clusters.
//!
//! [`ClusterStore`] is the contract the HTTP layer depends on. Two adapters
//! implement it: an in-memory map and a SQLite database. Both must agree on
//! selection, ordering, pagination and totals for the same data and filter.
//!
//! Not-found is reported as `Ok(None)`. `Err` always means the backend
//! failed, so callers can tell a missing record from a broken store.

use std::future::Future;

use crate::domain::{Cluster, ClusterFilter, ClusterId, ClusterPage, ClusterUpdate};
use crate::error::Result;

/// Storage operations for clusters.
pub trait ClusterStore: Send + Sync {
    /// List clusters matching `filter`, ordered by name, with the total
    /// match count before pagination.
    fn list(&self, filter: &ClusterFilter) -> impl Future<Output = Result<ClusterPage>> + Send;

    /// Get a cluster by ID.
    fn get(&self, id: &ClusterId) -> impl Future<Output = Result<Option<Cluster>>> + Send;

    /// Create a cluster in the provisioning state. `name` must already be
    /// validated as non-empty.
    fn create(&self, name: &str) -> impl Future<Output = Result<Cluster>> + Send;

    /// Apply a partial update. Returns `None` when the ID is unknown.
    fn update(
        &self,
        id: &ClusterId,
        update: &ClusterUpdate,
    ) -> impl Future<Output = Result<Option<Cluster>>> + Send;

    /// Mark a cluster archived. Returns `None` when the ID is unknown.
    fn archive(&self, id: &ClusterId) -> impl Future<Output = Result<Option<Cluster>>> + Send;
}
