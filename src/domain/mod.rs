//! Storage-agnostic domain types for the cluster resource.

pub mod cluster;
pub mod filter;
pub mod id;

pub use cluster::{status, Cluster, ClusterUpdate};
pub use filter::{ClusterFilter, ClusterPage, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
pub use id::ClusterId;
