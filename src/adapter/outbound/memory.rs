//! In-memory cluster store.
//!
//! All records live in one map behind a single reader/writer lock. List calls
//! scan, sort and slice on every request, which is fine for development and
//! tests but does not scale. Nothing survives a restart.

use std::collections::HashMap;

use chrono::Utc;
use parking_lot::RwLock;
use tracing::debug;

use crate::domain::{status, Cluster, ClusterFilter, ClusterId, ClusterPage, ClusterUpdate};
use crate::error::Result;
use crate::port::outbound::store::ClusterStore;

#[derive(Debug)]
struct Entry {
    /// Insertion sequence, used to order clusters that share a name.
    seq: u64,
    cluster: Cluster,
}

#[derive(Debug, Default)]
struct Inner {
    clusters: HashMap<ClusterId, Entry>,
    next_seq: u64,
}

/// Map-backed [`ClusterStore`].
#[derive(Debug, Default)]
pub struct MemoryClusterStore {
    inner: RwLock<Inner>,
}

impl MemoryClusterStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored clusters, archived ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().clusters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn modify<F>(&self, id: &ClusterId, mutate: F) -> Option<Cluster>
    where
        F: FnOnce(&mut Cluster),
    {
        let mut inner = self.inner.write();
        let entry = inner.clusters.get_mut(id)?;
        mutate(&mut entry.cluster);
        entry.cluster.updated_at = Utc::now();
        Some(entry.cluster.clone())
    }
}

impl ClusterStore for MemoryClusterStore {
    async fn list(&self, filter: &ClusterFilter) -> Result<ClusterPage> {
        let inner = self.inner.read();

        let mut matched: Vec<&Entry> = inner
            .clusters
            .values()
            .filter(|entry| filter.matches(&entry.cluster))
            .collect();
        matched.sort_by(|a, b| {
            a.cluster
                .name
                .cmp(&b.cluster.name)
                .then(a.seq.cmp(&b.seq))
        });

        let total = matched.len();
        let items = matched[filter.window(total)]
            .iter()
            .map(|entry| entry.cluster.clone())
            .collect();

        debug!(total, offset = filter.offset(), limit = filter.limit(), "Listed clusters");
        Ok(ClusterPage { items, total })
    }

    async fn get(&self, id: &ClusterId) -> Result<Option<Cluster>> {
        Ok(self
            .inner
            .read()
            .clusters
            .get(id)
            .map(|entry| entry.cluster.clone()))
    }

    async fn create(&self, name: &str) -> Result<Cluster> {
        let cluster = Cluster::provision(name);

        let mut inner = self.inner.write();
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.clusters.insert(
            cluster.id.clone(),
            Entry {
                seq,
                cluster: cluster.clone(),
            },
        );

        debug!(id = %cluster.id, name = %cluster.name, "Created cluster");
        Ok(cluster)
    }

    async fn update(&self, id: &ClusterId, update: &ClusterUpdate) -> Result<Option<Cluster>> {
        let updated = self.modify(id, |cluster| cluster.apply(update));
        debug!(id = %id, found = updated.is_some(), "Updated cluster");
        Ok(updated)
    }

    async fn archive(&self, id: &ClusterId) -> Result<Option<Cluster>> {
        let archived = self.modify(id, |cluster| {
            cluster.status = status::ARCHIVED.to_string();
        });
        debug!(id = %id, found = archived.is_some(), "Archived cluster");
        Ok(archived)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;

    fn names(page: &ClusterPage) -> Vec<&str> {
        page.items.iter().map(|c| c.name.as_str()).collect()
    }

    #[tokio::test]
    async fn create_assigns_unique_ids_and_provisioning_status() {
        let store = MemoryClusterStore::new();
        let mut ids = HashSet::new();

        for i in 0..20 {
            let cluster = store.create(&format!("cluster-{i}")).await.unwrap();
            assert!(!cluster.id.as_str().is_empty());
            assert_eq!(cluster.status, status::PROVISIONING);
            assert!(ids.insert(cluster.id));
        }
        assert_eq!(store.len(), 20);
    }

    #[tokio::test]
    async fn get_returns_created_cluster() {
        let store = MemoryClusterStore::new();
        let created = store.create("alpha").await.unwrap();

        let loaded = store.get(&created.id).await.unwrap().unwrap();
        assert_eq!(loaded.name, "alpha");
        assert_eq!(loaded.status, status::PROVISIONING);
    }

    #[tokio::test]
    async fn unknown_id_is_none_not_error() {
        let store = MemoryClusterStore::new();
        let missing = ClusterId::from("does-not-exist");

        assert!(store.get(&missing).await.unwrap().is_none());
        assert!(store
            .update(&missing, &ClusterUpdate::rename("x"))
            .await
            .unwrap()
            .is_none());
        assert!(store.archive(&missing).await.unwrap().is_none());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn list_orders_by_name_then_insertion() {
        let store = MemoryClusterStore::new();
        store.create("b-cluster").await.unwrap();
        let first_dup = store.create("dup").await.unwrap();
        store.create("a-cluster").await.unwrap();
        let second_dup = store.create("dup").await.unwrap();

        let page = store.list(&ClusterFilter::page(10, 0)).await.unwrap();
        assert_eq!(names(&page), vec!["a-cluster", "b-cluster", "dup", "dup"]);
        assert_eq!(page.items[2].id, first_dup.id);
        assert_eq!(page.items[3].id, second_dup.id);
    }

    #[tokio::test]
    async fn list_paginates_after_filtering() {
        let store = MemoryClusterStore::new();
        for name in ["c", "a", "b"] {
            store.create(name).await.unwrap();
        }

        let page = store.list(&ClusterFilter::page(2, 2)).await.unwrap();
        assert_eq!(page.total, 3);
        assert_eq!(names(&page), vec!["c"]);

        let past_end = store.list(&ClusterFilter::page(2, 5)).await.unwrap();
        assert_eq!(past_end.total, 3);
        assert!(past_end.items.is_empty());
    }

    #[tokio::test]
    async fn update_applies_only_supplied_fields() {
        let store = MemoryClusterStore::new();
        let created = store.create("alpha").await.unwrap();

        let renamed = store
            .update(&created.id, &ClusterUpdate::rename("beta"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(renamed.name, "beta");
        assert_eq!(renamed.status, status::PROVISIONING);
        assert!(renamed.updated_at >= created.updated_at);

        let unchanged = store
            .update(&created.id, &ClusterUpdate::default())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(unchanged.id, created.id);
        assert_eq!(unchanged.name, "beta");
        assert_eq!(unchanged.status, status::PROVISIONING);
        assert_eq!(unchanged.created_at, created.created_at);
    }

    #[tokio::test]
    async fn archive_is_idempotent_and_allows_later_updates() {
        let store = MemoryClusterStore::new();
        let created = store.create("alpha").await.unwrap();

        let once = store.archive(&created.id).await.unwrap().unwrap();
        let twice = store.archive(&created.id).await.unwrap().unwrap();
        assert!(once.is_archived());
        assert_eq!((once.name, once.status), (twice.name, twice.status));

        let revived = store
            .update(&created.id, &ClusterUpdate::set_status("ready"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(revived.status, "ready");
    }

    #[tokio::test]
    async fn concurrent_creates_are_all_stored() {
        let store = Arc::new(MemoryClusterStore::new());
        let mut handles = Vec::new();

        for i in 0..16 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.create(&format!("c-{i:02}")).await.unwrap()
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let page = store.list(&ClusterFilter::page(100, 0)).await.unwrap();
        assert_eq!(page.total, 16);
        assert_eq!(page.items.first().map(|c| c.name.as_str()), Some("c-00"));
    }
}
