use std::time::Duration;

use opencenter::adapter::outbound::sqlite::database::connection::PoolOptions;
use opencenter::adapter::outbound::{MemoryClusterStore, SqliteClusterStore};
use opencenter::domain::{Cluster, ClusterFilter, ClusterId, ClusterPage, ClusterUpdate};
use opencenter::error::{Error, Result};
use opencenter::port::ClusterStore;
use tempfile::TempDir;

/// File-backed SQLite store in a temporary directory.
pub struct TempDb {
    _dir: TempDir,
    url: String,
    store: SqliteClusterStore,
}

impl TempDb {
    pub fn create(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let url = format!("sqlite://{}", dir.path().join(format!("{name}.db")).display());
        let store = SqliteClusterStore::connect(&url, PoolOptions::default())
            .expect("open sqlite store");
        Self {
            _dir: dir,
            url,
            store,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn store(&self) -> &SqliteClusterStore {
        &self.store
    }
}

pub fn memory_store() -> MemoryClusterStore {
    MemoryClusterStore::new()
}

/// Create one cluster per name, in order.
pub async fn seed<S: ClusterStore>(store: &S, names: &[&str]) -> Vec<Cluster> {
    let mut created = Vec::with_capacity(names.len());
    for name in names {
        created.push(store.create(name).await.expect("seed cluster"));
    }
    created
}

/// `(name, status)` pairs of a page, in order.
pub fn rows(page: &ClusterPage) -> Vec<(String, String)> {
    page.items
        .iter()
        .map(|c| (c.name.clone(), c.status.clone()))
        .collect()
}

/// Store whose operations always fail.
pub struct FailingStore;

impl ClusterStore for FailingStore {
    async fn list(&self, _filter: &ClusterFilter) -> Result<ClusterPage> {
        Err(Error::Database("disk I/O error at /var/lib/secret.db".into()))
    }

    async fn get(&self, _id: &ClusterId) -> Result<Option<Cluster>> {
        Err(Error::Connection("pool exhausted".into()))
    }

    async fn create(&self, _name: &str) -> Result<Cluster> {
        Err(Error::Database("database is locked".into()))
    }

    async fn update(&self, _id: &ClusterId, _update: &ClusterUpdate) -> Result<Option<Cluster>> {
        Err(Error::Database("database is locked".into()))
    }

    async fn archive(&self, _id: &ClusterId) -> Result<Option<Cluster>> {
        Err(Error::Database("database is locked".into()))
    }
}

/// Memory store that stalls before every operation.
pub struct SlowStore {
    inner: MemoryClusterStore,
    delay: Duration,
}

impl SlowStore {
    pub fn new(delay: Duration) -> Self {
        Self {
            inner: MemoryClusterStore::new(),
            delay,
        }
    }
}

impl ClusterStore for SlowStore {
    async fn list(&self, filter: &ClusterFilter) -> Result<ClusterPage> {
        tokio::time::sleep(self.delay).await;
        self.inner.list(filter).await
    }

    async fn get(&self, id: &ClusterId) -> Result<Option<Cluster>> {
        tokio::time::sleep(self.delay).await;
        self.inner.get(id).await
    }

    async fn create(&self, name: &str) -> Result<Cluster> {
        tokio::time::sleep(self.delay).await;
        self.inner.create(name).await
    }

    async fn update(&self, id: &ClusterId, update: &ClusterUpdate) -> Result<Option<Cluster>> {
        tokio::time::sleep(self.delay).await;
        self.inner.update(id, update).await
    }

    async fn archive(&self, id: &ClusterId) -> Result<Option<Cluster>> {
        tokio::time::sleep(self.delay).await;
        self.inner.archive(id).await
    }
}
