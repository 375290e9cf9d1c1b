//! SQLite cluster store implementation.
//!
//! Filtering, ordering and pagination are pushed down into SQL. `list` runs
//! a windowed data query and a separate `COUNT(*)` over the same predicates,
//! so `total` does not depend on the page. Every mutating statement refreshes
//! `updated_at` inside SQLite.
//!
//! Diesel calls are blocking and run on tokio's blocking pool. Dropping a
//! store future stops waiting on the statement but does not interrupt it;
//! each call is a single statement, so an abandoned call either applies in
//! full or not at all.

use diesel::dsl::sql;
use diesel::expression::SqlLiteral;
use diesel::prelude::*;
use diesel::sql_types::Text;
use diesel::sqlite::Sqlite;
use diesel::SqliteConnection;
use tracing::debug;

use super::database::connection::{create_pool_with, run_migrations, DbPool, PoolOptions};
use super::database::model::{ClusterChangeset, ClusterRow, NewClusterRow};
use super::database::schema::clusters;
use crate::domain::{status, Cluster, ClusterFilter, ClusterId, ClusterPage, ClusterUpdate};
use crate::error::{Error, Result};
use crate::port::outbound::store::ClusterStore;

const LIKE_ESCAPE: char = '\\';

/// SQLite-backed [`ClusterStore`].
#[derive(Clone)]
pub struct SqliteClusterStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteClusterStore {
    /// Create a store over an existing, migrated connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Open a pool for `database_url`, apply pending migrations and return
    /// the store.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn connect(database_url: &str, options: PoolOptions) -> Result<Self> {
        let pool = create_pool_with(database_url, options)?;
        run_migrations(&pool)?;
        Ok(Self::new(pool))
    }

    async fn with_conn<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            op(&mut conn)
        })
        .await
        .map_err(|e| Error::Database(format!("blocking task failed: {e}")))?
    }
}

/// Current time as produced by SQLite, in the same format as the column
/// defaults.
fn sqlite_now() -> SqlLiteral<Text> {
    sql::<Text>("strftime('%Y-%m-%dT%H:%M:%fZ', 'now')")
}

/// Build a `LIKE` pattern matching values that start with `prefix` literally.
fn like_prefix(prefix: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    for ch in prefix.chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

fn filtered(filter: &ClusterFilter) -> clusters::BoxedQuery<'static, Sqlite> {
    let mut query = clusters::table.into_boxed();
    if let Some(status) = filter.status() {
        query = query.filter(clusters::status.eq(status.to_string()));
    }
    if let Some(prefix) = filter.name_prefix() {
        query = query.filter(clusters::name.like(like_prefix(prefix)).escape(LIKE_ESCAPE));
    }
    if let Some(prefix) = filter.id_prefix() {
        query = query.filter(clusters::id.like(like_prefix(prefix)).escape(LIKE_ESCAPE));
    }
    query
}

fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn load_page(conn: &mut SqliteConnection, filter: &ClusterFilter) -> Result<ClusterPage> {
    let rows: Vec<ClusterRow> = filtered(filter)
        .select(ClusterRow::as_select())
        .order((clusters::name.asc(), clusters::seq.asc()))
        .limit(to_i64(filter.limit()))
        .offset(to_i64(filter.offset()))
        .load(conn)?;

    let total: i64 = filtered(filter).count().get_result(conn)?;

    let items = rows
        .into_iter()
        .map(ClusterRow::into_cluster)
        .collect::<Result<Vec<_>>>()?;

    Ok(ClusterPage {
        items,
        total: usize::try_from(total).unwrap_or_default(),
    })
}

impl ClusterStore for SqliteClusterStore {
    async fn list(&self, filter: &ClusterFilter) -> Result<ClusterPage> {
        let filter = filter.clone();
        let page = self.with_conn(move |conn| load_page(conn, &filter)).await?;
        debug!(total = page.total, returned = page.items.len(), "Listed clusters");
        Ok(page)
    }

    async fn get(&self, id: &ClusterId) -> Result<Option<Cluster>> {
        let id = id.clone().into_inner();
        self.with_conn(move |conn| {
            clusters::table
                .filter(clusters::id.eq(id.as_str()))
                .select(ClusterRow::as_select())
                .first::<ClusterRow>(conn)
                .optional()?
                .map(ClusterRow::into_cluster)
                .transpose()
        })
        .await
    }

    async fn create(&self, name: &str) -> Result<Cluster> {
        let name = name.to_string();
        let cluster = self
            .with_conn(move |conn| {
                let id = ClusterId::generate();
                diesel::insert_into(clusters::table)
                    .values(&NewClusterRow {
                        id: id.as_str(),
                        name: &name,
                        status: status::PROVISIONING,
                    })
                    .returning(ClusterRow::as_returning())
                    .get_result::<ClusterRow>(conn)?
                    .into_cluster()
            })
            .await?;
        debug!(id = %cluster.id, name = %cluster.name, "Created cluster");
        Ok(cluster)
    }

    async fn update(&self, id: &ClusterId, update: &ClusterUpdate) -> Result<Option<Cluster>> {
        let key = id.clone().into_inner();
        let update = update.clone();
        let updated = self
            .with_conn(move |conn| {
                diesel::update(clusters::table.filter(clusters::id.eq(key.as_str())))
                    .set((
                        ClusterChangeset::from(&update),
                        clusters::updated_at.eq(sqlite_now()),
                    ))
                    .returning(ClusterRow::as_returning())
                    .get_result::<ClusterRow>(conn)
                    .optional()?
                    .map(ClusterRow::into_cluster)
                    .transpose()
            })
            .await?;
        debug!(id = %id, found = updated.is_some(), "Updated cluster");
        Ok(updated)
    }

    async fn archive(&self, id: &ClusterId) -> Result<Option<Cluster>> {
        let key = id.clone().into_inner();
        let archived = self
            .with_conn(move |conn| {
                diesel::update(clusters::table.filter(clusters::id.eq(key.as_str())))
                    .set((
                        clusters::status.eq(status::ARCHIVED),
                        clusters::updated_at.eq(sqlite_now()),
                    ))
                    .returning(ClusterRow::as_returning())
                    .get_result::<ClusterRow>(conn)
                    .optional()?
                    .map(ClusterRow::into_cluster)
                    .transpose()
            })
            .await?;
        debug!(id = %id, found = archived.is_some(), "Archived cluster");
        Ok(archived)
    }
}
