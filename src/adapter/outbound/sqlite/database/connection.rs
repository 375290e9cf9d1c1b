//! Database connection management using Diesel ORM.
//!
//! Provides connection pooling, migration support, and per-connection
//! configuration for SQLite databases.

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::error::{Error, Result};

/// Embedded database migrations compiled from the migrations/ directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Type alias for a SQLite connection pool.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// Pool sizing and per-connection settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolOptions {
    pub max_connections: u32,
    pub busy_timeout: Duration,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            max_connections: 5,
            busy_timeout: Duration::from_millis(5000),
        }
    }
}

/// Applies SQLite pragmas to every connection the pool opens.
///
/// `case_sensitive_like` makes `LIKE` compare bytes exactly, so prefix
/// filters match the in-memory store's `starts_with`.
#[derive(Debug, Clone, Copy)]
struct SqliteCustomizer {
    busy_timeout: Duration,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqliteCustomizer {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> std::result::Result<(), diesel::r2d2::Error> {
        let pragmas = format!(
            "PRAGMA busy_timeout = {}; PRAGMA case_sensitive_like = ON;",
            self.busy_timeout.as_millis()
        );
        conn.batch_execute(&pragmas)
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Create a connection pool for the given database URL.
///
/// In-memory databases are private to a single SQLite connection, so the
/// pool is capped at one connection for them.
///
/// # Errors
/// Returns an error if the pool cannot be created.
pub fn create_pool_with(database_url: &str, options: PoolOptions) -> Result<DbPool> {
    let max_size = if is_in_memory(database_url) {
        1
    } else {
        options.max_connections.max(1)
    };

    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .max_size(max_size)
        .connection_customizer(Box::new(SqliteCustomizer {
            busy_timeout: options.busy_timeout,
        }))
        .build(manager)
        .map_err(|e| Error::Connection(e.to_string()))
}

/// Run all pending database migrations.
///
/// # Errors
/// Returns an error if migrations fail.
pub fn run_migrations(pool: &DbPool) -> Result<()> {
    let mut conn = pool.get()?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| Error::Database(e.to_string()))?;
    Ok(())
}

/// True when `database_url` names a private in-memory database, in any of
/// the forms SQLite accepts: `:memory:`, `sqlite://:memory:`,
/// `file::memory:` or a URI with `mode=memory`.
fn is_in_memory(database_url: &str) -> bool {
    let path = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("file:"))
        .unwrap_or(database_url);
    let path = path.split('?').next().unwrap_or(path);
    path == ":memory:" || database_url.contains("mode=memory")
}
