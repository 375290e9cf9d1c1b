//! HTTP server and database settings.

use std::net::SocketAddr;
use std::time::Duration;

use serde::Deserialize;

use crate::adapter::outbound::sqlite::database::connection::PoolOptions;
use crate::error::ConfigError;

/// HTTP listener configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address. A bare `:port` binds all interfaces.
    pub addr: String,
    /// Per-request deadline in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:8080".into(),
            request_timeout_secs: 30,
        }
    }
}

impl ServerConfig {
    /// Parse the listen address.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] if `addr` is not a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = self.addr.trim();
        let normalized = if addr.starts_with(':') {
            format!("0.0.0.0{addr}")
        } else {
            addr.to_string()
        };
        normalized
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
                field: "server.addr",
                reason: format!("'{}': {e}", self.addr),
            })
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Database configuration.
///
/// With no `url` the in-memory store is used.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite database URL, e.g. `sqlite://opencenter.db`.
    pub url: Option<String>,
    pub max_connections: u32,
    pub busy_timeout_ms: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 5,
            busy_timeout_ms: 5000,
        }
    }
}

impl DatabaseConfig {
    /// The configured URL, ignoring blank values.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|url| !url.is_empty())
    }

    #[must_use]
    pub fn pool_options(&self) -> PoolOptions {
        PoolOptions {
            max_connections: self.max_connections,
            busy_timeout: Duration::from_millis(self.busy_timeout_ms),
        }
    }
}
