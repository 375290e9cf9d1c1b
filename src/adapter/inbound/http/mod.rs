//! HTTP API adapter.
//!
//! Exposes the cluster store over a JSON REST API built on axum:
//!
//! | Method | Path | Store call |
//! |---|---|---|
//! | GET | `/api/v1/clusters` | `list` |
//! | GET | `/api/v1/clusters/{id}` | `get` |
//! | POST | `/api/v1/clusters` | `create` |
//! | PATCH | `/api/v1/clusters/{id}` | `update` |
//! | DELETE | `/api/v1/clusters/{id}` | `archive` |
//!
//! plus `/healthz` and `/api/v1/status`.

pub mod envelope;
pub mod error;
pub mod handler;
pub mod request_id;
pub mod router;

pub use error::ApiError;
pub use handler::AppState;
pub use request_id::{RequestId, REQUEST_ID_HEADER};
pub use router::router;
