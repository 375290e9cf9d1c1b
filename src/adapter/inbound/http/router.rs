//! Router assembly.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Request, State};
use axum::middleware::{from_fn, from_fn_with_state, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tracing::warn;

use super::error::ApiError;
use super::handler::{self, AppState};
use super::request_id::{self, RequestId};
use crate::port::outbound::store::ClusterStore;

/// Build the application router over `store`.
///
/// Middleware order, outermost first: request ID, access log, timeout, CORS.
pub fn router<S>(store: Arc<S>, request_timeout: Duration) -> Router
where
    S: ClusterStore + 'static,
{
    Router::new()
        .route("/healthz", get(handler::healthz))
        .route("/api/v1/status", get(handler::service_status))
        .route(
            "/api/v1/clusters",
            get(handler::list_clusters::<S>).post(handler::create_cluster::<S>),
        )
        .route(
            "/api/v1/clusters/{id}",
            get(handler::get_cluster::<S>)
                .patch(handler::update_cluster::<S>)
                .delete(handler::archive_cluster::<S>),
        )
        .fallback(handler::route_not_found)
        .with_state(AppState::new(store))
        .layer(
            ServiceBuilder::new()
                .layer(from_fn(request_id::assign_request_id))
                .layer(from_fn(request_id::log_request))
                .layer(from_fn_with_state(request_timeout, enforce_timeout))
                .layer(CorsLayer::permissive()),
        )
}

/// Abort the handler when it runs past `limit`. Dropping the handler future
/// cancels the pending store call.
async fn enforce_timeout(
    State(limit): State<Duration>,
    request_id: RequestId,
    request: Request,
    next: Next,
) -> Response {
    match tokio::time::timeout(limit, next.run(request)).await {
        Ok(response) => response,
        Err(_) => {
            warn!(
                request_id = %request_id,
                timeout_ms = u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
                "Request timed out"
            );
            ApiError::timeout(&request_id).into_response()
        }
    }
}
