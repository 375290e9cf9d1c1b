//! Axum handlers for the cluster API.
//!
//! Handlers trim and validate input, clamp pagination, then call the
//! [`ClusterStore`]. `None` from the store becomes 404 and `Err` becomes a
//! generic 500.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::envelope::{Envelope, Pagination};
use super::error::ApiError;
use super::request_id::RequestId;
use crate::domain::{Cluster, ClusterFilter, ClusterId, ClusterUpdate};
use crate::port::outbound::store::ClusterStore;

type Result<T> = std::result::Result<T, ApiError>;

/// Name reported by the status endpoint.
pub const SERVICE_NAME: &str = "openCenter-base";

/// Shared state for cluster handlers.
pub struct AppState<S> {
    pub store: Arc<S>,
}

impl<S> AppState<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

/// Query parameters for `GET /api/v1/clusters`.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub status: Option<String>,
    pub name_prefix: Option<String>,
    pub id_prefix: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ListParams {
    fn into_filter(self) -> ClusterFilter {
        let trimmed = |value: Option<String>| value.map(|v| v.trim().to_string()).unwrap_or_default();
        ClusterFilter::clamped(self.limit, self.offset)
            .with_status(trimmed(self.status))
            .with_name_prefix(trimmed(self.name_prefix))
            .with_id_prefix(trimmed(self.id_prefix))
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateClusterRequest {
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateClusterRequest {
    pub name: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    pub service: &'static str,
    pub status: &'static str,
}

fn non_blank(request_id: &RequestId, field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::invalid_request(
            request_id,
            format!("{field} must not be empty"),
        ));
    }
    Ok(trimmed.to_string())
}

fn found(request_id: &RequestId, cluster: Option<Cluster>) -> Result<Envelope<Cluster>> {
    cluster
        .map(|cluster| Envelope::new(request_id, cluster))
        .ok_or_else(|| ApiError::not_found(request_id, "cluster not found"))
}

/// GET /healthz
pub async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// GET /api/v1/status
pub async fn service_status(request_id: RequestId) -> Envelope<ServiceStatus> {
    Envelope::new(
        &request_id,
        ServiceStatus {
            service: SERVICE_NAME,
            status: "ok",
        },
    )
}

/// GET /api/v1/clusters
///
/// # Errors
/// Returns `ApiError` for malformed query parameters or a store failure.
pub async fn list_clusters<S: ClusterStore>(
    State(state): State<AppState<S>>,
    request_id: RequestId,
    params: std::result::Result<Query<ListParams>, QueryRejection>,
) -> Result<Envelope<Vec<Cluster>>> {
    let Query(params) =
        params.map_err(|rejection| ApiError::invalid_request(&request_id, rejection.body_text()))?;
    let filter = params.into_filter();

    let page = state
        .store
        .list(&filter)
        .await
        .map_err(|e| ApiError::from_store(&request_id, &e))?;

    let pagination = Pagination {
        total: page.total,
        limit: filter.limit(),
        offset: filter.offset(),
    };
    Ok(Envelope::paginated(&request_id, page.items, pagination))
}

/// GET /api/v1/clusters/{id}
///
/// # Errors
/// Returns `ApiError` if the cluster is unknown or the store fails.
pub async fn get_cluster<S: ClusterStore>(
    State(state): State<AppState<S>>,
    request_id: RequestId,
    Path(id): Path<String>,
) -> Result<Envelope<Cluster>> {
    let cluster = state
        .store
        .get(&ClusterId::from(id))
        .await
        .map_err(|e| ApiError::from_store(&request_id, &e))?;
    found(&request_id, cluster)
}

/// POST /api/v1/clusters
///
/// # Errors
/// Returns `ApiError` for a missing or blank name, or a store failure.
pub async fn create_cluster<S: ClusterStore>(
    State(state): State<AppState<S>>,
    request_id: RequestId,
    payload: std::result::Result<Json<CreateClusterRequest>, JsonRejection>,
) -> Result<(StatusCode, Envelope<Cluster>)> {
    let Json(payload) =
        payload.map_err(|rejection| ApiError::invalid_request(&request_id, rejection.body_text()))?;
    let name = non_blank(&request_id, "name", &payload.name)?;

    let cluster = state
        .store
        .create(&name)
        .await
        .map_err(|e| ApiError::from_store(&request_id, &e))?;
    Ok((StatusCode::CREATED, Envelope::new(&request_id, cluster)))
}

/// PATCH /api/v1/clusters/{id}
///
/// # Errors
/// Returns `ApiError` for blank fields, an unknown cluster, or a store failure.
pub async fn update_cluster<S: ClusterStore>(
    State(state): State<AppState<S>>,
    request_id: RequestId,
    Path(id): Path<String>,
    payload: std::result::Result<Json<UpdateClusterRequest>, JsonRejection>,
) -> Result<Envelope<Cluster>> {
    let Json(payload) =
        payload.map_err(|rejection| ApiError::invalid_request(&request_id, rejection.body_text()))?;
    let update = ClusterUpdate {
        name: payload
            .name
            .as_deref()
            .map(|name| non_blank(&request_id, "name", name))
            .transpose()?,
        status: payload
            .status
            .as_deref()
            .map(|status| non_blank(&request_id, "status", status))
            .transpose()?,
    };

    let cluster = state
        .store
        .update(&ClusterId::from(id), &update)
        .await
        .map_err(|e| ApiError::from_store(&request_id, &e))?;
    found(&request_id, cluster)
}

/// DELETE /api/v1/clusters/{id}
///
/// Archives rather than deletes.
///
/// # Errors
/// Returns `ApiError` if the cluster is unknown or the store fails.
pub async fn archive_cluster<S: ClusterStore>(
    State(state): State<AppState<S>>,
    request_id: RequestId,
    Path(id): Path<String>,
) -> Result<Envelope<Cluster>> {
    let cluster = state
        .store
        .archive(&ClusterId::from(id))
        .await
        .map_err(|e| ApiError::from_store(&request_id, &e))?;
    found(&request_id, cluster)
}

/// Fallback for unknown routes.
pub async fn route_not_found(request_id: RequestId) -> ApiError {
    ApiError::not_found(&request_id, "route not found")
}
