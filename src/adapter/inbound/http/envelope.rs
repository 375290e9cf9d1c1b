//! JSON response envelopes.
//!
//! Success: `{"data": ..., "meta": {"request_id": ..., "pagination"?: {...}}}`.
//! Failure: `{"error": {"code", "message"}, "meta": {"request_id"}}`.

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use super::request_id::RequestId;

/// Page window echoed back on list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Meta {
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// Successful response wrapper.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub data: T,
    pub meta: Meta,
}

impl<T: Serialize> Envelope<T> {
    pub fn new(request_id: &RequestId, data: T) -> Self {
        Self {
            data,
            meta: Meta {
                request_id: request_id.to_string(),
                pagination: None,
            },
        }
    }

    pub fn paginated(request_id: &RequestId, data: T, pagination: Pagination) -> Self {
        Self {
            data,
            meta: Meta {
                request_id: request_id.to_string(),
                pagination: Some(pagination),
            },
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

/// Failure response wrapper.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
    pub meta: Meta,
}
