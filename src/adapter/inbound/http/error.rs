//! HTTP error type.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use super::envelope::{ErrorBody, ErrorEnvelope, Meta};
use super::request_id::RequestId;
use crate::error::Error;

/// API failure rendered as an error envelope.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
    pub request_id: RequestId,
}

impl ApiError {
    fn new(
        status: StatusCode,
        code: &'static str,
        request_id: &RequestId,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status,
            code,
            message: message.into(),
            request_id: request_id.clone(),
        }
    }

    pub fn invalid_request(request_id: &RequestId, msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "invalid_request", request_id, msg)
    }

    pub fn not_found(request_id: &RequestId, msg: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "not_found", request_id, msg)
    }

    pub fn timeout(request_id: &RequestId) -> Self {
        Self::new(
            StatusCode::SERVICE_UNAVAILABLE,
            "timeout",
            request_id,
            "request timed out",
        )
    }

    /// Generic internal failure. Details are never sent to the client.
    pub fn internal(request_id: &RequestId) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            request_id,
            "internal server error",
        )
    }

    /// Log a store failure and convert it to an internal error.
    pub fn from_store(request_id: &RequestId, err: &Error) -> Self {
        error!(request_id = %request_id, error = %err, "Cluster store failure");
        Self::internal(request_id)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorEnvelope {
            error: ErrorBody {
                code: self.code,
                message: self.message,
            },
            meta: Meta {
                request_id: self.request_id.to_string(),
                pagination: None,
            },
        };
        (self.status, Json(body)).into_response()
    }
}
