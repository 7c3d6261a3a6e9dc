//! Error types for the API and the document-store port.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

/// Failures surfaced by the document store. Never retried; a store that is
/// down is a 500 to the caller.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Handler-level error. Everything a controller can fail with maps onto an
/// HTTP status here.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.http_status();
        if status.is_server_error() {
            tracing::warn!("request failed: {self}");
        }
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_not_found() {
        assert_eq!(
            ApiError::NotFound("x".into()).http_status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn http_status_store() {
        assert_eq!(
            ApiError::Store(StoreError::Unavailable("x".into())).http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
