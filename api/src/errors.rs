use axum::{
    BoxError, Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::dto::ErrorResponse;

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    RequestTimeout,
    InternalError(String),
}

/// Convert our custom errors to HTTP responses
///
/// Internal messages are logged, the client only sees a generic body.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not Found"),
            ApiError::RequestTimeout => (StatusCode::REQUEST_TIMEOUT, "Request timed out"),
            ApiError::InternalError(msg) => {
                error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

/// Maps errors raised by the tower middleware stack (timeout, concurrency limit)
pub async fn handle_middleware_error(err: BoxError) -> ApiError {
    if err.is::<tower::timeout::error::Elapsed>() {
        ApiError::RequestTimeout
    } else {
        ApiError::InternalError(format!("Unhandled middleware error: {}", err))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a valid port number, got {0:?}")]
    InvalidPort(String),
    #[error("HEALTH_ROUTE_PREFIX must start with '/', got {0:?}")]
    InvalidRoutePrefix(String),
    #[error("REQUEST_TIMEOUT_SECS must be a positive integer, got {0:?}")]
    InvalidTimeout(String),
    #[error("CONCURRENCY_LIMIT must be a positive integer, got {0:?}")]
    InvalidConcurrencyLimit(String),
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}
