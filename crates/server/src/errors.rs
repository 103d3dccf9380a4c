use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ErrorBody;
use service::ServiceError;
use thiserror::Error;
use tracing::error;

/// Error returned by handlers; storage details are logged, never sent.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        error!(error = %e, "building service failed");
        if e.is_cancelled() {
            return Self::new(StatusCode::SERVICE_UNAVAILABLE, "Service shutting down");
        }
        Self::internal()
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody::new(self.message))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] configs::ConfigError),
    #[error("cannot open database pool: {0}")]
    Storage(String),
    #[error(transparent)]
    Init(#[from] ServiceError),
    #[error("server io error: {0}")]
    Io(#[from] std::io::Error),
}
