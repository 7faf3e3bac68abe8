use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

use crate::types::ErrorResponse;

/// Failure of a request handler before any response is shaped
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Empty input, reported to the caller verbatim
    #[error("{0}")]
    Validation(&'static str),

    /// Body could not be decoded into the request schema
    #[error("{0}")]
    MalformedBody(#[from] serde_json::Error),

    /// Detector or translator failed
    #[error("{0:#}")]
    Collaborator(#[from] anyhow::Error),
}

/// HTTP-facing error: status code plus `{"error": ...}` body
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ServiceError {
    /// Map onto an HTTP error, prefixing non-validation failures with `failure_prefix`
    pub fn into_api_error(self, failure_prefix: &str) -> ApiError {
        match self {
            ServiceError::Validation(message) => {
                warn!("Rejected request: {}", message);
                ApiError {
                    status: StatusCode::BAD_REQUEST,
                    message: message.to_string(),
                }
            }
            other => {
                let message = format!("{}: {}", failure_prefix, other);
                error!("{}", message);
                ApiError {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message,
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorResponse { error: self.message })).into_response()
    }
}
