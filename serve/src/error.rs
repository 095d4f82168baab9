//! JSON error responses: every failure is `{ "error": message }` with a status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use humidor::{ErrorResponse, RecommendError};
use thiserror::Error;
use tracing::warn;

pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";
pub const UPSTREAM_UNAVAILABLE: &str =
    "Sorry, our cigar recommender is temporarily unavailable. Please try again later.";
pub const UNEXPECTED: &str = "Unexpected server error, please try again later.";

/// API error with HTTP status code.
#[derive(Debug, Clone, Error)]
#[error("[{status}] {message}")]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// 405 Method Not Allowed
    pub fn method_not_allowed() -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED)
    }
}

impl From<RecommendError> for ApiError {
    fn from(err: RecommendError) -> Self {
        match err {
            RecommendError::InvalidInput => Self::new(StatusCode::BAD_REQUEST, err.to_string()),
            RecommendError::MissingApiKey => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            RecommendError::Upstream(detail) => {
                warn!(%detail, "upstream completion failed");
                Self::new(StatusCode::BAD_GATEWAY, UPSTREAM_UNAVAILABLE)
            }
            RecommendError::Unexpected(detail) => {
                warn!(%detail, "unexpected failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}
