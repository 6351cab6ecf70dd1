//! Unified API error handling
//!
//! Validation errors surface their specific message; anything that went
//! wrong on the far side of the scoring call is logged in full and
//! answered with a generic message, so upstream payloads and credentials
//! never reach the caller.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use uuid::Uuid;

use crate::service::AnalysisError;

/// Response body for internal failures, regardless of cause
const GENERIC_ANALYSIS_ERROR: &str = "An error occurred while analyzing the claim";

/// Standard error response format
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Unique request ID for tracing
    pub request_id: String,
}

/// Unified API error type
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Bad request / validation error (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// External scoring dependency failed (500)
    #[error("Upstream scoring failure: {0}")]
    Upstream(String),

    /// Scoring reply had an unexpected shape (500)
    #[error("Unexpected scoring reply: {0}")]
    Parse(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) | ApiError::Parse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        // Full detail stays in the log; the body is generic unless the
        // failure is the caller's fault.
        tracing::error!(
            status = status.as_u16(),
            message = %self,
            "API error"
        );

        let error = match self {
            ApiError::BadRequest(msg) => msg.clone(),
            ApiError::Upstream(_) | ApiError::Parse(_) => GENERIC_ANALYSIS_ERROR.to_string(),
        };

        HttpResponse::build(status).json(ErrorResponse {
            error,
            request_id: Uuid::new_v4().to_string(),
        })
    }
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::MissingClaim | AnalysisError::MissingDocument => {
                ApiError::BadRequest(err.to_string())
            }
            AnalysisError::Upstream(e) => ApiError::Upstream(e.to_string()),
            AnalysisError::Parse(msg) => ApiError::Parse(msg),
        }
    }
}
