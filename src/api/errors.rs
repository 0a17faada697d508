//! # API Errors
//!
//! Every failure a handler can produce maps onto exactly one HTTP status
//! and a `{ "message": ... }` JSON body. Errors never escape the
//! response boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::query::QueryError;

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by the resource handlers.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// A create or replace body was missing required fields. Absent,
    /// null, empty-string, and zero values all count as missing.
    #[error("All fields are required: {0}.")]
    MissingFields(&'static str),

    /// A body field was present but cannot be stored as typed data.
    #[error("Field '{0}' must be {1}.")]
    InvalidField(&'static str, &'static str),

    /// The query specification could not be decoded.
    #[error(transparent)]
    Query(#[from] QueryError),

    /// No record with the requested identifier.
    #[error("{resource} with id {id} not found.")]
    NotFound { resource: &'static str, id: String },

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Unexpected internal failure, e.g. a poisoned collection lock.
    /// The body never carries internal detail.
    #[error("Server error")]
    Internal,
}

impl ApiError {
    /// Not-found error echoing the identifier exactly as the caller
    /// wrote it in the path.
    pub fn not_found(resource: &'static str, id: &str) -> Self {
        ApiError::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingFields(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidField(_, _) => StatusCode::BAD_REQUEST,
            ApiError::Query(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl From<ApiError> for ErrorBody {
    fn from(err: ApiError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorBody::from(self));
        (status, body).into_response()
    }
}
