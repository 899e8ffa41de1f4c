//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Store and blob failures collapse to a fixed per-endpoint message; the
//! underlying error is logged and never sent to the client.

use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::blob::BlobError;
use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Required input missing (400)
    Validation(ValidationError),

    /// Request body rejected by an extractor (status from the rejection)
    Rejected { status: StatusCode, message: String },

    /// Item name already taken (409)
    Conflict { message: &'static str },

    /// Server is missing configuration for this endpoint (500, logged)
    Config { message: &'static str },

    /// Database error (500, logged)
    Database {
        message: &'static str,
        source: DbError,
    },

    /// Blob store error (500, logged)
    Blob {
        message: &'static str,
        source: BlobError,
    },
}

impl ApiError {
    pub fn database(message: &'static str, source: DbError) -> Self {
        Self::Database { message, source }
    }

    pub fn blob(message: &'static str, source: BlobError) -> Self {
        Self::Blob { message, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "validation_error",
                    "message": e.to_string()
                }),
            ),
            Self::Rejected { status, message } => (
                *status,
                json!({
                    "error": "invalid_request",
                    "message": message
                }),
            ),
            Self::Conflict { message } => (
                StatusCode::CONFLICT,
                json!({
                    "error": "conflict",
                    "message": message
                }),
            ),
            Self::Config { message } => {
                tracing::error!("Configuration error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "configuration_error",
                        "message": message
                    }),
                )
            }
            Self::Database { message, source } => {
                match source {
                    DbError::UniqueViolation { name } => {
                        tracing::warn!(%name, "Insert lost a duplicate-name race: {}", source)
                    }
                    DbError::Sqlx(_) => tracing::error!("Database error: {}", source),
                }
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "internal_error",
                        "message": message
                    }),
                )
            }
            Self::Blob { message, source } => {
                tracing::error!("Blob store error: {}", source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "internal_error",
                        "message": message
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // No JSON body at all reads as "no name given"
            JsonRejection::MissingJsonContentType(_) => {
                Self::Validation(ValidationError::Required { field: "name" })
            }
            other => Self::Rejected {
                status: other.status(),
                message: other.body_text(),
            },
        }
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(e: MultipartError) -> Self {
        Self::Rejected {
            status: e.status(),
            message: e.body_text(),
        }
    }
}
