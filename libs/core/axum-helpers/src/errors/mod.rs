pub mod codes;
pub mod handlers;
pub mod messages;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::{BytesRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Error envelope returned for every failed request.
///
/// ```json
/// {
///   "message": "Pet data validation failed.",
///   "errors": ["Field \"name\" must be a non-empty string."]
/// }
/// ```
///
/// `errors` is present only for validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable summary
    pub message: String,
    /// Itemised validation failures, in detection order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

/// Application error type that can be converted to HTTP responses.
///
/// Server-side variants (`Database`, `InternalServerError`) log their detail
/// and answer with a fixed generic message.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Body extraction error: {0}")]
    BodyRejection(#[from] BytesRejection),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("{message}: {errors:?}")]
    Validation {
        message: String,
        errors: Vec<String>,
    },

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Route not found: {0}")]
    RouteNotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::JsonExtractorRejection(e) => e.status(),
            AppError::BodyRejection(e) => e.status(),
            AppError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::Validation { .. }
            | AppError::InvalidIdentifier(_)
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) | AppError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::JsonExtractorRejection(_) | AppError::BodyRejection(_) => {
                ErrorCode::JsonExtraction
            }
            AppError::UnsupportedMediaType(_) => ErrorCode::UnsupportedMediaType,
            AppError::Validation { .. } => ErrorCode::ValidationError,
            AppError::InvalidIdentifier(_) => ErrorCode::InvalidIdentifier,
            AppError::BadRequest(_) => ErrorCode::BadRequest,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::RouteNotFound(_) => ErrorCode::RouteNotFound,
            AppError::Database(_) => ErrorCode::DatabaseError,
            AppError::InternalServerError(_) => ErrorCode::InternalError,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.error_code();

        let body = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(error_code = code.code(), "JSON extraction error: {:?}", e);
                ErrorResponse {
                    message: e.body_text(),
                    errors: None,
                }
            }
            AppError::BodyRejection(e) => {
                tracing::warn!(error_code = code.code(), "Body extraction error: {:?}", e);
                ErrorResponse {
                    message: e.body_text(),
                    errors: None,
                }
            }
            AppError::Validation { message, errors } => {
                tracing::info!(error_code = code.code(), ?errors, "{}", message);
                ErrorResponse {
                    message,
                    errors: Some(errors),
                }
            }
            AppError::Database(detail) => {
                tracing::error!(error_code = code.code(), "Database error: {}", detail);
                ErrorResponse {
                    message: messages::INTERNAL_ERROR.to_string(),
                    errors: None,
                }
            }
            AppError::InternalServerError(detail) => {
                tracing::error!(error_code = code.code(), "Internal server error: {}", detail);
                ErrorResponse {
                    message: messages::INTERNAL_ERROR.to_string(),
                    errors: None,
                }
            }
            AppError::UnsupportedMediaType(msg)
            | AppError::InvalidIdentifier(msg)
            | AppError::BadRequest(msg)
            | AppError::NotFound(msg)
            | AppError::RouteNotFound(msg) => {
                tracing::info!(error_code = code.code(), "{}: {}", code, msg);
                ErrorResponse {
                    message: msg,
                    errors: None,
                }
            }
        };

        (status, Json(body)).into_response()
    }
}
