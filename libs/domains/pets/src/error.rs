use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

pub const VALIDATION_FAILED: &str = "Pet data validation failed.";
pub const INVALID_ID: &str = "Pet identifier is not a valid MongoDB ObjectId.";
pub const NOT_FOUND: &str = "Pet was not found.";
pub const EMPTY_BODY: &str = "Request body must not be empty.";

#[derive(Debug, Error)]
pub enum PetError {
    #[error("Pet data validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Invalid pet identifier: {0}")]
    InvalidId(String),

    #[error("Pet not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type PetResult<T> = Result<T, PetError>;

/// Convert PetError to AppError for standardized error responses
impl From<PetError> for AppError {
    fn from(err: PetError) -> Self {
        match err {
            PetError::Validation(errors) => AppError::Validation {
                message: VALIDATION_FAILED.to_string(),
                errors,
            },
            PetError::InvalidId(_) => AppError::InvalidIdentifier(INVALID_ID.to_string()),
            PetError::NotFound(_) => AppError::NotFound(NOT_FOUND.to_string()),
            PetError::Database(msg) => AppError::Database(msg),
            PetError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for PetError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for PetError {
    fn from(err: mongodb::error::Error) -> Self {
        PetError::Database(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for PetError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        PetError::Internal(err.to_string())
    }
}
