//! Error codes attached to every error response log line.
//!
//! Each code has a SCREAMING_SNAKE_CASE identifier and a numeric code for
//! dashboards. Codes never appear in response bodies.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! assert_eq!(ErrorCode::ValidationError.as_str(), "VALIDATION_ERROR");
//! assert_eq!(ErrorCode::ValidationError.code(), 1001);
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Payload failed field validation
    ValidationError,
    /// Path identifier is not a valid store identifier
    InvalidIdentifier,
    /// Body could not be read or parsed as JSON
    JsonExtraction,
    /// Resource does not exist
    NotFound,
    /// Request is malformed in some other way
    BadRequest,
    /// Body is not declared as JSON
    UnsupportedMediaType,
    /// No route matches method and path
    RouteNotFound,

    // Server errors
    InternalError,

    // Database errors (2000-2999)
    DatabaseError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidIdentifier => "INVALID_IDENTIFIER",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::BadRequest => "BAD_REQUEST",
            Self::UnsupportedMediaType => "UNSUPPORTED_MEDIA_TYPE",
            Self::RouteNotFound => "ROUTE_NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
            Self::DatabaseError => "DATABASE_ERROR",
        }
    }

    /// Numeric code for structured logs:
    /// 1000-1999 client errors, 2000-2999 database errors.
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidIdentifier => 1002,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::BadRequest => 1006,
            Self::UnsupportedMediaType => 1007,
            Self::RouteNotFound => 1012,
            Self::DatabaseError => 2003,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
