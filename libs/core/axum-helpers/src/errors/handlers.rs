use axum::response::{IntoResponse, Response};

use super::AppError;
use super::messages::ROUTE_NOT_FOUND;

/// Fallback for unmatched paths and for methods a matched path does not serve.
pub async fn not_found() -> Response {
    AppError::RouteNotFound(ROUTE_NOT_FOUND.to_string()).into_response()
}
