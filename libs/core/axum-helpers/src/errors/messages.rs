//! Fixed client-facing messages.

pub const INTERNAL_ERROR: &str = "Internal server error.";
pub const ROUTE_NOT_FOUND: &str = "Route not found.";
pub const BODY_NOT_OBJECT: &str = "Request body must be a JSON object.";
pub const EXPECTED_JSON: &str = "Expected request with `Content-Type: application/json`.";
