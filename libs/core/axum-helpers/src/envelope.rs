//! Success response envelopes.
//!
//! Every successful response carries a human-readable `message`; responses
//! that return a resource add it under `data`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `{ "message": "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{ "message": "...", "data": T }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DataResponse<T> {
    pub message: String,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_response_shape() {
        let body = serde_json::to_value(MessageResponse::new("Pet deleted successfully.")).unwrap();
        assert_eq!(body, json!({ "message": "Pet deleted successfully." }));
    }

    #[test]
    fn test_data_response_shape() {
        let body = serde_json::to_value(DataResponse::new("ok", json!({ "id": "abc" }))).unwrap();
        assert_eq!(body, json!({ "message": "ok", "data": { "id": "abc" } }));
    }
}
