//! JSON object body extractor that leaves field validation to the handler.

use crate::errors::{AppError, messages};
use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, header::CONTENT_TYPE},
};
use serde_json::{Map, Value};

/// Request body parsed as a JSON object, kept as an untyped map.
///
/// Handlers that validate payloads field by field (reporting unknown keys,
/// wrong types and missing values together) need the raw object rather than
/// a deserialised struct that would stop at the first problem.
///
/// - An absent or whitespace-only body yields an empty map.
/// - A non-empty body must be declared `application/json` (or `+json`).
/// - Malformed JSON is rejected with the parser's message.
/// - Valid JSON that is not an object is rejected with 400.
///
/// # Example
/// ```ignore
/// use axum_helpers::JsonObject;
///
/// async fn create(JsonObject(payload): JsonObject) -> String {
///     format!("{} fields", payload.len())
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct JsonObject(pub Map<String, Value>);

impl<S> FromRequest<S> for JsonObject
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let declared_json = has_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state).await?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonObject(Map::new()));
        }

        if !declared_json {
            return Err(AppError::UnsupportedMediaType(
                messages::EXPECTED_JSON.to_string(),
            ));
        }

        let Json(value) = Json::<Value>::from_bytes(&bytes)?;

        match value {
            Value::Object(map) => Ok(JsonObject(map)),
            _ => Err(AppError::BadRequest(messages::BODY_NOT_OBJECT.to_string())),
        }
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}
