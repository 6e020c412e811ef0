//! API routes module

pub mod health;
pub mod pets;

use axum::Router;
use axum_helpers::{create_router, health_router};
use std::io;

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Resource and health routes, before cross-cutting middleware
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/pets", pets::router(state))
        .merge(health::router(state.clone()))
        .merge(health_router(state.config.app))
}

/// The complete application: routes, OpenAPI viewers, middleware and fallback
pub fn app(state: &AppState) -> io::Result<Router> {
    create_router::<ApiDoc>(routes(state), &state.config.server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use core_config::{AppInfo, server::ServerConfig};
    use database::mongodb::MongoConfig;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    // Nothing listens on port 1, so every driver operation fails fast.
    const UNREACHABLE: &str = "mongodb://127.0.0.1:1/petcare?serverSelectionTimeoutMS=200";

    async fn state() -> AppState {
        let mongo_client = mongodb::Client::with_uri_str(UNREACHABLE).await.unwrap();
        let db = mongo_client.database("petcare");
        AppState {
            config: Config {
                app: AppInfo {
                    name: "petcare_api",
                    version: "0.1.0",
                },
                mongodb: MongoConfig::new(UNREACHABLE),
                server: ServerConfig::default(),
                environment: Environment::Development,
            },
            mongo_client,
            db,
        }
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let app = app(&state().await).unwrap();
        let (status, body) = get(app, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "status": "ok", "name": "petcare_api", "version": "0.1.0" })
        );
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let app = app(&state().await).unwrap();
        let (status, body) = get(app, "/owners").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "message": "Route not found." }));
    }

    #[tokio::test]
    async fn test_pets_with_trailing_slash_is_unknown_route() {
        let app = app(&state().await).unwrap();
        let (status, body) = get(app, "/pets/").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "message": "Route not found." }));
    }

    #[tokio::test]
    async fn test_invalid_id_needs_no_database() {
        let app = app(&state().await).unwrap();
        let (status, body) = get(app, "/pets/not-an-id").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["message"],
            "Pet identifier is not a valid MongoDB ObjectId."
        );
    }

    #[tokio::test]
    async fn test_store_failure_is_generic_500() {
        let app = app(&state().await).unwrap();
        let (status, body) = get(app, "/pets").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "message": "Internal server error." }));
    }

    #[tokio::test]
    async fn test_ready_reports_disconnected_database() {
        let app = app(&state().await).unwrap();
        let (status, body) = get(app, "/ready").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "not ready");
        assert_eq!(body["mongodb"], "disconnected");
    }

    #[tokio::test]
    async fn test_openapi_lists_pet_paths() {
        let app = app(&state().await).unwrap();
        let (status, body) = get(app, "/api-docs/openapi.json").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"].get("/pets").is_some());
        assert!(body["paths"].get("/pets/{id}").is_some());
    }
}
