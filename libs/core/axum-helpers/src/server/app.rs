use super::shutdown::shutdown_signal;
use crate::errors::handlers::not_found;
use crate::http::{cors::create_cors_layer, security::security_headers};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;

/// Wraps the API routes with documentation viewers and cross-cutting middleware.
///
/// - OpenAPI document at `/api-docs/openapi.json`, with ReDoc (`/redoc`),
///   RapiDoc (`/rapidoc`) and Scalar (`/scalar`) viewers
/// - `apis` merged at the root, so resource routers keep their own prefixes
/// - `{ "message": "Route not found." }` for unknown paths and unsupported methods
/// - Request tracing, security headers and response compression
/// - CORS, only when `server_config.cors_allowed_origins` is non-empty
///
/// Domain routers apply their own state before being passed in.
///
/// # Errors
/// Returns `InvalidInput` if a configured CORS origin is not a valid header value.
///
/// # Example
/// ```ignore
/// let api_routes = Router::new().nest("/pets", domain_pets::handlers::router(service));
/// let router = create_router::<ApiDoc>(api_routes, &config)?;
/// ```
pub fn create_router<T>(apis: Router, server_config: &ServerConfig) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};

    let openapi = T::openapi();

    let router = Router::new()
        .merge(RapiDoc::with_openapi("/api-docs/openapi.json", openapi.clone()).path("/rapidoc"))
        .merge(Redoc::with_url("/redoc", openapi.clone()))
        .merge(Scalar::with_url("/scalar", openapi))
        .merge(apis)
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers));

    let router = if server_config.cors_allowed_origins.is_empty() {
        router
    } else {
        info!(
            origins = ?server_config.cors_allowed_origins,
            "CORS enabled for configured origins"
        );
        router.layer(create_cors_layer(&server_config.cors_allowed_origins)?)
    };

    Ok(router.layer(CompressionLayer::new()))
}

/// Serves `router` until SIGINT/SIGTERM, then runs `cleanup` within `shutdown_timeout`.
///
/// `cleanup` is where the caller releases its database client.
///
/// # Errors
/// Returns an error if the listener cannot bind or the server fails.
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send,
{
    let listener = TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    serve_with_cleanup(listener, router, shutdown_signal(), shutdown_timeout, cleanup).await
}

/// Serves on `listener` until `shutdown` completes and in-flight requests have
/// drained, then runs `cleanup` bounded by `shutdown_timeout`.
///
/// Cleanup also runs when the server stops with an error.
pub async fn serve_with_cleanup<S, F>(
    listener: TcpListener,
    router: Router,
    shutdown: S,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    S: Future<Output = ()> + Send + 'static,
    F: Future<Output = ()> + Send,
{
    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(()) => info!("Cleanup completed successfully"),
        Err(_) => tracing::warn!(
            "Cleanup exceeded timeout of {:?}, forcing shutdown",
            shutdown_timeout
        ),
    }

    serve_result
}
