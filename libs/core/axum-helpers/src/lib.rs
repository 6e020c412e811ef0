//! # Axum Helpers
//!
//! Shared building blocks for the JSON APIs in this workspace.
//!
//! ## Modules
//!
//! - **[`errors`]**: `AppError` and the `{ message, errors? }` error envelope
//! - **[`envelope`]**: Success envelopes (`{ message, data? }`)
//! - **[`extractors`]**: `JsonObject`, a JSON-object request body extractor
//! - **[`http`]**: CORS and security header middleware
//! - **[`server`]**: Router assembly, health endpoint, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::{app_info, server::ServerConfig};
//!
//! let config = ServerConfig::default();
//! let router = create_router::<ApiDoc>(api_routes, &config)?
//!     .merge(health_router(app_info!()));
//! create_production_app(router, &config, Duration::from_secs(30), async {}).await?;
//! ```

pub mod envelope;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export server types
pub use server::{
    HealthCheckFuture, HealthResponse, create_production_app, create_router, health_router,
    run_health_checks, serve_with_cleanup, shutdown_signal,
};

// Re-export HTTP middleware
pub use http::{create_cors_layer, security_headers};

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse};

// Re-export envelopes and extractors
pub use envelope::{DataResponse, MessageResponse};
pub use extractors::JsonObject;
