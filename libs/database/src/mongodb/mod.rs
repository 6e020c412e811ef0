//! MongoDB connector and utilities
//!
//! Provides connection management and MongoDB-specific helpers.

mod config;
mod connector;
mod health;

pub use config::{DEFAULT_DATABASE, DEFAULT_URI, MongoConfig};
pub use connector::{apply_config, connect_from_config, connect_from_config_with_retry};
pub use health::{HealthStatus, check_health};

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database};
