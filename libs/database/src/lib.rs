//! Database library providing MongoDB connectivity and shared connection utilities
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB connector, configuration and health checks
//! - `config` - Load `MongoConfig` from the environment via `core_config::FromEnv`
//! - `all` - All features
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb;
//!
//! let config = mongodb::MongoConfig::new("mongodb://localhost:27017/petcare");
//! let client = mongodb::connect_from_config_with_retry(&config, None).await?;
//! let db = client.database(&config.database_name());
//! ```

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{DatabaseError, DatabaseResult};
