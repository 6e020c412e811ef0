//! Shared application state passed to route builders.

use mongodb::{Client, Database};

/// Cloned per router (the MongoDB handles are reference counted).
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client (shares the underlying connection pool)
    pub mongo_client: Client,
    /// Database holding the `pets` collection
    pub db: Database,
}
