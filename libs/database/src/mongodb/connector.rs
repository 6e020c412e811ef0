use mongodb::{
    Client,
    bson::doc,
    options::{ClientOptions, Credential, Tls, TlsOptions},
};
use std::time::Duration;
use tracing::info;

use super::MongoConfig;
use crate::common::{DatabaseError, DatabaseResult, RetryConfig, retry, retry_with_backoff};

/// Apply everything in `config` that is not already part of the URI.
pub fn apply_config(options: &mut ClientOptions, config: &MongoConfig) {
    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_millis(config.server_selection_timeout_ms));

    if let Some((username, password)) = config.credentials() {
        let mut credential = Credential::builder()
            .username(username.to_string())
            .password(password.to_string())
            .build();
        credential.source = config.auth_source.clone();
        options.credential = Some(credential);
    } else if let (Some(source), Some(credential)) =
        (config.auth_source.as_ref(), options.credential.as_mut())
    {
        credential.source = Some(source.clone());
    }

    if let Some(ref replica_set) = config.replica_set {
        options.repl_set_name = Some(replica_set.clone());
    }

    if config.tls {
        options.tls = Some(Tls::Enabled(TlsOptions::default()));
    }

    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }
}

/// Connect using a MongoConfig and verify the deployment answers a ping.
///
/// # Example
/// ```ignore
/// use database::mongodb::{MongoConfig, connect_from_config};
///
/// let config = MongoConfig::new("mongodb://localhost:27017/petcare");
/// let client = connect_from_config(&config).await?;
/// ```
pub async fn connect_from_config(config: &MongoConfig) -> DatabaseResult<Client> {
    info!(uri = %config.redacted_uri(), "Attempting to connect to MongoDB");

    let mut options = ClientOptions::parse(&config.uri).await?;
    apply_config(&mut options, config);

    let client = Client::with_options(options)?;

    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

    info!("Successfully connected to MongoDB");
    Ok(client)
}

/// Connect from config, retrying with exponential backoff on failure.
///
/// `None` uses the default policy (3 retries starting at 100ms).
pub async fn connect_from_config_with_retry(
    config: &MongoConfig,
    retry_config: Option<RetryConfig>,
) -> DatabaseResult<Client> {
    match retry_config {
        Some(policy) => retry_with_backoff(|| connect_from_config(config), policy).await,
        None => retry(|| connect_from_config(config)).await,
    }
}
