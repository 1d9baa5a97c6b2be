//! Building the session stack from configuration.

use std::sync::Arc;
use std::time::Duration;

use parley_common::ConfigError;
use parley_config::schema::EndpointConfig;
use parley_config::{validation, ParleyConfig};
use parley_session::{AskClient, AskError, ClientConfig, HttpAskClient, SessionController};

use crate::cli::Args;

/// Apply command-line overrides on top of the loaded config.
pub fn apply_overrides(config: &mut ParleyConfig, args: &Args) {
    if let Some(ref url) = args.endpoint {
        config.endpoint.url = url.clone();
    }
    if let Some(ref customer_id) = args.customer_id {
        config.endpoint.customer_id = Some(customer_id.clone());
    }
}

/// The config a run should use: loaded file, then CLI overrides, then validation.
///
/// A file given with `--config` must load. Without one, an unreadable default
/// file falls back to built-in defaults. Out-of-range values are never papered
/// over: they fail here so the endpoint a user configured is not swapped out.
pub fn resolve_config(
    loaded: Result<ParleyConfig, ConfigError>,
    args: &Args,
) -> Result<ParleyConfig, ConfigError> {
    let mut config = match loaded {
        Ok(config) => config,
        Err(e) if args.config.is_some() => return Err(e),
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            ParleyConfig::default()
        }
    };
    apply_overrides(&mut config, args);
    validation::validate(&config)?;
    Ok(config)
}

pub fn client_config(endpoint: &EndpointConfig) -> ClientConfig {
    let mut config = ClientConfig::new(endpoint.url.clone())
        .with_connect_timeout(Duration::from_secs(endpoint.connect_timeout_secs.into()))
        .with_request_timeout(Duration::from_secs(endpoint.request_timeout_secs.into()));
    if let Some(ref customer_id) = endpoint.customer_id {
        config = config.with_customer_id(customer_id.clone());
    }
    config
}

pub fn build_client(endpoint: &EndpointConfig) -> Result<Arc<dyn AskClient>, AskError> {
    Ok(Arc::new(HttpAskClient::new(client_config(endpoint))?))
}

/// A fresh session bounded by the configured request timeout.
pub fn new_controller(client: Arc<dyn AskClient>, endpoint: &EndpointConfig) -> SessionController {
    SessionController::new(client)
        .with_reply_timeout(Duration::from_secs(endpoint.request_timeout_secs.into()))
}
