//! Parley configuration system.
//!
//! Provides TOML-based configuration for the remote endpoint, the
//! assistant's presentation text, and logging. All sections use sensible
//! defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use parley_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

// Re-export core types for convenience
pub use schema::{ParleyConfig, CONFIG_SCHEMA_VERSION};
pub use toml_loader::{load_default, load_from_path};

use std::path::Path;

use parley_common::ConfigError;

/// Load config from the platform default path, or from `path` when given.
///
/// The default location is created from a commented template if missing.
/// An explicit path must exist. Out-of-range values do not fail the load;
/// callers run [`validation::validate`] once their own overrides are applied.
pub fn load_config_from(path: Option<&Path>) -> Result<ParleyConfig, ConfigError> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.to_path_buf()));
            }
            toml_loader::load_from_path(path)
        }
        None => toml_loader::load_default(),
    }
}

/// Convenience function to load config from the platform default path.
pub fn load_config() -> Result<ParleyConfig, ConfigError> {
    load_config_from(None)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &ParleyConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
