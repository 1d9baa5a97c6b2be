//! Where Parley keeps its config file.

use parley_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::info;

use super::template::default_config_toml;

const APP_DIR: &str = "parley";
const CONFIG_FILE: &str = "config.toml";

/// `<config dir>/parley/config.toml`, where the config dir follows `dirs`
/// (XDG_CONFIG_HOME on Linux, Application Support on macOS).
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
        .ok_or_else(|| ConfigError::ParseError("no config directory for this user".into()))
}

/// Write the starter config, with the endpoint and assistant defaults
/// spelled out, creating `parley/` if needed.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let io_error = |what: &str, target: &Path, e: std::io::Error| {
        ConfigError::ParseError(format!("could not {what} {}: {e}", target.display()))
    };

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| io_error("create", dir, e))?;
    }
    std::fs::write(path, default_config_toml()).map_err(|e| io_error("write", path, e))?;

    info!(path = %path.display(), "wrote starter config");
    Ok(())
}
