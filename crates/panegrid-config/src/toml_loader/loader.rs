//! Core TOML config loading: read from path or platform default.

use crate::schema::PanegridConfig;
use crate::validation;
use panegrid_common::ConfigError;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::template::default_config_toml;

/// Environment variable naming a config file to use instead of the
/// platform default.
pub const CONFIG_PATH_ENV: &str = "PANEGRID_CONFIG";

/// Load config from a specific TOML file path.
///
/// Missing fields use serde defaults. If validation fails, a warning is
/// logged and the parsed config is returned as-is.
pub fn load_from_path(path: &Path) -> Result<PanegridConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::FileNotFound(path.to_path_buf())
        } else {
            ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
        }
    })?;

    let config: PanegridConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!(path = %path.display(), error = %e, "config validation warning, using parsed values");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load `path`, writing the documented default template first if it is missing.
pub fn load_or_create(path: &Path) -> Result<PanegridConfig, ConfigError> {
    match load_from_path(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            write_template(path)?;
            Ok(PanegridConfig::default())
        }
        Err(e) => Err(e),
    }
}

fn write_template(path: &Path) -> Result<(), ConfigError> {
    let failed = |what: &str, at: &Path, e: std::io::Error| {
        ConfigError::ParseError(format!("failed to {what} {}: {e}", at.display()))
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| failed("create config directory", parent, e))?;
    }
    std::fs::write(path, default_config_toml())
        .map_err(|e| failed("write default config to", path, e))?;
    info!(path = %path.display(), "wrote default config");
    Ok(())
}

/// `$PANEGRID_CONFIG` when set and non-empty, else
/// `<platform config dir>/panegrid/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    config_path_from(std::env::var_os(CONFIG_PATH_ENV))
}

pub(super) fn config_path_from(env_override: Option<OsString>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = env_override.filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    let base = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(base.join("panegrid").join("config.toml"))
}

/// Load config from [`default_config_path`].
pub fn load_default() -> Result<PanegridConfig, ConfigError> {
    load_or_create(&default_config_path()?)
}
