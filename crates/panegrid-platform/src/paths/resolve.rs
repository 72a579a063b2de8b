use std::path::{Path, PathBuf};

use panegrid_common::PlatformError;

pub(super) const APP_NAME: &str = "panegrid";

/// Returns the platform-specific configuration directory for PaneGrid.
///
/// - macOS: `~/Library/Application Support/panegrid`
/// - Linux: `$XDG_CONFIG_HOME/panegrid` (defaults to `~/.config/panegrid`)
/// - Windows: `%APPDATA%\panegrid`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Returns the platform-specific data directory for PaneGrid.
///
/// - macOS: `~/Library/Application Support/panegrid`
/// - Linux: `$XDG_DATA_HOME/panegrid` (defaults to `~/.local/share/panegrid`)
/// - Windows: `%APPDATA%\panegrid`
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// Returns the path to the main configuration file.
pub fn config_file() -> Result<PathBuf, PlatformError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Data directory, honouring an explicit override from config or CLI.
pub fn resolve_data_dir(override_dir: Option<&Path>) -> Result<PathBuf, PlatformError> {
    match override_dir {
        Some(dir) => Ok(dir.to_path_buf()),
        None => data_dir(),
    }
}

/// Directory holding one cookie file per logical sub-window.
pub fn cookie_dir(data_root: &Path) -> PathBuf {
    data_root.join("cookies")
}
