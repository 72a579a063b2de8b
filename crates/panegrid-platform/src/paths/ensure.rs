use std::fs;
use std::path::Path;

use panegrid_common::PlatformError;

use super::resolve::{config_dir, cookie_dir};

/// Creates the config directory, the data root and its cookie directory.
pub fn ensure_dirs(data_root: &Path) -> Result<(), PlatformError> {
    fs::create_dir_all(config_dir()?).map_err(|e| PlatformError::PathError(e.to_string()))?;
    fs::create_dir_all(data_root).map_err(|e| PlatformError::PathError(e.to_string()))?;
    fs::create_dir_all(cookie_dir(data_root))
        .map_err(|e| PlatformError::PathError(e.to_string()))?;
    tracing::debug!(data_root = %data_root.display(), "platform directories ready");
    Ok(())
}
