//! Resolving a [`ConfigLocation`] to a concrete file path.

use std::path::PathBuf;

use crate::error::UcConfigError;
use crate::types::ConfigLocation;

/// Resolve a [`ConfigLocation`] to a directory.
///
/// `app_name` names the platform config directory (e.g. `~/.config/{app_name}/`
/// on Linux). Returns `None` if the directory cannot be determined.
pub fn resolve_dir(location: &ConfigLocation, app_name: &str) -> Option<PathBuf> {
    match location {
        ConfigLocation::Cwd => std::env::current_dir().ok(),
        ConfigLocation::Platform => {
            let proj = directories::ProjectDirs::from("", "", app_name)?;
            Some(proj.config_dir().to_path_buf())
        }
        ConfigLocation::Path(p) => Some(p.clone()),
    }
}

/// Resolve the full path of `file_name` inside `location`.
pub fn resolve_config_path(
    location: &ConfigLocation,
    file_name: &str,
    app_name: &str,
) -> Result<PathBuf, UcConfigError> {
    resolve_dir(location, app_name)
        .map(|dir| dir.join(file_name))
        .ok_or(UcConfigError::NoConfigDir)
}
