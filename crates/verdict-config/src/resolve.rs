//! Path resolution for files referenced from configuration.
//!
//! Stopword list paths may be absolute, relative to the config file that names
//! them, or start with `~`.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::ConfigError;

/// Resolves a path named in a config file to an absolute path.
///
/// - `~` and `~/…` expand to the home directory
/// - relative paths are joined onto `config_dir`
/// - absolute paths are returned unchanged
///
/// The file is not required to exist; reading it reports any error.
pub fn resolve_config_path(path: &str, config_dir: &Path) -> Result<PathBuf, ConfigError> {
    let expanded = expand_tilde(path)?;

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        Ok(config_dir.join(expanded))
    }
}

/// Formats a path for terminal display.
///
/// Paths under `base` are shown relative to it, paths under the home directory
/// are shown with a `~` prefix, and anything else is shown in full.
pub fn format_path_for_display(path: &Path, base: Option<&Path>) -> String {
    if let Some(base) = base
        && path.starts_with(base)
        && let Some(relative) = pathdiff::diff_paths(path, base)
    {
        if relative.as_os_str().is_empty() {
            return ".".to_string();
        }
        return relative.display().to_string();
    }

    if let Ok(home) = home_dir()
        && let Ok(rest) = path.strip_prefix(&home)
    {
        return Path::new("~").join(rest).display().to_string();
    }

    path.display().to_string()
}

/// Expands a tilde prefix to the home directory.
fn expand_tilde(path: &str) -> Result<PathBuf, ConfigError> {
    if path == "~" {
        return home_dir();
    }

    if let Some(rest) = path.strip_prefix("~/") {
        return Ok(home_dir()?.join(rest));
    }

    Ok(PathBuf::from(path))
}

/// Returns the home directory.
fn home_dir() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDirectory)
}
