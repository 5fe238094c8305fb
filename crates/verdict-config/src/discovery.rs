//! Locating `.verdict.toml` files.
//!
//! Configuration is collected from the working directory upward, followed by the
//! user's `~/.verdict.toml`. A file containing `root = true` ends the walk.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::parse::is_root_config;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".verdict.toml";

/// Finds every configuration file that applies to `cwd`.
///
/// Paths are returned highest precedence first: the file nearest to `cwd`
/// leads and the global file, when present, comes last. The global file is
/// skipped when a `root = true` file was found on the way up.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut configs = Vec::new();
    let mut stopped_at_root = false;

    for dir in cwd.ancestors() {
        let candidate = dir.join(CONFIG_FILENAME);
        if !candidate.is_file() {
            continue;
        }
        let is_root = is_root_config(&candidate);
        configs.push(candidate);
        if is_root {
            stopped_at_root = true;
            break;
        }
    }

    if !stopped_at_root
        && let Some(global) = global_config_path()
        && global.is_file()
        && !configs.contains(&global)
    {
        configs.push(global);
    }

    configs
}

/// Returns the path of the global configuration file (`~/.verdict.toml`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// Checks if a path is the global configuration file.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| path == global)
}
