//! Configuration resolution.
//!
//! Locates a project configuration in one of three formats (TOML, JSON,
//! YAML), extracts the tool section, and merges it over the built-in
//! defaults:
//! 1. **Explicit path** - `--config-file` names the file; it must exist and
//!    carry a non-empty section.
//! 2. **Default search** - the current directory, then the git project root,
//!    probed against the ordered filename list in [`crate::defaults`]; the
//!    first non-empty section wins.
//! 3. **Defaults** - when nothing matches, a defaults-only handle with no
//!    backing file.

mod base;
mod format;
mod json;
mod toml;
mod yaml;

pub use base::Config;
pub use format::ConfigFormat;

use crate::defaults::CONFIG_FILES;
use crate::error::{ConfigError, ConfigResult};
use crate::git;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directories probed by default-search resolution, in priority order.
#[derive(Debug, Clone)]
pub struct SearchPaths {
    pub dirs: Vec<PathBuf>,
}

impl Default for SearchPaths {
    fn default() -> Self {
        Self::discover()
    }
}

impl SearchPaths {
    /// Current working directory first, then the git project root when it
    /// exists and differs from it.
    pub fn discover() -> Self {
        let mut dirs = vec![PathBuf::from(".")];
        if let Some(root) = git::find_project_root() {
            let cwd = std::env::current_dir().ok();
            if cwd.as_deref() != Some(root.as_path()) {
                dirs.push(root);
            }
        }
        Self { dirs }
    }

    /// Explicit directories, highest priority first.
    pub fn with_dirs(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }
}

/// Resolve the configuration for this invocation.
///
/// With `cfg_path` set, loads exactly that file and fails when it is missing
/// or carries no tool section. Otherwise searches the default locations and
/// falls back to a defaults-only [`Config`].
pub fn read_cfg(cfg_path: Option<&Path>) -> ConfigResult<Config> {
    read_cfg_with_paths(cfg_path, &SearchPaths::discover())
}

/// [`read_cfg`] with explicit search directories.
pub fn read_cfg_with_paths(cfg_path: Option<&Path>, paths: &SearchPaths) -> ConfigResult<Config> {
    if let Some(path) = cfg_path {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        let config = Config::from_file(path)?;
        if config.is_empty() {
            return Err(ConfigError::EmptyConfiguration(path.to_path_buf()));
        }
        return Ok(config);
    }

    match find_config_from_defaults(paths)? {
        Some(config) => Ok(config),
        None => Ok(Config::default()),
    }
}

/// Probe directory-major over the default filenames; first candidate whose
/// section is non-empty wins. Missing or empty candidates are skipped,
/// malformed ones are fatal.
fn find_config_from_defaults(paths: &SearchPaths) -> ConfigResult<Option<Config>> {
    for dir in &paths.dirs {
        for filename in CONFIG_FILES {
            let candidate = dir.join(filename);
            if !candidate.exists() {
                continue;
            }
            debug!("Probing config candidate {}", candidate.display());
            let config = Config::from_file(&candidate)?;
            if !config.is_empty() {
                debug!("Using configuration from {}", candidate.display());
                return Ok(Some(config));
            }
        }
    }
    Ok(None)
}
