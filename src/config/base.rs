//! The resolved configuration handle.

use super::format::ConfigFormat;
use crate::defaults::merge_with_defaults;
use crate::error::{ConfigError, ConfigResult};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// A resolved configuration: merged settings plus their on-disk origin.
///
/// Created once per resolution, either from a file or (via [`Default`]) from
/// the defaults table alone. Mutation happens only through [`Config::set_key`],
/// which also persists to the backing file.
#[derive(Debug, Clone)]
pub struct Config {
    settings: Map<String, Value>,
    path: Option<PathBuf>,
    format: Option<ConfigFormat>,
    /// Whether extraction found a non-empty tool section. Kept explicitly so
    /// "no section" stays distinguishable from "section spelling out every
    /// default".
    section_found: bool,
}

impl Default for Config {
    /// Defaults-only configuration with no backing file.
    fn default() -> Self {
        Self {
            settings: merge_with_defaults(Map::new()),
            path: None,
            format: None,
            section_found: false,
        }
    }
}

impl Config {
    /// Load and merge the configuration stored at `path`.
    ///
    /// The format is selected by extension; parse failures and unrecognized
    /// extensions are errors, a missing or empty tool section is not.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let data = fs::read_to_string(path)?;
        let section = format.extract_section(&data, path)?;
        let section_found = !section.is_empty();
        Ok(Self {
            settings: merge_with_defaults(section),
            path: Some(path.to_path_buf()),
            format: Some(format),
            section_found,
        })
    }

    /// True when no tool section was found (or it was literally empty).
    pub fn is_empty(&self) -> bool {
        !self.section_found
    }

    /// The originating file, if the configuration came from one.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The on-disk format of the originating file.
    pub fn format(&self) -> Option<ConfigFormat> {
        self.format
    }

    /// The merged settings map. Every schema key is present.
    pub fn settings(&self) -> &Map<String, Value> {
        &self.settings
    }

    /// Read one setting.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.settings.get(key)
    }

    /// The configured rule-set name.
    pub fn name(&self) -> Option<&str> {
        self.get("name").and_then(Value::as_str)
    }

    /// The configured project version, if any.
    pub fn version(&self) -> Option<&str> {
        self.get("version").and_then(Value::as_str)
    }

    /// Update one setting in memory and persist it to the backing file.
    ///
    /// Fails with [`ConfigError::NoBackingFile`] on a defaults-only handle.
    pub fn set_key(&mut self, key: &str, value: Value) -> ConfigResult<()> {
        let (Some(path), Some(format)) = (&self.path, self.format) else {
            return Err(ConfigError::NoBackingFile);
        };
        format.set_key(path, key, &value)?;
        self.settings.insert(key.to_string(), value);
        self.section_found = true;
        Ok(())
    }
}
