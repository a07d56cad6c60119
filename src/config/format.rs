//! Format selection and dispatch.
//!
//! Each supported format implements the same four operations (parse, section
//! extraction, empty-section init, single-key update); this enum selects one
//! by file extension and dispatches without trait objects.

use super::{json, toml, yaml};
use crate::error::{ConfigError, ConfigResult};
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::Path;

/// On-disk configuration format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

impl std::fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigFormat::Toml => write!(f, "toml"),
            ConfigFormat::Json => write!(f, "json"),
            ConfigFormat::Yaml => write!(f, "yaml"),
        }
    }
}

impl ConfigFormat {
    /// Select a format from a file path.
    ///
    /// The match is a substring test against the path's extension ("toml",
    /// "json", "yaml", in that order), not exact suffix equality. Existing
    /// config files rely on this looseness, so it stays.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if extension.contains("toml") {
            Ok(ConfigFormat::Toml)
        } else if extension.contains("json") {
            Ok(ConfigFormat::Json)
        } else if extension.contains("yaml") {
            Ok(ConfigFormat::Yaml)
        } else {
            Err(ConfigError::InvalidExtension(path.to_path_buf()))
        }
    }

    /// Parse raw file content and extract the tool section.
    ///
    /// Returns an empty map when the section is absent. Fails only when the
    /// content does not conform to the format grammar; empty input is a valid
    /// empty document in every format.
    pub fn extract_section(&self, data: &str, path: &Path) -> ConfigResult<Map<String, Value>> {
        match self {
            ConfigFormat::Toml => toml::extract_section(data, path),
            ConfigFormat::Json => Ok(json::extract_section(&json::parse(data, path)?)),
            ConfigFormat::Yaml => Ok(yaml::extract_section(&yaml::parse(data, path)?)),
        }
    }

    /// Write an empty tool section stub into the file at `path`.
    ///
    /// Existing unrelated content is preserved; the file is rewritten whole.
    pub fn init_empty_config_content(&self, path: &Path) -> ConfigResult<()> {
        match self {
            ConfigFormat::Toml => toml::init_empty_config_content(path),
            ConfigFormat::Json => json::init_empty_config_content(path),
            ConfigFormat::Yaml => yaml::init_empty_config_content(path),
        }
    }

    /// Persist one key's new value into the tool section of the file at `path`.
    pub fn set_key(&self, path: &Path, key: &str, value: &Value) -> ConfigResult<()> {
        match self {
            ConfigFormat::Toml => toml::set_key(path, key, value),
            ConfigFormat::Json => json::set_key(path, key, value),
            ConfigFormat::Yaml => yaml::set_key(path, key, value),
        }
    }
}
