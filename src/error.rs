//! Error types for configuration resolution.

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors surfaced while locating, parsing, or persisting configuration.
///
/// Messages are user-facing: they name the offending file and, where there is
/// one, the corrective action. Format-library parse errors never leak raw;
/// they are captured as message strings in [`ConfigError::Malformed`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist.
    #[error("File {} not exists.", .0.display())]
    FileNotFound(PathBuf),

    /// An explicitly requested config file exists but carries no tool section.
    #[error(
        "File {} doesn't contain any configuration. \
         Fill it or don't use --config-file option.",
        .0.display()
    )]
    EmptyConfiguration(PathBuf),

    /// The file extension maps to no known format.
    #[error("Config file should have a valid extension: toml, yaml or json")]
    InvalidExtension(PathBuf),

    /// The file exists but its content does not conform to the format grammar.
    #[error("Failed to parse {}: {message}", .path.display())]
    Malformed { path: PathBuf, message: String },

    /// A mutation was requested on a defaults-only configuration.
    #[error("No configuration file to update. Create one with 'tempo init' first.")]
    NoBackingFile,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Wrap a format-level parse or serialize error, keeping the file name.
    pub fn malformed(path: &Path, err: impl fmt::Display) -> Self {
        Self::Malformed {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
