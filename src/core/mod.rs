use std::{
    fmt, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// Error types for clock configuration.
///
/// Covers settings files, imports and value parsing. The render path has no
/// error type of its own; degenerate geometry is skipped rather than reported.
#[derive(Error, Debug)]
pub enum ClockError {
    /// A setting held a value of the right type but an unusable content
    #[error("invalid setting '{field}': {reason}")]
    InvalidSetting {
        /// Name of the setting
        field: String,
        /// Why the value was rejected
        reason: String,
    },

    /// A color string could not be parsed
    #[error("invalid color '{0}': expected #rrggbb or #rrggbbaa")]
    InvalidColor(String),

    /// Configuration validation error
    #[error("configuration validation failed for '{component}': {details}")]
    ConfigValidation {
        /// Component that failed validation
        component: String,
        /// Validation error details
        details: String,
    },

    /// Standard I/O operation error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParseError {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },

    /// Import operation error with file context
    #[error("failed to import '{path}': {details}")]
    ImportError {
        /// Path of file being imported
        path: PathBuf,
        /// Import error details
        details: String,
    },
}

/// A specialized `Result` type for clock operations.
pub type Result<T> = std::result::Result<T, ClockError>;

impl ClockError {
    /// Creates a TOML parsing error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn toml_parse(error: impl fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        ClockError::TomlParseError {
            location,
            details: error.to_string(),
        }
    }

    /// Creates an import error with file path context.
    pub fn import(error: impl fmt::Display, path: &Path) -> Self {
        let clean_path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        ClockError::ImportError {
            path: clean_path,
            details: error.to_string(),
        }
    }

    /// Creates an invalid setting error.
    pub fn invalid_setting(field: &str, reason: impl fmt::Display) -> Self {
        ClockError::InvalidSetting {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }
}
