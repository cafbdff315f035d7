//! Configuration error types.

use crate::mapping::MappingError;
use thiserror::Error;

/// Errors that can occur while loading a mapping file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The mapping file is not valid TOML or has unknown fields or keys.
    #[error("Invalid TOML in label mapping file '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// A `[[mapping]]` entry has an empty value or label.
    #[error("Validation error in '{path}': {message}")]
    ValidationError { path: String, message: String },

    /// Missing required file.
    #[error("Missing required file: {path}")]
    MissingFile { path: String },

    /// A mapping entry could not be registered.
    #[error("Invalid mapping in '{path}': {source}")]
    Mapping {
        path: String,
        #[source]
        source: MappingError,
    },
}
