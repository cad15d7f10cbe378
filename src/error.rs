//! Error types for configuration and query operations

use std::path::PathBuf;
use thiserror::Error;

/// Activation errors
#[derive(Error, Debug)]
pub enum BootinqError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Configuration path not set: {0} is undefined")]
    PathUnset(&'static str),

    #[error("flag {0:?} is declared more than once")]
    DuplicateFlag(String),

    #[error("component {0:?} is declared more than once")]
    DuplicateComponent(String),

    #[error("Invalid selection: {0}")]
    Selection(String),
}

/// Result type alias for activation operations
pub type Result<T> = std::result::Result<T, BootinqError>;
