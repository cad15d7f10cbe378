//! Configuration loading
//!
//! Thin I/O layer for locating and parsing the activation configuration
//! file. The file path comes from the `BOOTINQ_PATH` environment variable
//! or is supplied explicitly; the content is TOML deserialized into
//! [`BootinqConfig`] and validated.

use crate::{BootinqConfig, BootinqError, Result};
use std::path::{Path, PathBuf};

/// Environment variable naming the configuration file path.
pub const PATH_ENV: &str = "BOOTINQ_PATH";

/// Loader for the activation configuration file.
pub struct ConfigLoader {
    path: PathBuf,
    use_defaults: bool,
    validate: bool,
}

impl ConfigLoader {
    /// Create a loader for an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            use_defaults: false,
            validate: true,
        }
    }

    /// Create a loader for the path named by `BOOTINQ_PATH`.
    pub fn from_env() -> Result<Self> {
        let path = std::env::var(PATH_ENV).map_err(|_| BootinqError::PathUnset(PATH_ENV))?;
        Ok(Self::new(path))
    }

    /// Set whether a missing file falls back to the default configuration.
    pub fn use_defaults(mut self, use_defaults: bool) -> Self {
        self.use_defaults = use_defaults;
        self
    }

    /// Set whether to validate the configuration after parsing.
    pub fn validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// The configuration file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the configuration.
    pub fn load(&self) -> Result<BootinqConfig> {
        if !self.path.exists() {
            if self.use_defaults {
                tracing::debug!("config file missing, using defaults: {}", self.path.display());
                return Ok(BootinqConfig::default());
            }
            return Err(BootinqError::NotFound(self.path.clone()));
        }

        let content = std::fs::read_to_string(&self.path)?;
        let config: BootinqConfig = toml::from_str(&content)?;

        if self.validate {
            config.validate()?;
        }

        Ok(config)
    }
}
