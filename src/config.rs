//! Deserialized activation configuration
//!
//! The input contract for resolution:
//! - `env_key`: environment variable holding the flag string
//! - `default`: fallback flag string when that variable is absent
//! - `parts`: flag character -> plain component name, in declaration order
//! - `mount`: flag character -> mountable component name, in declaration order
//! - `deps`: component name -> trigger characters (`in` key)
//!
//! All keys are optional; missing ones fall back to the documented
//! defaults. Declaration order of `parts` and `mount` is significant and
//! preserved through resolution.

use crate::{BootinqError, DepIndex, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Environment variable consulted when `env_key` is not configured.
pub const DEFAULT_ENV_KEY: &str = "BOOTINQ";

/// A dependency entry: the characters that force a component on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DepSpec {
    /// Trigger characters checked against the raw flag value.
    #[serde(rename = "in", default)]
    pub triggers: String,
}

/// Activation configuration.
///
/// # Example
///
/// ```text
/// env_key = "BOOTINQ"
/// default = "s2"
///
/// [parts]
/// A = "api_part"
/// s = "shared"
///
/// [mount]
/// a = "api"
/// 2 = "api2"
///
/// [deps.api_part]
/// in = "a2"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BootinqConfig {
    /// Name of the environment variable holding the flag string.
    pub env_key: String,
    /// Fallback flag string when the environment variable is absent.
    pub default: String,
    /// Plain components: flag character -> component name.
    pub parts: IndexMap<String, String>,
    /// Mountable components: flag character -> component name.
    pub mount: IndexMap<String, String>,
    /// Dependency triggers: component name -> trigger characters.
    pub deps: IndexMap<String, DepSpec>,
}

impl Default for BootinqConfig {
    fn default() -> Self {
        Self {
            env_key: DEFAULT_ENV_KEY.to_string(),
            default: String::new(),
            parts: IndexMap::new(),
            mount: IndexMap::new(),
            deps: IndexMap::new(),
        }
    }
}

impl BootinqConfig {
    /// Create a configuration with the documented defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// The raw flag value: the environment variable named by `env_key`,
    /// falling back to `default` when it is absent.
    pub fn flag_value(&self) -> String {
        std::env::var(&self.env_key).unwrap_or_else(|_| self.default.clone())
    }

    /// Build the dependency index from the `deps` entries.
    pub fn dep_index(&self) -> DepIndex {
        let mut index = DepIndex::new();
        for (name, spec) in &self.deps {
            index.insert(name, spec.triggers.as_str());
        }
        index
    }

    /// All declared components in activation order: `parts` first, then
    /// `mount`, each in declaration order. Yields `(flag, name, mountable)`.
    pub fn declarations(&self) -> impl Iterator<Item = (&str, &str, bool)> {
        let parts = self
            .parts
            .iter()
            .map(|(flag, name)| (flag.as_str(), name.as_str(), false));
        let mount = self
            .mount
            .iter()
            .map(|(flag, name)| (flag.as_str(), name.as_str(), true));
        parts.chain(mount)
    }

    /// Validate the declared component table.
    ///
    /// Every flag must be a single character, and flag characters and
    /// component names must be unique across `parts` and `mount`. A
    /// dependency entry naming an undeclared component is tolerated with a
    /// warning; its trigger can never fire through resolution.
    pub fn validate(&self) -> Result<()> {
        let mut seen_flags = HashSet::new();
        let mut seen_names = HashSet::new();

        for (flag, name, _) in self.declarations() {
            if flag.chars().count() != 1 {
                return Err(BootinqError::Invalid(format!(
                    "flag {:?} must be a single character (component {:?})",
                    flag, name
                )));
            }
            if !seen_flags.insert(flag) {
                return Err(BootinqError::DuplicateFlag(flag.to_string()));
            }
            if !seen_names.insert(name) {
                return Err(BootinqError::DuplicateComponent(name.to_string()));
            }
        }

        for name in self.deps.keys() {
            if !seen_names.contains(name.as_str()) {
                tracing::warn!("dependency entry for undeclared component: {}", name);
            }
        }

        Ok(())
    }
}
