//! Boot-time component activation
//!
//! Selects, at process start, which optional application components are
//! active, based on a single flag string from the environment and a static
//! configuration describing the available components, their activation
//! characters, and their dependency triggers. Once resolved, the state is
//! frozen and exposed through a small query surface that other code uses
//! to branch on whether named components are on.
//!
//! # Overview
//!
//! - [`selector`]: flag-string parsing (`"sa2"`, `"-f"`, `"^a"`)
//! - [`deps`]: dependency triggers that force components on
//! - [`config`]: the deserialized configuration contract
//! - [`loader`]: locating and parsing the configuration file
//! - [`resolver`]: the frozen activation state and `resolve`
//! - [`component`]: the immutable activated-component value object
//! - [`query`]: `enabled`/`disabled`, `on`/`not_on` and quantifiers
//! - [`switch`]: fluent per-component dispatch
//! - [`global`]: opt-in process-wide handle, resolved exactly once
//! - [`error`]: error taxonomy
//!
//! # Quick start
//!
//! ```
//! use bootinq::{Bootinq, BootinqConfig, Select};
//!
//! let config = BootinqConfig::from_toml(r#"
//!     default = "sa"
//!
//!     [parts]
//!     s = "shared"
//!
//!     [mount]
//!     a = "api"
//! "#).unwrap();
//!
//! let inq = Bootinq::resolve(&config, "sa").unwrap();
//!
//! assert_eq!(inq.flags(), &['s', 'a']);
//! assert!(inq.enabled("shared"));
//! assert!(inq.component("api").unwrap().is_mountable());
//!
//! inq.on(Select::name("api"), || {
//!     // mount the api sub-application
//! }).unwrap();
//!
//! inq.switch()
//!     .case("shared", || { /* shared wiring */ })
//!     .case("api", || { /* api wiring */ });
//! ```
//!
//! # Loading from the environment
//!
//! ```no_run
//! use bootinq::{Bootinq, ConfigLoader};
//!
//! fn main() -> bootinq::Result<()> {
//!     // Path from BOOTINQ_PATH, flag value from the configured env_key.
//!     let config = ConfigLoader::from_env()?.load()?;
//!     let inq = Bootinq::from_env(&config)?;
//!
//!     for component in inq.each_mountable() {
//!         println!("mount {} as {}", component, component.namespace().unwrap_or("?"));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Configuration file
//!
//! ```text
//! env_key = "BOOTINQ"
//! default = ""
//!
//! [parts]
//! s = "shared"
//!
//! [mount]
//! a = "api"
//!
//! [deps.shared]
//! in = "a"
//! ```
//!
//! A flag value of `"a"` then activates `api` and, through the dependency
//! trigger, `shared` as well; `"-a"` activates everything except `api`,
//! and that still includes `shared`, because triggers bypass negation.

pub mod component;
pub mod config;
pub mod deps;
pub mod error;
pub mod global;
pub mod loader;
pub mod query;
pub mod resolver;
pub mod selector;
pub mod switch;

pub use component::Component;
pub use config::{BootinqConfig, DepSpec, DEFAULT_ENV_KEY};
pub use deps::DepIndex;
pub use error::{BootinqError, Result};
pub use global::{instance, setup, setup_with};
pub use loader::{ConfigLoader, PATH_ENV};
pub use query::{Select, WILDCARDS};
pub use resolver::Bootinq;
pub use selector::Selector;
pub use switch::Switch;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Bootinq, BootinqConfig, BootinqError, Component, ConfigLoader, Result, Select, Switch,
    };
}
