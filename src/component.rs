//! Component value objects
//!
//! A [`Component`] is one optional named unit of functionality that the
//! resolver switched on. It carries:
//! - the canonical component name
//! - the derived group identifier handed to the group-loading collaborator
//! - whether the component is mountable, and if so its derived namespace

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Suffix appended to a component name to form its group identifier.
const GROUP_SUFFIX: &str = "_boot";

/// An activated component.
///
/// Constructed once during resolution and never mutated afterwards.
/// Equality and hashing are defined by `name` alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Component {
    name: String,
    group: String,
    mountable: bool,
    namespace: Option<String>,
}

impl Component {
    /// Create a plain (non-mountable) component.
    pub fn part(name: impl Into<String>) -> Self {
        let name = name.into();
        let group = format!("{}{}", name, GROUP_SUFFIX);
        Self {
            name,
            group,
            mountable: false,
            namespace: None,
        }
    }

    /// Create a mountable component with a derived namespace.
    pub fn mountable(name: impl Into<String>) -> Self {
        let name = name.into();
        let group = format!("{}{}", name, GROUP_SUFFIX);
        let namespace = Some(camelize(&name));
        Self {
            name,
            group,
            mountable: true,
            namespace,
        }
    }

    /// The canonical component name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The derived group identifier (`<name>_boot`).
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Whether the component exposes a namespace for host-framework mounting.
    pub fn is_mountable(&self) -> bool {
        self.mountable
    }

    /// The derived namespace, present only on mountable components.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Check the component against a name in string form.
    pub fn matches(&self, name: &str) -> bool {
        self.name == name
    }
}

impl PartialEq for Component {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Component {}

impl Hash for Component {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialEq<str> for Component {
    fn eq(&self, other: &str) -> bool {
        self.name == other
    }
}

impl PartialEq<&str> for Component {
    fn eq(&self, other: &&str) -> bool {
        self.name == *other
    }
}

impl PartialEq<String> for Component {
    fn eq(&self, other: &String) -> bool {
        self.name == *other
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Convert an underscored name to a CamelCase namespace ("api_part" -> "ApiPart").
fn camelize(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}
