//! Dependency trigger index
//!
//! Maps component names to the flag characters that force them on. A
//! forced component is an activation floor: the trigger check runs against
//! the raw, pre-negation flag value and bypasses the selector entirely, so
//! a negative selector can never exclude a triggered dependency.

use indexmap::IndexMap;

/// Index of dependency triggers by component name.
#[derive(Debug, Clone, Default)]
pub struct DepIndex {
    triggers: IndexMap<String, String>,
}

impl DepIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register trigger characters for a component.
    pub fn insert(&mut self, name: impl Into<String>, triggers: impl Into<String>) {
        self.triggers.insert(name.into(), triggers.into());
    }

    /// The trigger characters registered for a component, if any.
    pub fn triggers(&self, name: &str) -> Option<&str> {
        self.triggers.get(name).map(String::as_str)
    }

    /// Whether the raw flag value forces the named component on.
    ///
    /// True iff any registered trigger character appears anywhere in
    /// `raw_value`. The value is checked as given, negation marker and all.
    pub fn forces(&self, name: &str, raw_value: &str) -> bool {
        match self.triggers.get(name) {
            Some(triggers) => triggers.chars().any(|ch| raw_value.contains(ch)),
            None => false,
        }
    }
}
