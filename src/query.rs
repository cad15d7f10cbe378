//! Conditional-dispatch query surface
//!
//! Read-only predicates and combinators over the frozen activation state:
//! - `enabled` / `disabled` membership tests
//! - `on` / `not_on` with a one-of-{name, any, all} [`Select`] argument
//! - `on_all` / `on_any` / `not_all` / `not_any` quantifiers
//! - the `"all"` / `"*"` wildcard sentinels
//!
//! Every operation evaluates against the immutable resolved set; there is
//! no cross-call state.

use crate::{Bootinq, BootinqError, Result, Switch};

/// Names that match `enabled` unconditionally.
pub const WILDCARDS: [&str; 2] = ["all", "*"];

fn is_wildcard(name: &str) -> bool {
    WILDCARDS.contains(&name)
}

/// One-of-{name, any, all} argument for [`Bootinq::on`] and
/// [`Bootinq::not_on`].
///
/// Exactly one field must be set; supplying none or more than one is a
/// usage error reported by the call.
#[derive(Debug, Clone, Copy, Default)]
pub struct Select<'a> {
    /// Match a single component name.
    pub name: Option<&'a str>,
    /// Match when at least one of the names matches.
    pub any: Option<&'a [&'a str]>,
    /// Match when every name matches.
    pub all: Option<&'a [&'a str]>,
}

impl<'a> Select<'a> {
    /// Select a single component by name.
    pub fn name(name: &'a str) -> Self {
        Self {
            name: Some(name),
            ..Self::default()
        }
    }

    /// Select when any of the names matches.
    pub fn any(names: &'a [&'a str]) -> Self {
        Self {
            any: Some(names),
            ..Self::default()
        }
    }

    /// Select when all of the names match.
    pub fn all(names: &'a [&'a str]) -> Self {
        Self {
            all: Some(names),
            ..Self::default()
        }
    }

    fn evaluate(&self, pred: impl Fn(&str) -> bool) -> Result<bool> {
        match (self.name, self.any, self.all) {
            (Some(name), None, None) => Ok(pred(name)),
            (None, Some(names), None) => Ok(names.iter().any(|name| pred(name))),
            (None, None, Some(names)) => Ok(names.iter().all(|name| pred(name))),
            (None, None, None) => Err(BootinqError::Selection(
                "expected one of `name`, `any` or `all`, given none".to_string(),
            )),
            _ => Err(BootinqError::Selection(
                "expected exactly one of `name`, `any` or `all`".to_string(),
            )),
        }
    }
}

impl Bootinq {
    /// Whether the named component is enabled.
    ///
    /// The wildcard sentinels `"all"` and `"*"` are always enabled.
    pub fn enabled(&self, name: &str) -> bool {
        is_wildcard(name) || self.components().iter().any(|c| c.matches(name))
    }

    /// Whether the named component is disabled.
    ///
    /// The pure complement of the membership test; there is no wildcard
    /// case here.
    pub fn disabled(&self, name: &str) -> bool {
        !self.components().iter().any(|c| c.matches(name))
    }

    /// Run `action` if the selection is enabled.
    ///
    /// Returns whether the match succeeded; `action` runs only on success.
    /// A [`Select`] with zero or more than one field set is a usage error.
    pub fn on(&self, select: Select<'_>, action: impl FnOnce()) -> Result<bool> {
        let matched = select.evaluate(|name| self.enabled(name))?;
        if matched {
            action();
        }
        Ok(matched)
    }

    /// Run `action` if the selection is disabled. Mirror of [`Bootinq::on`].
    pub fn not_on(&self, select: Select<'_>, action: impl FnOnce()) -> Result<bool> {
        let matched = select.evaluate(|name| self.disabled(name))?;
        if matched {
            action();
        }
        Ok(matched)
    }

    /// Whether every named component is enabled.
    ///
    /// Vacuously true for an empty list.
    pub fn on_all(&self, names: &[&str]) -> bool {
        names.iter().all(|name| self.enabled(name))
    }

    /// Whether at least one named component is enabled.
    ///
    /// Vacuously false for an empty list.
    pub fn on_any(&self, names: &[&str]) -> bool {
        names.iter().any(|name| self.enabled(name))
    }

    /// Whether every named component is disabled.
    pub fn not_all(&self, names: &[&str]) -> bool {
        names.iter().all(|name| self.disabled(name))
    }

    /// Whether at least one named component is disabled.
    pub fn not_any(&self, names: &[&str]) -> bool {
        names.iter().any(|name| self.disabled(name))
    }

    /// A fluent per-component dispatcher over this activation state.
    pub fn switch(&self) -> Switch<'_> {
        Switch::new(self)
    }
}
