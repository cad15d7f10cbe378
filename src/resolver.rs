//! Activation resolution
//!
//! Consumes a [`BootinqConfig`] plus the raw flag value and produces the
//! frozen activation state: the ordered list of activated components and
//! the flag characters that activated them. A component is activated when
//! it is either picked by the selector or forced by a dependency trigger.
//!
//! Resolution happens once; the returned [`Bootinq`] exposes no mutators.
//! Re-resolving (e.g. in tests) means constructing a fresh value.

use crate::{BootinqConfig, Component, DepIndex, Result, Selector};

/// The frozen activation state.
///
/// Holds the parsed selector, the dependency index, and the parallel
/// `flags` / `components` lists in configuration declaration order
/// (`parts` before `mount`). It is the single source of truth for every
/// downstream query.
#[derive(Debug, Clone)]
pub struct Bootinq {
    selector: Selector,
    deps: DepIndex,
    flags: Vec<char>,
    components: Vec<Component>,
}

impl Bootinq {
    /// Resolve against the flag value taken from the environment
    /// (or the configured default when the variable is absent).
    pub fn from_env(config: &BootinqConfig) -> Result<Self> {
        let value = config.flag_value();
        Self::resolve(config, &value)
    }

    /// Resolve against an explicit raw flag value.
    ///
    /// The configuration is validated first; resolution itself cannot fail
    /// once the inputs are well-formed.
    pub fn resolve(config: &BootinqConfig, raw_value: &str) -> Result<Self> {
        config.validate()?;

        let selector = Selector::parse(raw_value);
        let deps = config.dep_index();
        let mut flags = Vec::new();
        let mut components = Vec::new();

        for (flag, name, mountable) in config.declarations() {
            let Some(ch) = flag.chars().next() else {
                continue;
            };
            let forced = deps.forces(name, selector.raw());
            if forced || selector.selects(ch) {
                flags.push(ch);
                components.push(if mountable {
                    Component::mountable(name)
                } else {
                    Component::part(name)
                });
            }
        }

        tracing::debug!(
            value = raw_value,
            components = ?components.iter().map(Component::name).collect::<Vec<_>>(),
            "resolved activation set"
        );

        Ok(Self {
            selector,
            deps,
            flags,
            components,
        })
    }

    /// The original flag value, marker included.
    pub fn raw_value(&self) -> &str {
        self.selector.raw()
    }

    /// Whether the flag value was a negative selector.
    pub fn is_negated(&self) -> bool {
        self.selector.is_negated()
    }

    /// The parsed selector.
    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Flag characters that activated a component, in activation order.
    pub fn flags(&self) -> &[char] {
        &self.flags
    }

    /// Activated components, in activation order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Look up an activated component by name.
    pub fn component(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.matches(name))
    }

    /// Iterate over the activated mountable components.
    pub fn each_mountable(&self) -> impl Iterator<Item = &Component> {
        self.components.iter().filter(|c| c.is_mountable())
    }

    /// Group identifiers for the group-loading collaborator: one derived
    /// group per activated component, followed by the caller's extras.
    pub fn groups<I, S>(&self, extra: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.components
            .iter()
            .map(|c| c.group().to_string())
            .chain(extra.into_iter().map(Into::into))
            .collect()
    }

    /// Whether the named component is forced on by a dependency trigger.
    pub fn is_dependency(&self, name: &str) -> bool {
        self.deps.forces(name, self.selector.raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BootinqConfig;

    fn config(toml: &str) -> BootinqConfig {
        BootinqConfig::from_toml(toml).unwrap()
    }

    fn basic() -> BootinqConfig {
        config(
            r#"
            [parts]
            s = "shared"

            [mount]
            a = "api"
            "#,
        )
    }

    #[test]
    fn test_resolves_selected_components() {
        let inq = Bootinq::resolve(&basic(), "sa").unwrap();
        assert_eq!(inq.flags(), &['s', 'a']);
        let names: Vec<&str> = inq.components().iter().map(Component::name).collect();
        assert_eq!(names, vec!["shared", "api"]);
        assert!(inq.component("api").is_some_and(Component::is_mountable));
        assert!(!inq.component("shared").is_some_and(Component::is_mountable));
    }

    #[test]
    fn test_negated_value_excludes_flagged() {
        let inq = Bootinq::resolve(&basic(), "-a").unwrap();
        assert_eq!(inq.flags(), &['s']);
        let names: Vec<&str> = inq.components().iter().map(Component::name).collect();
        assert_eq!(names, vec!["shared"]);
        assert!(inq.is_negated());
    }

    #[test]
    fn test_dependency_floor_bypasses_negation() {
        let cfg = config(
            r#"
            [parts]
            A = "api_part"

            [mount]
            a = "api"

            [deps.api_part]
            in = "a"
            "#,
        );
        let inq = Bootinq::resolve(&cfg, "-a").unwrap();
        let names: Vec<&str> = inq.components().iter().map(Component::name).collect();
        assert_eq!(names, vec!["api_part"]);
        assert_eq!(inq.flags(), &['A']);
        assert!(inq.is_dependency("api_part"));
        assert!(!inq.is_dependency("api"));
    }

    #[test]
    fn test_flags_and_components_stay_parallel() {
        for value in ["", "sa", "-a", "-", "zzz", "^s"] {
            let inq = Bootinq::resolve(&basic(), value).unwrap();
            assert_eq!(inq.flags().len(), inq.components().len(), "value {:?}", value);
        }
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let cfg = basic();
        let first = Bootinq::resolve(&cfg, "sa").unwrap();
        let second = Bootinq::resolve(&cfg, "sa").unwrap();
        assert_eq!(first.flags(), second.flags());
        assert_eq!(first.components(), second.components());
        let mountable: Vec<bool> = first.components().iter().map(Component::is_mountable).collect();
        let mountable_again: Vec<bool> =
            second.components().iter().map(Component::is_mountable).collect();
        assert_eq!(mountable, mountable_again);
    }

    #[test]
    fn test_empty_value_activates_nothing() {
        let inq = Bootinq::resolve(&basic(), "").unwrap();
        assert!(inq.components().is_empty());
        assert!(inq.flags().is_empty());
    }

    #[test]
    fn test_bare_marker_activates_everything() {
        let inq = Bootinq::resolve(&basic(), "-").unwrap();
        assert_eq!(inq.components().len(), 2);
    }

    #[test]
    fn test_unknown_flag_characters_are_ignored() {
        let inq = Bootinq::resolve(&basic(), "sxyz").unwrap();
        assert_eq!(inq.flags(), &['s']);
    }

    #[test]
    fn test_groups() {
        let inq = Bootinq::resolve(&basic(), "sa").unwrap();
        assert_eq!(
            inq.groups(["assets"]),
            vec!["shared_boot".to_string(), "api_boot".to_string(), "assets".to_string()]
        );
        let no_extra: [&str; 0] = [];
        assert_eq!(inq.groups(no_extra).len(), 2);
    }

    #[test]
    fn test_each_mountable() {
        let inq = Bootinq::resolve(&basic(), "sa").unwrap();
        let mountable: Vec<&str> = inq.each_mountable().map(Component::name).collect();
        assert_eq!(mountable, vec!["api"]);
    }

    #[test]
    fn test_invalid_config_fails_resolution() {
        let mut cfg = BootinqConfig::default();
        cfg.parts.insert("s".to_string(), "shared".to_string());
        cfg.mount.insert("s".to_string(), "api".to_string());
        assert!(Bootinq::resolve(&cfg, "s").is_err());
    }
}
