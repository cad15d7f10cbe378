//! Fluent per-component dispatch
//!
//! [`Switch`] routes one call per component name to an action that runs
//! only when that name is enabled. Lookup is by string key; an unknown
//! name is a silent no-op rather than an error, trading static checking
//! for terse call sites.

use crate::Bootinq;

/// Dispatcher over a resolved activation state.
///
/// # Example
///
/// ```
/// use bootinq::{Bootinq, BootinqConfig};
///
/// let config = BootinqConfig::from_toml(r#"
///     [parts]
///     s = "shared"
/// "#).unwrap();
/// let inq = Bootinq::resolve(&config, "s").unwrap();
///
/// inq.switch()
///     .case("shared", || println!("shared is on"))
///     .case("missing", || unreachable!());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Switch<'a> {
    inq: &'a Bootinq,
}

impl<'a> Switch<'a> {
    pub(crate) fn new(inq: &'a Bootinq) -> Self {
        Self { inq }
    }

    /// Run `action` iff `name` is enabled; otherwise do nothing.
    ///
    /// Unknown names never error.
    pub fn case(self, name: &str, action: impl FnOnce()) -> Self {
        if self.inq.enabled(name) {
            action();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::{Bootinq, BootinqConfig};

    fn resolved() -> Bootinq {
        let config = BootinqConfig::from_toml(
            r#"
            [parts]
            s = "shared"

            [mount]
            a = "api"
            f = "frontend"
            "#,
        )
        .unwrap();
        Bootinq::resolve(&config, "sa").unwrap()
    }

    #[test]
    fn test_case_fires_for_enabled() {
        let inq = resolved();
        let mut fired = Vec::new();
        inq.switch()
            .case("shared", || fired.push("shared"))
            .case("api", || fired.push("api"));
        assert_eq!(fired, vec!["shared", "api"]);
    }

    #[test]
    fn test_case_skips_disabled() {
        let inq = resolved();
        let mut fired = false;
        inq.switch().case("frontend", || fired = true);
        assert!(!fired);
    }

    #[test]
    fn test_unknown_name_is_silent() {
        let inq = resolved();
        let mut fired = false;
        inq.switch().case("something_else", || fired = true);
        assert!(!fired);
    }
}
