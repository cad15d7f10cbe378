//! Process-wide activation handle
//!
//! Most callers resolve once at startup and pass the [`Bootinq`] value
//! around explicitly. For hosts that need a single process-wide handle,
//! this module publishes one through a serialized one-time slot: racing
//! first touches take an initialization lock, so resolution (and the
//! config file read in [`setup`]) runs exactly once no matter how many
//! threads arrive. Every later read is lock-free against the
//! already-published immutable state.

use crate::{Bootinq, BootinqConfig, ConfigLoader, Result};
use std::sync::{Mutex, OnceLock};

/// One-time initialization slot.
///
/// The lock serializes the fallible resolve closure; the cell publishes
/// the result for lock-free reads. A failed initialization leaves the
/// slot empty, so a later call may retry.
struct Slot {
    cell: OnceLock<Bootinq>,
    init: Mutex<()>,
}

impl Slot {
    const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
            init: Mutex::new(()),
        }
    }

    fn get_or_try_init(&self, resolve: impl FnOnce() -> Result<Bootinq>) -> Result<&Bootinq> {
        if let Some(existing) = self.cell.get() {
            return Ok(existing);
        }
        let _guard = self.init.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(existing) = self.cell.get() {
            return Ok(existing);
        }
        let resolved = resolve()?;
        Ok(self.cell.get_or_init(|| resolved))
    }
}

static INSTANCE: Slot = Slot::new();

/// Resolve from the configuration file named by `BOOTINQ_PATH` and
/// publish the result. Subsequent calls return the already-published
/// handle without touching the filesystem again.
pub fn setup() -> Result<&'static Bootinq> {
    INSTANCE.get_or_try_init(|| {
        let config = ConfigLoader::from_env()?.load()?;
        resolve_logged(&config)
    })
}

/// Resolve the given configuration against the environment flag value and
/// publish the result. A no-op returning the existing handle if setup has
/// already run.
pub fn setup_with(config: &BootinqConfig) -> Result<&'static Bootinq> {
    INSTANCE.get_or_try_init(|| resolve_logged(config))
}

/// The published handle, if setup has run.
pub fn instance() -> Option<&'static Bootinq> {
    INSTANCE.cell.get()
}

fn resolve_logged(config: &BootinqConfig) -> Result<Bootinq> {
    let resolved = Bootinq::from_env(config)?;
    tracing::info!(
        components = ?resolved.components().iter().map(|c| c.name()).collect::<Vec<_>>(),
        "loading components"
    );
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BootinqError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Barrier;

    fn config() -> BootinqConfig {
        let mut config = BootinqConfig::default();
        config.env_key = "BOOTINQ_GLOBAL_TEST".to_string();
        config.default = "s".to_string();
        config.parts.insert("s".to_string(), "shared".to_string());
        config
    }

    #[test]
    fn test_setup_publishes_once() {
        let config = config();
        let first = setup_with(&config).unwrap();
        assert!(first.enabled("shared"));
        assert!(instance().is_some());

        // A second setup with a different config returns the original handle.
        let mut other = config.clone();
        other.default = "".to_string();
        let second = setup_with(&other).unwrap();
        assert!(second.enabled("shared"));
    }

    #[test]
    fn test_concurrent_first_touch_resolves_once() {
        let slot = Slot::new();
        let resolutions = AtomicUsize::new(0);
        let barrier = Barrier::new(4);
        let config = config();

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    barrier.wait();
                    let inq = slot
                        .get_or_try_init(|| {
                            resolutions.fetch_add(1, Ordering::SeqCst);
                            Bootinq::resolve(&config, "s")
                        })
                        .unwrap();
                    assert!(inq.enabled("shared"));
                });
            }
        });

        assert_eq!(resolutions.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failed_init_leaves_slot_empty_for_retry() {
        let slot = Slot::new();

        let failed = slot.get_or_try_init(|| {
            Err(BootinqError::Invalid("broken".to_string()))
        });
        assert!(failed.is_err());

        let inq = slot
            .get_or_try_init(|| Bootinq::resolve(&config(), "s"))
            .unwrap();
        assert!(inq.enabled("shared"));
    }
}
