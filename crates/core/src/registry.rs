use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::config::StampConfig;

static GLOBAL: LazyLock<Arc<StampRegistry>> = LazyLock::new(|| Arc::new(StampRegistry::new()));

/// Shared holder of the active [`StampConfig`].
///
/// Writers swap in a fresh `Arc` under an exclusive lock; readers clone the
/// current `Arc` and work from that snapshot. A stamper takes one snapshot
/// per invocation, so a setter called mid-run only affects invocations that
/// start after it returns.
#[derive(Debug, Default)]
pub struct StampRegistry {
    config: RwLock<Arc<StampConfig>>,
}

impl StampRegistry {
    /// Create a registry holding the default names.
    pub fn new() -> Self {
        Self::with_config(StampConfig::default())
    }

    /// Create a registry holding the given names.
    pub fn with_config(config: StampConfig) -> Self {
        Self {
            config: RwLock::new(Arc::new(config)),
        }
    }

    /// The process-wide registry.
    ///
    /// Prefer passing an explicit registry to the stamper; this exists so
    /// applications that configure once at startup need not thread one through.
    pub fn global() -> Arc<Self> {
        Arc::clone(&GLOBAL)
    }

    /// The configuration as of now.
    pub fn snapshot(&self) -> Arc<StampConfig> {
        Arc::clone(&self.config.read())
    }

    /// Current creator field name.
    pub fn creator_field(&self) -> String {
        self.config.read().creator_field.clone()
    }

    /// Current updater field name.
    pub fn updater_field(&self) -> String {
        self.config.read().updater_field.clone()
    }

    /// Current actor accessor name.
    pub fn actor_accessor(&self) -> String {
        self.config.read().actor_accessor.clone()
    }

    /// Overwrite the creator field name.
    pub fn set_creator_field(&self, name: impl Into<String>) {
        let name = name.into();
        self.update(|config| config.creator_field = name);
    }

    /// Overwrite the updater field name.
    pub fn set_updater_field(&self, name: impl Into<String>) {
        let name = name.into();
        self.update(|config| config.updater_field = name);
    }

    /// Overwrite the actor accessor name.
    pub fn set_actor_accessor(&self, name: impl Into<String>) {
        let name = name.into();
        self.update(|config| config.actor_accessor = name);
    }

    /// Apply every setting from `config` in one write.
    ///
    /// Empty names are logged but still applied.
    pub fn configure(&self, config: &StampConfig) {
        for problem in config.validate() {
            warn!(%problem, "userstamp configuration will never stamp");
        }
        self.replace(config.clone());
    }

    /// Replace the whole configuration at once.
    pub fn replace(&self, config: StampConfig) {
        debug!(?config, "userstamp configuration replaced");
        *self.config.write() = Arc::new(config);
    }

    /// Restore the default names.
    pub fn reset(&self) {
        self.replace(StampConfig::default());
    }

    fn update(&self, apply: impl FnOnce(&mut StampConfig)) {
        let mut guard = self.config.write();
        let mut next = StampConfig::clone(&guard);
        apply(&mut next);
        debug!(config = ?next, "userstamp configuration updated");
        *guard = Arc::new(next);
    }
}
