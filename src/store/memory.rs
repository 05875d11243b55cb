//! In-Memory Config Store
//!
//! Keeps the "persisted" side in memory. Used by tests and by hosts that
//! manage durability themselves.

use crate::domain::SettingsConfig;
use crate::error::Result;
use crate::store::ConfigStore;

/// Config store whose durable side is a second in-memory snapshot
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigStore {
    live: SettingsConfig,
    persisted: SettingsConfig,
}

impl MemoryConfigStore {
    /// Create a store with the given starting values on both sides
    pub fn new(config: SettingsConfig) -> Self {
        Self {
            live: config.clone(),
            persisted: config,
        }
    }

    /// The last persisted snapshot (test observability)
    pub fn persisted(&self) -> &SettingsConfig {
        &self.persisted
    }
}

impl ConfigStore for MemoryConfigStore {
    fn config(&self) -> &SettingsConfig {
        &self.live
    }

    fn config_mut(&mut self) -> &mut SettingsConfig {
        &mut self.live
    }

    fn persist(&mut self) -> Result<()> {
        self.persisted = self.live.clone();
        Ok(())
    }

    fn reload(&mut self) -> Result<()> {
        self.live = self.persisted.clone();
        Ok(())
    }

    fn reset_to_defaults(&mut self) {
        self.live = SettingsConfig::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutations_stay_live_until_persist() {
        let mut store = MemoryConfigStore::default();
        store.config_mut().audio.volume = 0.25;

        assert_eq!(store.persisted().audio.volume, 1.0);
        store.persist().expect("persist");
        assert_eq!(store.persisted().audio.volume, 0.25);
    }

    #[test]
    fn reload_discards_unpersisted_mutations() {
        let mut store = MemoryConfigStore::default();
        store.config_mut().ui.show_confirm_exit = false;
        store.reload().expect("reload");
        assert!(store.config().ui.show_confirm_exit);
    }

    #[test]
    fn reset_to_defaults_is_not_persisted() {
        let mut config = SettingsConfig::default();
        config.system.expand_ram = true;
        let mut store = MemoryConfigStore::new(config.clone());

        store.reset_to_defaults();
        assert!(!store.config().system.expand_ram);
        assert!(store.persisted().system.expand_ram);
    }
}
