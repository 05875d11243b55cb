//! JSON Config Store
//!
//! File-backed store: the settings snapshot is one pretty-printed JSON
//! file, by default under the platform-local data directory. A missing
//! file loads as defaults; a missing parent directory is created on
//! construction.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::SettingsConfig;
use crate::error::{Error, Result};
use crate::store::ConfigStore;

/// File name of the persisted settings snapshot
const SETTINGS_FILE: &str = "settings.json";

/// Default settings path under the platform-local data directory
pub fn default_settings_path(app_name: &str) -> Result<PathBuf> {
    let dir = dirs::data_local_dir().ok_or(Error::NoDataDir)?.join(app_name);

    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    Ok(dir.join(SETTINGS_FILE))
}

/// Config store persisted as a JSON file
pub struct JsonConfigStore {
    path: PathBuf,
    live: SettingsConfig,
}

impl JsonConfigStore {
    /// Open the store at `path`, loading the persisted snapshot if the
    /// file exists and defaults otherwise.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let live = read_snapshot(&path)?;
        Ok(Self { path, live })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn read_snapshot(path: &Path) -> Result<SettingsConfig> {
    if !path.exists() {
        return Ok(SettingsConfig::default());
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

impl ConfigStore for JsonConfigStore {
    fn config(&self) -> &SettingsConfig {
        &self.live
    }

    fn config_mut(&mut self) -> &mut SettingsConfig {
        &mut self.live
    }

    fn persist(&mut self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.live)?;
        fs::write(&self.path, content)?;
        tracing::debug!("Persisted settings to {}", self.path.display());
        Ok(())
    }

    fn reload(&mut self) -> Result<()> {
        self.live = read_snapshot(&self.path)?;
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
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonConfigStore::open(dir.path().join("settings.json")).expect("open");
        assert_eq!(*store.config(), SettingsConfig::default());
    }

    #[test]
    fn persist_then_reopen_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");

        let mut store = JsonConfigStore::open(&path).expect("open");
        store.config_mut().ui.base_style = "Dark".to_string();
        store.config_mut().graphics.res_scale = -1;
        store.persist().expect("persist");

        let reopened = JsonConfigStore::open(&path).expect("reopen");
        assert_eq!(reopened.config().ui.base_style, "Dark");
        assert_eq!(reopened.config().graphics.res_scale, -1);
    }

    #[test]
    fn reload_restores_last_persisted_values() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");

        let mut store = JsonConfigStore::open(&path).expect("open");
        store.config_mut().audio.volume = 0.4;
        store.persist().expect("persist");

        store.config_mut().audio.volume = 0.9;
        store.reload().expect("reload");
        assert_eq!(store.config().audio.volume, 0.4);
    }
}
