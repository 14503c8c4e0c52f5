use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    core::utils::{self, ensure_dir},
    errors::{ProgressionError, Result},
};

/// User-tunable settings for the CLI and the host composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    /// Freezes granted to a streak the first time it is tracked.
    #[serde(default = "Config::default_starting_freezes")]
    pub starting_freezes: u32,
    /// Seed for the weekly challenge draw. Unset means a fresh random draw.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge_seed: Option<u64>,
    /// Directory holding the progression state. Defaults to the app data dir.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "pt-BR".into(),
            currency: "BRL".into(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            starting_freezes: Self::default_starting_freezes(),
            challenge_seed: None,
            state_root: None,
        }
    }
}

impl Config {
    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn default_starting_freezes() -> u32 {
        1
    }

    /// State file under `state_root` when set, otherwise under `base`.
    pub fn resolve_state_file(&self, base: &Path) -> PathBuf {
        let root = self.state_root.as_deref().unwrap_or(base);
        utils::state_file_in(root)
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(utils::app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        Ok(Self {
            path: utils::config_file_in(&base),
        })
    }

    /// Reads the config file, or returns defaults when none exists yet.
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        serde_json::from_str(&data).map_err(|err| {
            ProgressionError::Config(format!("{}: {err}", self.path.display()))
        })
    }

    /// Writes `config` through a temporary sibling so a failed write never
    /// leaves a truncated file behind.
    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = utils::tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        assert_eq!(manager.load().unwrap(), Config::default());
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let config = Config {
            starting_freezes: 3,
            challenge_seed: Some(42),
            ui_color_enabled: false,
            ..Config::default()
        };
        manager.save(&config).unwrap();
        assert_eq!(manager.load().unwrap(), config);
        assert!(!utils::tmp_path(manager.path()).exists());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        fs::write(manager.path(), r#"{"locale":"en-US","currency":"USD"}"#).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config.starting_freezes, 1);
        assert!(config.ui_color_enabled);
        assert_eq!(config.currency, "USD");
    }

    #[test]
    fn state_root_overrides_base() {
        let base = Path::new("/base");
        assert_eq!(
            Config::default().resolve_state_file(base),
            PathBuf::from("/base/state.json")
        );
        let custom = Config {
            state_root: Some(PathBuf::from("/elsewhere")),
            ..Config::default()
        };
        assert_eq!(
            custom.resolve_state_file(base),
            PathBuf::from("/elsewhere/state.json")
        );
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        fs::write(manager.path(), "{not json").unwrap();
        assert!(matches!(manager.load(), Err(ProgressionError::Config(_))));
    }
}
