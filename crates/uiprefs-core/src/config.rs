//! Preferences configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::Result;

/// Slots in the main tab bar, including the overflow entry when one is shown
pub const DEFAULT_VISIBLE_TAB_SLOTS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the defaults database
    pub database_path: PathBuf,
    /// Tab bar slots before tabs spill into the overflow container
    pub visible_tab_slots: usize,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            database_path: data_dir.join("defaults.db"),
            visible_tab_slots: DEFAULT_VISIBLE_TAB_SLOTS,
        }
    }

    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join("uiprefs"))
            .unwrap_or_else(|| PathBuf::from(".uiprefs"))
    }

    /// Read a JSON config file; missing fields take their defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.visible_tab_slots == 0 {
            return Err(CoreError::Config(
                "visible_tab_slots must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}

mod dirs {
    use std::path::PathBuf;

    pub fn data_local_dir() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("LOCALAPPDATA").ok().map(PathBuf::from)
        }
        #[cfg(target_os = "macos")]
        {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join("Library/Application Support"))
        }
        #[cfg(target_os = "linux")]
        {
            std::env::var("XDG_DATA_HOME")
                .ok()
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var("HOME")
                        .ok()
                        .map(|h| PathBuf::from(h).join(".local/share"))
                })
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_config() {
        let config = Config::new(PathBuf::from("/tmp/prefs"));
        assert_eq!(config.database_path, PathBuf::from("/tmp/prefs/defaults.db"));
        assert_eq!(config.visible_tab_slots, DEFAULT_VISIBLE_TAB_SLOTS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "database_path": "/var/prefs.db", "visible_tab_slots": 4 }"#)
            .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.database_path, PathBuf::from("/var/prefs.db"));
        assert_eq!(config.visible_tab_slots, 4);

        std::fs::write(&path, r#"{ "visible_tab_slots": 0 }"#).unwrap();
        assert!(matches!(
            Config::from_file(&path),
            Err(CoreError::Config(_))
        ));

        std::fs::write(&path, "{").unwrap();
        assert!(matches!(
            Config::from_file(&path),
            Err(CoreError::Serialization(_))
        ));
    }
}
