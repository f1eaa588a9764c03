//! User configuration persistence.
//!
//! Stores the export host and the item database location as JSON at
//! `~/.local/share/gear-planner/config.json`. Command line flags override
//! whatever is stored here.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::codec::DEFAULT_HOST;

/// Default config file path.
fn default_path() -> PathBuf {
    data_dir().join("config.json")
}

/// Directory for config and the generated item database.
pub fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gear-planner")
}

/// Persisted planner settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    /// Item database used to resolve enchants on import.
    #[serde(default)]
    pub database: Option<PathBuf>,
    /// Path the config was loaded from (not serialized).
    #[serde(skip)]
    path: PathBuf,
}

fn default_host() -> String { DEFAULT_HOST.into() }

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            database: None,
            path: default_path(),
        }
    }
}

impl PlannerConfig {
    /// Load from the default location, falling back to defaults on any error.
    pub fn load() -> Self {
        Self::load_from(&default_path())
    }

    pub fn load_from(path: &Path) -> Self {
        let mut config: Self = match std::fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
            Err(_) => Self::default(),
        };
        config.path = path.to_path_buf();
        config
    }

    /// Item database to use: the configured one, else the generated default
    /// if it exists.
    pub fn database_path(&self) -> Option<PathBuf> {
        self.database
            .clone()
            .or_else(|| Some(data_dir().join("items.json")).filter(|p| p.exists()))
    }

    /// Persist current config to disk.
    pub fn save(&self) {
        if let Some(parent) = self.path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Ok(json) = serde_json::to_string_pretty(self) {
            let _ = std::fs::write(&self.path, json);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = PlannerConfig::load_from(&dir.path().join("config.json"));
        assert_eq!(config.host, "www.wowhead.com");
        assert!(config.database.is_none());
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "database": "/tmp/items.json" }"#).unwrap();

        let config = PlannerConfig::load_from(&path);
        assert_eq!(config.host, "www.wowhead.com");
        assert_eq!(config.database_path(), Some(PathBuf::from("/tmp/items.json")));
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.json");
        let mut config = PlannerConfig::load_from(&path);
        config.host = "tbc.wowhead.com".into();
        config.save();

        let loaded = PlannerConfig::load_from(&path);
        assert_eq!(loaded.host, "tbc.wowhead.com");
    }

    #[test]
    fn test_garbage_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();
        assert_eq!(PlannerConfig::load_from(&path).host, "www.wowhead.com");
    }
}
