use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Front-end configuration loaded from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TuiConfig {
    /// Path to the shared store file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,

    /// Poll cadence in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poll_interval_ms: Option<u64>,

    /// Identity to log in with on startup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<Identity>,
}

/// Stored login identity. Saving one claims nothing about authenticity;
/// whoever knows the number can use it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Display name
    pub name: String,

    /// 10-digit number; validated at login, not here
    pub number: String,
}

impl TuiConfig {
    /// Default config location under the platform config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sheetchat").join("config.json"))
    }

    /// Load config from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: TuiConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Load an explicitly given config file, or the default one if it
    /// exists, or fall back to defaults.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_with_store_path() {
        let json = r#"{"storePath": "/tmp/test/chat.db"}"#;
        let config: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.store_path, Some(PathBuf::from("/tmp/test/chat.db")));
        assert!(config.identity.is_none());
    }

    #[test]
    fn test_parse_config_with_identity() {
        let json = r#"{
            "storePath": "/tmp/chat.db",
            "pollIntervalMs": 500,
            "identity": {
                "name": "Alice",
                "number": "1234567890"
            }
        }"#;
        let config: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.poll_interval_ms, Some(500));
        let identity = config.identity.unwrap();
        assert_eq!(identity.name, "Alice");
        assert_eq!(identity.number, "1234567890");
    }

    #[test]
    fn test_parse_config_minimal() {
        let json = r#"{}"#;
        let config: TuiConfig = serde_json::from_str(json).unwrap();
        assert!(config.store_path.is_none());
        assert!(config.poll_interval_ms.is_none());
        assert!(config.identity.is_none());
    }

    #[test]
    fn test_load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let err = TuiConfig::load(&missing).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = TuiConfig {
            store_path: Some(PathBuf::from("/tmp/chat.db")),
            poll_interval_ms: Some(2000),
            identity: Some(Identity {
                name: "Alice".to_string(),
                number: "1234567890".to_string(),
            }),
        };
        std::fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();

        let loaded = TuiConfig::load(&path).unwrap();
        assert_eq!(loaded.store_path, config.store_path);
        assert_eq!(loaded.poll_interval_ms, config.poll_interval_ms);
        assert_eq!(loaded.identity.unwrap().name, "Alice");
    }
}
