use crate::error::{Result, RosterError};
use crate::store::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_KEY: &str = "config";
const CONFIG_FILENAME: &str = "config.json";

/// Configuration for roster, stored in `<data_dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterConfig {
    /// Storage key the student array is saved under (file `<key>.json`)
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Ask before deleting a student
    #[serde(default = "default_confirm_delete")]
    pub confirm_delete: bool,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_confirm_delete() -> bool {
    true
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            confirm_delete: default_confirm_delete(),
        }
    }
}

impl RosterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RosterError::Io)?;
        let config: RosterConfig =
            serde_json::from_str(&content).map_err(RosterError::Serialization)?;
        check_storage_key(&config.storage_key)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RosterError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RosterError::Serialization)?;
        fs::write(config_path, content).map_err(RosterError::Io)?;
        Ok(())
    }

    /// Set the storage key. Keys become file names next to `config.json`, so only
    /// ASCII letters, digits, `_` and `-` are accepted and `config` is reserved.
    pub fn set_storage_key(&mut self, key: &str) -> Result<()> {
        let key = key.trim();
        check_storage_key(key)?;
        self.storage_key = key.to_string();
        Ok(())
    }

    pub fn set_confirm_delete(&mut self, value: &str) -> Result<()> {
        self.confirm_delete = match value.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => true,
            "false" | "no" | "off" | "0" => false,
            other => {
                return Err(RosterError::Config(format!(
                    "Invalid value for confirm-delete: '{}' (expected true or false)",
                    other
                )))
            }
        };
        Ok(())
    }
}

fn check_storage_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if !valid {
        return Err(RosterError::Config(format!(
            "Invalid storage key '{}': use letters, digits, '_' or '-'",
            key
        )));
    }
    // Case-insensitive filesystems would still map `Config` onto config.json.
    if key.eq_ignore_ascii_case(CONFIG_KEY) {
        return Err(RosterError::Config(format!(
            "Storage key '{}' is reserved for roster's own settings",
            key
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = RosterConfig::default();
        assert_eq!(config.storage_key, "students");
        assert!(config.confirm_delete);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = RosterConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, RosterConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested");

        let mut config = RosterConfig::default();
        config.set_storage_key("class_b").unwrap();
        config.set_confirm_delete("no").unwrap();
        config.save(&nested).unwrap();

        let loaded = RosterConfig::load(&nested).unwrap();
        assert_eq!(loaded.storage_key, "class_b");
        assert!(!loaded.confirm_delete);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"confirm_delete": false}"#,
        )
        .unwrap();
        let loaded = RosterConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.storage_key, "students");
        assert!(!loaded.confirm_delete);
    }

    #[test]
    fn test_rejects_bad_storage_keys() {
        let mut config = RosterConfig::default();
        assert!(config.set_storage_key("").is_err());
        assert!(config.set_storage_key("../etc").is_err());
        assert!(config.set_storage_key("a b").is_err());
        assert_eq!(config.storage_key, "students");
    }

    #[test]
    fn test_rejects_config_file_as_storage_key() {
        let mut config = RosterConfig::default();
        let err = config.set_storage_key("config").unwrap_err();
        assert!(matches!(err, RosterError::Config(_)));
        assert!(config.set_storage_key("CONFIG").is_err());
        assert_eq!(config.storage_key, "students");
        assert!(config.set_storage_key("configs").is_ok());
    }

    #[test]
    fn test_load_rejects_reserved_storage_key() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"storage_key": "config"}"#,
        )
        .unwrap();
        assert!(matches!(
            RosterConfig::load(temp_dir.path()),
            Err(RosterError::Config(_))
        ));
    }

    #[test]
    fn test_rejects_bad_booleans() {
        let mut config = RosterConfig::default();
        assert!(config.set_confirm_delete("maybe").is_err());
        assert!(config.confirm_delete);
    }
}
