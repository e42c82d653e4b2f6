use crate::error::{Result, TodoError};
use crate::persistence::DEFAULT_SLOT_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

pub const KEY_SLOT: &str = "slot-key";
pub const KEY_PRETTY: &str = "pretty";

/// Configuration for todolist, stored in .todo/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoConfig {
    /// Name of the slot the todo list is saved under
    #[serde(default = "default_slot_key")]
    pub slot_key: String,

    /// Pretty-print the saved JSON
    #[serde(default)]
    pub pretty: bool,
}

/// Slot keys become file names inside the data directory.
fn validate_slot_key(key: &str) -> std::result::Result<(), String> {
    if key.is_empty() {
        return Err("slot-key cannot be empty".to_string());
    }
    if key.contains(['/', '\\']) || key.contains("..") {
        return Err(format!(
            "slot-key cannot contain path separators or '..': {}",
            key
        ));
    }
    Ok(())
}

fn default_slot_key() -> String {
    DEFAULT_SLOT_KEY.to_string()
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            slot_key: default_slot_key(),
            pretty: false,
        }
    }
}

impl TodoConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TodoError::Io)?;
        let config: TodoConfig =
            serde_json::from_str(&content).map_err(TodoError::Serialization)?;
        validate_slot_key(&config.slot_key).map_err(TodoError::Store)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TodoError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TodoError::Serialization)?;
        fs::write(config_path, content).map_err(TodoError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            KEY_SLOT => Some(self.slot_key.clone()),
            KEY_PRETTY => Some(self.pretty.to_string()),
            _ => None,
        }
    }

    /// Set a key from its string form. Errors are user-facing messages.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            KEY_SLOT => {
                let value = value.trim();
                validate_slot_key(value)?;
                self.slot_key = value.to_string();
                Ok(())
            }
            KEY_PRETTY => {
                self.pretty = match value {
                    "true" | "on" | "yes" => true,
                    "false" | "off" | "no" => false,
                    other => return Err(format!("Invalid value for pretty: {}", other)),
                };
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        vec![
            (KEY_SLOT, self.slot_key.clone()),
            (KEY_PRETTY, self.pretty.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = TodoConfig::default();
        assert_eq!(config.slot_key, "todoList");
        assert!(!config.pretty);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = TodoConfig::load(temp.path()).unwrap();
        assert_eq!(config, TodoConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".todo");

        let mut config = TodoConfig::default();
        config.set(KEY_SLOT, "work").unwrap();
        config.set(KEY_PRETTY, "on").unwrap();
        config.save(&dir).unwrap();

        let loaded = TodoConfig::load(&dir).unwrap();
        assert_eq!(loaded.slot_key, "work");
        assert!(loaded.pretty);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), r#"{"pretty": true}"#).unwrap();

        let loaded = TodoConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.slot_key, "todoList");
        assert!(loaded.pretty);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = TodoConfig::default();
        assert!(config.set(KEY_SLOT, "  ").is_err());
        assert!(config.set(KEY_PRETTY, "maybe").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, TodoConfig::default());
    }

    #[test]
    fn test_set_rejects_path_like_slot_keys() {
        let mut config = TodoConfig::default();
        for key in ["../../x", "a/b", "a\\b", "..", "x..y"] {
            assert!(config.set(KEY_SLOT, key).is_err(), "accepted {}", key);
        }
        assert_eq!(config.slot_key, "todoList");

        config.set(KEY_SLOT, "chores-2024.v1").unwrap();
        assert_eq!(config.slot_key, "chores-2024.v1");
    }

    #[test]
    fn test_load_rejects_path_like_slot_key_in_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"{"slot_key": "../outside"}"#,
        )
        .unwrap();

        assert!(matches!(
            TodoConfig::load(temp.path()),
            Err(TodoError::Store(_))
        ));
    }

    #[test]
    fn test_get_and_list_all() {
        let config = TodoConfig::default();
        assert_eq!(config.get(KEY_PRETTY).as_deref(), Some("false"));
        assert_eq!(config.get("nope"), None);
        assert_eq!(config.list_all().len(), 2);
    }
}
