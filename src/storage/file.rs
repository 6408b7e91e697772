use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde_json::{Map, Value};

use super::{PreferenceReader, PreferenceWriter};
use crate::error::{Result, WidgetError};

/// Preference group persisted as a single JSON object of string values,
/// e.g. `<app_data_dir>/CapacitorStorage.json`.
#[derive(Debug)]
pub struct JsonFilePreferences {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFilePreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn open_group(data_dir: &Path, group: &str) -> Self {
        Self::new(data_dir.join(format!("{}.json", group)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&content)? {
            Value::Object(entries) => Ok(entries),
            _ => Err(WidgetError::InvalidStore {
                path: self.path.display().to_string(),
            }),
        }
    }

    fn store(&self, entries: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, serde_json::to_string_pretty(entries)?)?;
        std::fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl PreferenceReader for JsonFilePreferences {
    fn get(&self, key: &str) -> Result<Option<String>> {
        // Non-string values were not written as preferences; treat them as absent.
        Ok(match self.load()?.remove(key) {
            Some(Value::String(value)) => Some(value),
            _ => None,
        })
    }
}

impl PreferenceWriter for JsonFilePreferences {
    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut entries = self.load()?;
        entries.insert(key.to_string(), Value::String(value.to_string()));
        self.store(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = JsonFilePreferences::open_group(dir.path(), "CapacitorStorage");
        assert_eq!(prefs.get("expiringItems").unwrap(), None);
    }

    #[test]
    fn set_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = JsonFilePreferences::open_group(dir.path(), "CapacitorStorage");
        prefs.set("theme", "dark").unwrap();
        prefs.set("expiringItems", "[]").unwrap();

        assert_eq!(prefs.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(prefs.get("expiringItems").unwrap().as_deref(), Some("[]"));
        assert!(prefs.path().ends_with("CapacitorStorage.json"));
    }

    #[test]
    fn non_object_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("CapacitorStorage.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let prefs = JsonFilePreferences::new(&path);
        assert!(matches!(
            prefs.get("expiringItems"),
            Err(WidgetError::InvalidStore { .. })
        ));
    }

    #[test]
    fn non_string_values_read_as_absent_and_survive_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("CapacitorStorage.json");
        std::fs::write(&path, r#"{"launchCount": 3, "name": "pantry"}"#).unwrap();

        let prefs = JsonFilePreferences::new(&path);
        assert_eq!(prefs.get("launchCount").unwrap(), None);
        assert_eq!(prefs.get("name").unwrap().as_deref(), Some("pantry"));

        prefs.set("expiringItems", "[]").unwrap();
        let raw: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["launchCount"], 3);
    }
}
