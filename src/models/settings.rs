use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetSettings {
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
    #[serde(default = "default_expiry_window_days")]
    pub expiry_window_days: i64,
    #[serde(default = "default_storage_group")]
    pub storage_group: String,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            refresh_interval_secs: default_refresh_interval_secs(),
            expiry_window_days: default_expiry_window_days(),
            storage_group: default_storage_group(),
            storage_key: default_storage_key(),
        }
    }
}

fn default_refresh_interval_secs() -> u64 {
    30 * 60
}

fn default_expiry_window_days() -> i64 {
    7
}

fn default_storage_group() -> String {
    "CapacitorStorage".to_string()
}

fn default_storage_key() -> String {
    "expiringItems".to_string()
}
