use std::path::Path;

use anyhow::{Context, Result};

use crate::models::WidgetSettings;

const ENV_REFRESH_SECS: &str = "NOWASTE_WIDGET_REFRESH_SECS";
const ENV_WINDOW_DAYS: &str = "NOWASTE_WIDGET_WINDOW_DAYS";

pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

/// Load `widget.json` from `config_dir`, or defaults when it does not exist.
/// Environment overrides are applied either way.
pub fn load_settings(config_dir: &Path) -> Result<WidgetSettings> {
    let config_path = config_dir.join("widget.json");
    let mut settings = if config_path.exists() {
        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("reading {}", config_path.display()))?;
        serde_json::from_str::<WidgetSettings>(&content)
            .with_context(|| format!("parsing {}", config_path.display()))?
    } else {
        WidgetSettings::default()
    };
    apply_env_overrides(&mut settings);
    Ok(settings)
}

pub fn apply_env_overrides(settings: &mut WidgetSettings) {
    apply_overrides(settings, |key| std::env::var(key).ok());
}

fn apply_overrides(settings: &mut WidgetSettings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(secs) = lookup(ENV_REFRESH_SECS).and_then(|v| v.trim().parse().ok()) {
        settings.refresh_interval_secs = secs;
    }
    if let Some(days) = lookup(ENV_WINDOW_DAYS).and_then(|v| v.trim().parse().ok()) {
        settings.expiry_window_days = days;
    }
}
