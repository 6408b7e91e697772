use std::sync::Arc;

use tauri::State;

use crate::models::{DisplayModel, FoodItem, WidgetSettings};
use crate::services::{publish_widget_data, Clock, RefreshBus, WidgetHost};
use crate::storage::JsonFilePreferences;

/// Widget plumbing managed by the Tauri app.
pub struct WidgetState {
    pub bus: RefreshBus,
    pub store: Arc<JsonFilePreferences>,
    pub host: Arc<WidgetHost>,
    pub clock: Arc<dyn Clock>,
    pub settings: WidgetSettings,
}

/// Bridge entry point for the scripting layer: refresh every widget instance now.
#[tauri::command]
pub async fn notify_update(
    state: State<'_, WidgetState>,
) -> Result<(), String> {
    state.bus.request_refresh();
    Ok(())
}

#[tauri::command]
pub async fn get_widget_model(
    state: State<'_, WidgetState>,
) -> Result<DisplayModel, String> {
    let host = state.host.clone();
    tauri::async_runtime::spawn_blocking(move || host.render_model())
        .await
        .map_err(|e| e.to_string())
}

/// Store the soonest-expiring items for the widget and trigger a refresh.
#[tauri::command]
pub async fn update_widget_data(
    state: State<'_, WidgetState>,
    items: Vec<FoodItem>,
) -> Result<usize, String> {
    let store = state.store.clone();
    let bus = state.bus.clone();
    let storage_key = state.settings.storage_key.clone();
    let window_days = state.settings.expiry_window_days;
    let today = state.clock.today();

    let (written, _) = tauri::async_runtime::spawn_blocking(move || {
        publish_widget_data(store.as_ref(), &bus, &storage_key, &items, today, window_days)
    })
    .await
    .map_err(|e| e.to_string())?
    .map_err(|e| e.to_string())?;
    Ok(written)
}
