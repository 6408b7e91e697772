use tauri::{AppHandle, Emitter, Manager};

use crate::models::WidgetTarget;

pub const NAVIGATE_EVENT: &str = "widget:navigate";

/// Bring the host app forward and hand the route to its router.
pub fn show_window_and_navigate(app_handle: &AppHandle, target: WidgetTarget) -> tauri::Result<()> {
    if let Some(window) = app_handle.get_webview_window("main") {
        window.show()?;
        window.set_focus()?;
        window.emit(NAVIGATE_EVENT, target.route())?;
    }
    Ok(())
}

/// Tap on the widget body (inventory) or its "+" button (capture).
#[tauri::command]
pub async fn open_from_widget(
    app_handle: AppHandle,
    target: Option<WidgetTarget>,
) -> Result<(), String> {
    show_window_and_navigate(&app_handle, target.unwrap_or_default()).map_err(|e| e.to_string())
}
