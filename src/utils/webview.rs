use tauri::{AppHandle, Emitter};

use crate::models::DisplayModel;
use crate::services::{RenderEvent, WidgetInstanceId, WidgetView};

pub const RENDER_EVENT: &str = "widget://render";

/// Pushes rendered widget models to the webview as events.
pub struct WebviewWidgetView {
    app_handle: AppHandle,
}

impl WebviewWidgetView {
    pub fn new(app_handle: AppHandle) -> Self {
        Self { app_handle }
    }
}

impl WidgetView for WebviewWidgetView {
    fn push(&self, instance: WidgetInstanceId, model: &DisplayModel) {
        let event = RenderEvent {
            instance,
            model: model.clone(),
        };
        if let Err(e) = self.app_handle.emit(RENDER_EVENT, event) {
            log::error!("Failed to push widget {} to webview: {}", instance, e);
        }
    }
}
