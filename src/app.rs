use std::sync::Arc;
use std::time::Duration;

use tauri::Manager;

use crate::commands;
use crate::commands::widget::WidgetState;
use crate::models::WidgetSettings;
use crate::services::{run_periodic_refresh, Clock, RefreshBus, SystemClock, WidgetHost};
use crate::storage::JsonFilePreferences;
use crate::utils;
use crate::utils::webview::WebviewWidgetView;

/// The in-window widget panel; the desktop host shows a single instance.
const MAIN_WIDGET_INSTANCE: u32 = 1;

pub fn run() {
    utils::config::load_dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    tauri::Builder::default()
        .setup(|app| {
            let app_handle = app.handle();
            let data_dir = app_handle.path().app_data_dir()?;
            std::fs::create_dir_all(&data_dir)?;

            let settings = utils::config::load_settings(&data_dir.join("config"))
                .unwrap_or_else(|e| {
                    log::warn!("Falling back to default widget settings: {:#}", e);
                    WidgetSettings::default()
                });

            let store = Arc::new(JsonFilePreferences::open_group(
                &data_dir,
                &settings.storage_group,
            ));
            let clock: Arc<dyn Clock> = Arc::new(SystemClock);
            let view = Arc::new(WebviewWidgetView::new(app_handle.clone()));
            let host = Arc::new(
                WidgetHost::new(store.clone(), view, settings.storage_key.clone())
                    .with_clock(clock.clone()),
            );
            host.add_instance(MAIN_WIDGET_INSTANCE);

            let bus = RefreshBus::new();
            let signals = bus.subscribe();
            {
                let host = host.clone();
                tauri::async_runtime::spawn(async move { host.run(signals).await });
            }
            tauri::async_runtime::spawn(run_periodic_refresh(
                bus.clone(),
                Duration::from_secs(settings.refresh_interval_secs),
            ));

            log::info!("Widget reading {} from {}", settings.storage_key, store.path().display());
            bus.request_refresh();

            app.manage(WidgetState {
                bus,
                store,
                host,
                clock,
                settings,
            });
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::widget::notify_update,
            commands::widget::get_widget_model,
            commands::widget::update_widget_data,
            commands::app_control::open_from_widget,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
