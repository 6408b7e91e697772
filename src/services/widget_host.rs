use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use serde::Serialize;
use tokio::sync::broadcast::{self, error::{RecvError, TryRecvError}};

use super::refresh::RefreshSignal;
use super::renderer::build_display_model;
use crate::models::DisplayModel;
use crate::storage::PreferenceReader;

pub type WidgetInstanceId = u32;

/// Receives the model produced by a render pass for one widget instance.
pub trait WidgetView: Send + Sync {
    fn push(&self, instance: WidgetInstanceId, model: &DisplayModel);
}

pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderEvent {
    pub instance: WidgetInstanceId,
    pub model: DisplayModel,
}

pub struct WidgetHost {
    store: Arc<dyn PreferenceReader>,
    view: Arc<dyn WidgetView>,
    clock: Arc<dyn Clock>,
    storage_key: String,
    instances: Mutex<BTreeSet<WidgetInstanceId>>,
}

impl WidgetHost {
    pub fn new(
        store: Arc<dyn PreferenceReader>,
        view: Arc<dyn WidgetView>,
        storage_key: impl Into<String>,
    ) -> Self {
        Self {
            store,
            view,
            clock: Arc::new(SystemClock),
            storage_key: storage_key.into(),
            instances: Mutex::new(BTreeSet::new()),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn add_instance(&self, instance: WidgetInstanceId) -> bool {
        self.instances
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(instance)
    }

    pub fn remove_instance(&self, instance: WidgetInstanceId) -> bool {
        self.instances
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(&instance)
    }

    pub fn instances(&self) -> Vec<WidgetInstanceId> {
        self.instances
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .iter()
            .copied()
            .collect()
    }

    /// Read storage fresh and build the model without pushing it anywhere.
    pub fn render_model(&self) -> DisplayModel {
        match self.store.get(&self.storage_key) {
            Ok(blob) => build_display_model(blob.as_deref().unwrap_or("[]"), self.clock.today()),
            Err(e) => {
                log::warn!("Failed to read widget items from storage: {}", e);
                DisplayModel::empty()
            }
        }
    }

    /// One render pass: build once and push the same model to every active instance.
    pub fn render_all(&self) -> DisplayModel {
        let model = self.render_model();
        let instances = self.instances();
        log::debug!(
            "Rendering {} row(s) of {} item(s) to {} widget(s)",
            model.rows.len(),
            model.count,
            instances.len()
        );
        for instance in instances {
            self.view.push(instance, &model);
        }
        model
    }

    /// Render on every refresh signal until the bus is dropped.
    ///
    /// Signals that piled up while a pass was running are collapsed into the next pass.
    /// Passes run on the blocking pool since the store may hit the filesystem.
    pub async fn run(self: Arc<Self>, mut signals: broadcast::Receiver<RefreshSignal>) {
        loop {
            let mut pending = match signals.recv().await {
                Ok(signal) => {
                    log::debug!("[WidgetHost] Refresh signal: {:?}", signal);
                    1
                }
                Err(RecvError::Lagged(skipped)) => skipped,
                Err(RecvError::Closed) => break,
            };
            pending += drain_backlog(&mut signals);
            if pending > 1 {
                log::debug!("[WidgetHost] Coalesced {} refresh signal(s)", pending);
            }

            let host = self.clone();
            if let Err(e) = tokio::task::spawn_blocking(move || host.render_all()).await {
                log::error!("[WidgetHost] Render pass failed: {}", e);
            }
        }
        log::info!("[WidgetHost] Refresh bus closed, stopping");
    }
}

fn drain_backlog(signals: &mut broadcast::Receiver<RefreshSignal>) -> u64 {
    let mut drained = 0;
    loop {
        match signals.try_recv() {
            Ok(_) => drained += 1,
            Err(TryRecvError::Lagged(skipped)) => drained += skipped,
            Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return drained,
        }
    }
}
