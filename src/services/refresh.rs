use std::time::Duration;

use serde::Serialize;
use tokio::sync::broadcast;
use tokio::time::MissedTickBehavior;

const SIGNAL_BUFFER: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RefreshSignal {
    /// The embedding app asked for a refresh after changing stored items.
    Requested,
    /// Scheduled refresh so day counts roll over without app activity.
    Periodic,
}

/// Returned to callers of [`RefreshBus::request_refresh`]. Carries no delivery information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RefreshAck;

/// Process-local channel that tells every widget instance to re-render.
#[derive(Debug, Clone)]
pub struct RefreshBus {
    sender: broadcast::Sender<RefreshSignal>,
}

impl Default for RefreshBus {
    fn default() -> Self {
        Self::new()
    }
}

impl RefreshBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(SIGNAL_BUFFER);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<RefreshSignal> {
        self.sender.subscribe()
    }

    /// Ask all widget instances to refresh. Never waits and never fails.
    pub fn request_refresh(&self) -> RefreshAck {
        self.publish(RefreshSignal::Requested)
    }

    pub fn publish(&self, signal: RefreshSignal) -> RefreshAck {
        match self.sender.send(signal) {
            Ok(listeners) => log::debug!("Refresh {:?} sent to {} listener(s)", signal, listeners),
            Err(_) => log::debug!("Refresh {:?} sent with no widget listening", signal),
        }
        RefreshAck
    }
}

/// Publish [`RefreshSignal::Periodic`] every `period`. A zero period disables the ticker.
pub async fn run_periodic_refresh(bus: RefreshBus, period: Duration) {
    if period.is_zero() {
        log::info!("[WidgetRefresh] Periodic refresh disabled");
        return;
    }

    log::info!("[WidgetRefresh] Periodic refresh every {}s", period.as_secs());
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately; startup renders on its own.
    ticker.tick().await;

    loop {
        ticker.tick().await;
        bus.publish(RefreshSignal::Periodic);
    }
}
