pub mod expiry;
pub mod publisher;
pub mod refresh;
pub mod renderer;
pub mod widget_host;

pub use expiry::{classify_urgency, days_until_expiry, Expiry};
pub use publisher::{publish_widget_data, select_widget_entries};
pub use refresh::{run_periodic_refresh, RefreshAck, RefreshBus, RefreshSignal};
pub use renderer::build_display_model;
pub use widget_host::{
    Clock, FixedClock, RenderEvent, SystemClock, WidgetHost, WidgetInstanceId, WidgetView,
};
