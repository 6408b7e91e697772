pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod utils;

#[cfg(feature = "desktop")]
pub mod app;
#[cfg(feature = "desktop")]
pub mod commands;

pub use error::{Result, WidgetError};
