pub mod config;

#[cfg(feature = "desktop")]
pub mod webview;
