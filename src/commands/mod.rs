pub mod app_control;
pub mod widget;
