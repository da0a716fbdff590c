//! Configuration domain module

mod app_config;
mod duration;

pub use app_config::{AppConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use duration::Duration;
