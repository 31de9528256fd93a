use std::env;

use serde::{Deserialize, Serialize};

use self::service::ServiceConfig;
use self::ui::UiConfig;

pub mod service;
pub mod ui;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub ui: UiConfig,

    /// Filter used when RUST_LOG is not set
    pub log_filter: String,
    /// Capacity of the UI -> app event channel
    pub event_buffer: usize,
}

impl Config {
    pub fn new() -> Self {
        let log_filter = env::var("RESUMATE_LOG").unwrap_or_else(|_| "warn".to_string());

        let event_buffer = env::var("RESUMATE_EVENT_BUFFER")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|v: &usize| *v > 0)
            .unwrap_or(64);

        Config {
            service: ServiceConfig::new(),
            ui: UiConfig::new(),

            log_filter,
            event_buffer,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            ui: UiConfig::default(),
            log_filter: "warn".to_string(),
            event_buffer: 64,
        }
    }
}
