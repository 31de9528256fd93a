use std::env;

use serde::{Deserialize, Serialize};

fn default_preview_chars() -> usize {
    500
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Longest text preview printed under a result, 0 prints everything
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
}

impl UiConfig {
    pub fn new() -> Self {
        let preview_chars = env::var("RESUMATE_PREVIEW_CHARS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_preview_chars);

        Self { preview_chars }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            preview_chars: default_preview_chars(),
        }
    }
}
