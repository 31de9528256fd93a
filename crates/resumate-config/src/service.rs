use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_URL: &str = "http://localhost:8000/analyze-resume/";

fn default_url() -> String {
    DEFAULT_URL.to_string()
}

fn default_timeout_seconds() -> u64 {
    120
}

/// Where and how the analysis request is sent
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    #[serde(default = "default_url")]
    pub url: String,
    /// 0 disables the timeout
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl ServiceConfig {
    pub fn new() -> Self {
        let url = env::var("ANALYZER_URL").unwrap_or_else(|_| default_url());

        let timeout_seconds = env::var("REQUEST_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds);

        Self {
            url,
            timeout_seconds,
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_seconds > 0).then(|| Duration::from_secs(self.timeout_seconds))
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_disables_timeout() {
        let config = ServiceConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        assert_eq!(config.timeout(), None);
        assert_eq!(
            ServiceConfig::default().timeout(),
            Some(Duration::from_secs(120))
        );
    }
}
