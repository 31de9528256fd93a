use std::sync::Arc;

use resumate_config::Config;
use resumate_core::FormClient;
use resumate_service::{AnalysisService, HttpAnalysisService};

pub struct AppState {
    pub config: Config,
    pub client: FormClient,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let service = HttpAnalysisService::new(config.service.url.clone(), config.service.timeout())?;
        tracing::info!(
            url = %config.service.url,
            timeout_seconds = config.service.timeout_seconds,
            "Analysis service configured"
        );

        Ok(Self::with_service(config, Arc::new(service)))
    }

    pub fn with_service(config: Config, service: Arc<dyn AnalysisService>) -> Self {
        Self {
            config,
            client: FormClient::new(service),
        }
    }
}
