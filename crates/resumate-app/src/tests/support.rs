use std::sync::{Arc, Mutex};
use std::time::Duration;

use resumate_config::Config;
use resumate_service::{AnalysisRequest, AnalysisService, ServiceError};
use resumate_types::{AnalysisResult, Scores};

use crate::state::AppState;

pub enum Reply {
    Ok(AnalysisResult),
    Status(u16),
}

/// Stands in for the analysis endpoint, counting every request
pub struct MockService {
    pub requests: Mutex<Vec<AnalysisRequest>>,
    reply: Reply,
    delay: Duration,
}

impl MockService {
    pub fn new(reply: Reply, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            reply,
            delay,
        })
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl AnalysisService for MockService {
    async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResult, ServiceError> {
        self.requests.lock().unwrap().push(request);
        tokio::time::sleep(self.delay).await;
        match &self.reply {
            Reply::Ok(result) => Ok(result.clone()),
            Reply::Status(status) => Err(ServiceError::Status {
                status: *status,
                detail: None,
            }),
        }
    }

    fn endpoint(&self) -> &str {
        "mock://analyze-resume/"
    }
}

pub fn scenario_result() -> AnalysisResult {
    AnalysisResult {
        best_match: "it_support".to_string(),
        scores: Scores::from_iter([("it_support", 87.0), ("general", 42.0)]),
        extracted_text: "...".to_string(),
        filtered_text: "...".to_string(),
        filename: None,
        role: None,
    }
}

pub fn app_state(service: Arc<MockService>) -> Arc<AppState> {
    Arc::new(AppState::with_service(Config::default(), service))
}
