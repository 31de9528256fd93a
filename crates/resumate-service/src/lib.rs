mod http;

pub use http::HttpAnalysisService;

use resumate_types::{AnalysisResult, Role, SelectedFile};

/// Remote resume analysis provider
#[async_trait::async_trait]
pub trait AnalysisService: Send + Sync {
    /// Send one resume for analysis and wait for the scored result
    async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResult, ServiceError>;

    /// Address the requests go to, used for logging
    fn endpoint(&self) -> &str;
}

/// The three form fields of one submission
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub file: SelectedFile,
    pub requirements: String,
    pub role: Role,
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request timed out")]
    Timeout,

    #[error("HTTP {status}{}", .detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default())]
    Status { status: u16, detail: Option<String> },

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ServiceError {
    /// Short tag for structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::Transport(_) => "transport",
            ServiceError::Timeout => "timeout",
            ServiceError::Status { .. } => "status",
            ServiceError::Decode(_) => "decode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_includes_detail() {
        let err = ServiceError::Status {
            status: 400,
            detail: Some("Uploaded file must be a PDF.".to_string()),
        };
        assert_eq!(err.to_string(), "HTTP 400: Uploaded file must be a PDF.");
        assert_eq!(err.kind(), "status");

        let err = ServiceError::Status {
            status: 500,
            detail: None,
        };
        assert_eq!(err.to_string(), "HTTP 500");
    }
}
