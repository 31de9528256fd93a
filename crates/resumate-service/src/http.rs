use std::time::Duration;

use reqwest::multipart::{Form, Part};
use resumate_types::AnalysisResult;

use crate::{AnalysisRequest, AnalysisService, ServiceError};

/// Posts the form as multipart/form-data to a fixed endpoint
#[derive(Clone)]
pub struct HttpAnalysisService {
    client: reqwest::Client,
    url: String,
}

impl HttpAnalysisService {
    pub fn new(url: String, timeout: Option<Duration>) -> Result<Self, ServiceError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            url,
        })
    }

    fn build_form(request: AnalysisRequest) -> Result<Form, ServiceError> {
        let AnalysisRequest {
            file,
            requirements,
            role,
        } = request;

        let file_part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.content_type)?;

        Ok(Form::new()
            .part("file", file_part)
            .text("requirements", requirements)
            .text("role", role.as_str()))
    }
}

#[async_trait::async_trait]
impl AnalysisService for HttpAnalysisService {
    async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResult, ServiceError> {
        let form = Self::build_form(request)?;

        let response = self
            .client
            .post(&self.url)
            .multipart(form)
            .send()
            .await
            .map_err(from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::Status {
                status: status.as_u16(),
                detail: error_detail(&body),
            });
        }

        let body = response.bytes().await.map_err(from_reqwest)?;
        tracing::debug!("Received {} byte analysis body", body.len());

        serde_json::from_slice(&body).map_err(|e| ServiceError::Decode(e.to_string()))
    }

    fn endpoint(&self) -> &str {
        &self.url
    }
}

fn from_reqwest(e: reqwest::Error) -> ServiceError {
    if e.is_timeout() {
        ServiceError::Timeout
    } else {
        ServiceError::Transport(e)
    }
}

/// Pulls `detail` out of an error body, falling back to the raw text
fn error_detail(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(json) => match &json["detail"] {
            serde_json::Value::Null => Some(body.to_string()),
            serde_json::Value::String(detail) => Some(detail.clone()),
            other => Some(other.to_string()),
        },
        Err(_) => Some(body.to_string()),
    }
}
