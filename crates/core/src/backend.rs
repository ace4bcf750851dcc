use async_trait::async_trait;
use reqwest::StatusCode;

use crate::{
    config::AnalyzerConfig,
    error::{AnalysisError, Result, SERVER_FAILURE_MESSAGE},
    request::Submission,
    types::{AnalysisEnvelope, AnalysisResult, ErrorEnvelope},
};

/// Raw answer from the analysis endpoint.
#[derive(Debug, Clone)]
pub struct BackendResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl BackendResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can run one analysis request.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    async fn submit(&self, submission: &Submission) -> Result<BackendResponse>;
}

/// Talks to the analysis endpoint over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    config: AnalyzerConfig,
}

impl HttpBackend {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: AnalyzerConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl AnalysisBackend for HttpBackend {
    async fn submit(&self, submission: &Submission) -> Result<BackendResponse> {
        let url = self.config.analyze_url();
        let form = submission.to_form().await?;

        tracing::debug!(%url, kind = submission.source.kind(), "posting analysis request");

        let response = self.client.post(&url).multipart(form).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        tracing::debug!(status = status.as_u16(), bytes = body.len(), "analysis response received");

        Ok(BackendResponse::new(status.as_u16(), body.to_vec()))
    }
}

/// Turn a raw response into the analysis it carries, or the error to show.
pub fn interpret_response(response: &BackendResponse) -> Result<Option<AnalysisResult>> {
    if !response.is_success() {
        let message = serde_json::from_slice::<ErrorEnvelope>(&response.body)
            .ok()
            .and_then(|e| e.error)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| SERVER_FAILURE_MESSAGE.to_string());

        tracing::warn!(
            status = response.status,
            reason = StatusCode::from_u16(response.status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("unknown"),
            %message,
            "analysis request rejected"
        );

        return Err(AnalysisError::Server {
            status: response.status,
            message,
        });
    }

    let envelope: AnalysisEnvelope = serde_json::from_slice(&response.body)?;
    Ok(envelope.analysis)
}
