use prioritizer_core::AnalysisResult;
use prioritizer_logging::{prio_debug, prio_trace, prio_warn};
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::settings::AnalyzerSettings;
use crate::wire::{decode_analysis, decode_error_detail, AnalyzeRequest};
use crate::{AnalysisError, FailureKind};

/// Remote task analyzer. One call per submission; no retries.
#[async_trait::async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(&self, tasks: &str) -> Result<AnalysisResult, AnalysisError>;

    async fn health(&self) -> Result<(), AnalysisError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestAnalyzer {
    settings: AnalyzerSettings,
    client: reqwest::Client,
}

impl ReqwestAnalyzer {
    pub fn new(settings: AnalyzerSettings) -> Result<Self, AnalysisError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| AnalysisError::new(FailureKind::Transport, err.to_string()))?;
        Ok(Self { settings, client })
    }
}

#[async_trait::async_trait]
impl Analyzer for ReqwestAnalyzer {
    async fn analyze(&self, tasks: &str) -> Result<AnalysisResult, AnalysisError> {
        let url = self.settings.endpoint(&["api", "analyze"]);
        let body = serde_json::to_vec(&AnalyzeRequest { tasks })
            .map_err(|err| AnalysisError::new(FailureKind::Transport, err.to_string()))?;
        prio_debug!("POST {} body_len={}", url, body.len());

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(err) if status.is_success() => return Err(map_reqwest_error(err)),
            Err(err) => {
                prio_warn!("Could not read error body for status {}: {}", status, err);
                Default::default()
            }
        };

        prio_trace!("Analyzer answered {} body_len={}", status, bytes.len());
        if !status.is_success() {
            return Err(status_error(status.as_u16()).with_detail(decode_error_detail(&bytes)));
        }

        decode_analysis(&bytes).map_err(|err| {
            AnalysisError::new(
                FailureKind::MalformedResponse,
                format!("Invalid response from analyzer: {err}"),
            )
        })
    }

    async fn health(&self) -> Result<(), AnalysisError> {
        let url = self.settings.endpoint(&["health"]);
        prio_debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(status_error(status.as_u16()))
        }
    }
}

fn status_error(status: u16) -> AnalysisError {
    AnalysisError::new(
        FailureKind::from_status(status),
        format!("Request failed with status code {status}"),
    )
}

fn map_reqwest_error(err: reqwest::Error) -> AnalysisError {
    AnalysisError::new(FailureKind::Transport, err.to_string())
}
