use std::fmt;

use prioritizer_core::{AnalysisResult, RequestId};
use thiserror::Error;

/// Shown when neither the server nor the transport said anything useful.
pub const FALLBACK_MESSAGE: &str = "Failed to analyze tasks";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    AnalysisCompleted {
        request_id: RequestId,
        result: Result<AnalysisResult, AnalysisError>,
    },
    HealthChecked {
        result: Result<(), AnalysisError>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Request never produced an HTTP response.
    Transport,
    /// 4xx: the analyzer rejected the input.
    Validation { status: u16 },
    /// Any other non-2xx status.
    Server { status: u16 },
    /// 2xx whose body did not decode as an analysis.
    MalformedResponse,
}

impl FailureKind {
    pub fn from_status(status: u16) -> Self {
        if (400..500).contains(&status) {
            FailureKind::Validation { status }
        } else {
            FailureKind::Server { status }
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Transport => write!(f, "transport error"),
            FailureKind::Validation { status } => write!(f, "rejected with http status {status}"),
            FailureKind::Server { status } => write!(f, "server error with http status {status}"),
            FailureKind::MalformedResponse => write!(f, "malformed response"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {description}")]
pub struct AnalysisError {
    pub kind: FailureKind,
    /// `detail` string from the server's JSON error body, if any.
    pub detail: Option<String>,
    pub description: String,
}

impl AnalysisError {
    pub(crate) fn new(kind: FailureKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            detail: None,
            description: description.into(),
        }
    }

    pub(crate) fn with_detail(mut self, detail: Option<String>) -> Self {
        self.detail = detail.filter(|detail| !detail.trim().is_empty());
        self
    }

    /// The single message surfaced to the user: server detail first, then
    /// the transport/status description, then [`FALLBACK_MESSAGE`].
    pub fn user_message(&self) -> String {
        if let Some(detail) = self.detail.as_deref() {
            return detail.to_string();
        }
        if !self.description.trim().is_empty() {
            return self.description.clone();
        }
        FALLBACK_MESSAGE.to_string()
    }
}
