use std::fmt;

use crate::input::TaskInput;
use crate::results::ResultsView;
use crate::view_model::{AppViewModel, InputView, LifecycleView};
use crate::AnalysisResult;

pub type RequestId = u64;

/// Why an analysis failed, kept next to the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Network unreachable, connection reset, timeout.
    Transport,
    /// 5xx or an unusable success body.
    Server,
    /// 4xx: the analyzer refused the input.
    Validation,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Transport => write!(f, "transport"),
            FailureKind::Server => write!(f, "server"),
            FailureKind::Validation => write!(f, "validation"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
}

impl Failure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Phase of the current (at most one) analysis request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestLifecycle {
    #[default]
    Idle,
    Loading {
        request_id: RequestId,
    },
    Success(AnalysisResult),
    Failed(Failure),
}

impl RequestLifecycle {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestLifecycle::Loading { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendStatus {
    #[default]
    Unknown,
    Checking,
    Online,
    Offline,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    input: TaskInput,
    lifecycle: RequestLifecycle,
    last_request_id: RequestId,
    backend: BackendStatus,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &TaskInput {
        &self.input
    }

    pub fn lifecycle(&self) -> &RequestLifecycle {
        &self.lifecycle
    }

    pub fn backend(&self) -> BackendStatus {
        self.backend
    }

    pub fn can_submit(&self) -> bool {
        self.input.has_tasks() && !self.lifecycle.is_loading()
    }

    pub fn view(&self) -> AppViewModel {
        let loading = self.lifecycle.is_loading();
        let has_tasks = self.input.has_tasks();
        let hint = if loading {
            None
        } else if has_tasks {
            Some(format!(
                "Ready to analyze {} task(s)",
                self.input.task_count()
            ))
        } else {
            Some("Enter at least one task to enable the button".to_string())
        };

        let input = InputView {
            text: self.input.text().to_string(),
            remaining: self.input.remaining(),
            near_limit: self.input.is_near_limit(),
            task_count: self.input.task_count(),
            read_only: loading,
            can_submit: self.can_submit(),
            submit_label: if loading { "Analyzing..." } else { "Get Clarity" },
            hint,
        };

        let lifecycle = match &self.lifecycle {
            RequestLifecycle::Idle => LifecycleView::Idle,
            RequestLifecycle::Loading { .. } => LifecycleView::Loading,
            RequestLifecycle::Success(result) => {
                LifecycleView::Results(ResultsView::from_result(result))
            }
            RequestLifecycle::Failed(failure) => LifecycleView::Failed {
                message: failure.message.clone(),
            },
        };

        AppViewModel {
            input,
            lifecycle,
            backend: self.backend,
        }
    }

    /// Returns whether anything changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn input_mut(&mut self) -> &mut TaskInput {
        &mut self.input
    }

    /// Moves to `Loading`, dropping any previous result or error.
    pub(crate) fn begin_request(&mut self) -> RequestId {
        self.last_request_id += 1;
        let request_id = self.last_request_id;
        self.lifecycle = RequestLifecycle::Loading { request_id };
        self.mark_dirty();
        request_id
    }

    /// Applies a completion if it belongs to the request currently loading.
    pub(crate) fn complete_request(
        &mut self,
        request_id: RequestId,
        outcome: Result<AnalysisResult, Failure>,
    ) -> bool {
        match self.lifecycle {
            RequestLifecycle::Loading { request_id: current } if current == request_id => {}
            _ => return false,
        }
        self.lifecycle = match outcome {
            Ok(result) => RequestLifecycle::Success(result),
            Err(failure) => RequestLifecycle::Failed(failure),
        };
        self.mark_dirty();
        true
    }

    pub(crate) fn set_backend(&mut self, status: BackendStatus) {
        if self.backend != status {
            self.backend = status;
            self.mark_dirty();
        }
    }
}
