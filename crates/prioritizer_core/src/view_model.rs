use crate::{BackendStatus, ResultsView};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub input: InputView,
    pub lifecycle: LifecycleView,
    pub backend: BackendStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    pub text: String,
    pub remaining: usize,
    pub near_limit: bool,
    pub task_count: usize,
    pub read_only: bool,
    pub can_submit: bool,
    pub submit_label: &'static str,
    pub hint: Option<String>,
}

/// What the area below the input shows. Exactly one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleView {
    Idle,
    Loading,
    Failed { message: String },
    Results(ResultsView),
}

impl LifecycleView {
    pub fn error_message(&self) -> Option<&str> {
        match self {
            LifecycleView::Failed { message } => Some(message),
            _ => None,
        }
    }

    pub fn results(&self) -> Option<&ResultsView> {
        match self {
            LifecycleView::Results(results) => Some(results),
            _ => None,
        }
    }
}
