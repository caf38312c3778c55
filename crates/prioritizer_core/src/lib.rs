//! Prioritizer core: pure state machine and view-model helpers.
mod analysis;
mod effect;
mod input;
mod msg;
mod results;
mod state;
mod update;
mod view_model;

pub use analysis::{AnalysisResult, Bucket, NextAction, Priorities, Step, TaskBreakdown};
pub use effect::Effect;
pub use input::{InputEdit, TaskInput, MAX_INPUT_CHARS, NEAR_LIMIT_THRESHOLD};
pub use msg::Msg;
pub use results::{
    BreakdownView, BucketBody, BucketView, NextActionView, ResultsView, StepRow,
    BREAKDOWN_TITLE, EMPTY_BUCKET_TEXT, NEXT_ACTION_TITLE, PRIORITIES_TITLE,
};
pub use state::{AppState, BackendStatus, Failure, FailureKind, RequestId, RequestLifecycle};
pub use update::update;
pub use view_model::{AppViewModel, InputView, LifecycleView};
