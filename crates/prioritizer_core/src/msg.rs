#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Host finished setting up; kicks off the backend probe.
    Started,
    /// Whole input replaced (file load, programmatic set).
    InputChanged(String),
    /// Single keystroke or paste in the input box.
    InputEdited(crate::InputEdit),
    /// User asked for an analysis of the current input.
    SubmitClicked,
    /// Analyzer finished the request with the given id.
    AnalysisCompleted {
        request_id: crate::RequestId,
        outcome: Result<crate::AnalysisResult, crate::Failure>,
    },
    /// Result of the backend health probe.
    BackendChecked { online: bool },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
