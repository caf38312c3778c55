#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send `tasks` to the analyzer; answer with `Msg::AnalysisCompleted`.
    Analyze {
        request_id: crate::RequestId,
        tasks: String,
    },
    /// Probe the analyzer; answer with `Msg::BackendChecked`.
    CheckBackend,
}
