use prioritizer_core::{Effect, Failure, Msg};
use prioritizer_engine::{AnalysisError, EngineEvent, EngineHandle, FailureKind};
use prioritizer_logging::{prio_info, prio_warn};

/// Executes core effects on the engine and turns engine events back into
/// messages for `update`.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Analyze { request_id, tasks } => {
                    prio_info!(
                        "Analyze request_id={} tasks_len={}",
                        request_id,
                        tasks.len()
                    );
                    self.engine.analyze(request_id, tasks);
                }
                Effect::CheckBackend => {
                    self.engine.check_health();
                }
            }
        }
    }

    /// Drains every event that is ready without blocking.
    pub fn poll(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            inbox.push(map_event(event));
        }
        inbox
    }

    /// Blocks for the next event. `None` once the engine is gone.
    pub fn wait(&self) -> Option<Msg> {
        self.engine.recv().map(map_event)
    }
}

pub(crate) fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::AnalysisCompleted { request_id, result } => Msg::AnalysisCompleted {
            request_id,
            outcome: result.map_err(|err| map_failure(&err)),
        },
        EngineEvent::HealthChecked { result } => {
            if let Err(err) = &result {
                prio_warn!("Analyzer health check failed: {}", err);
            }
            Msg::BackendChecked {
                online: result.is_ok(),
            }
        }
    }
}

pub(crate) fn map_failure(err: &AnalysisError) -> Failure {
    let kind = match err.kind {
        FailureKind::Transport => prioritizer_core::FailureKind::Transport,
        FailureKind::Validation { .. } => prioritizer_core::FailureKind::Validation,
        FailureKind::Server { .. } | FailureKind::MalformedResponse => {
            prioritizer_core::FailureKind::Server
        }
    };
    Failure::new(kind, err.user_message())
}
