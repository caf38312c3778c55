use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use prioritizer_core::RequestId;
use prioritizer_logging::{prio_debug, prio_error};

use crate::client::{Analyzer, ReqwestAnalyzer};
use crate::settings::AnalyzerSettings;
use crate::{AnalysisError, EngineEvent, FailureKind};

enum EngineCommand {
    Analyze { request_id: RequestId, tasks: String },
    CheckHealth,
}

impl EngineCommand {
    fn request_id(&self) -> Option<RequestId> {
        match self {
            EngineCommand::Analyze { request_id, .. } => Some(*request_id),
            EngineCommand::CheckHealth => None,
        }
    }

    /// Event reported when the command cannot run to completion.
    fn failed(&self, description: String) -> EngineEvent {
        failed_event(self.request_id(), description)
    }
}

fn failed_event(request_id: Option<RequestId>, description: String) -> EngineEvent {
    let err = AnalysisError::new(FailureKind::Transport, description);
    match request_id {
        Some(request_id) => EngineEvent::AnalysisCompleted {
            request_id,
            result: Err(err),
        },
        None => EngineEvent::HealthChecked { result: Err(err) },
    }
}

/// Runs analyzer calls on a background tokio runtime and reports back
/// through a channel the UI thread polls. Every command yields exactly one
/// event, including when the analyzer panics or the worker is gone.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
    undelivered: RefCell<VecDeque<EngineEvent>>,
}

impl EngineHandle {
    pub fn new(settings: AnalyzerSettings) -> Result<Self, AnalysisError> {
        let analyzer = ReqwestAnalyzer::new(settings)?;
        Ok(Self::with_analyzer(Arc::new(analyzer)))
    }

    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel::<EngineCommand>();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Builder::new_multi_thread()
                .worker_threads(1)
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(err) => {
                    prio_error!("Failed to start analyzer runtime: {}", err);
                    let description = format!("Analyzer runtime unavailable: {err}");
                    for command in cmd_rx.iter() {
                        let _ = event_tx.send(command.failed(description.clone()));
                    }
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let analyzer = analyzer.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let request_id = command.request_id();
                    let task = tokio::spawn(handle_command(analyzer, command));
                    let event = match task.await {
                        Ok(event) => event,
                        Err(err) => {
                            prio_error!("Analyzer task failed: {}", err);
                            failed_event(request_id, format!("Analyzer task failed: {err}"))
                        }
                    };
                    let _ = event_tx.send(event);
                });
            }
            prio_debug!("Engine command channel closed; shutting down runtime");
        });

        Self {
            cmd_tx,
            event_rx,
            undelivered: RefCell::new(VecDeque::new()),
        }
    }

    pub fn analyze(&self, request_id: RequestId, tasks: impl Into<String>) {
        self.send(EngineCommand::Analyze {
            request_id,
            tasks: tasks.into(),
        });
    }

    pub fn check_health(&self) {
        self.send(EngineCommand::CheckHealth);
    }

    fn send(&self, command: EngineCommand) {
        if let Err(mpsc::SendError(command)) = self.cmd_tx.send(command) {
            prio_error!("Analyzer worker is gone; failing command locally");
            self.undelivered
                .borrow_mut()
                .push_back(command.failed("Analyzer worker stopped".to_string()));
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        if let Some(event) = self.undelivered.borrow_mut().pop_front() {
            return Some(event);
        }
        self.event_rx.try_recv().ok()
    }

    /// Blocks until the next event. `None` once the worker has stopped.
    pub fn recv(&self) -> Option<EngineEvent> {
        if let Some(event) = self.undelivered.borrow_mut().pop_front() {
            return Some(event);
        }
        self.event_rx.recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        if let Some(event) = self.undelivered.borrow_mut().pop_front() {
            return Some(event);
        }
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(analyzer: Arc<dyn Analyzer>, command: EngineCommand) -> EngineEvent {
    match command {
        EngineCommand::Analyze { request_id, tasks } => {
            let result = analyzer.analyze(&tasks).await;
            EngineEvent::AnalysisCompleted { request_id, result }
        }
        EngineCommand::CheckHealth => EngineEvent::HealthChecked {
            result: analyzer.health().await,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_to_stopped_worker_fails_locally() {
        let (cmd_tx, cmd_rx) = mpsc::channel::<EngineCommand>();
        let (_event_tx, event_rx) = mpsc::channel();
        drop(cmd_rx);
        let engine = EngineHandle {
            cmd_tx,
            event_rx,
            undelivered: RefCell::default(),
        };

        engine.analyze(9, "Write report");

        match engine.try_recv() {
            Some(EngineEvent::AnalysisCompleted {
                request_id: 9,
                result: Err(err),
            }) => {
                assert_eq!(err.kind, FailureKind::Transport);
                assert_eq!(err.user_message(), "Analyzer worker stopped");
            }
            other => panic!("unexpected event: {other:?}"),
        }
        assert!(engine.try_recv().is_none());
    }
}
