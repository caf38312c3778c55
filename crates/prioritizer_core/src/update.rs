use prioritizer_logging::{prio_debug, prio_info, prio_warn};

use crate::{AppState, BackendStatus, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            state.set_backend(BackendStatus::Checking);
            vec![Effect::CheckBackend]
        }
        Msg::InputChanged(text) => {
            if state.lifecycle().is_loading() {
                return (state, Vec::new());
            }
            if state.input_mut().replace(text) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::InputEdited(edit) => {
            if state.lifecycle().is_loading() {
                return (state, Vec::new());
            }
            if state.input_mut().apply(edit) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SubmitClicked => {
            if !state.can_submit() {
                return (state, Vec::new());
            }
            let tasks = state.input().trimmed().to_string();
            let request_id = state.begin_request();
            prio_info!(
                "Submitting analysis request_id={} chars={}",
                request_id,
                tasks.chars().count()
            );
            vec![Effect::Analyze { request_id, tasks }]
        }
        Msg::AnalysisCompleted {
            request_id,
            outcome,
        } => {
            if let Err(failure) = &outcome {
                prio_warn!(
                    "Analysis request_id={} failed ({}): {}",
                    request_id,
                    failure.kind,
                    failure.message
                );
            }
            if !state.complete_request(request_id, outcome) {
                prio_debug!("Ignoring stale completion for request_id={}", request_id);
            }
            Vec::new()
        }
        Msg::BackendChecked { online } => {
            state.set_backend(if online {
                BackendStatus::Online
            } else {
                BackendStatus::Offline
            });
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
