use std::sync::Once;

use pretty_assertions::assert_eq;
use prioritizer_core::{
    update, AnalysisResult, AppState, BackendStatus, Effect, Failure, FailureKind, InputEdit,
    LifecycleView, Msg, NextAction, Priorities, RequestLifecycle,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(prioritizer_logging::initialize_for_tests);
}

fn submit_tasks(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(input.to_string()));
    update(state, Msg::SubmitClicked)
}

fn sample_result() -> AnalysisResult {
    AnalysisResult {
        priorities: Priorities {
            must: vec!["Write report".into()],
            should: Vec::new(),
            optional: Vec::new(),
        },
        breakdown: Vec::new(),
        next_action: NextAction {
            task: "Write report".into(),
            step: "Open a blank document".into(),
            minutes: 2,
        },
    }
}

fn server_failure(message: &str) -> Failure {
    Failure::new(FailureKind::Server, message)
}

#[test]
fn submit_moves_idle_to_loading_and_emits_one_request() {
    init_logging();
    let (mut state, effects) = submit_tasks(AppState::new(), "Write report\n");

    assert_eq!(
        effects,
        vec![Effect::Analyze {
            request_id: 1,
            tasks: "Write report".to_string(),
        }]
    );
    assert_eq!(state.lifecycle(), &RequestLifecycle::Loading { request_id: 1 });
    let view = state.view();
    assert_eq!(view.lifecycle, LifecycleView::Loading);
    assert!(!view.input.can_submit);
    assert!(view.input.read_only);
    assert_eq!(view.input.submit_label, "Analyzing...");
    assert_eq!(view.input.hint, None);
    assert!(state.consume_dirty());
}

#[test]
fn resubmit_while_loading_is_noop() {
    init_logging();
    let (mut state, _) = submit_tasks(AppState::new(), "Write report");
    state.consume_dirty();

    let (mut state, effects) = update(state, Msg::SubmitClicked);

    assert!(effects.is_empty());
    assert_eq!(state.lifecycle(), &RequestLifecycle::Loading { request_id: 1 });
    assert!(!state.consume_dirty());
}

#[test]
fn input_is_read_only_while_loading() {
    init_logging();
    let (state, _) = submit_tasks(AppState::new(), "Write report");

    let (state, _) = update(state, Msg::InputEdited(InputEdit::Insert('!')));
    let (state, _) = update(state, Msg::InputChanged("something else".into()));

    assert_eq!(state.input().text(), "Write report");
}

#[test]
fn success_shows_results() {
    init_logging();
    let (state, _) = submit_tasks(AppState::new(), "Write report");
    let (state, effects) = update(
        state,
        Msg::AnalysisCompleted {
            request_id: 1,
            outcome: Ok(sample_result()),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.lifecycle(), &RequestLifecycle::Success(sample_result()));
    let view = state.view();
    let results = view.lifecycle.results().expect("results view");
    assert_eq!(results.next_action.step, "Open a blank document");
    assert!(view.input.can_submit);
    assert_eq!(view.input.submit_label, "Get Clarity");
}

#[test]
fn server_failure_shows_message_and_no_results() {
    init_logging();
    let (state, _) = submit_tasks(AppState::new(), "Write report");
    let (state, _) = update(
        state,
        Msg::AnalysisCompleted {
            request_id: 1,
            outcome: Err(server_failure("model unavailable")),
        },
    );

    assert_eq!(
        state.lifecycle(),
        &RequestLifecycle::Failed(server_failure("model unavailable"))
    );
    let view = state.view();
    assert_eq!(view.lifecycle.error_message(), Some("model unavailable"));
    assert!(view.lifecycle.results().is_none());
    // The form stays usable after a failure.
    assert!(view.input.can_submit);
    assert!(!view.input.read_only);
}

#[test]
fn new_submission_clears_previous_error_before_completion() {
    init_logging();
    let (state, _) = submit_tasks(AppState::new(), "Write report");
    let (state, _) = update(
        state,
        Msg::AnalysisCompleted {
            request_id: 1,
            outcome: Err(server_failure("model unavailable")),
        },
    );

    let (state, effects) = update(state, Msg::SubmitClicked);
    assert_eq!(
        effects,
        vec![Effect::Analyze {
            request_id: 2,
            tasks: "Write report".to_string(),
        }]
    );
    let view = state.view();
    assert_eq!(view.lifecycle, LifecycleView::Loading);
    assert_eq!(view.lifecycle.error_message(), None);

    let (state, _) = update(
        state,
        Msg::AnalysisCompleted {
            request_id: 2,
            outcome: Ok(sample_result()),
        },
    );
    assert!(state.view().lifecycle.results().is_some());
}

#[test]
fn new_submission_clears_previous_results() {
    init_logging();
    let (state, _) = submit_tasks(AppState::new(), "Write report");
    let (state, _) = update(
        state,
        Msg::AnalysisCompleted {
            request_id: 1,
            outcome: Ok(sample_result()),
        },
    );

    let (state, _) = submit_tasks(state, "Call client");
    assert!(state.view().lifecycle.results().is_none());
    assert_eq!(state.lifecycle(), &RequestLifecycle::Loading { request_id: 2 });
}

#[test]
fn stale_completion_is_ignored() {
    init_logging();
    let (state, _) = submit_tasks(AppState::new(), "Write report");
    let (state, _) = update(
        state,
        Msg::AnalysisCompleted {
            request_id: 1,
            outcome: Err(server_failure("first")),
        },
    );
    let (mut state, _) = update(state, Msg::SubmitClicked);
    state.consume_dirty();

    // A late duplicate answer for request 1 must not overwrite request 2.
    let (mut state, _) = update(
        state,
        Msg::AnalysisCompleted {
            request_id: 1,
            outcome: Ok(sample_result()),
        },
    );
    assert_eq!(state.lifecycle(), &RequestLifecycle::Loading { request_id: 2 });
    assert!(!state.consume_dirty());
}

#[test]
fn completion_without_pending_request_is_ignored() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::AnalysisCompleted {
            request_id: 1,
            outcome: Ok(sample_result()),
        },
    );

    assert_eq!(state.lifecycle(), &RequestLifecycle::Idle);
}

#[test]
fn started_probes_backend() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::Started);
    assert_eq!(effects, vec![Effect::CheckBackend]);
    assert_eq!(state.backend(), BackendStatus::Checking);

    let (state, _) = update(state, Msg::BackendChecked { online: false });
    assert_eq!(state.view().backend, BackendStatus::Offline);

    let (state, _) = update(state, Msg::BackendChecked { online: true });
    assert_eq!(state.view().backend, BackendStatus::Online);
}

#[test]
fn offline_backend_does_not_block_submission() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::BackendChecked { online: false });
    let (_state, effects) = submit_tasks(state, "Write report");

    assert_eq!(effects.len(), 1);
}
