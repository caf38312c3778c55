use std::io::{self, Read, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context};
use prioritizer_core::{update, AppState, LifecycleView, Msg, MAX_INPUT_CHARS};
use prioritizer_logging::prio_info;

use super::effects::EffectRunner;
use super::ui::text::render_results;

/// Reads a task list, runs exactly one analysis and prints the plan.
pub fn run_once(source: &Path, effects: EffectRunner) -> anyhow::Result<ExitCode> {
    let text = read_source(source)?;
    let chars = text.chars().count();
    if chars > MAX_INPUT_CHARS {
        bail!("task list is {chars} characters long; the limit is {MAX_INPUT_CHARS}");
    }

    let (state, _) = update(AppState::new(), Msg::InputChanged(text));
    if !state.can_submit() {
        bail!("no tasks to analyze");
    }
    prio_info!("Analyzing {} task line(s)", state.input().task_count());

    let (mut state, pending) = update(state, Msg::SubmitClicked);
    effects.enqueue(pending);
    while state.lifecycle().is_loading() {
        let Some(msg) = effects.wait() else {
            bail!("analyzer stopped before answering");
        };
        state = update(state, msg).0;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match state.view().lifecycle {
        LifecycleView::Results(results) => {
            for line in render_results(&results) {
                writeln!(out, "{line}")?;
            }
            Ok(ExitCode::SUCCESS)
        }
        LifecycleView::Failed { message } => {
            eprintln!("Error: {message}");
            Ok(ExitCode::FAILURE)
        }
        LifecycleView::Idle | LifecycleView::Loading => {
            bail!("analysis finished without a result")
        }
    }
}

fn read_source(source: &Path) -> anyhow::Result<String> {
    if source == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read tasks from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("failed to read tasks from {}", source.display()))
    }
}
