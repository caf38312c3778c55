mod app;
mod effects;
mod logging;
mod oneshot;
mod ui;

use std::process::ExitCode;

use anyhow::Context;
use prioritizer_engine::EngineHandle;
use prioritizer_logging::prio_info;

use crate::cli::Cli;
use effects::EffectRunner;
use logging::LogDestination;

pub fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let settings = cli
        .analyzer_settings()
        .with_context(|| format!("invalid backend URL {:?}", cli.backend_url))?;

    let destination = match &cli.input {
        Some(_) => LogDestination::Stderr,
        None => LogDestination::File(&cli.log_file),
    };
    logging::initialize(destination, cli.log_level);
    prio_info!("Using analyzer at {}", settings.base_url);

    let engine = EngineHandle::new(settings).context("failed to start the analyzer client")?;
    let effects = EffectRunner::new(engine);

    match &cli.input {
        Some(source) => oneshot::run_once(source, effects),
        None => {
            app::run_tui(effects)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
