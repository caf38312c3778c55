use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::LevelFilter;
use prioritizer_engine::{AnalyzerSettings, SettingsError, DEFAULT_BASE_URL};

/// Paste a messy to-do list, get back priorities, micro-steps and the one
/// thing to do next.
#[derive(Debug, Parser)]
#[command(name = "prioritizer", version)]
pub struct Cli {
    /// Base URL of the analyzer service.
    #[arg(long, env = "PRIORITIZER_BACKEND_URL", default_value = DEFAULT_BASE_URL)]
    pub backend_url: String,

    /// Give up connecting after this many seconds.
    #[arg(long, value_name = "SECS")]
    pub connect_timeout_secs: Option<u64>,

    /// Give up on a request after this many seconds.
    #[arg(long, value_name = "SECS")]
    pub request_timeout_secs: Option<u64>,

    /// Analyze the tasks in this file (`-` for stdin), print the plan and exit.
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Log file used by the interactive UI.
    #[arg(long, value_name = "PATH", default_value = "prioritizer.log")]
    pub log_file: PathBuf,

    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: LevelFilter,
}

impl Cli {
    pub fn analyzer_settings(&self) -> Result<AnalyzerSettings, SettingsError> {
        let mut settings = AnalyzerSettings::new(&self.backend_url)?;
        settings.connect_timeout = self.connect_timeout_secs.map(Duration::from_secs);
        settings.request_timeout = self.request_timeout_secs.map(Duration::from_secs);
        Ok(settings)
    }
}
