//! Logging initialization for the prioritizer binary.
//!
//! The interactive UI owns the terminal, so it logs to a file; one-shot mode
//! logs to stderr and keeps stdout for the plan.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

/// Destination for log output.
pub enum LogDestination<'a> {
    /// Write to the given file, truncating it.
    File(&'a Path),
    /// Write to stderr.
    Stderr,
}

/// Initialize the global logger. A file that cannot be created is reported
/// on stderr and logging stays off.
pub fn initialize(destination: LogDestination<'_>, level: LevelFilter) {
    let config = build_config();

    let loggers: Vec<Box<dyn SharedLogger>> = match destination {
        LogDestination::File(path) => match create_file_logger(path, level, config) {
            Some(file_logger) => vec![file_logger],
            None => return,
        },
        LogDestination::Stderr => vec![TermLogger::new(
            level,
            config,
            TerminalMode::Stderr,
            ColorChoice::Auto,
        )],
    };

    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(
    path: &Path,
    level: LevelFilter,
    config: Config,
) -> Option<Box<WriteLogger<File>>> {
    match File::create(path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", path, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_logger_creates_the_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prioritizer.log");

        let logger = create_file_logger(&path, LevelFilter::Info, build_config());

        assert!(logger.is_some());
        assert!(path.exists());
    }

    #[test]
    fn unwritable_log_path_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("prioritizer.log");

        assert!(create_file_logger(&path, LevelFilter::Info, build_config()).is_none());
    }
}
