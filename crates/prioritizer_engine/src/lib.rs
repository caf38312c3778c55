//! Prioritizer engine: analyzer client and effect execution.
mod client;
mod engine;
mod settings;
mod types;
mod wire;

pub use client::{Analyzer, ReqwestAnalyzer};
pub use engine::EngineHandle;
pub use settings::{AnalyzerSettings, SettingsError, DEFAULT_BASE_URL};
pub use types::{AnalysisError, EngineEvent, FailureKind, FALLBACK_MESSAGE};
